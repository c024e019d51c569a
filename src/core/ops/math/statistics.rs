//! Descriptive statistics over a list of numbers
//!
//! - **Sum/Mean**: Kahan compensated summation, mean clamped into `[min, max]`
//!   so rounding can never push it outside the data range.
//! - **Variance/StdDev**: two-pass sample variance (denominator `n - 1`),
//!   defined as `0.0` for fewer than two values.
//! - **Mode**: most frequent value, ties broken by first occurrence; `None`
//!   when every value is distinct.

use serde::Serialize;
use std::collections::HashMap;

use crate::core::primitives::{ensure_finite, ensure_finite_inputs};
use crate::core::{CoreError, CoreResult};

/// Summary statistics for a dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Option<f64>,
    pub std_dev: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub sum: f64,
}

/// Calculate summary statistics. Fails on an empty list.
pub fn statistics(values: &[f64]) -> CoreResult<Statistics> {
    if values.is_empty() {
        return Err(CoreError::invalid(
            "Error calculating statistics: at least one value is required",
        ));
    }
    ensure_finite_inputs(values, "Error calculating statistics")?;

    let count = values.len();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = ensure_finite(max - min, "Error calculating statistics")?;
    let sum = ensure_finite(kahan_sum(values), "Error calculating statistics")?;
    let mean = (sum / count as f64).clamp(min, max);

    let variance = if count > 1 {
        let squares: Vec<f64> = values.iter().map(|x| (x - mean) * (x - mean)).collect();
        ensure_finite(
            kahan_sum(&squares) / (count - 1) as f64,
            "Error calculating statistics",
        )?
    } else {
        0.0
    };

    Ok(Statistics {
        count,
        mean,
        median: median(values),
        mode: mode(values),
        std_dev: variance.sqrt(),
        variance,
        min,
        max,
        range,
        sum,
    })
}

fn kahan_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for &x in values {
        let y = x - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }
    sum
}

/// Caller guarantees a non-empty, NaN-free slice
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        sorted[mid - 1].midpoint(sorted[mid])
    } else {
        sorted[mid]
    }
}

fn mode(values: &[f64]) -> Option<f64> {
    // -0.0 and 0.0 compare equal, so they share a bucket
    let key = |x: f64| (x + 0.0).to_bits();

    let mut counts: HashMap<u64, usize> = HashMap::with_capacity(values.len());
    for &x in values {
        *counts.entry(key(x)).or_insert(0) += 1;
    }

    let mut best: Option<(f64, usize)> = None;
    for &x in values {
        let n = counts[&key(x)];
        if n > 1 && best.is_none_or(|(_, best_n)| n > best_n) {
            best = Some((x, n));
        }
    }
    best.map(|(x, _)| x)
}
