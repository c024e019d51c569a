//! Numeric operations - statistics, quadratic solving, advanced functions
//!
//! `dispatch_math` maps an operation name onto [`MathOperation`] and runs it
//! against the parameter bag.

pub mod advanced;
pub mod quadratic;
pub mod statistics;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{CoreError, CoreResult};

pub use advanced::{advanced, AdvancedOperation, AdvancedResult, TrigValues};
pub use quadratic::{quadratic, QuadraticSolution, RootType, Roots};
pub use statistics::{statistics, Statistics};

/// Parameter bag for numeric operations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MathParams {
    #[serde(default)]
    pub values: Vec<f64>,
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
}

impl MathParams {
    pub fn with_values(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            ..Default::default()
        }
    }

    pub fn with_coefficients(a: f64, b: f64, c: f64) -> Self {
        Self {
            values: Vec::new(),
            a: Some(a),
            b: Some(b),
            c: Some(c),
        }
    }

    fn coefficients(&self) -> CoreResult<(f64, f64, f64)> {
        match (self.a, self.b, self.c) {
            (Some(a), Some(b), Some(c)) => Ok((a, b, c)),
            _ => Err(CoreError::invalid(
                "Quadratic equation requires a, b, c coefficients",
            )),
        }
    }
}

/// Closed set of numeric operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathOperation {
    Statistics,
    Quadratic,
    Advanced(AdvancedOperation),
}

impl MathOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            MathOperation::Statistics => "statistics",
            MathOperation::Quadratic => "quadratic",
            MathOperation::Advanced(op) => op.as_str(),
        }
    }

    /// Every accepted operation name, in display order
    pub fn names() -> Vec<&'static str> {
        let mut names = vec!["statistics", "quadratic"];
        names.extend(AdvancedOperation::ALL.iter().map(|op| op.as_str()));
        names
    }
}

impl FromStr for MathOperation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "statistics" => Ok(MathOperation::Statistics),
            "quadratic" => Ok(MathOperation::Quadratic),
            other => other
                .parse::<AdvancedOperation>()
                .map(MathOperation::Advanced)
                .map_err(|_| CoreError::invalid(format!("Unknown math operation: {}", other))),
        }
    }
}

impl std::fmt::Display for MathOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a numeric operation; serializes as the bare payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MathResult {
    Statistics(Statistics),
    Quadratic(QuadraticSolution),
    Advanced(AdvancedResult),
}

/// Numeric dispatcher entry point
pub fn dispatch_math(operation: &str, params: &MathParams) -> CoreResult<MathResult> {
    let op: MathOperation = operation.parse()?;
    tracing::debug!(operation = %op, values = params.values.len(), "dispatching math operation");

    match op {
        MathOperation::Statistics => statistics(&params.values).map(MathResult::Statistics),
        MathOperation::Quadratic => {
            let (a, b, c) = params.coefficients()?;
            quadratic(a, b, c).map(MathResult::Quadratic)
        }
        MathOperation::Advanced(adv) => adv.apply(&params.values).map(MathResult::Advanced),
    }
}
