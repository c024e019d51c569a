//! Advanced math functions: factorial, logarithm, trigonometry, power

use num_bigint::BigUint;
use serde::{Serialize, Serializer};
use std::str::FromStr;

use crate::core::primitives::{ensure_finite, ensure_finite_inputs, MAX_FACTORIAL_INPUT};
use crate::core::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvancedOperation {
    Factorial,
    Logarithm,
    Trigonometry,
    Power,
}

impl AdvancedOperation {
    pub const ALL: [AdvancedOperation; 4] = [
        AdvancedOperation::Factorial,
        AdvancedOperation::Logarithm,
        AdvancedOperation::Trigonometry,
        AdvancedOperation::Power,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdvancedOperation::Factorial => "factorial",
            AdvancedOperation::Logarithm => "logarithm",
            AdvancedOperation::Trigonometry => "trigonometry",
            AdvancedOperation::Power => "power",
        }
    }

    /// Run the operation against the raw value list
    pub fn apply(&self, values: &[f64]) -> CoreResult<AdvancedResult> {
        ensure_finite_inputs(values, "Error in math operation")?;
        match self {
            AdvancedOperation::Factorial => factorial(values).map(AdvancedResult::Integer),
            AdvancedOperation::Logarithm => logarithm(values).map(AdvancedResult::Number),
            AdvancedOperation::Trigonometry => trigonometry(values).map(AdvancedResult::Trigonometry),
            AdvancedOperation::Power => power(values).map(AdvancedResult::Number),
        }
    }
}

impl std::fmt::Display for AdvancedOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdvancedOperation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| CoreError::invalid(format!("Error in math operation: Unknown operation: {}", s)))
    }
}

/// Sine, cosine and tangent of an angle given in radians
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrigValues {
    pub sin: f64,
    pub cos: f64,
    pub tan: f64,
    pub angle_radians: f64,
    pub angle_degrees: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AdvancedResult {
    Integer(#[serde(serialize_with = "serialize_integer")] BigUint),
    Number(f64),
    Trigonometry(TrigValues),
}

/// Write a big integer as a bare JSON number, every digit kept
fn serialize_integer<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    let number: serde_json::Number = value
        .to_string()
        .parse()
        .map_err(serde::ser::Error::custom)?;
    number.serialize(serializer)
}

/// Parse the operation name and apply it
pub fn advanced(operation: &str, values: &[f64]) -> CoreResult<AdvancedResult> {
    operation.parse::<AdvancedOperation>()?.apply(values)
}

fn factorial(values: &[f64]) -> CoreResult<BigUint> {
    let n = match values {
        [n] if *n >= 0.0 && n.fract() == 0.0 => *n,
        _ => {
            return Err(CoreError::invalid(
                "Error in math operation: Factorial requires a single non-negative integer",
            ));
        }
    };
    if n > MAX_FACTORIAL_INPUT as f64 {
        return Err(CoreError::invalid(format!(
            "Error in math operation: Factorial input must not exceed {}",
            MAX_FACTORIAL_INPUT
        )));
    }
    Ok((2..=n as u64).fold(BigUint::from(1u32), |acc, k| acc * k))
}

fn logarithm(values: &[f64]) -> CoreResult<f64> {
    let domain_error = || CoreError::invalid("Error in math operation: math domain error");
    match values {
        [x] => {
            if *x <= 0.0 {
                return Err(domain_error());
            }
            Ok(x.ln())
        }
        [x, base] => {
            if *x <= 0.0 || *base <= 0.0 {
                return Err(domain_error());
            }
            if *base == 1.0 {
                return Err(CoreError::invalid(
                    "Error in math operation: logarithm base 1 is a division by zero",
                ));
            }
            ensure_finite(x.ln() / base.ln(), "Error in math operation")
        }
        _ => Err(CoreError::invalid(
            "Error in math operation: Logarithm requires 1 or 2 values",
        )),
    }
}

fn trigonometry(values: &[f64]) -> CoreResult<TrigValues> {
    let [angle] = values else {
        return Err(CoreError::invalid(
            "Error in math operation: Trigonometry requires 1 value (angle in radians)",
        ));
    };
    Ok(TrigValues {
        sin: angle.sin(),
        cos: angle.cos(),
        tan: angle.tan(),
        angle_radians: *angle,
        angle_degrees: ensure_finite(angle.to_degrees(), "Error in math operation")?,
    })
}

fn power(values: &[f64]) -> CoreResult<f64> {
    let [base, exponent] = values else {
        return Err(CoreError::invalid(
            "Error in math operation: Power operation requires base and exponent",
        ));
    };
    if *base == 0.0 && *exponent < 0.0 {
        return Err(CoreError::invalid("Error in math operation: math domain error"));
    }
    ensure_finite(base.powf(*exponent), "Error in math operation")
}
