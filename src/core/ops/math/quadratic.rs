//! Quadratic equation solver for ax² + bx + c = 0

use serde::Serialize;

use crate::core::primitives::{display_float, ensure_finite, ensure_finite_inputs};
use crate::core::{CoreError, CoreResult};

/// Nature of the roots, decided by the sign of the discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootType {
    RealDistinct,
    RealRepeated,
    Complex,
}

/// Real roots are numbers; complex roots are display strings like `"1.0 + 2.0i"`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Roots {
    Real(Vec<f64>),
    Complex(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadraticSolution {
    pub discriminant: f64,
    pub roots: Roots,
    pub root_type: RootType,
}

/// Solve with the quadratic formula. `a == 0` is rejected.
pub fn quadratic(a: f64, b: f64, c: f64) -> CoreResult<QuadraticSolution> {
    ensure_finite_inputs(&[a, b, c], "Error solving quadratic")?;
    if a == 0.0 {
        return Err(CoreError::invalid(
            "Error solving quadratic: coefficient 'a' must be non-zero (division by zero)",
        ));
    }

    let discriminant = ensure_finite(b * b - 4.0 * a * c, "Error solving quadratic")?;
    let two_a = 2.0 * a;
    // A tiny `a` can push a root past f64 range
    let finite = |value: f64| ensure_finite(value, "Error solving quadratic");

    let solution = if discriminant > 0.0 {
        let sqrt_d = discriminant.sqrt();
        QuadraticSolution {
            discriminant,
            roots: Roots::Real(vec![
                finite((-b + sqrt_d) / two_a)?,
                finite((-b - sqrt_d) / two_a)?,
            ]),
            root_type: RootType::RealDistinct,
        }
    } else if discriminant == 0.0 {
        QuadraticSolution {
            discriminant,
            roots: Roots::Real(vec![finite(-b / two_a)?]),
            root_type: RootType::RealRepeated,
        }
    } else {
        let real = display_float(finite(-b / two_a)?);
        // Conjugate pair: keep the imaginary magnitude positive
        let imag = display_float(finite((-discriminant).sqrt() / two_a.abs())?);
        QuadraticSolution {
            discriminant,
            roots: Roots::Complex(vec![
                format!("{} + {}i", real, imag),
                format!("{} - {}i", real, imag),
            ]),
            root_type: RootType::Complex,
        }
    };

    tracing::debug!(discriminant, root_type = ?solution.root_type, "solved quadratic");
    Ok(solution)
}
