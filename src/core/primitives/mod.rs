//! Core primitives - shared helpers for the math and text operations
//!
//! - **limits**: Shared constants and thresholds
//! - **format**: Float display, rounding and finite-value guards

pub mod format;
pub mod limits;

pub use format::{display_float, ensure_finite, ensure_finite_inputs, round_to};
pub use limits::*;
