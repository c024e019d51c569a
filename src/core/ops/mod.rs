//! Core operations - pure implementations behind the HTTP handlers
//!
//! Each submodule contains the actual logic for one operation group.
//!
//! # Conventions
//!
//! - Operations are pure functions of their inputs
//! - Operations return `CoreResult<T>`; caller mistakes are `InvalidInput`
//! - Operation names parse into closed enums via `FromStr`
//! - No HTTP types allowed here

pub mod math;
pub mod text;
