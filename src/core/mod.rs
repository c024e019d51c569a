//! Core operations - pure computations behind the HTTP layer
//!
//! This module contains all of the math and text logic. The server module is
//! a thin layer that validates requests into parameter bags and calls the two
//! dispatchers exported here.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    src/core/                            │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────┐  │
//! │  │  CoreError  │  │  ErrorKind  │  │  Param / Result │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────┘  │
//! │                                                         │
//! │  ┌─────────────────────────────────────────────────────┐│
//! │  │                    ops/                             ││
//! │  │  math: statistics, quadratic, advanced              ││
//! │  │  text: analyze, transform, extract                  ││
//! │  └─────────────────────────────────────────────────────┘│
//! │                                                         │
//! │  ┌─────────────────────────────────────────────────────┐│
//! │  │                primitives/                          ││
//! │  │  limits, format                                     ││
//! │  └─────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────┘
//!                           │
//!                     ┌─────┴─────┐
//!                     │src/server │
//!                     │  (axum)   │
//!                     └───────────┘
//! ```

mod error;
pub mod ops;
pub mod primitives;

pub use error::{CoreError, CoreResult, ErrorKind};

pub use ops::math::{dispatch_math, MathOperation, MathParams, MathResult};
pub use ops::text::{dispatch_text, TextOperation, TextParams, TextResult};
