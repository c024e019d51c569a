// src/lib.rs

pub mod config;
pub mod core;
pub mod server;

pub use crate::core::{
    dispatch_math, dispatch_text, CoreError, CoreResult, ErrorKind, MathParams, MathResult,
    TextParams, TextResult,
};
