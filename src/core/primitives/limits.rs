//! Shared limits and thresholds
//!
//! Centralized constants so the server and the core agree on bounds.

/// Largest accepted factorial input. Results are arbitrary precision; this
/// only bounds the work a single request can trigger (10000! has 35660 digits).
pub const MAX_FACTORIAL_INPUT: u32 = 10_000;

/// Decimal places used for the text analysis averages
pub const AVERAGE_DECIMALS: u32 = 2;

/// Max request body size (1MB) - text payloads are the largest inputs
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Default per-request timeout enforced by the HTTP layer
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
