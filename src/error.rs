// src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NtError>;

/// Errors surfaced by the toolkit. Precondition violations are reported
/// immediately and never silently corrected.
#[derive(Debug, Error)]
pub enum NtError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("malformed integer: {0}")]
    ParseInt(#[from] num::bigint::ParseBigIntError),
}
