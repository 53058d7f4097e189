//! Error kinds for subnet arithmetic.
//!
//! Every error is a deterministic function of malformed input, so nothing
//! here is retryable.

use thiserror::Error;

/// Errors raised by address parsing and subnet arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    /// Malformed dotted-decimal address or CIDR string.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// A numeric input outside its allowed interval.
    #[error("{what} {value} is out of range [{min}, {max}]")]
    OutOfRange {
        what: &'static str,
        value: String,
        min: u64,
        max: u64,
    },

    /// A CIDR whose address still has host bits set, e.g. `10.28.0.1/16`.
    #[error("{cidr} has host bits set")]
    HostBitsSet { cidr: String },
}

impl SubnetError {
    pub(crate) fn out_of_range(
        what: &'static str,
        value: impl ToString,
        min: u64,
        max: u64,
    ) -> Self {
        SubnetError::OutOfRange {
            what,
            value: value.to_string(),
            min,
            max,
        }
    }
}

pub type Result<T> = std::result::Result<T, SubnetError>;
