//! Error types for GlobalDS core operations.

use thiserror::Error;

/// Core error type for GlobalDS operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Buffer is too short for the requested operation.
    #[error("buffer too short: required {required} bytes, available {available} bytes")]
    BufferTooShort {
        /// Required buffer size in bytes.
        required: usize,
        /// Available buffer size in bytes.
        available: usize,
    },

    /// Rewritten output does not fit in the buffer the host allocated.
    #[error("output overflow: {required} bytes do not fit in a {capacity} byte host buffer")]
    OutputOverflow {
        /// Size of the rewritten output in bytes.
        required: usize,
        /// Capacity of the host buffer in bytes.
        capacity: usize,
    },

    /// Malformed GUID text.
    #[error("invalid GUID '{value}'")]
    InvalidGuid {
        /// The text that failed to parse.
        value: String,
    },
}

impl Error {
    /// Creates an invalid GUID error.
    pub fn invalid_guid(value: impl Into<String>) -> Self {
        Self::InvalidGuid {
            value: value.into(),
        }
    }
}

/// Result type alias for GlobalDS core operations.
pub type Result<T> = std::result::Result<T, Error>;
