//! Error types for namespace relocation.

use thiserror::Error;

/// Error type for namespace relocation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The delegate generator could not be located.
    #[error("locate error: {0}")]
    Locate(#[from] globalds_locator::LocateError),

    /// Buffer or encoding error while handling generator output.
    #[error("output error: {0}")]
    Core(#[from] globalds_core::Error),

    /// The placeholder namespace is not a plain identifier.
    #[error("invalid placeholder namespace '{placeholder}'")]
    InvalidPlaceholder {
        /// The rejected placeholder.
        placeholder: String,
    },

    /// The namespace pattern failed to compile.
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl CodegenError {
    /// Creates an invalid placeholder error.
    pub fn invalid_placeholder(placeholder: impl Into<String>) -> Self {
        Self::InvalidPlaceholder {
            placeholder: placeholder.into(),
        }
    }
}
