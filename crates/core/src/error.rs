//! Error types for naval-core

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for naval-core operations
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Requested wrap width is too narrow to lay out a quote
    #[error("Wrap width {width} is too narrow (minimum is {min})")]
    #[diagnostic(
        code(naval::core::invalid_width),
        help("Pass a larger value to --width, or omit it to use the default")
    )]
    InvalidWidth {
        /// The width that was requested
        width: usize,
        /// Smallest accepted width
        min: usize,
    },

    /// JSON serialization of output failed
    #[error("Serialization error: {0}")]
    #[diagnostic(code(naval::core::serialization))]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid width error
    #[must_use]
    pub const fn invalid_width(width: usize, min: usize) -> Self {
        Self::InvalidWidth { width, min }
    }
}

/// Result type alias for naval-core operations
pub type Result<T> = std::result::Result<T, Error>;
