//! Errors surfaced by the postt commands.

use thiserror::Error;

/// Main error type for the postt CLI application.
#[derive(Error, Debug)]
pub enum PosttError {
    /// Error when configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading or writing an input or output file failed.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Bad arguments, or some inputs could not be processed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error raised by a renderer or theme.
    #[error("Render error: {0}")]
    Render(#[from] posti_render::RenderError),

    /// Standard stream or filesystem I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using PosttError.
pub type Result<T> = std::result::Result<T, PosttError>;
