//! Error types for posti-render.

use thiserror::Error;

/// Errors raised while configuring or running a renderer.
///
/// Rendering a token stream to markup cannot fail; only theme
/// configuration and JSON serialization can.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Unknown output format name.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// Theme entry names a class that does not exist.
    #[error("Unknown token class in theme: {0}")]
    UnknownClass(String),

    /// Theme entry is not a valid SGR parameter list.
    #[error("Invalid SGR code for {class}: {code:?}")]
    InvalidSgr {
        /// Class the code was given for.
        class: String,
        /// Offending code.
        code: String,
    },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using RenderError.
pub type Result<T> = std::result::Result<T, RenderError>;
