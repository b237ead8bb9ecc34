//! Common types and utilities for postt commands.
//!
//! This module provides shared path handling and message constants used
//! across all command implementations.

use std::io::Read;
use std::path::{Path, PathBuf};

use posti_render::OutputFormat;

use crate::error::{PosttError, Result};

/// Input path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Whether `path` means standard input.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

// ============================================================================
// Input / Output
// ============================================================================

/// Read a source file, or standard input for `-`.
///
/// The text must be valid UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    if !path.exists() {
        return Err(PosttError::Validation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(PosttError::Validation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    std::fs::read_to_string(path).map_err(|e| {
        PosttError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
    })
}

/// Output file for `input` inside `output_dir`: `<stem>.<ext>`.
///
/// Standard input is written as `stdin.<ext>`.
pub fn output_path_for(input: &Path, output_dir: &Path, format: OutputFormat) -> Result<PathBuf> {
    let stem = if is_stdin(input) {
        "stdin".to_string()
    } else {
        input
            .file_stem()
            .ok_or_else(|| PosttError::FileOperation(error_messages::INVALID_FILE_PATH.to_string()))?
            .to_string_lossy()
            .into_owned()
    };
    Ok(output_dir.join(format!("{}.{}", stem, format.extension())))
}

/// Write `content` to `path`, refusing to replace an existing file unless `force`.
pub fn write_output(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(PosttError::Validation(format!(
            "{}: {}",
            error_messages::OUTPUT_FILE_EXISTS,
            path.display()
        )));
    }

    std::fs::write(path, content).map_err(|e| {
        PosttError::FileOperation(format!("Failed to write {}: {}", path.display(), e))
    })
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file";

    /// Error when output path is not a directory.
    pub const OUTPUT_PATH_NOT_DIR: &str = "Output path is not a directory";

    /// Error when output file already exists.
    pub const OUTPUT_FILE_EXISTS: &str = "Output file already exists (use --force)";

    /// Error when files failed to process.
    pub const FILES_FAILED: &str = "file(s) failed to process";

    /// Error when file path is invalid.
    pub const INVALID_FILE_PATH: &str = "Invalid file path";

    /// Error when two inputs would be written to the same output file.
    pub const OUTPUT_PATH_COLLISION: &str = "Inputs map to the same output file";

    /// Error when stdin is given more than once.
    pub const STDIN_TWICE: &str = "Standard input can only be read once";
}
