//! Command modules for the postt CLI.
//!
//! Each subcommand is implemented in its own file.

pub mod common;

pub mod highlight;
pub mod init_config;
pub mod tokens;

pub use highlight::{run_highlight, HighlightArgs};
pub use init_config::{run_init_config, InitConfigArgs};
pub use tokens::{run_tokens, TokensArgs};
