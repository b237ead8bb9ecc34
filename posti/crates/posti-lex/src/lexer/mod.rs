//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `comment` - Whitespace runs, line terminators and comments
//! - `identifier` - Identifiers, keywords, definition names and decorators
//! - `number` - Numeric literal extents
//! - `string` - String literal extents
//! - `operator` - Operator longest match and punctuation

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::{step, Lexer};
pub use operator::{OPERATORS, PUNCTUATION};
