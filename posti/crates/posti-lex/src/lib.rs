//! posti-lex - Highlighting scanner for Python source
//!
//! This crate splits source text into classified [`Token`]s for syntax
//! highlighting. It is a single forward pass with one piece of carried state
//! (whether the next name follows `def` or `class`); there is no parse tree
//! and no backtracking.
//!
//! # Example Usage
//!
//! ```
//! use posti_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("def greet(name): print(name)");
//! assert_eq!(tokens[0].kind(), TokenKind::Keyword);
//! assert_eq!(tokens[2].kind(), TokenKind::FunctionName);
//! assert_eq!(tokens[2].text(), "greet");
//!
//! // Tokens always cover the whole input
//! let joined: String = tokens.iter().map(|t| t.text()).collect();
//! assert_eq!(joined, "def greet(name): print(name)");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and the keyword/builtin catalogues
//! - [`lexer`] - Lexer, dispatch and the per-literal sub-lexers
//! - [`state`] - Carried scan state
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classes
//!
//! # Guarantees
//!
//! - **Totality**: scanning never fails. Unterminated strings run to the
//!   end of the buffer, unknown characters become single plain tokens.
//! - **Partition**: concatenating the token texts reproduces the input
//!   exactly; the spans are contiguous and start at 0.
//! - **Purity**: no state survives between calls, so scanning the same
//!   buffer twice yields the same tokens.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod state;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{step, Lexer, OPERATORS, PUNCTUATION};
pub use state::{PendingRole, ScanState};
pub use token::{is_builtin, is_keyword, Token, TokenKind, BUILTINS, KEYWORDS, SELF_REFERENCE};

/// Tokenizes `source` into a complete, ordered token sequence.
///
/// The empty string yields an empty vector.
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let tokens: Vec<Token<'_>> = Lexer::new(source).collect();
    tracing::debug!(tokens = tokens.len(), bytes = source.len(), "tokenized source");
    tokens
}
