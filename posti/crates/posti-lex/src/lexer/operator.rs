//! Operator and punctuation lexing.
//!
//! Operators are matched against a static catalogue sorted by descending
//! length and probed linearly, so the first hit is the longest match.

use crate::token::TokenKind;
use crate::Lexer;

/// Operator spellings, longest first.
pub const OPERATORS: &[&str] = &[
    // three characters
    "**=", "//=", ">>=", "<<=",
    // two characters
    "**", "//", ">>", "<<", "<=", ">=", "==", "!=", "->", ":=", "+=", "-=", "*=", "/=", "%=",
    "&=", "|=", "^=", "@=",
    // one character
    "+", "-", "*", "/", "%", "@", "&", "|", "^", "~", "<", ">", "=",
];

/// Single-character punctuation.
pub const PUNCTUATION: &[char] = &[
    '(', ')', '[', ']', '{', '}', ',', '.', ';', ':', '?', '\\', '\'', '"',
];

impl<'a> Lexer<'a> {
    /// Lexes the longest operator at the cursor, if any.
    pub fn lex_operator(&mut self) -> Option<TokenKind> {
        let cursor = &mut self.cursor;
        OPERATORS
            .iter()
            .any(|op| cursor.eat_str(op))
            .then_some(TokenKind::Operator)
    }

    /// Lexes one punctuation character, if the cursor is on one.
    pub fn lex_punctuation(&mut self) -> Option<TokenKind> {
        let c = self.cursor.current_char();
        if self.cursor.is_at_end() || !PUNCTUATION.contains(&c) {
            return None;
        }
        self.cursor.advance();
        Some(TokenKind::Punctuation)
    }
}
