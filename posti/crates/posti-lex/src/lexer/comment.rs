//! Whitespace, line terminator and comment lexing.
//!
//! Unlike a compiler lexer nothing here is skipped: whitespace and comments
//! are tokens of their own so the renderer can reproduce the source.

use crate::token::TokenKind;
use crate::unicode::{is_inline_whitespace, is_line_terminator};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a run of spaces and tabs as one plain token.
    pub fn lex_whitespace(&mut self) -> TokenKind {
        self.cursor.eat_while(is_inline_whitespace);
        TokenKind::Plain
    }

    /// Lexes `\r\n`, `\n` or `\r` as one plain token.
    pub fn lex_line_terminator(&mut self) -> TokenKind {
        if !self.cursor.match_char('\r') {
            self.cursor.advance();
            return TokenKind::Plain;
        }
        self.cursor.match_char('\n');
        TokenKind::Plain
    }

    /// Lexes a `#` comment up to, not including, the line terminator.
    pub fn lex_comment(&mut self) -> TokenKind {
        self.cursor.eat_while(|c| !is_line_terminator(c));
        TokenKind::Comment
    }
}
