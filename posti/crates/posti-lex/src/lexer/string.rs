//! String literal lexing.
//!
//! Only the extent of a literal is determined here. Escapes are skipped,
//! never decoded, so the token text is the literal exactly as written.

use crate::token::TokenKind;
use crate::unicode::{is_quote, is_string_prefix};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal with an optional one-letter prefix.
    ///
    /// Returns `None` without consuming anything when the current character
    /// is a prefix letter that is not directly followed by a quote; the
    /// identifier branch takes over in that case.
    ///
    /// # Extent
    ///
    /// - `'''` or `"""` opens a triple-quoted literal closed by the same run.
    /// - Otherwise the literal is closed by the next matching quote.
    /// - A backslash skips the character after it, whatever it is.
    /// - An unclosed literal runs to the end of the buffer.
    pub fn lex_string(&mut self) -> Option<TokenKind> {
        let mut cursor = self.cursor;

        if is_string_prefix(cursor.current_char()) {
            cursor.advance();
        }

        let quote = cursor.current_char();
        if cursor.is_at_end() || !is_quote(quote) {
            return None;
        }

        let triple = cursor.peek_char(1) == quote && cursor.peek_char(2) == quote;
        let width = if triple { 3 } else { 1 };
        cursor.advance_n(width);

        while !cursor.is_at_end() {
            let c = cursor.current_char();

            if c == '\\' {
                cursor.advance_n(2);
                continue;
            }

            if c == quote
                && (!triple || (cursor.peek_char(1) == quote && cursor.peek_char(2) == quote))
            {
                cursor.advance_n(width);
                break;
            }

            cursor.advance();
        }

        self.cursor = cursor;
        Some(TokenKind::String)
    }
}
