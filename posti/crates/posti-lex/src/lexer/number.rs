//! Number literal lexing.
//!
//! This module finds the extent of integer, float and imaginary literals.
//! Values are never computed; a highlighter only needs the boundaries.

use crate::token::TokenKind;
use crate::unicode::{is_alternate_base_continue, is_base_marker, is_decimal_continue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// Must be called on a digit, or on a `.` that is followed by a digit.
    ///
    /// # Number Formats
    ///
    /// - Alternate base: `0x1F`, `0b1010`, `0o777`, `0xAB_CD`
    /// - Decimal: `42`, `1_000`
    /// - Float: `3.14`, `.5`, `1e10`, `2.5E-3`
    /// - Imaginary: `3j`, `1.5e2J`
    ///
    /// After `0b`, `0o` or `0x` any hexadecimal-alphabet character is
    /// accepted, so `0b12` and `0o9f` are single tokens.
    pub fn lex_number(&mut self) -> TokenKind {
        if self.cursor.current_char() == '0' && is_base_marker(self.cursor.peek_char(1)) {
            self.cursor.advance_n(2);
            self.cursor.eat_while(is_alternate_base_continue);
            return TokenKind::Number;
        }

        self.cursor.eat_while(is_decimal_continue);

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(is_decimal_continue);
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            let sign = matches!(self.cursor.peek_char(1), '+' | '-');
            let digit_offset = if sign { 2 } else { 1 };
            if self.cursor.peek_char(digit_offset).is_ascii_digit() {
                self.cursor.advance_n(digit_offset);
                self.cursor.eat_while(is_decimal_continue);
            }
        }

        if matches!(self.cursor.current_char(), 'j' | 'J') {
            self.cursor.advance();
        }

        TokenKind::Number
    }
}
