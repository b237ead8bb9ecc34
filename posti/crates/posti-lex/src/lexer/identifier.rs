//! Identifier, keyword and decorator lexing.
//!
//! This is the only branch that reads or writes the pending role.

use crate::state::PendingRole;
use crate::token::{is_builtin, is_keyword, TokenKind, SELF_REFERENCE};
use crate::unicode::{is_decorator_char, is_ident_continue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier and classifies it.
    ///
    /// In priority order, an identifier is a keyword, a definition name (if
    /// the previous keyword was `def` or `class`), a builtin, `self`, or
    /// plain. Keywords replace the pending role; any other identifier
    /// consumes it.
    pub fn lex_identifier(&mut self) -> TokenKind {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(self.token_start);

        if is_keyword(text) {
            self.role = PendingRole::after_keyword(text);
            return TokenKind::Keyword;
        }

        if let Some(kind) = self.role.take().name_kind() {
            return kind;
        }

        if is_builtin(text) {
            TokenKind::Builtin
        } else if text == SELF_REFERENCE {
            TokenKind::SelfReference
        } else {
            TokenKind::Plain
        }
    }

    /// Lexes `@` followed by a dotted name.
    ///
    /// Returns `None` without consuming anything when no name character
    /// follows, leaving a bare `@` or `@=` to the operator branch.
    pub fn lex_decorator(&mut self) -> Option<TokenKind> {
        if !is_decorator_char(self.cursor.peek_char(1)) {
            return None;
        }

        self.cursor.advance();
        self.cursor.eat_while(is_decorator_char);
        Some(TokenKind::Decorator)
    }
}
