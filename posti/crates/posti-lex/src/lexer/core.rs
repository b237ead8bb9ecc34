//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and the ordered dispatch that
//! picks a branch for each token.

use std::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::state::{PendingRole, ScanState};
use crate::token::{Token, TokenKind};
use crate::unicode::{is_ident_start, is_inline_whitespace, is_line_terminator, is_quote, is_string_prefix};

/// Highlighting lexer for Python source.
///
/// The lexer partitions its source into [`Token`]s: every character lands
/// in exactly one token and the tokens come out in source order. Scanning
/// cannot fail, so the lexer yields plain tokens rather than results.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Role the next identifier will take.
    pub(crate) role: PendingRole,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self::resume(source, ScanState::default())
    }

    /// Creates a lexer that continues from a previously taken snapshot.
    ///
    /// A cursor past the end is clamped to the end; a cursor inside a
    /// multi-byte character moves forward to the next boundary.
    pub fn resume(source: &'a str, state: ScanState) -> Self {
        let cursor = Cursor::at(source, state.cursor);
        Self {
            token_start: cursor.position(),
            cursor,
            role: state.role,
        }
    }

    /// Snapshot of the state between the last token and the next one.
    pub fn state(&self) -> ScanState {
        ScanState::new(self.cursor.position(), self.role)
    }

    /// The source being scanned.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Returns the next token, or `None` once the source is exhausted.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        if self.cursor.is_at_end() {
            return None;
        }

        self.token_start = self.cursor.position();
        let kind = self.lex_token();
        debug_assert!(
            self.cursor.position() > self.token_start,
            "every branch consumes at least one character"
        );

        Some(Token::new(
            kind,
            self.cursor.slice_from(self.token_start),
            self.token_start,
        ))
    }

    /// Consumes one token and returns its kind.
    ///
    /// Branches are tried in a fixed order and the first that matches wins.
    /// The string and decorator branches may decline without consuming
    /// anything, in which case dispatch falls through to the next branch.
    fn lex_token(&mut self) -> TokenKind {
        let c = self.cursor.current_char();

        if is_inline_whitespace(c) {
            return self.lex_whitespace();
        }

        if is_line_terminator(c) {
            return self.lex_line_terminator();
        }

        if c == '@' {
            if let Some(kind) = self.lex_decorator() {
                return kind;
            }
        }

        if c == '#' {
            return self.lex_comment();
        }

        if is_quote(c) || is_string_prefix(c) {
            if let Some(kind) = self.lex_string() {
                return kind;
            }
        }

        if c.is_ascii_digit() || (c == '.' && self.cursor.peek_char(1).is_ascii_digit()) {
            return self.lex_number();
        }

        if is_ident_start(c) {
            return self.lex_identifier();
        }

        if let Some(kind) = self.lex_operator() {
            return kind;
        }

        if let Some(kind) = self.lex_punctuation() {
            return kind;
        }

        self.cursor.advance();
        TokenKind::Plain
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // one token per character at most
        let remaining = self.cursor.remaining();
        (usize::from(!remaining.is_empty()), Some(remaining.len()))
    }
}

impl FusedIterator for Lexer<'_> {}

/// Scans exactly one token starting from `state`.
///
/// Returns the token together with the state to continue from, or `None`
/// when `state` is already at the end of `source`. Chaining calls from
/// [`ScanState::default`] produces the same sequence as
/// [`tokenize`](crate::tokenize).
///
/// ```
/// use posti_lex::{step, PendingRole, ScanState, TokenKind};
///
/// let source = "def f";
/// let (def, state) = step(source, ScanState::default()).unwrap();
/// assert_eq!(def.kind(), TokenKind::Keyword);
/// assert_eq!(state, ScanState::new(3, PendingRole::ExpectFunctionName));
///
/// let (_space, state) = step(source, state).unwrap();
/// let (name, state) = step(source, state).unwrap();
/// assert_eq!(name.kind(), TokenKind::FunctionName);
/// assert_eq!(state.role, PendingRole::None);
/// assert!(step(source, state).is_none());
/// ```
pub fn step(source: &str, state: ScanState) -> Option<(Token<'_>, ScanState)> {
    let mut lexer = Lexer::resume(source, state);
    let token = lexer.next_token()?;
    Some((token, lexer.state()))
}
