//! Scanner state carried between tokens.

use crate::token::{TokenKind, CLASS_KEYWORD, FUNCTION_KEYWORD};

/// How the next identifier should be classified.
///
/// Set by a definition keyword and consumed by the very next identifier,
/// whatever that identifier turns out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PendingRole {
    /// No definition keyword is waiting for its name.
    #[default]
    None,
    /// The previous keyword was `def`.
    ExpectFunctionName,
    /// The previous keyword was `class`.
    ExpectClassName,
}

impl PendingRole {
    /// Role left behind after the keyword `keyword` has been scanned.
    ///
    /// ```
    /// use posti_lex::PendingRole;
    ///
    /// assert_eq!(PendingRole::after_keyword("def"), PendingRole::ExpectFunctionName);
    /// assert_eq!(PendingRole::after_keyword("class"), PendingRole::ExpectClassName);
    /// assert_eq!(PendingRole::after_keyword("return"), PendingRole::None);
    /// ```
    pub fn after_keyword(keyword: &str) -> PendingRole {
        match keyword {
            FUNCTION_KEYWORD => PendingRole::ExpectFunctionName,
            CLASS_KEYWORD => PendingRole::ExpectClassName,
            _ => PendingRole::None,
        }
    }

    /// Kind an identifier receives while this role is pending.
    pub fn name_kind(self) -> Option<TokenKind> {
        match self {
            PendingRole::None => None,
            PendingRole::ExpectFunctionName => Some(TokenKind::FunctionName),
            PendingRole::ExpectClassName => Some(TokenKind::ClassName),
        }
    }

    /// Takes the role, leaving [`PendingRole::None`] behind.
    pub fn take(&mut self) -> PendingRole {
        std::mem::take(self)
    }
}

/// Snapshot of the scanner between two tokens.
///
/// Feeding a snapshot back through [`step`](crate::step) or
/// [`Lexer::resume`](crate::Lexer::resume) continues exactly where the
/// snapshot was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScanState {
    /// Byte offset of the next unread character.
    pub cursor: usize,
    /// Role for the next identifier.
    pub role: PendingRole,
}

impl ScanState {
    /// Creates a snapshot at `cursor` with role `role`.
    pub fn new(cursor: usize, role: PendingRole) -> Self {
        Self { cursor, role }
    }
}
