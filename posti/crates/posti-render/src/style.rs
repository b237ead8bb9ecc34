//! Per-class presentation: CSS class names and ANSI themes.

use std::collections::BTreeMap;

use posti_lex::TokenKind;

use crate::error::{RenderError, Result};

/// SGR reset sequence.
pub const RESET: &str = "\x1b[0m";

/// CSS class for a token class, or `None` for unstyled text.
pub fn css_class(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Plain => None,
        TokenKind::Keyword => Some("kw"),
        TokenKind::Builtin => Some("bi"),
        TokenKind::String => Some("str"),
        TokenKind::Comment => Some("com"),
        TokenKind::Number => Some("num"),
        TokenKind::FunctionName => Some("fn"),
        TokenKind::ClassName => Some("cls"),
        TokenKind::Decorator => Some("dec"),
        TokenKind::Operator => Some("op"),
        TokenKind::Punctuation => Some("pun"),
        TokenKind::SelfReference => Some("slf"),
    }
}

/// Maps token classes to ANSI SGR parameter lists such as `"1;33"`.
///
/// Classes without an entry are written without escape sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    codes: BTreeMap<TokenKind, String>,
}

impl Default for Theme {
    /// Bright console palette: magenta keywords, cyan builtins, green
    /// strings, grey comments, yellow numbers and decorators, bold names.
    fn default() -> Self {
        let codes = [
            (TokenKind::Keyword, "95"),
            (TokenKind::Builtin, "96"),
            (TokenKind::String, "92"),
            (TokenKind::Comment, "90"),
            (TokenKind::Number, "93"),
            (TokenKind::FunctionName, "1"),
            (TokenKind::ClassName, "1"),
            (TokenKind::Decorator, "93"),
            (TokenKind::SelfReference, "3;96"),
        ]
        .into_iter()
        .map(|(kind, code)| (kind, code.to_string()))
        .collect();

        Self { codes }
    }
}

impl Theme {
    /// Theme with no styled classes.
    pub fn empty() -> Self {
        Self {
            codes: BTreeMap::new(),
        }
    }

    /// SGR parameters for `kind`, if styled.
    pub fn code(&self, kind: TokenKind) -> Option<&str> {
        self.codes.get(&kind).map(String::as_str)
    }

    /// Sets the SGR parameters for `kind`. An empty code unstyles it.
    pub fn set(&mut self, kind: TokenKind, code: &str) -> Result<()> {
        if code.is_empty() {
            self.codes.remove(&kind);
            return Ok(());
        }
        if !is_sgr(code) {
            return Err(RenderError::InvalidSgr {
                class: kind.name().to_string(),
                code: code.to_string(),
            });
        }
        self.codes.insert(kind, code.to_string());
        Ok(())
    }

    /// Applies overrides keyed by class name (`"keyword"`, `"function-name"`, ...).
    pub fn with_overrides<'s, I>(mut self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'s str, &'s str)>,
    {
        for (name, code) in overrides {
            let kind =
                TokenKind::from_name(name).ok_or_else(|| RenderError::UnknownClass(name.to_string()))?;
            self.set(kind, code)?;
        }
        Ok(self)
    }

    /// Full SGR set sequence for `kind`, e.g. `"\x1b[95m"`.
    pub fn escape(&self, kind: TokenKind) -> Option<String> {
        self.code(kind).map(|code| format!("\x1b[{code}m"))
    }
}

fn is_sgr(code: &str) -> bool {
    code.split(';')
        .all(|part| !part.is_empty() && part.len() <= 3 && part.bytes().all(|b| b.is_ascii_digit()))
}
