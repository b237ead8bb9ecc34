//! Token definitions and the fixed word catalogues.
//!
//! A [`Token`] is a classified, boundary-exact slice of the source buffer.
//! The scanner never rewrites text: a token's [`text`](Token::text) is always
//! `&source[token.span()]`.

use std::fmt;
use std::ops::Range;

/// Highlighting class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TokenKind {
    /// Unstyled text: whitespace, line terminators, ordinary names, stray characters.
    Plain,
    /// Reserved word (`if`, `def`, `None`, ...).
    Keyword,
    /// Built-in function or type name (`print`, `len`, `int`, ...).
    Builtin,
    /// String literal including prefix and quotes.
    String,
    /// `#` comment up to the end of the line.
    Comment,
    /// Numeric literal.
    Number,
    /// Name directly following `def`.
    FunctionName,
    /// Name directly following `class`.
    ClassName,
    /// `@name` or `@dotted.name`.
    Decorator,
    /// Operator such as `+`, `**=` or `->`.
    Operator,
    /// Brackets, separators and other single-character punctuation.
    Punctuation,
    /// The `self` receiver name.
    SelfReference,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 12] = [
        TokenKind::Plain,
        TokenKind::Keyword,
        TokenKind::Builtin,
        TokenKind::String,
        TokenKind::Comment,
        TokenKind::Number,
        TokenKind::FunctionName,
        TokenKind::ClassName,
        TokenKind::Decorator,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::SelfReference,
    ];

    /// Stable kebab-case name, used in configuration files and JSON output.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Plain => "plain",
            TokenKind::Keyword => "keyword",
            TokenKind::Builtin => "builtin",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::Number => "number",
            TokenKind::FunctionName => "function-name",
            TokenKind::ClassName => "class-name",
            TokenKind::Decorator => "decorator",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::SelfReference => "self-reference",
        }
    }

    /// Looks up a kind by its [`name`](Self::name).
    ///
    /// ```
    /// use posti_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_name("class-name"), Some(TokenKind::ClassName));
    /// assert_eq!(TokenKind::from_name("nope"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<TokenKind> {
        TokenKind::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified slice of the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'a> {
    kind: TokenKind,
    text: &'a str,
    start: usize,
}

impl<'a> Token<'a> {
    /// Creates a token covering `text`, which begins at byte `start` of the source.
    pub fn new(kind: TokenKind, text: &'a str, start: usize) -> Self {
        Self { kind, text, start }
    }

    /// Highlighting class.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Exact source text covered by this token.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the first character.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last character.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Byte range of this token in the source buffer.
    pub fn span(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Python reserved words.
pub const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Python built-in functions and types.
pub const BUILTINS: &[&str] = &[
    "__import__", "abs", "all", "any", "ascii", "bin", "bool", "breakpoint", "bytearray",
    "bytes", "callable", "chr", "classmethod", "compile", "complex", "delattr", "dict", "dir",
    "divmod", "enumerate", "eval", "exec", "filter", "float", "format", "frozenset", "getattr",
    "globals", "hasattr", "hash", "help", "hex", "id", "input", "int", "isinstance",
    "issubclass", "iter", "len", "list", "locals", "map", "max", "memoryview", "min", "next",
    "object", "oct", "open", "ord", "pow", "print", "property", "range", "repr", "reversed",
    "round", "set", "setattr", "slice", "sorted", "staticmethod", "str", "sum", "super",
    "tuple", "type", "vars", "zip",
];

/// Conventional name of the instance receiver.
pub const SELF_REFERENCE: &str = "self";

/// Keyword introducing a function definition.
pub const FUNCTION_KEYWORD: &str = "def";

/// Keyword introducing a class definition.
pub const CLASS_KEYWORD: &str = "class";

/// Returns true if `ident` is a reserved word.
pub fn is_keyword(ident: &str) -> bool {
    KEYWORDS.binary_search(&ident).is_ok()
}

/// Returns true if `ident` names a built-in.
pub fn is_builtin(ident: &str) -> bool {
    BUILTINS.binary_search(&ident).is_ok()
}
