//! Character classes used by the scanner.
//!
//! Identifiers follow Python's rule loosely: any Unicode letter or `_` may
//! start one, letters, digits and `_` may continue it. Everything else here
//! is ASCII.

/// Checks if a character may start an identifier.
///
/// ```
/// use posti_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('λ'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('@'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character may continue an identifier.
///
/// ```
/// use posti_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('9'));
/// assert!(is_ident_continue('_'));
/// assert!(!is_ident_continue('.'));
/// assert!(!is_ident_continue(' '));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Checks if a character may appear in a decorator name after `@`.
///
/// Dots are allowed so that `@functools.wraps` is a single token.
pub fn is_decorator_char(c: char) -> bool {
    c == '.' || is_ident_continue(c)
}

/// Space or tab. Other whitespace is not grouped.
pub fn is_inline_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// `\n` or `\r`.
pub fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Single or double quote.
pub fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

/// Checks if a character is a recognized one-letter string prefix.
///
/// ```
/// use posti_lex::unicode::is_string_prefix;
///
/// assert!(is_string_prefix('f'));
/// assert!(is_string_prefix('B'));
/// assert!(!is_string_prefix('x'));
/// ```
pub fn is_string_prefix(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'r' | 'u' | 'b' | 'f')
}

/// Checks if a character is an alternate-base marker after a leading `0`.
pub fn is_base_marker(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'b' | 'o' | 'x')
}

/// Decimal digit or digit separator.
pub fn is_decimal_continue(c: char) -> bool {
    c.is_ascii_digit() || c == '_'
}

/// Hexadecimal-alphabet character or digit separator.
///
/// Used for every alternate base: `0b`, `0o` and `0x` runs all accept the
/// full hexadecimal alphabet.
pub fn is_alternate_base_continue(c: char) -> bool {
    c.is_ascii_hexdigit() || c == '_'
}
