//! Forward-only cursor over Python source.
//!
//! The cursor holds a byte offset into the source and only ever moves
//! forward by whole characters, so every position it reports is a valid
//! `char` boundary and can be used to slice the source.

/// A forward-only cursor over source text.
///
/// The cursor is [`Copy`]: sub-lexers that may have to give up (a string
/// prefix letter with no quote behind it, an `@` with no name) probe on a
/// copy and only commit it when the token is confirmed.
///
/// # Example
///
/// ```
/// use posti_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("def f");
/// assert_eq!(cursor.current_char(), 'd');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'e');
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    /// Text being scanned.
    source: &'a str,

    /// Byte offset of the next unread character.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Creates a cursor at byte `position`.
    ///
    /// Positions past the end are clamped to the end; positions inside a
    /// multi-byte character are moved forward to the next boundary.
    ///
    /// ```
    /// use posti_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::at("é!", 1);
    /// assert_eq!(cursor.position(), 2);
    /// assert_eq!(Cursor::at("ab", 10).position(), 2);
    /// ```
    pub fn at(source: &'a str, position: usize) -> Self {
        let mut position = position.min(source.len());
        while !source.is_char_boundary(position) {
            position += 1;
        }
        Self { source, position }
    }

    /// Returns the current character, or `'\0'` at the end of the source.
    ///
    /// A literal NUL inside the source also reads as `'\0'`; use
    /// [`is_at_end`](Self::is_at_end) to tell them apart.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead (0 = current).
    ///
    /// ```
    /// use posti_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("aé'");
    /// assert_eq!(cursor.peek_char(1), 'é');
    /// assert_eq!(cursor.peek_char(2), '\'');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining().as_bytes();

        // Fast path: every byte up to the requested one is ASCII
        if rest.len() > offset && rest[..=offset].is_ascii() {
            return rest[offset] as char;
        }

        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Advances past the current character. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.remaining().chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Advances by up to `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// Returns the number of characters consumed.
    ///
    /// ```
    /// use posti_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), 3);
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.remaining().chars().next() {
            if !predicate(c) {
                break;
            }
            self.position += c.len_utf8();
            count += 1;
        }
        count
    }

    /// Consumes `prefix` if the remaining source starts with it.
    ///
    /// ```
    /// use posti_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("**=1");
    /// assert!(cursor.eat_str("**="));
    /// assert!(!cursor.eat_str("**"));
    /// assert_eq!(cursor.current_char(), '1');
    /// ```
    pub fn eat_str(&mut self, prefix: &str) -> bool {
        if self.remaining().starts_with(prefix) {
            self.position += prefix.len();
            true
        } else {
            false
        }
    }

    /// True once every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes `expected` if it is the current character.
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the unread rest of the source.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the whole source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
