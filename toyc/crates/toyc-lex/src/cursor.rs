//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking a source buffer one byte at a time. It tracks line/column
//! information for token positions and error reporting.

use crate::ascii::is_whitespace;

/// Character reported once the cursor has run off the end of the source.
///
/// Only a sentinel: use [`Cursor::is_at_end`] to tell end of input apart
/// from a NUL byte that is really in the buffer.
pub const EOF_CHAR: char = '\0';

/// A cursor for traversing source code byte by byte.
///
/// Each byte is one character. The cursor never reads past the end of the
/// buffer; once exhausted it keeps reporting [`EOF_CHAR`].
///
/// # Example
///
/// ```
/// use toyc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"int x;");
///
/// assert_eq!(cursor.current_char(), 'i');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'n');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source bytes being traversed.
    source: &'a [u8],

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at line 1, column 1 of the given source.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character, or [`EOF_CHAR`] at the end.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` positions ahead without consuming.
    ///
    /// Out-of-bounds lookahead yields [`EOF_CHAR`].
    ///
    /// # Example
    ///
    /// ```
    /// use toyc_lex::cursor::{Cursor, EOF_CHAR};
    ///
    /// let cursor = Cursor::new(b"<=");
    /// assert_eq!(cursor.peek_char(0), '<');
    /// assert_eq!(cursor.peek_char(1), '=');
    /// assert_eq!(cursor.peek_char(2), EOF_CHAR);
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.position
            .checked_add(offset)
            .and_then(|pos| self.source.get(pos))
            .map_or(EOF_CHAR, |&b| char::from(b))
    }

    /// Advances the cursor to the next character.
    ///
    /// Consuming a newline moves to column 1 of the next line. Does nothing
    /// if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(&b) = self.source.get(self.position) else {
            return;
        };

        self.position += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances the cursor by the given number of characters, stopping
    /// early at the end of the source.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use toyc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"&&");
    /// assert!(cursor.match_char('&'));
    /// assert!(cursor.match_char('&'));
    /// assert!(!cursor.match_char('&'));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips a run of whitespace, keeping line/column in step across any
    /// number of newlines.
    ///
    /// # Example
    ///
    /// ```
    /// use toyc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"  \t\n\n  x");
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.current_char(), 'x');
    /// assert_eq!((cursor.line(), cursor.column()), (3, 3));
    /// ```
    pub fn skip_whitespace(&mut self) {
        while !self.is_at_end() && is_whitespace(self.current_char()) {
            self.advance();
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the bytes from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use toyc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"while x");
    /// let start = cursor.position();
    /// cursor.advance_n(5);
    /// assert_eq!(cursor.slice_from(start), b"while");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.source[start.min(self.position)..self.position]
    }

    /// Creates a snapshot of the current cursor state.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position.min(self.source.len());
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}
