//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use toyc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::ascii::{is_digit, is_ident_start};
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind, UNKNOWN_CHARACTER_TEXT};

/// Lexer for the toy language.
///
/// The lexer transforms source bytes into a stream of tokens, one per call
/// to [`Lexer::next_token`]. Lexical errors are reported to the borrowed
/// [`Handler`] and surface in the stream as [`TokenKind::Error`] tokens.
///
/// # Example
///
/// ```
/// use toyc_lex::{Lexer, TokenKind};
/// use toyc_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new("x <= 10", &handler);
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
/// assert_eq!(lexer.next_token().kind, TokenKind::Le);
/// assert_eq!(lexer.next_token().kind, TokenKind::Number);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    handler: &'a Handler,

    /// Starting position of the current token (byte offset).
    pub token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Set once the iterator has handed out `EOF`.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self::from_bytes(source.as_bytes(), handler)
    }

    /// Creates a new lexer over raw bytes. The input need not be UTF-8.
    pub fn from_bytes(source: &'a [u8], handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            finished: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace, then tries two-character operators, the
    /// single-character table, strings, numbers and identifiers in that
    /// order. Any other character is reported, consumed, and returned as an
    /// `ERROR` token so that repeated calls always make progress.
    ///
    /// Once the input is exhausted every further call returns `EOF` at the
    /// same position.
    pub fn next_token(&mut self) -> Token {
        self.cursor.skip_whitespace();
        self.mark_token_start();

        if self.cursor.is_at_end() {
            return Token::eof(self.token_span());
        }

        if let Some(token) = self.lex_two_char_operator() {
            return token;
        }
        if let Some(token) = self.lex_single_char_operator() {
            return token;
        }

        match self.cursor.current_char() {
            '\'' => self.lex_string(),
            c if is_digit(c) => self.lex_number(),
            c if is_ident_start(c) => self.lex_identifier(),
            _ => {
                self.cursor.advance();
                // Escaped per byte: the input is not decoded.
                let byte = self.cursor.slice_from(self.token_start);
                self.report_error(
                    DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                    format!("unrecognized character '{}'", byte.escape_ascii()),
                    None,
                );
                self.make_token(TokenKind::Error, UNKNOWN_CHARACTER_TEXT)
            },
        }
    }

    /// Records the cursor position as the start of the next token.
    fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Span from the token start to the current cursor position.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// The bytes consumed for the current token, as owned text.
    pub(crate) fn lexeme(&self) -> String {
        String::from_utf8_lossy(self.cursor.slice_from(self.token_start)).into_owned()
    }

    /// Builds a token spanning everything consumed since the token start.
    pub(crate) fn make_token(&self, kind: TokenKind, text: impl Into<String>) -> Token {
        Token::new(kind, text, self.token_span())
    }

    /// Reports a lexical error covering the current token.
    ///
    /// # Arguments
    /// * `code` - Diagnostic code identifying the error
    /// * `message` - The error message to display
    /// * `help` - Optional suggestion attached to the diagnostic
    pub fn report_error(&self, code: DiagnosticCode, message: String, help: Option<&str>) {
        let mut builder = DiagnosticBuilder::error(message)
            .code(code)
            .span(self.token_span());
        if let Some(help) = help {
            builder = builder.help(help);
        }
        builder.emit(self.handler);
    }

    /// Returns the current line number (1-based).
    ///
    /// # Returns
    /// The line number of the next character to be lexed.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    ///
    /// # Returns
    /// The column number of the next character to be lexed.
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the starting position of the current token.
    pub fn token_start(&self) -> usize {
        self.token_start
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Yields every token including the final `EOF`, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }
        Some(token)
    }
}
