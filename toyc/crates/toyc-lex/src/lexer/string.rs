//! String literal lexing.
//!
//! Strings are delimited by single quotes and have no escape sequences:
//! the first `'` after the opening one always closes the literal. Newlines
//! are allowed inside.

use toyc_util::DiagnosticCode;

use crate::token::{Token, TokenKind, UNTERMINATED_STRING_TEXT};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// The token text keeps both quotes, so `'hi'` lexes to the text
    /// `'hi'`. Running out of input before the closing quote reports an
    /// error and returns an `ERROR` token with the cursor at end of input.
    pub fn lex_string(&mut self) -> Token {
        self.cursor.advance();

        while !self.cursor.is_at_end() && self.cursor.current_char() != '\'' {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            self.report_error(
                DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                "unterminated string literal".to_string(),
                Some("add a closing `'`"),
            );
            return self.make_token(TokenKind::Error, UNTERMINATED_STRING_TEXT);
        }

        self.cursor.advance();
        self.make_token(TokenKind::StringLiteral, self.lexeme())
    }
}
