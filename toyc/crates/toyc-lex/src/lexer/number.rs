//! Number literal lexing.
//!
//! Only unsigned decimal integers exist. A leading `-` is a separate
//! `MINUS` token and there is no fraction or exponent part.

use crate::ascii::is_digit;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// Consumes a maximal run of decimal digits. The value is not parsed or
    /// range-checked; the token text is the exact digit run.
    pub fn lex_number(&mut self) -> Token {
        while is_digit(self.cursor.current_char()) {
            self.cursor.advance();
        }

        self.make_token(TokenKind::Number, self.lexeme())
    }
}
