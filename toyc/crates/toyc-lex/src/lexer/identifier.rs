//! Identifier and keyword lexing.

use crate::ascii::is_ident_continue;
use crate::token::{resolve_ident, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes a maximal run of letters, digits and underscores. The
    /// caller guarantees the first character is a letter or underscore.
    /// The full text is then resolved against the reserved words, so `if`
    /// is a keyword but `iffy` is an identifier.
    pub fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.lexeme();
        let kind = resolve_ident(&text);
        self.make_token(kind, text)
    }
}
