//! Operator and punctuation lexing.
//!
//! Two-character operators are matched first with one character of
//! lookahead, so `<=` is never split into `<` and `=`. `!`, `&` and `|` on
//! their own are not operators in this language.

use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Two-character operators. Patterns are disjoint, so order is irrelevant.
const TWO_CHAR_OPERATORS: [(char, char, TokenKind); 6] = [
    ('=', '=', TokenKind::Eq),
    ('!', '=', TokenKind::Ne),
    ('&', '&', TokenKind::And),
    ('|', '|', TokenKind::Or),
    ('<', '=', TokenKind::Le),
    ('>', '=', TokenKind::Ge),
];

/// Maps a single character to its operator or punctuation kind.
fn single_char_kind(c: char) -> Option<TokenKind> {
    let kind = match c {
        '=' => TokenKind::Assign,
        ';' => TokenKind::Semicolon,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '{' => TokenKind::LBrace,
        '}' => TokenKind::RBrace,
        ',' => TokenKind::Comma,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Multiply,
        '/' => TokenKind::Divide,
        '<' => TokenKind::Lt,
        '>' => TokenKind::Gt,
        _ => return None,
    };
    Some(kind)
}

impl<'a> Lexer<'a> {
    /// Lexes `==`, `!=`, `&&`, `||`, `<=` or `>=`.
    ///
    /// Consumes nothing and returns `None` if the next two characters are
    /// not one of these.
    pub fn lex_two_char_operator(&mut self) -> Option<Token> {
        let first = self.cursor.current_char();
        let second = self.cursor.peek_char(1);

        let kind = TWO_CHAR_OPERATORS
            .iter()
            .find_map(|&(a, b, kind)| (a == first && b == second).then_some(kind))?;

        self.cursor.advance_n(2);
        Some(self.make_token(kind, self.lexeme()))
    }

    /// Lexes a single-character operator or punctuation mark.
    ///
    /// Consumes nothing and returns `None` if the current character is not
    /// in the table.
    pub fn lex_single_char_operator(&mut self) -> Option<Token> {
        if self.cursor.is_at_end() {
            return None;
        }
        let kind = single_char_kind(self.cursor.current_char())?;

        self.cursor.advance();
        Some(self.make_token(kind, self.lexeme()))
    }
}
