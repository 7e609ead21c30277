//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the lexeme it was built from and
//! the location of its first character. Every token owns its text, so it
//! stays valid after the source buffer is dropped.

use std::fmt;

use toyc_util::Span;

/// Text carried by the `ERROR` token produced for an unterminated string.
pub const UNTERMINATED_STRING_TEXT: &str = "unterminated string";

/// Text carried by the `ERROR` token produced for an unrecognized character.
pub const UNKNOWN_CHARACTER_TEXT: &str = "unknown character";

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // Keywords
    /// `func`
    Func,
    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
    /// `break`
    Break,
    /// `int`
    Int,
    /// `char`
    Char,

    // Operators and punctuation
    /// `=`
    Assign,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `==`
    Eq,
    /// `<=`
    Le,
    /// `>=`
    Ge,

    // Literals
    /// Run of decimal digits
    Number,
    /// Single-quoted string, quotes included in the lexeme
    StringLiteral,

    /// Any non-reserved identifier
    Identifier,

    /// End of input
    Eof,
    /// Lexical error
    Error,
}

impl TokenKind {
    /// Upper-case name used when rendering tokens.
    ///
    /// # Example
    ///
    /// ```
    /// use toyc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::StringLiteral.name(), "STRING_LITERAL");
    /// assert_eq!(TokenKind::Le.name(), "LE");
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Func => "FUNC",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Break => "BREAK",
            TokenKind::Int => "INT",
            TokenKind::Char => "CHAR",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Ne => "NE",
            TokenKind::Gt => "GT",
            TokenKind::Lt => "LT",
            TokenKind::Eq => "EQ",
            TokenKind::Le => "LE",
            TokenKind::Ge => "GE",
            TokenKind::Number => "NUMBER",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Eof => "EOF",
            TokenKind::Error => "ERROR",
        }
    }

    /// Returns true for reserved words.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Func
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Break
                | TokenKind::Int
                | TokenKind::Char
        )
    }

    /// Returns true for operators and punctuation.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Semicolon
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::Comma
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Multiply
                | TokenKind::Divide
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Ne
                | TokenKind::Gt
                | TokenKind::Lt
                | TokenKind::Eq
                | TokenKind::Le
                | TokenKind::Ge
        )
    }

    /// Returns true for number and string literals.
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::StringLiteral)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reserved words and the kinds they resolve to.
pub const KEYWORDS: [(&str, TokenKind); 7] = [
    ("func", TokenKind::Func),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("break", TokenKind::Break),
    ("int", TokenKind::Int),
    ("char", TokenKind::Char),
];

/// Resolves identifier text to a reserved-word kind.
///
/// Matching is exact and case-sensitive; anything that is not a reserved
/// word returns `None`.
///
/// # Example
///
/// ```
/// use toyc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident("While"), None);
/// assert_eq!(keyword_from_ident("iffy"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == text)
        .map(|(_, kind)| *kind)
}

/// Resolves identifier text to its token kind, falling back to
/// [`TokenKind::Identifier`].
#[inline]
pub fn resolve_ident(text: &str) -> TokenKind {
    keyword_from_ident(text).unwrap_or(TokenKind::Identifier)
}

/// A single scanned token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// What was recognized
    pub kind: TokenKind,
    /// The lexeme, or the fixed diagnostic text for `ERROR`; `None` for `EOF`
    pub text: Option<String>,
    /// Byte range consumed and position of the first character
    pub span: Span,
}

impl Token {
    /// Creates a token carrying text.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: Some(text.into()),
            span,
        }
    }

    /// Creates the end-of-input token.
    pub fn eof(span: Span) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: None,
            span,
        }
    }

    /// The token's text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// 1-based line of the first character.
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// 1-based column of the first character.
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Returns true for `EOF`.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns true for `ERROR`.
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}

impl fmt::Display for Token {
    /// Renders `Token(KIND, 'text', L<line>, C<column>)`, with `NULL` when
    /// the token carries no text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}, '{}', L{}, C{})",
            self.kind,
            self.text().unwrap_or("NULL"),
            self.line(),
            self.column()
        )
    }
}
