//! toyc-lex - Lexical Analyzer for the toy language
//!
//! This crate turns a source buffer into a stream of classified tokens, each
//! carrying its lexeme and the line/column of its first character, ready for
//! a parser to consume.
//!
//! # Example Usage
//!
//! ```
//! use toyc_lex::{Lexer, TokenKind};
//! use toyc_util::Handler;
//!
//! let source = "func main ( ) { int x ; x = 10 ; }";
//! let handler = Handler::new();
//!
//! // Iterate through tokens; the last one is EOF
//! let tokens: Vec<_> = Lexer::new(source, &handler).collect();
//! assert_eq!(tokens.len(), 14);
//! assert_eq!(tokens[0].kind, TokenKind::Func);
//!
//! // Or get tokens one at a time
//! let mut lexer = Lexer::new(source, &handler);
//! assert_eq!(lexer.next_token().to_string(), "Token(FUNC, 'func', L1, C1)");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, tokens and keyword resolution
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Byte cursor with line/column tracking
//! - [`ascii`] - Character classification
//!
//! # Token Categories
//!
//! - **Keywords**: `func`, `if`, `else`, `while`, `break`, `int`, `char`
//! - **Identifiers**: `[a-zA-Z_][a-zA-Z0-9_]*`
//! - **Numbers**: `[0-9]+`
//! - **Strings**: `'...'`, no escapes, quotes kept in the token text
//! - **Operators**: `==` `!=` `&&` `||` `<=` `>=` `=` `+` `-` `*` `/` `<` `>`
//! - **Punctuation**: `;` `(` `)` `{` `}` `,`
//!
//! # Errors
//!
//! The lexer never fails. An unrecognized character or an unterminated
//! string is reported to the [`toyc_util::Handler`] and appears in the stream
//! as an `ERROR` token; what to do next is up to the caller. The only fatal
//! condition is allocation failure, which aborts the process.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ascii;
pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

use toyc_util::Handler;

// Re-export main types for convenience
pub use cursor::{Cursor, CursorSnapshot, EOF_CHAR};
pub use lexer::Lexer;
pub use token::{
    keyword_from_ident, resolve_ident, Token, TokenKind, KEYWORDS, UNKNOWN_CHARACTER_TEXT,
    UNTERMINATED_STRING_TEXT,
};

/// Lexes the whole source, error tokens included.
///
/// The returned vector always ends with exactly one `EOF` token. Errors are
/// reported to `handler` as they are found.
pub fn tokenize(source: &str, handler: &Handler) -> Vec<Token> {
    Lexer::new(source, handler).collect()
}
