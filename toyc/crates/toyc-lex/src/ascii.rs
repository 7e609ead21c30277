//! Character classification for the scanner.
//!
//! The language is byte-oriented: only ASCII letters, digits and the C
//! whitespace set have meaning. Bytes above 0x7F never start or continue a
//! token.

/// Checks if a character is insignificant whitespace.
///
/// Matches the C-locale `isspace` set: space, tab, newline, vertical tab,
/// form feed and carriage return.
///
/// # Example
///
/// ```
/// use toyc_lex::ascii::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\x0B'));
/// assert!(!is_whitespace('\u{A0}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Checks if a character can start an identifier (letter or `_`).
///
/// # Example
///
/// ```
/// use toyc_lex::ascii::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Checks if a character can continue an identifier (letter, digit or `_`).
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Checks if a character is a decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_set() {
        for c in [' ', '\t', '\n', '\x0B', '\x0C', '\r'] {
            assert!(is_whitespace(c), "{:?} should be whitespace", c);
        }
        for c in ['a', '0', '\0', '\u{85}', '\u{A0}', '_'] {
            assert!(!is_whitespace(c), "{:?} should not be whitespace", c);
        }
    }

    #[test]
    fn test_ident_start() {
        assert!(is_ident_start('z'));
        assert!(is_ident_start('Q'));
        assert!(is_ident_start('_'));
        assert!(!is_ident_start('9'));
        assert!(!is_ident_start('\''));
        assert!(!is_ident_start('\u{E9}'));
    }

    #[test]
    fn test_ident_continue() {
        assert!(is_ident_continue('a'));
        assert!(is_ident_continue('7'));
        assert!(is_ident_continue('_'));
        assert!(!is_ident_continue('-'));
        assert!(!is_ident_continue(' '));
        assert!(!is_ident_continue('\u{E9}'));
    }

    #[test]
    fn test_digit() {
        assert!(('0'..='9').all(is_digit));
        assert!(!is_digit('a'));
        assert!(!is_digit('\u{663}'));
    }
}
