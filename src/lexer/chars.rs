//! Character classification for the scanner
//!
//! The identifier classes are ASCII-only and fixed, so they are stored as
//! `u128` bitsets computed at compile time: bit `n` is set when the character
//! with code point `n` belongs to the class.

const fn bits_of(chars: &[u8]) -> u128 {
    let mut set = 0u128;
    let mut i = 0;
    while i < chars.len() {
        set |= 1u128 << chars[i];
        i += 1;
    }
    set
}

const fn bits_between(first: u8, last: u8) -> u128 {
    let mut set = 0u128;
    let mut c = first;
    while c <= last {
        set |= 1u128 << c;
        c += 1;
    }
    set
}

const ASCII_LETTERS: u128 = bits_between(b'a', b'z') | bits_between(b'A', b'Z');
const ASCII_DIGITS: u128 = bits_between(b'0', b'9');

/// Symbols besides letters that may start an identifier.
const SPECIAL_INITIALS: u128 = bits_of(b"!$%&*/:<=>?~_^");
/// Symbols that may only appear after the first character of an identifier.
const SPECIAL_SUBSEQUENTS: u128 = bits_of(b".+-");

const IDENTIFIER_INITIALS: u128 = ASCII_LETTERS | SPECIAL_INITIALS;
const IDENTIFIER_SUBSEQUENTS: u128 = IDENTIFIER_INITIALS | ASCII_DIGITS | SPECIAL_SUBSEQUENTS;

#[inline]
fn in_set(set: u128, c: char) -> bool {
    let code = c as u32;
    code < 128 && set & (1u128 << code) != 0
}

/// True iff `c` opens a list.
#[inline]
pub fn is_left_paren(c: char) -> bool {
    c == '('
}

/// True iff `c` closes a list.
#[inline]
pub fn is_right_paren(c: char) -> bool {
    c == ')'
}

/// True iff `c` is an ASCII letter or one of `! $ % & * / : < = > ? ~ _ ^`.
#[inline]
pub fn is_identifier_initial(c: char) -> bool {
    in_set(IDENTIFIER_INITIALS, c)
}

/// True iff `c` may follow the first character of an identifier: any
/// identifier initial, an ASCII digit, or one of `. + -`.
#[inline]
pub fn is_identifier_subsequent(c: char) -> bool {
    in_set(IDENTIFIER_SUBSEQUENTS, c)
}

/// Method-call form of the classifier predicates.
pub trait Lexable {
    fn is_left_paren(&self) -> bool;
    fn is_right_paren(&self) -> bool;
    fn is_identifier_initial(&self) -> bool;
    fn is_identifier_subsequent(&self) -> bool;
}

impl Lexable for char {
    fn is_left_paren(&self) -> bool {
        is_left_paren(*self)
    }

    fn is_right_paren(&self) -> bool {
        is_right_paren(*self)
    }

    fn is_identifier_initial(&self) -> bool {
        is_identifier_initial(*self)
    }

    fn is_identifier_subsequent(&self) -> bool {
        is_identifier_subsequent(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case('a' ; "lowercase letter")]
    #[test_case('Z' ; "uppercase letter")]
    #[test_case('!' ; "bang")]
    #[test_case('$' ; "dollar")]
    #[test_case('%' ; "percent")]
    #[test_case('&' ; "ampersand")]
    #[test_case('*' ; "star")]
    #[test_case('/' ; "slash")]
    #[test_case(':' ; "colon")]
    #[test_case('<' ; "less")]
    #[test_case('=' ; "equals")]
    #[test_case('>' ; "greater")]
    #[test_case('?' ; "question")]
    #[test_case('~' ; "tilde")]
    #[test_case('_' ; "underscore")]
    #[test_case('^' ; "caret")]
    fn test_identifier_initials(c: char) {
        assert!(c.is_identifier_initial());
        assert!(c.is_identifier_subsequent());
    }

    #[test_case('0' ; "zero")]
    #[test_case('9' ; "nine")]
    #[test_case('.' ; "dot")]
    #[test_case('+' ; "plus")]
    #[test_case('-' ; "minus")]
    fn test_subsequent_only(c: char) {
        assert!(!c.is_identifier_initial());
        assert!(c.is_identifier_subsequent());
    }

    #[test_case(' ' ; "space")]
    #[test_case('\n' ; "newline")]
    #[test_case('(' ; "left paren")]
    #[test_case(')' ; "right paren")]
    #[test_case('#' ; "hash")]
    #[test_case('@' ; "at sign")]
    #[test_case('"' ; "double quote")]
    #[test_case('\'' ; "quote")]
    #[test_case('\u{7f}' ; "delete")]
    #[test_case('é' ; "non-ascii letter")]
    #[test_case('λ' ; "lambda")]
    fn test_outside_identifiers(c: char) {
        assert!(!c.is_identifier_initial());
        assert!(!c.is_identifier_subsequent());
    }

    #[test]
    fn test_parens() {
        assert!('('.is_left_paren());
        assert!(!'('.is_right_paren());
        assert!(')'.is_right_paren());
        assert!(!')'.is_left_paren());
        assert!(!'['.is_left_paren());
        assert!(!']'.is_right_paren());
    }

    #[test]
    fn test_subsequent_set_composition() {
        for code in 0u32..256 {
            let c = char::from_u32(code).unwrap();
            let expected = is_identifier_initial(c)
                || c.is_ascii_digit()
                || matches!(c, '.' | '+' | '-');
            assert_eq!(is_identifier_subsequent(c), expected, "{:?}", c);
        }
    }

    #[test]
    fn test_initials_are_letters_or_specials() {
        let specials = "!$%&*/:<=>?~_^";
        for code in 0u32..256 {
            let c = char::from_u32(code).unwrap();
            let expected = c.is_ascii_alphabetic() || specials.contains(c);
            assert_eq!(is_identifier_initial(c), expected, "{:?}", c);
        }
    }
}
