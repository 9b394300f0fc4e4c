//! Tokenization of keypad input.
//!
//! Scans left to right. At each position a decimal number is tried first,
//! then a single operator character. Anything else is skipped.

use std::fmt;

/// One of the four keypad operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Parse an operator from its keypad symbol.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// The keypad symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A lexical unit of an expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// Raw numeric lexeme, sign included. Parsed during reduction.
    Number(String),
    Operator(Operator),
}

/// Split `input` into tokens.
///
/// A sign binds to the digits after it only at the start of the input or
/// right after an operator. After a number it is an operator, so `2*3+4`
/// yields `2`, `*`, `3`, `+`, `4` while `2*-3` yields `2`, `*`, `-3`.
pub fn tokenize(input: &str) -> Vec<Token> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;
    let mut after_number = false;

    while pos < bytes.len() {
        if let Some(end) = scan_number(bytes, pos, !after_number) {
            // Number boundaries are always ASCII, so slicing is safe
            tokens.push(Token::Number(input[pos..end].to_string()));
            after_number = true;
            pos = end;
            continue;
        }

        if let Some(op) = Operator::from_char(bytes[pos] as char) {
            tokens.push(Token::Operator(op));
            after_number = false;
        }
        pos += 1;
    }

    tokens
}

/// Try to read `[+-]? digits* ('.' digits+)?` starting at `start`.
///
/// The sign is only accepted when `signed` is set. Returns the end offset,
/// or `None` if no digit was found. A trailing `.` without digits after it
/// is left unconsumed.
fn scan_number(bytes: &[u8], start: usize, signed: bool) -> Option<usize> {
    let mut pos = start;

    if matches!(bytes[pos], b'+' | b'-') {
        if !signed {
            return None;
        }
        pos += 1;
    }

    let int_start = pos;
    pos = skip_digits(bytes, pos);
    let has_int_digits = pos > int_start;

    if bytes.get(pos) == Some(&b'.') && bytes.get(pos + 1).is_some_and(u8::is_ascii_digit) {
        return Some(skip_digits(bytes, pos + 1));
    }

    has_int_digits.then_some(pos)
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Token {
        Token::Number(s.to_string())
    }

    fn op(c: char) -> Token {
        Token::Operator(Operator::from_char(c).unwrap())
    }

    #[test]
    fn test_sign_after_number_is_operator() {
        assert_eq!(tokenize("2+3"), vec![num("2"), op('+'), num("3")]);
        assert_eq!(tokenize("5-3"), vec![num("5"), op('-'), num("3")]);
        assert_eq!(
            tokenize("2*3+4"),
            vec![num("2"), op('*'), num("3"), op('+'), num("4")]
        );
        assert_eq!(
            tokenize("6/3-1"),
            vec![num("6"), op('/'), num("3"), op('-'), num("1")]
        );
        assert_eq!(tokenize("2 -3"), vec![num("2"), op('-'), num("3")]);
    }

    #[test]
    fn test_sign_after_operator_binds_to_number() {
        assert_eq!(tokenize("2*-3"), vec![num("2"), op('*'), num("-3")]);
        assert_eq!(tokenize("5--3"), vec![num("5"), op('-'), num("-3")]);
        assert_eq!(tokenize("-5+2"), vec![num("-5"), op('+'), num("2")]);
        assert_eq!(tokenize("Hata-5"), vec![num("-5")]);
    }

    #[test]
    fn test_repeated_operators() {
        assert_eq!(tokenize("2++3"), vec![num("2"), op('+'), num("+3")]);
        assert_eq!(tokenize("+*"), vec![op('+'), op('*')]);
    }

    #[test]
    fn test_decimals() {
        assert_eq!(tokenize("1.25"), vec![num("1.25")]);
        assert_eq!(tokenize(".5"), vec![num(".5")]);
        assert_eq!(tokenize("-.5"), vec![num("-.5")]);
        assert_eq!(tokenize("12."), vec![num("12")]);
        assert_eq!(tokenize("1.2.3"), vec![num("1.2"), num(".3")]);
    }

    #[test]
    fn test_unrecognized_characters_dropped() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("abc").is_empty());
        assert!(tokenize(".").is_empty());
        assert_eq!(tokenize("Hata5"), vec![num("5")]);
        assert_eq!(tokenize("0'a bölünemez"), vec![num("0")]);
        assert_eq!(tokenize("2 x 3"), vec![num("2"), num("3")]);
    }

    #[test]
    fn test_operator_symbols() {
        for c in ['+', '-', '*', '/'] {
            assert_eq!(Operator::from_char(c).unwrap().symbol(), c);
        }
        assert_eq!(Operator::from_char('^'), None);
        assert_eq!(Operator::Divide.to_string(), "/");
    }
}
