//! Keypad model for the single-screen calculator.
//!
//! Keys are data; [`KeypadState`] owns the input line and reacts to them.
//! A view renders [`KEYPAD_LAYOUT`] and forwards presses.

mod state;

pub use state::KeypadState;

use crate::calculator::Operator;

/// Key labels, row by row, as shown on screen.
pub const KEYPAD_LAYOUT: &[&[&str]] = &[
    &["7", "8", "9", "/"],
    &["4", "5", "6", "*"],
    &["1", "2", "3", "-"],
    &[".", "0", "=", "+"],
    &["C", "DEL"],
];

/// A key on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// `0` through `9`.
    Digit(u8),
    /// The decimal point.
    Point,
    Operator(Operator),
    /// Evaluate the input line.
    Equals,
    /// Clear the input line.
    Clear,
    /// Remove the last character.
    Delete,
}

impl Key {
    /// Parse a key from its label. `C` and `DEL` are case-insensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(digit) = c.to_digit(10) {
                return Some(Self::Digit(digit as u8));
            }
            if let Some(op) = Operator::from_char(c) {
                return Some(Self::Operator(op));
            }
            match c {
                '.' => return Some(Self::Point),
                '=' => return Some(Self::Equals),
                _ => {}
            }
        }

        if label.eq_ignore_ascii_case("c") {
            Some(Self::Clear)
        } else if label.eq_ignore_ascii_case("del") {
            Some(Self::Delete)
        } else {
            None
        }
    }

    /// The label printed on the key.
    pub fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Point => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Delete => "DEL".to_string(),
        }
    }
}
