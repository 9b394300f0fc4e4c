//! Keypad calculator with a left-to-right expression evaluator.
//!
//! [`calculator`] turns an input line into a number, [`keypad`] holds the
//! screen state a view drives, and [`display`] maps outcomes to text.

pub mod calculator;
pub mod config;
pub mod display;
pub mod keypad;

pub use calculator::{CalcError, CalcResult, evaluate, evaluate_expression, evaluate_to_string};
pub use config::Config;
pub use display::{Locale, Messages};
pub use keypad::{KEYPAD_LAYOUT, Key, KeypadState};
