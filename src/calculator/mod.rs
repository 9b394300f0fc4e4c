//! Calculator module for evaluating keypad expressions.
//!
//! This module provides functionality to:
//! - Split keypad input into number and operator tokens
//! - Reduce tokens left to right into a result
//! - Copy results to the clipboard

mod clipboard;
mod error;
mod evaluation;
mod token;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use error::CalcError;
pub use evaluation::{CalcResult, evaluate, evaluate_expression, evaluate_to_string, reduce};
pub use token::{Operator, Token, tokenize};
