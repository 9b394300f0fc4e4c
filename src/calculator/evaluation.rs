//! Left-to-right reduction of tokenized expressions.
//!
//! `+` and `-` push a signed value onto an accumulator. `*` and `/` fold
//! into the most recently pushed value only. The result is the sum of the
//! accumulator. This is not operator precedence: `2*3*4+1` folds the
//! multiplications onto one value, and `2*3+4*5` is `(2*3) + (4*5)`.

use tracing::{debug, trace};

use super::error::CalcError;
use super::token::{Operator, Token, tokenize};
use crate::display::{Messages, format_number};

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug, PartialEq)]
pub struct CalcResult {
    expression: String,
    outcome: Result<f64, CalcError>,
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn value(&self) -> Option<f64> {
        self.outcome.as_ref().ok().copied()
    }

    pub fn error(&self) -> Option<&CalcError> {
        self.outcome.as_ref().err()
    }

    /// Get the display string (result or error message).
    pub fn display(&self, messages: &Messages) -> String {
        messages.render(&self.outcome)
    }

    /// Get the clipboard string (only for successful results).
    pub fn clipboard(&self) -> Option<String> {
        self.value().map(format_number)
    }
}

/// Evaluate an expression, keeping it alongside the outcome.
pub fn evaluate_expression(input: &str) -> CalcResult {
    CalcResult {
        expression: input.to_string(),
        outcome: evaluate(input),
    }
}

/// Evaluate an expression to a number.
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(input);
    debug!(tokens = tokens.len(), "evaluating expression");

    let outcome = reduce(&tokens);
    match &outcome {
        Ok(value) => debug!(value, "evaluation succeeded"),
        Err(err) => debug!(%err, "evaluation failed"),
    }
    outcome
}

/// Evaluate an expression with the keypad's string contract.
///
/// Returns the formatted number, `""` for input without tokens, or one of
/// the Turkish error strings `"Hata"` and `"0'a bölünemez"`.
pub fn evaluate_to_string(input: &str) -> String {
    Messages::turkish().render(&evaluate(input))
}

/// Reduce a token stream to its value.
pub fn reduce(tokens: &[Token]) -> Result<f64, CalcError> {
    if tokens.is_empty() {
        return Err(CalcError::EmptyInput);
    }

    let mut accumulator: Vec<f64> = Vec::with_capacity(tokens.len());
    let mut current = Operator::Add;

    for token in tokens {
        match token {
            Token::Operator(op) => current = *op,
            Token::Number(lexeme) => {
                let number: f64 = lexeme
                    .parse()
                    .map_err(|_| CalcError::ParseFailure(lexeme.clone()))?;
                apply(&mut accumulator, current, number)?;
                trace!(op = %current, number, ?accumulator, "applied");
            }
        }
    }

    // Start from +0.0 so an empty accumulator sums to 0.0, not -0.0
    Ok(accumulator.iter().fold(0.0, |sum, value| sum + value))
}

fn apply(accumulator: &mut Vec<f64>, op: Operator, number: f64) -> Result<(), CalcError> {
    let value = match op {
        Operator::Add => number,
        Operator::Subtract => -number,
        Operator::Multiply => {
            let last = accumulator.pop().ok_or(CalcError::StackUnderflow(op))?;
            last * number
        }
        Operator::Divide => {
            let last = accumulator.pop().ok_or(CalcError::StackUnderflow(op))?;
            if number == 0.0 {
                return Err(CalcError::DivideByZero);
            }
            last / number
        }
    };
    accumulator.push(value);
    Ok(())
}
