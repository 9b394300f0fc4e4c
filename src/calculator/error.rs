//! Failure modes of a single evaluation.

use super::token::Operator;

/// Why an expression did not produce a number.
///
/// Callers branch on the variant; mapping to user-facing text is done by
/// [`crate::display::Messages`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// The input contained no recognizable tokens.
    #[error("expression contains no tokens")]
    EmptyInput,

    /// A number token could not be parsed as a floating-point value.
    #[error("invalid number: {0:?}")]
    ParseFailure(String),

    /// `*` or `/` was applied with no previous value to fold into.
    #[error("no value before '{0}'")]
    StackUnderflow(Operator),

    /// The divisor of a `/` was zero.
    #[error("division by zero")]
    DivideByZero,
}

impl CalcError {
    /// Stable machine-readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::ParseFailure(_) => "parse_failure",
            Self::StackUnderflow(_) => "stack_underflow",
            Self::DivideByZero => "divide_by_zero",
        }
    }
}
