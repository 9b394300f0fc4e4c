//! Mapping evaluation outcomes to display strings.

use serde::Deserialize;

use crate::calculator::CalcError;

/// Language of the built-in error messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
pub enum Locale {
    #[default]
    #[serde(rename = "tr")]
    #[value(name = "tr")]
    Turkish,
    #[serde(rename = "en")]
    #[value(name = "en")]
    English,
}

/// User-facing error strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Messages {
    /// Shown for every failure except division by zero.
    pub error: String,
    pub divide_by_zero: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self::turkish()
    }
}

impl Messages {
    pub fn turkish() -> Self {
        Self {
            error: "Hata".to_string(),
            divide_by_zero: "0'a bölünemez".to_string(),
        }
    }

    pub fn english() -> Self {
        Self {
            error: "Error".to_string(),
            divide_by_zero: "Cannot divide by zero".to_string(),
        }
    }

    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Turkish => Self::turkish(),
            Locale::English => Self::english(),
        }
    }

    /// Render an outcome the way the keypad display shows it.
    ///
    /// Input without tokens renders as an empty display, not an error.
    pub fn render(&self, outcome: &Result<f64, CalcError>) -> String {
        match outcome {
            Ok(value) => format_number(*value),
            Err(CalcError::EmptyInput) => String::new(),
            Err(CalcError::DivideByZero) => self.divide_by_zero.clone(),
            Err(CalcError::ParseFailure(_) | CalcError::StackUnderflow(_)) => self.error.clone(),
        }
    }
}

/// Format a result for display.
///
/// Follows the JVM `Double.toString` layout: the shortest digits that
/// round-trip, plain decimal for magnitudes in `[1e-3, 1e7)` and
/// `<mantissa>E<exponent>` outside it. The mantissa always carries a
/// decimal point (`5.0`, `1.0E16`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => scientific,
    }
}
