use std::sync::Arc;

use tracing::debug;

use super::Key;
use crate::calculator::{CalcError, evaluate};
use crate::display::Messages;

/// Holds the input line of the calculator screen.
///
/// Every mutation notifies the subscriber registered with
/// [`KeypadState::set_on_change`].
pub struct KeypadState {
    input: String,
    messages: Messages,
    /// Value of the last successful evaluation.
    last_result: Option<f64>,
    on_change: Option<Arc<dyn Fn(&str) + Send + Sync>>,
}

impl Default for KeypadState {
    fn default() -> Self {
        Self::new(Messages::default())
    }
}

impl KeypadState {
    pub fn new(messages: Messages) -> Self {
        Self {
            input: String::new(),
            messages,
            last_result: None,
            on_change: None,
        }
    }

    /// The current display string.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    /// Set the callback invoked with the new input after each change.
    pub fn set_on_change(&mut self, callback: impl Fn(&str) + Send + Sync + 'static) {
        self.on_change = Some(Arc::new(callback));
    }

    pub fn append(&mut self, text: &str) {
        self.input.push_str(text);
        self.notify();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.notify();
    }

    /// Remove the last character. Does nothing on empty input.
    pub fn delete_last(&mut self) {
        if self.input.pop().is_some() {
            self.notify();
        }
    }

    /// Evaluate the input and replace it with the rendered outcome.
    pub fn evaluate(&mut self) -> Result<f64, CalcError> {
        let outcome = evaluate(&self.input);
        debug!(input = %self.input, ?outcome, "keypad evaluate");

        if let Ok(value) = &outcome {
            self.last_result = Some(*value);
        }
        self.input = self.messages.render(&outcome);
        self.notify();

        outcome
    }

    /// Dispatch a key press. Returns the outcome when the key is `=`.
    pub fn press(&mut self, key: Key) -> Option<Result<f64, CalcError>> {
        match key {
            Key::Equals => return Some(self.evaluate()),
            Key::Clear => self.clear(),
            Key::Delete => self.delete_last(),
            Key::Digit(_) | Key::Point | Key::Operator(_) => self.append(&key.label()),
        }
        None
    }

    fn notify(&self) {
        if let Some(callback) = &self.on_change {
            callback(&self.input);
        }
    }
}
