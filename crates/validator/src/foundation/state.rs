//! Per-rule shared state

use crate::quantity::LengthMode;
use crate::value::Value;

/// State threaded through the validators of a single rule.
///
/// Created fresh for every rule and dropped when the rule finishes, so
/// nothing leaks between rules. It only flows forward: a validator sees what
/// the validators before it recorded, never what comes after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChainState {
    required: bool,
    length_mode: LengthMode,
}

impl ChainState {
    /// Creates an empty state with the default length mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty state that counts string size with `mode`.
    pub fn with_length_mode(mode: LengthMode) -> Self {
        Self {
            required: false,
            length_mode: mode,
        }
    }

    /// Records that a required check ran earlier in the chain.
    #[inline]
    pub fn mark_required(&mut self) {
        self.required = true;
    }

    /// Returns true once a required check has run in this chain.
    #[inline]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// How string size is counted in this chain.
    #[inline]
    pub fn length_mode(&self) -> LengthMode {
        self.length_mode
    }

    /// The zero-value guard.
    ///
    /// Returns true when the validator should pass without inspecting the
    /// value: no required check has run yet and the value is the zero value
    /// of its kind. Every built-in validator except `required` starts with it.
    #[inline]
    pub fn skip_zero(&self, value: &Value) -> bool {
        !self.required && value.is_zero()
    }
}
