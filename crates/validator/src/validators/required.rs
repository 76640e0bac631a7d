//! Required validator
//!
//! [`Required`] is the only built-in validator without the zero-value
//! guard. It rejects zero values and marks the chain as required, so every
//! validator after it inspects zero values instead of skipping them.
//!
//! # Examples
//!
//! ```
//! use tavern_validator::prelude::*;
//!
//! assert!(validate(&rule!(""; required())).unwrap_err().is(&ERR_REQUIRED));
//! assert!(validate(&rule!(0; required())).unwrap_err().is(&ERR_REQUIRED));
//! assert!(validate(&rule!("hi"; required())).is_ok());
//! ```

use crate::error::{ERR_REQUIRED, Result};
use crate::foundation::{ChainState, Validate};
use crate::value::Value;

/// Rejects the zero value of every kind.
///
/// The chain is marked as required before the check, so the mark survives
/// even when the failure is replaced by a custom error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Required;

impl Validate for Required {
    fn validate(&self, state: &mut ChainState, value: &Value) -> Result<()> {
        state.mark_required();
        if value.is_zero() {
            Err(ERR_REQUIRED.into())
        } else {
            Ok(())
        }
    }
}

/// Creates a [`Required`] validator.
#[must_use]
pub const fn required() -> Required {
    Required
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::from(""))]
    #[case(Value::from(0))]
    #[case(Value::from(0u64))]
    #[case(Value::from(0.0))]
    #[case(Value::from(false))]
    #[case(Value::Null)]
    #[case(Value::from(Vec::<i32>::new()))]
    fn test_rejects_zero(#[case] value: Value) {
        let mut state = ChainState::new();
        let err = required().validate(&mut state, &value).unwrap_err();
        assert!(err.is(&ERR_REQUIRED));
        assert!(state.is_required());
    }

    #[rstest]
    #[case(Value::from("a"))]
    #[case(Value::from(-1))]
    #[case(Value::from(0.5))]
    #[case(Value::from(true))]
    #[case(Value::from(vec![0]))]
    fn test_accepts_non_zero(#[case] value: Value) {
        let mut state = ChainState::new();
        assert!(required().validate(&mut state, &value).is_ok());
        assert!(state.is_required());
    }
}
