//! Custom-error combinator

use crate::error::{Error, Result, ValidationError};
use crate::foundation::{ChainState, Validate};
use crate::value::Value;

// ============================================================================
// CUSTOM ERROR COMBINATOR
// ============================================================================

/// Replaces the validation failure of a validator with a fixed error.
///
/// The wrapped validator still runs normally: whatever it records in the
/// [`ChainState`] stays recorded, so a wrapped `required` still disables the
/// zero skip for the rest of the chain. Only the reported error changes.
/// Usage errors are passed through, since they describe the call site and
/// not the value.
///
/// # Examples
///
/// ```
/// use tavern_validator::prelude::*;
///
/// let taken = ValidationError::custom("that name is taken");
/// let validator = CustomError::new(not_one_of(["admin", "root"]), taken.clone());
///
/// let err = validate(&rule!("admin"; validator)).unwrap_err();
/// assert_eq!(err, Error::Validation(taken));
/// ```
#[derive(Debug, Clone)]
pub struct CustomError<V> {
    inner: V,
    error: ValidationError,
}

impl<V> CustomError<V> {
    /// Wraps `inner`, reporting `error` whenever it fails.
    pub fn new(inner: V, error: ValidationError) -> Self {
        Self { inner, error }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the replacement error.
    pub fn error(&self) -> &ValidationError {
        &self.error
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for CustomError<V>
where
    V: Validate,
{
    fn validate(&self, state: &mut ChainState, value: &Value) -> Result<()> {
        match self.inner.validate(state, value) {
            Err(Error::Validation(_)) => Err(Error::Validation(self.error.clone())),
            other => other,
        }
    }
}

/// Creates a [`CustomError`] combinator.
pub fn with_custom_error<V>(validator: V, error: ValidationError) -> CustomError<V> {
    CustomError::new(validator, error)
}

// ============================================================================
// TESTS
// ============================================================================
