//! Core traits for the validation system
//!
//! Every validator, built-in or external, implements [`Validate`]. A
//! validator sees the value under validation together with the
//! [`ChainState`] of the rule it runs in, and may update that state for the
//! validators after it.

use std::fmt;

use crate::error::{Result, ValidationError};
use crate::foundation::ChainState;
use crate::value::Value;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// Validators hold only their configuration (bounds, patterns, expected
/// values). Anything that must flow between validators of the same rule
/// goes through the `state` argument, which the driver creates fresh for
/// every rule.
///
/// # Examples
///
/// ```
/// use tavern_validator::prelude::*;
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     fn validate(&self, state: &mut ChainState, value: &Value) -> Result<()> {
///         if state.skip_zero(value) {
///             return Ok(());
///         }
///         let text = value
///             .as_str()
///             .ok_or_else(|| UsageError::wrong_type("no_spaces", value.kind()))?;
///         if text.contains(' ') {
///             return Err(ValidationError::custom("must not contain spaces").into());
///         }
///         Ok(())
///     }
/// }
///
/// assert!(validate(&rule!("hello"; NoSpaces)).is_ok());
/// assert!(validate(&rule!("hello world"; NoSpaces)).is_err());
/// ```
pub trait Validate: Send + Sync {
    /// Validates `value`, reading and updating the rule's shared state.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the value passes
    /// * `Err(Error::Validation)` if the value breaks the rule
    /// * `Err(Error::Usage)` if the validator cannot inspect this kind of value
    fn validate(&self, state: &mut ChainState, value: &Value) -> Result<()>;
}

impl<V: Validate + ?Sized> Validate for &V {
    #[inline]
    fn validate(&self, state: &mut ChainState, value: &Value) -> Result<()> {
        (**self).validate(state, value)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    #[inline]
    fn validate(&self, state: &mut ChainState, value: &Value) -> Result<()> {
        (**self).validate(state, value)
    }
}

impl<V: Validate + ?Sized> Validate for std::sync::Arc<V> {
    #[inline]
    fn validate(&self, state: &mut ChainState, value: &Value) -> Result<()> {
        (**self).validate(state, value)
    }
}

/// A type-erased validator, as stored in a [`Rule`](crate::rule::Rule).
pub type BoxValidator = Box<dyn Validate>;

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Implemented automatically for every [`Validate`] type.
///
/// # Examples
///
/// ```
/// use tavern_validator::prelude::*;
///
/// let username = min_length(3).and(max_length(20)).and(alphanumeric());
/// assert!(validate(&rule!("alice42"; username)).is_ok());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Runs `self` then `other` on the same value and state.
    ///
    /// Stops at the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate,
    {
        And::new(self, other)
    }

    /// Replaces any validation failure of `self` with `error`.
    ///
    /// State updates made by `self` are kept. Usage errors pass through.
    ///
    /// # Examples
    ///
    /// ```
    /// use tavern_validator::prelude::*;
    ///
    /// let nickname = min_length(2).with_error(ValidationError::custom("nickname too short"));
    /// let err = validate(&rule!("a"; nickname)).unwrap_err();
    /// assert_eq!(err.to_string(), "nickname too short");
    /// ```
    fn with_error(self, error: ValidationError) -> CustomError<Self> {
        CustomError::new(self, error)
    }

    /// Erases the concrete type so validators of different types can share
    /// one collection.
    fn boxed(self) -> BoxValidator
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// CLOSURE VALIDATORS
// ============================================================================

/// A validator backed by a closure.
///
/// Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnValidator<F> {
    check: F,
}

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}

impl<F> Validate for FnValidator<F>
where
    F: Fn(&mut ChainState, &Value) -> Result<()> + Send + Sync,
{
    #[inline]
    fn validate(&self, state: &mut ChainState, value: &Value) -> Result<()> {
        (self.check)(state, value)
    }
}

/// Turns a closure into a validator.
///
/// The closure is responsible for the zero-value guard, usually by starting
/// with [`ChainState::skip_zero`].
///
/// # Examples
///
/// ```
/// use tavern_validator::prelude::*;
///
/// let even = from_fn(|state: &mut ChainState, value: &Value| {
///     if state.skip_zero(value) {
///         return Ok(());
///     }
///     match value {
///         Value::Int(i) if i % 2 == 0 => Ok(()),
///         Value::Int(_) => Err(ValidationError::custom("must be even").into()),
///         other => Err(UsageError::wrong_type("even", other.kind()).into()),
///     }
/// });
///
/// assert!(validate(&rule!(4; even.clone())).is_ok());
/// assert!(validate(&rule!(3; even)).is_err());
/// ```
pub fn from_fn<F>(check: F) -> FnValidator<F>
where
    F: Fn(&mut ChainState, &Value) -> Result<()> + Send + Sync,
{
    FnValidator { check }
}

// ============================================================================
// INSPECTION
// ============================================================================

/// Borrows the part of a [`Value`] a leaf validator works on.
///
/// Leaf validators generated by [`validator!`](crate::validator) declare an
/// input type such as `str`; values of any other kind are reported as
/// [`UsageError::WrongType`](crate::error::UsageError::WrongType).
pub trait Inspect {
    /// Returns the borrowed input, or `None` if `value` has the wrong kind.
    fn inspect(value: &Value) -> Option<&Self>;
}

impl Inspect for str {
    #[inline]
    fn inspect(value: &Value) -> Option<&Self> {
        value.as_str()
    }
}

/// Strings are viewed as their UTF-8 bytes.
impl Inspect for [u8] {
    #[inline]
    fn inspect(value: &Value) -> Option<&Self> {
        match value {
            Value::String(s) => Some(s.as_bytes()),
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl Inspect for Value {
    #[inline]
    fn inspect(value: &Value) -> Option<&Self> {
        Some(value)
    }
}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================

pub use crate::combinators::and::And;
pub use crate::combinators::custom_error::CustomError;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ERR_FORMAT, Error};

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        fn validate(&self, _state: &mut ChainState, _value: &Value) -> Result<()> {
            Ok(())
        }
    }

    struct MarksRequired;

    impl Validate for MarksRequired {
        fn validate(&self, state: &mut ChainState, _value: &Value) -> Result<()> {
            state.mark_required();
            Ok(())
        }
    }

    #[test]
    fn test_validator_trait() {
        let mut state = ChainState::new();
        assert!(AlwaysValid.validate(&mut state, &Value::from("x")).is_ok());
    }

    #[test]
    fn test_forwarding_impls() {
        let boxed: BoxValidator = MarksRequired.boxed();
        let mut state = ChainState::new();
        boxed.validate(&mut state, &Value::Null).unwrap();
        assert!(state.is_required());

        let by_ref = &AlwaysValid;
        assert!(by_ref.validate(&mut ChainState::new(), &Value::Null).is_ok());
    }

    #[test]
    fn test_from_fn() {
        let reject = from_fn(|_: &mut ChainState, _: &Value| Err(Error::from(ERR_FORMAT)));
        let err = reject
            .validate(&mut ChainState::new(), &Value::from(1))
            .unwrap_err();
        assert!(err.is(&ERR_FORMAT));
    }

    #[test]
    fn test_inspect() {
        assert_eq!(str::inspect(&Value::from("a")), Some("a"));
        assert_eq!(str::inspect(&Value::from(1)), None);
        assert_eq!(<[u8]>::inspect(&Value::from("ab")), Some(&b"ab"[..]));
        assert_eq!(<[u8]>::inspect(&Value::bytes(*b"{}")), Some(&b"{}"[..]));
        assert!(Value::inspect(&Value::Null).is_some());
    }
}
