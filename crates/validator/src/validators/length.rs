//! Length validators
//!
//! Length is the *size* of a value: characters of a string (or bytes, per
//! the chain's [`LengthMode`](crate::quantity::LengthMode)), elements of a
//! collection, or the number of characters in a number's decimal form.
//! All bounds are inclusive. Failures are [`ERR_LENGTH`].
//!
//! [`Length`] and [`FixedLength`] are compositions of [`MinLength`] and
//! [`MaxLength`], so they behave exactly like the two run back to back.

use crate::combinators::And;
use crate::error::{ERR_LENGTH, Error, Result, UsageError};
use crate::foundation::{ChainState, Validate, ValidateExt};
use crate::value::Value;

/// Measures `value`, or reports it as a usage error for `validator`.
pub(crate) fn size_of(
    validator: &'static str,
    state: &ChainState,
    value: &Value,
) -> Result<usize, UsageError> {
    value
        .size(state.length_mode())
        .ok_or_else(|| UsageError::wrong_type(validator, value.kind()))
}

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Validates that a value's size is at least `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinLength {
    /// Smallest accepted size.
    pub min: usize,
}

impl Validate for MinLength {
    fn validate(&self, state: &mut ChainState, value: &Value) -> Result<()> {
        if state.skip_zero(value) {
            return Ok(());
        }
        if size_of("min_length", state, value)? < self.min {
            return Err(Error::Validation(ERR_LENGTH));
        }
        Ok(())
    }
}

/// Creates a [`MinLength`] validator.
#[must_use]
pub const fn min_length(min: usize) -> MinLength {
    MinLength { min }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

/// Validates that a value's size is at most `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxLength {
    /// Largest accepted size.
    pub max: usize,
}

impl Validate for MaxLength {
    fn validate(&self, state: &mut ChainState, value: &Value) -> Result<()> {
        if state.skip_zero(value) {
            return Ok(());
        }
        if size_of("max_length", state, value)? > self.max {
            return Err(Error::Validation(ERR_LENGTH));
        }
        Ok(())
    }
}

/// Creates a [`MaxLength`] validator.
#[must_use]
pub const fn max_length(max: usize) -> MaxLength {
    MaxLength { max }
}

// ============================================================================
// LENGTH / FIXED LENGTH
// ============================================================================

/// Validates that a value's size is within `[min, max]`.
pub type Length = And<MinLength, MaxLength>;

/// Validates that a value's size is exactly `n`.
pub type FixedLength = And<MinLength, MaxLength>;

/// Creates a [`Length`] validator.
///
/// # Examples
///
/// ```
/// use tavern_validator::prelude::*;
///
/// assert!(validate(&rule!("A"; length(1, 10))).is_ok());
/// assert!(validate(&rule!(""; length(1, 10))).is_ok()); // optional
/// assert!(validate(&rule!(1000; length(1, 3))).is_err()); // four digits
/// ```
#[must_use]
pub fn length(min: usize, max: usize) -> Length {
    min_length(min).and(max_length(max))
}

/// Creates a [`FixedLength`] validator.
#[must_use]
pub fn fixed_length(n: usize) -> FixedLength {
    min_length(n).and(max_length(n))
}

// ============================================================================
// TESTS
// ============================================================================
