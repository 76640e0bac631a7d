//! Range validators
//!
//! Range is the *magnitude* of a numeric value. Bounds are `i64` and
//! inclusive; integers are compared exactly, floats as `f64`, and NaN is
//! outside every range. Failures are [`ERR_RANGE`]; non-numeric values are
//! a usage error.

use crate::combinators::And;
use crate::error::{ERR_RANGE, Error, Result, UsageError};
use crate::foundation::{ChainState, Validate, ValidateExt};
use crate::quantity::Magnitude;
use crate::value::Value;

fn magnitude_of(validator: &'static str, value: &Value) -> Result<Magnitude, UsageError> {
    value
        .magnitude()
        .ok_or_else(|| UsageError::wrong_type(validator, value.kind()))
}

// ============================================================================
// MIN RANGE
// ============================================================================

/// Validates that a number is at least `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinRange {
    /// Smallest accepted value.
    pub min: i64,
}

impl Validate for MinRange {
    fn validate(&self, state: &mut ChainState, value: &Value) -> Result<()> {
        if state.skip_zero(value) {
            return Ok(());
        }
        if magnitude_of("min_range", value)?.at_least(self.min) {
            Ok(())
        } else {
            Err(Error::Validation(ERR_RANGE))
        }
    }
}

/// Creates a [`MinRange`] validator.
#[must_use]
pub const fn min_range(min: i64) -> MinRange {
    MinRange { min }
}

// ============================================================================
// MAX RANGE
// ============================================================================

/// Validates that a number is at most `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxRange {
    /// Largest accepted value.
    pub max: i64,
}

impl Validate for MaxRange {
    fn validate(&self, state: &mut ChainState, value: &Value) -> Result<()> {
        if state.skip_zero(value) {
            return Ok(());
        }
        if magnitude_of("max_range", value)?.at_most(self.max) {
            Ok(())
        } else {
            Err(Error::Validation(ERR_RANGE))
        }
    }
}

/// Creates a [`MaxRange`] validator.
#[must_use]
pub const fn max_range(max: i64) -> MaxRange {
    MaxRange { max }
}

// ============================================================================
// RANGE
// ============================================================================

/// Validates that a number is within `[min, max]`.
pub type Range = And<MinRange, MaxRange>;

/// Creates a [`Range`] validator.
///
/// # Examples
///
/// ```
/// use tavern_validator::prelude::*;
///
/// assert!(validate(&rule!(3; range(0, 5))).is_ok());
/// assert!(validate(&rule!(-1; range(0, 5))).unwrap_err().is(&ERR_RANGE));
/// assert!(validate(&rule!(1000; range(1, 1000))).is_ok());
/// ```
#[must_use]
pub fn range(min: i64, max: i64) -> Range {
    min_range(min).and(max_range(max))
}

// ============================================================================
// TESTS
// ============================================================================
