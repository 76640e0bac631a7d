//! Hybrid bound validators
//!
//! [`Minimum`] and [`Maximum`] pick what to compare from the value they are
//! given: the size of strings and collections (failing with
//! [`ERR_LENGTH`]), or the magnitude of numbers (failing with
//! [`ERR_RANGE`]). The choice is made per value, so the same validator can
//! guard a free-text field and a numeric one.
//!
//! # Examples
//!
//! ```
//! use tavern_validator::prelude::*;
//!
//! let at_most_ten = maximum(10);
//! assert!(validate(&rule!("0123456789"; at_most_ten)).is_ok());
//! assert!(validate(&rule!(11; at_most_ten)).unwrap_err().is(&ERR_RANGE));
//! assert!(validate(&rule!("0123456789A"; at_most_ten)).unwrap_err().is(&ERR_LENGTH));
//! ```

use crate::error::{ERR_LENGTH, ERR_RANGE, Error, Result, UsageError};
use crate::foundation::{ChainState, Validate};
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Lower,
    Upper,
}

fn check(
    validator: &'static str,
    bound: Bound,
    limit: i64,
    state: &ChainState,
    value: &Value,
) -> Result<()> {
    if state.skip_zero(value) {
        return Ok(());
    }

    if value.kind().is_countable() {
        let size = value
            .size(state.length_mode())
            .ok_or_else(|| UsageError::wrong_type(validator, value.kind()))?;
        let size = i128::try_from(size).unwrap_or(i128::MAX);
        let ok = match bound {
            Bound::Lower => size >= i128::from(limit),
            Bound::Upper => size <= i128::from(limit),
        };
        return if ok {
            Ok(())
        } else {
            Err(Error::Validation(ERR_LENGTH))
        };
    }

    let magnitude = value
        .magnitude()
        .ok_or_else(|| UsageError::wrong_type(validator, value.kind()))?;
    let ok = match bound {
        Bound::Lower => magnitude.at_least(limit),
        Bound::Upper => magnitude.at_most(limit),
    };
    if ok {
        Ok(())
    } else {
        Err(Error::Validation(ERR_RANGE))
    }
}

// ============================================================================
// MINIMUM
// ============================================================================

/// Validates that a value's size (strings, collections) or magnitude
/// (numbers) is at least `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Minimum {
    /// Smallest accepted size or value.
    pub min: i64,
}

impl Validate for Minimum {
    fn validate(&self, state: &mut ChainState, value: &Value) -> Result<()> {
        check("minimum", Bound::Lower, self.min, state, value)
    }
}

/// Creates a [`Minimum`] validator.
#[must_use]
pub const fn minimum(min: i64) -> Minimum {
    Minimum { min }
}

// ============================================================================
// MAXIMUM
// ============================================================================

/// Validates that a value's size (strings, collections) or magnitude
/// (numbers) is at most `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Maximum {
    /// Largest accepted size or value.
    pub max: i64,
}

impl Validate for Maximum {
    fn validate(&self, state: &mut ChainState, value: &Value) -> Result<()> {
        check("maximum", Bound::Upper, self.max, state, value)
    }
}

/// Creates a [`Maximum`] validator.
#[must_use]
pub const fn maximum(max: i64) -> Maximum {
    Maximum { max }
}

// ============================================================================
// TESTS
// ============================================================================
