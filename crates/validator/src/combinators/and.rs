//! AND combinator - sequential composition of validators
//!
//! This module provides the [`And`] combinator: both validators run on the
//! same value with the same [`ChainState`], left first. The built-in
//! `length`, `fixed_length` and `range` validators are `And`s of their
//! single-bound halves.
//!
//! # Examples
//!
//! ```
//! use tavern_validator::prelude::*;
//!
//! let validator = And::new(min_length(5), max_length(20));
//! assert!(validate(&rule!("hello"; validator)).is_ok());
//! ```

use crate::error::Result;
use crate::foundation::{ChainState, Validate};
use crate::value::Value;

/// Combines two validators with logical AND.
///
/// Both validators must pass for the combined validator to succeed.
/// The error of the first failing validator is returned. State changes made
/// by `left` are visible to `right`.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate,
{
    fn validate(&self, state: &mut ChainState, value: &Value) -> Result<()> {
        self.left.validate(state, value)?;
        self.right.validate(state, value)
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate,
{
    And::new(left, right)
}

/// Creates an `AndAll` combinator from a vector of validators.
///
/// Useful when the number of validators is only known at runtime.
///
/// # Examples
///
/// ```
/// use tavern_validator::prelude::*;
///
/// let validator = and_all(vec![min_length(3), min_length(5), min_length(7)]);
/// assert!(validate(&rule!("helloworld"; validator)).is_ok());
/// ```
#[must_use]
pub fn and_all<V>(validators: Vec<V>) -> AndAll<V>
where
    V: Validate,
{
    AndAll { validators }
}

/// Combines any number of validators with logical AND.
///
/// Validation stops at the first failure.
#[derive(Debug, Clone)]
pub struct AndAll<V> {
    validators: Vec<V>,
}

impl<V> Validate for AndAll<V>
where
    V: Validate,
{
    fn validate(&self, state: &mut ChainState, value: &Value) -> Result<()> {
        for validator in &self.validators {
            validator.validate(state, value)?;
        }
        Ok(())
    }
}
