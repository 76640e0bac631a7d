//! # tavern-validator
//!
//! A composable value-validation engine.
//!
//! A [`Rule`](rule::Rule) pairs a [`Value`](value::Value) with an ordered
//! chain of validators. The driver runs the chain and reports the first
//! failure, or evaluates a batch of rules and reports every failing one.
//!
//! ## Quick Start
//!
//! ```
//! use tavern_validator::prelude::*;
//!
//! let rules = [
//!     rule!("username" => "alice"; required(), length(3, 20), alphanumeric()),
//!     rule!("email" => "alice@example.com"; required(), email()),
//!     rule!("age" => 17; range(18, 130)),
//!     rule!("nickname" => ""; length(3, 20)),
//! ];
//!
//! let errors = validate_all_collect(&rules);
//! assert_eq!(errors.len(), 1);
//! assert!(errors.errors()[0].is(&ERR_RANGE));
//! ```
//!
//! ## Zero values and `required`
//!
//! Every validator passes the zero value of a kind (`""`, `0`, `[]`) so
//! optional fields need no special casing. Placing [`required`](validators::required)
//! first in a chain rejects zero values and turns that skip off for the rest
//! of the chain.
//!
//! ## Size and magnitude
//!
//! Length checks measure size: characters of a string, elements of a
//! collection, digits of a number. Range checks measure magnitude and only
//! apply to numbers. `1000` passes `length(1, 4)` and fails `range(0, 999)`.
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for leaf validators, [`from_fn`](foundation::from_fn)
//! for one-off closures, or implement [`Validate`](foundation::Validate)
//! manually for complex cases.
//!
//! ## Errors
//!
//! Validation failures are [`ValidationError`](error::ValidationError)
//! values, compared against the `ERR_*` constants with
//! [`Error::is`](error::Error::is). Applying a validator to a kind it cannot
//! inspect is a [`UsageError`](error::UsageError), kept apart from
//! validation failures.
//!
//! ## Features
//!
//! - `network` (default): address resolvers such as
//!   `tcp_address` and `ip_address`
//! - `temporal` (default): `datetime(layout)`, backed by `chrono`

// Error carries the failing ValidationError inline; boxing it would add an
// allocation to every failed check.
#![allow(clippy::result_large_err)]
// Nested combinator types (And<And<..>, ..>) are part of the API.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod config;
pub mod engine;
pub mod error;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod quantity;
pub mod rule;
pub mod validators;
pub mod value;
