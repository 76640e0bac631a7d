//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation
//! system:
//!
//! - **State**: [`ChainState`], threaded through one rule's validators
//! - **Traits**: [`Validate`], [`ValidateExt`], [`Inspect`]
//! - **Closures**: [`from_fn`]
//!
//! # Architecture
//!
//! ## 1. One value type
//!
//! Validators never see arbitrary Rust types. Every rule carries a
//! [`Value`](crate::value::Value) and each validator decides, per call,
//! whether it can inspect the value's kind. A `length` check works on
//! strings, numbers and collections alike.
//!
//! ## 2. Forward-only state
//!
//! `required` changes how every later validator in the same rule treats
//! zero values. That is recorded in the [`ChainState`] and nowhere else:
//!
//! ```
//! use tavern_validator::prelude::*;
//!
//! // Optional: an empty string skips the length check.
//! assert!(validate(&rule!(""; length(5, 5))).is_ok());
//!
//! // Required: the check runs, and `required` itself fails first.
//! let err = validate(&rule!(""; required(), length(5, 5))).unwrap_err();
//! assert!(err.is(&ERR_REQUIRED));
//! ```
//!
//! ## 3. Composition
//!
//! ```
//! use tavern_validator::prelude::*;
//!
//! let validator = min_length(5).and(max_length(20)).and(alphanumeric());
//! assert!(validate(&rule!("hello"; validator)).is_ok());
//! ```

pub mod state;
pub mod traits;

pub use state::ChainState;
pub use traits::{BoxValidator, FnValidator, Inspect, Validate, ValidateExt, from_fn};
