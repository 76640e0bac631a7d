//! Combinators: validators built from other validators
//!
//! - [`And`] / [`and`] / [`and_all`]: run validators in sequence on one
//!   value and state, stopping at the first failure
//! - [`CustomError`] / [`with_custom_error`]: replace a validator's failure
//!   with a caller-chosen error
//!
//! Both are also reachable as methods through
//! [`ValidateExt`](crate::foundation::ValidateExt).

pub mod and;
pub mod custom_error;

pub use and::{And, AndAll, and, and_all};
pub use custom_error::{CustomError, with_custom_error};
