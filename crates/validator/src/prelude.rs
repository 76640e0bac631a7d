//! Prelude module for convenient imports.
//!
//! Provides a single `use tavern_validator::prelude::*;` import that brings
//! in the value model, errors, the validator traits, every built-in
//! validator, rules and the driver.
//!
//! # Examples
//!
//! ```
//! use tavern_validator::prelude::*;
//!
//! let rules = [
//!     rule!("username" => "alice"; required(), length(3, 20), alphanumeric()),
//!     rule!("age" => 42; range(18, 130)),
//! ];
//! assert!(validate_all(&rules).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Values, errors, traits
// ============================================================================

pub use crate::error::{
    ERR_ADDRESS, ERR_DATETIME, ERR_FORMAT, ERR_HTML, ERR_JSON, ERR_LENGTH, ERR_RANGE,
    ERR_REQUIRED, Error, ErrorKind, Errors, Result, UsageError, ValidationError,
};
pub use crate::foundation::{ChainState, Validate, ValidateExt, from_fn};
pub use crate::quantity::LengthMode;
pub use crate::value::{Value, ValueKind};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{And, AndAll, CustomError, and_all, with_custom_error};

// ============================================================================
// RULES AND DRIVER
// ============================================================================

pub use crate::config::EngineConfig;
pub use crate::engine::{Engine, validate, validate_all, validate_all_collect};
pub use crate::rule;
pub use crate::rule::{Rule, RuleSet};
