//! Error types for validation failures
//!
//! Two families of errors exist and they never mix:
//!
//! - [`ValidationError`]: the value broke a rule. Expected and recoverable,
//!   meant for whoever supplied the value.
//! - [`UsageError`]: a validator was applied to a value it cannot inspect.
//!   That is a bug at the call site, not bad input.
//!
//! [`Error`] carries exactly one of them, so handlers and tests can match on
//! the family before looking at details.
//!
//! All string fields use `Cow<'static, str>`, which lets the built-in
//! failures live as `const` sentinels and be returned without allocating.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::value::ValueKind;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The condition that made a value fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// A required value was the zero value for its kind.
    Required,
    /// Size fell outside the allowed length bounds.
    Length,
    /// Magnitude fell outside the allowed range.
    Range,
    /// A string did not round-trip through a datetime layout.
    Datetime,
    /// A string did not match a pattern or format.
    Format,
    /// A network address could not be resolved.
    Address,
    /// A string or byte buffer was not well-formed JSON.
    Json,
    /// A string did not contain an HTML element.
    Html,
    /// A caller-supplied error replaced the original failure.
    Custom,
}

impl ErrorKind {
    /// Returns the stable snake_case name of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Required => "required",
            ErrorKind::Length => "length",
            ErrorKind::Range => "range",
            ErrorKind::Datetime => "datetime",
            ErrorKind::Format => "format",
            ErrorKind::Address => "address",
            ErrorKind::Json => "json",
            ErrorKind::Html => "html",
            ErrorKind::Custom => "custom",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A validation failure.
///
/// Built-in validators return one of the `ERR_*` sentinels below. Callers
/// bring their own vocabulary with [`ValidationError::custom`] together with
/// the custom-error wrapper.
///
/// # Examples
///
/// ```
/// use tavern_validator::error::{ERR_REQUIRED, ErrorKind, ValidationError};
///
/// assert_eq!(ERR_REQUIRED.kind, ErrorKind::Required);
///
/// let err = ValidationError::custom("username is taken");
/// assert_eq!(err.to_string(), "username is taken");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Which condition failed.
    pub kind: ErrorKind,

    /// Error code for programmatic handling and i18n.
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Name of the rule that produced the error, when the rule was named.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Cow<'static, str>>,
}

/// A required value was missing.
pub const ERR_REQUIRED: ValidationError =
    ValidationError::sentinel(ErrorKind::Required, "tavern: missing required value");
/// A value's size was out of the length bounds.
pub const ERR_LENGTH: ValidationError =
    ValidationError::sentinel(ErrorKind::Length, "tavern: out of the length");
/// A value's magnitude was out of the range bounds.
pub const ERR_RANGE: ValidationError =
    ValidationError::sentinel(ErrorKind::Range, "tavern: out of the range");
/// A value did not match the datetime layout.
pub const ERR_DATETIME: ValidationError =
    ValidationError::sentinel(ErrorKind::Datetime, "tavern: invalid datetime");
/// A value did not match the expected format.
pub const ERR_FORMAT: ValidationError =
    ValidationError::sentinel(ErrorKind::Format, "tavern: invalid format");
/// A value could not be resolved as a network address.
pub const ERR_ADDRESS: ValidationError =
    ValidationError::sentinel(ErrorKind::Address, "tavern: unresolvable address");
/// A value was not valid JSON.
pub const ERR_JSON: ValidationError =
    ValidationError::sentinel(ErrorKind::Json, "tavern: invalid json");
/// A value was not HTML.
pub const ERR_HTML: ValidationError =
    ValidationError::sentinel(ErrorKind::Html, "tavern: invalid html");

impl ValidationError {
    const fn sentinel(kind: ErrorKind, message: &'static str) -> Self {
        Self {
            kind,
            code: Cow::Borrowed(kind.as_str()),
            message: Cow::Borrowed(message),
            field: None,
        }
    }

    /// Creates an error with an explicit kind, code and message.
    pub fn new(
        kind: ErrorKind,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            field: None,
        }
    }

    /// Creates a caller-defined error. Its `Display` is exactly `message`.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Custom, "custom", message)
    }

    /// Sets the name of the rule this error belongs to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Returns true if both errors describe the same failure, ignoring the
    /// rule name attached by the driver.
    pub fn is(&self, other: &ValidationError) -> bool {
        self.kind == other.kind && self.code == other.code && self.message == other.message
    }

    /// Converts the error to a JSON object.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": self.kind,
            "code": self.code,
            "message": self.message,
            "field": self.field,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "[{field}] {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// USAGE ERROR
// ============================================================================

/// A validator was misused.
///
/// These are contract violations by the caller. They are never replaced by
/// the custom-error wrapper and never counted as "invalid input".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum UsageError {
    /// The validator cannot inspect values of this kind.
    #[error("tavern: passed wrong type to validator: `{validator}` cannot inspect a {found} value")]
    WrongType {
        /// Name of the validator that rejected the value.
        validator: &'static str,
        /// Kind of the value it was given.
        found: ValueKind,
    },

    /// A datetime layout could not be translated.
    #[error("tavern: invalid datetime layout `{layout}`: {reason}")]
    InvalidLayout {
        /// The layout as supplied.
        layout: String,
        /// What was wrong with it.
        reason: Cow<'static, str>,
    },
}

impl UsageError {
    /// Creates a wrong-type error.
    pub fn wrong_type(validator: &'static str, found: ValueKind) -> Self {
        Self::WrongType { validator, found }
    }
}

// ============================================================================
// CRATE ERROR
// ============================================================================

/// Error returned by validators and the evaluation driver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A validator was applied to a value it does not support.
    #[error(transparent)]
    Usage(#[from] UsageError),
}

impl Error {
    /// Returns true for ordinary validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Returns true for misuse of a validator.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(_))
    }

    /// Returns the validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(e) => Some(e),
            Error::Usage(_) => None,
        }
    }

    /// Returns the kind of validation failure, if this is one.
    pub fn kind(&self) -> Option<ErrorKind> {
        self.as_validation().map(|e| e.kind)
    }

    /// Returns true if this is the given validation failure.
    pub fn is(&self, sentinel: &ValidationError) -> bool {
        self.as_validation().is_some_and(|e| e.is(sentinel))
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Errors gathered from a batch of rules, one per failing rule, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors {
    errors: Vec<Error>,
}

impl Errors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn push(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no rule failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Iterates the errors in rule order.
    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    /// Returns true if any rule misused a validator.
    #[must_use]
    pub fn has_usage_errors(&self) -> bool {
        self.errors.iter().any(Error::is_usage)
    }

    /// Consumes the collection into its errors.
    #[must_use]
    pub fn into_vec(self) -> Vec<Error> {
        self.errors
    }

    /// Converts to a `Result`.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), Errors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl FromIterator<Error> for Errors {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_borrowed() {
        assert!(matches!(ERR_REQUIRED.code, Cow::Borrowed(_)));
        assert!(matches!(ERR_REQUIRED.message, Cow::Borrowed(_)));
        assert_eq!(ERR_LENGTH.code, "length");
        assert_eq!(ERR_RANGE.kind, ErrorKind::Range);
    }

    #[test]
    fn test_custom_display_is_message() {
        let err = ValidationError::custom("hello");
        assert_eq!(err.to_string(), "hello");
        assert_eq!(err.kind, ErrorKind::Custom);
    }

    #[test]
    fn test_field_in_display() {
        let err = ERR_REQUIRED.with_field("email");
        assert_eq!(err.to_string(), "[email] tavern: missing required value");
        assert!(err.is(&ERR_REQUIRED));
        assert_ne!(err, ERR_REQUIRED);
    }

    #[test]
    fn test_error_families() {
        let invalid: Error = ERR_RANGE.into();
        assert!(invalid.is_validation());
        assert_eq!(invalid.kind(), Some(ErrorKind::Range));
        assert!(invalid.is(&ERR_RANGE));

        let misuse: Error = UsageError::wrong_type("range", ValueKind::String).into();
        assert!(misuse.is_usage());
        assert_eq!(misuse.kind(), None);
        assert!(misuse.to_string().contains("wrong type"));
    }

    #[test]
    fn test_collection() {
        let mut errors = Errors::new();
        assert!(errors.clone().into_result().is_ok());

        errors.push(ERR_LENGTH.into());
        errors.push(UsageError::wrong_type("length", ValueKind::Bool).into());

        assert_eq!(errors.len(), 2);
        assert!(errors.has_usage_errors());
        assert!(errors.to_string().contains("2 error(s)"));
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_json_value() {
        let value = ERR_JSON.with_field("payload").to_json_value();
        assert_eq!(value["kind"], "json");
        assert_eq!(value["field"], "payload");
    }
}
