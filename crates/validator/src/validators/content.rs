//! String content and value comparison validators
//!
//! Substring checks work on strings; the comparison validators (`equal`,
//! `one_of`, ...) compare whole [`Value`]s and accept any kind. Every
//! failure is [`ERR_FORMAT`].

use crate::error::ERR_FORMAT;
use crate::value::Value;

// ============================================================================
// SUBSTRINGS
// ============================================================================

crate::validator! {
    /// Validates that a string starts with a prefix.
    #[derive(PartialEq, Eq, Hash)]
    pub Prefix { prefix: String } for str;
    rule(self, input) { input.starts_with(self.prefix.as_str()) }
    error { ERR_FORMAT }
    new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
    fn prefix(prefix: impl Into<String>);
}

crate::validator! {
    /// Validates that a string ends with a suffix.
    #[derive(PartialEq, Eq, Hash)]
    pub Suffix { suffix: String } for str;
    rule(self, input) { input.ends_with(self.suffix.as_str()) }
    error { ERR_FORMAT }
    new(suffix: impl Into<String>) { Self { suffix: suffix.into() } }
    fn suffix(suffix: impl Into<String>);
}

crate::validator! {
    /// Validates that a string contains a substring.
    #[derive(PartialEq, Eq, Hash)]
    pub Contains { substring: String } for str;
    rule(self, input) { input.contains(self.substring.as_str()) }
    error { ERR_FORMAT }
    new(substring: impl Into<String>) { Self { substring: substring.into() } }
    fn contains(substring: impl Into<String>);
}

crate::validator! {
    /// Validates that a string does not contain a substring.
    #[derive(PartialEq, Eq, Hash)]
    pub NotContains { substring: String } for str;
    rule(self, input) { !input.contains(self.substring.as_str()) }
    error { ERR_FORMAT }
    new(substring: impl Into<String>) { Self { substring: substring.into() } }
    fn not_contains(substring: impl Into<String>);
}

// ============================================================================
// EQUALITY
// ============================================================================

crate::validator! {
    /// Validates that the value equals `expected`.
    ///
    /// Kinds must match: `Int(1)` does not equal `Uint(1)` or `Float(1.0)`.
    #[derive(PartialEq)]
    pub Equal { expected: Value } for Value;
    rule(self, input) { *input == self.expected }
    error { ERR_FORMAT }
    new(expected: impl Into<Value>) { Self { expected: expected.into() } }
    fn equal(expected: impl Into<Value>);
}

crate::validator! {
    /// Validates that the value differs from `unexpected`.
    #[derive(PartialEq)]
    pub NotEqual { unexpected: Value } for Value;
    rule(self, input) { *input != self.unexpected }
    error { ERR_FORMAT }
    new(unexpected: impl Into<Value>) { Self { unexpected: unexpected.into() } }
    fn not_equal(unexpected: impl Into<Value>);
}

crate::validator! {
    /// Validates that the value is one of `allowed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tavern_validator::prelude::*;
    ///
    /// let size = one_of(["s", "m", "l"]);
    /// assert!(validate(&rule!("m"; size.clone())).is_ok());
    /// assert!(validate(&rule!("xl"; size)).is_err());
    /// ```
    #[derive(PartialEq)]
    pub OneOf { allowed: Vec<Value> } for Value;
    rule(self, input) { self.allowed.contains(input) }
    error { ERR_FORMAT }
    new(allowed: impl IntoIterator<Item = impl Into<Value>>) {
        Self { allowed: allowed.into_iter().map(Into::into).collect() }
    }
    fn one_of(allowed: impl IntoIterator<Item = impl Into<Value>>);
}

crate::validator! {
    /// Validates that the value is none of `denied`.
    #[derive(PartialEq)]
    pub NotOneOf { denied: Vec<Value> } for Value;
    rule(self, input) { !self.denied.contains(input) }
    error { ERR_FORMAT }
    new(denied: impl IntoIterator<Item = impl Into<Value>>) {
        Self { denied: denied.into_iter().map(Into::into).collect() }
    }
    fn not_one_of(denied: impl IntoIterator<Item = impl Into<Value>>);
}

// ============================================================================
// TESTS
// ============================================================================
