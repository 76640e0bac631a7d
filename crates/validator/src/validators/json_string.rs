//! JSON string validator.
//!
//! Validates that a string or byte buffer holds one well-formed JSON
//! document (RFC 8259). Primitives such as `"text"`, `123` and `null` are
//! documents too. Nesting depth is not limited.

use serde::de::IgnoredAny;

use crate::error::ERR_JSON;

fn is_json(input: &[u8]) -> bool {
    serde_json::from_slice::<IgnoredAny>(input).is_ok()
}

crate::validator! {
    /// Validates JSON text. Accepts strings and raw bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use tavern_validator::prelude::*;
    ///
    /// assert!(validate(&rule!(r#"{"name": "John"}"#; json())).is_ok());
    /// assert!(validate(&rule!(Value::bytes(*b"[1, 2, 3]"); json())).is_ok());
    /// assert!(validate(&rule!(r#"{"name": "John""#; json())).unwrap_err().is(&ERR_JSON));
    /// ```
    pub Json for [u8];
    rule(input) { is_json(input) }
    error { ERR_JSON }
    fn json();
}
