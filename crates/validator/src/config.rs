//! Engine configuration.
//!
//! [`EngineConfig`] deserializes from any serde format. Missing fields take
//! their defaults, unknown fields are rejected.
//!
//! ```
//! use tavern_validator::prelude::*;
//!
//! let config = EngineConfig::from_json_str(r#"{ "length_mode": "bytes" }"#).unwrap();
//! assert_eq!(config.length_mode, LengthMode::Bytes);
//! assert!(config.attach_rule_names);
//! ```

use serde::{Deserialize, Serialize};

use crate::quantity::LengthMode;

/// Settings applied by an [`Engine`](crate::engine::Engine) to every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// How string size is counted by length checks.
    pub length_mode: LengthMode,

    /// Tag validation errors of named rules with the rule name.
    pub attach_rule_names: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            length_mode: LengthMode::Chars,
            attach_rule_names: true,
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Malformed JSON, unknown fields, or an unknown length mode.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sets the length mode.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = mode;
        self
    }

    /// Sets whether named rules tag their errors.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_rule_names(mut self, attach: bool) -> Self {
        self.attach_rule_names = attach;
        self
    }
}
