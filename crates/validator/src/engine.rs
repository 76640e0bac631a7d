//! Evaluation driver
//!
//! Runs rules. Each rule gets its own [`ChainState`]; its validators run in
//! order and the first error ends the rule. Across rules, [`Engine::validate_all`]
//! stops at the first failing rule while [`Engine::validate_all_collect`]
//! evaluates every rule and keeps one error per failure, in rule order.
//!
//! The engine holds no mutable state, so one engine can serve any number of
//! threads at once.
//!
//! # Examples
//!
//! ```
//! use tavern_validator::prelude::*;
//!
//! let rules = [
//!     rule!("name" => ""; required()),
//!     rule!("age" => -1; range(0, 150)),
//! ];
//!
//! let err = validate_all(&rules).unwrap_err();
//! assert!(err.is(&ERR_REQUIRED));
//!
//! let errors = validate_all_collect(&rules);
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.to_string().lines().count(), 3);
//! ```

use tracing::{debug, debug_span, trace, warn};

use crate::config::EngineConfig;
use crate::error::{Error, Errors, Result};
use crate::foundation::ChainState;
use crate::rule::Rule;

// ============================================================================
// ENGINE
// ============================================================================

/// A configured evaluation driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine with `config`.
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluates one rule.
    ///
    /// # Errors
    ///
    /// The first error produced by the rule's chain. Validation errors of a
    /// named rule carry the name in `field` unless the error already names a
    /// field or the engine is configured not to.
    pub fn validate(&self, rule: &Rule) -> Result<()> {
        let mut state = ChainState::with_length_mode(self.config.length_mode);
        let name = rule.name().unwrap_or("");

        for (step, validator) in rule.validators().iter().enumerate() {
            trace!(rule = name, step, "running validator");
            if let Err(error) = validator.validate(&mut state, rule.value()) {
                return Err(self.report(rule, error));
            }
        }
        Ok(())
    }

    /// Evaluates rules in order and stops at the first failing one.
    ///
    /// # Errors
    ///
    /// The error of the first failing rule.
    pub fn validate_all<'a>(&self, rules: impl IntoIterator<Item = &'a Rule>) -> Result<()> {
        let _span = debug_span!("validate_all").entered();
        rules.into_iter().try_for_each(|rule| self.validate(rule))
    }

    /// Evaluates every rule and collects one error per failing rule.
    pub fn validate_all_collect<'a>(&self, rules: impl IntoIterator<Item = &'a Rule>) -> Errors {
        let _span = debug_span!("validate_all_collect").entered();
        let errors: Errors = rules
            .into_iter()
            .filter_map(|rule| self.validate(rule).err())
            .collect();
        debug!(failed = errors.len(), "batch evaluated");
        errors
    }

    fn report(&self, rule: &Rule, error: Error) -> Error {
        let name = rule.name().unwrap_or("");
        match error {
            Error::Validation(mut failure) => {
                debug!(rule = name, kind = %failure.kind, code = %failure.code, "rule failed");
                if self.config.attach_rule_names && failure.field.is_none() {
                    if let Some(field) = rule.name() {
                        failure.field = Some(field.to_owned().into());
                    }
                }
                Error::Validation(failure)
            }
            Error::Usage(usage) => {
                warn!(rule = name, error = %usage, "validator misused");
                Error::Usage(usage)
            }
        }
    }
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// Evaluates one rule with the default engine.
///
/// # Errors
///
/// See [`Engine::validate`].
///
/// # Examples
///
/// ```
/// use tavern_validator::prelude::*;
///
/// assert!(validate(&rule!("A"; length(1, 10))).is_ok());
/// assert!(validate(&rule!(""; length(1, 10))).is_ok());
/// assert!(validate(&rule!(""; required(), length(1, 10))).unwrap_err().is(&ERR_REQUIRED));
/// ```
pub fn validate(rule: &Rule) -> Result<()> {
    Engine::default().validate(rule)
}

/// Evaluates rules with the default engine, stopping at the first failure.
///
/// # Errors
///
/// See [`Engine::validate_all`].
pub fn validate_all<'a>(rules: impl IntoIterator<Item = &'a Rule>) -> Result<()> {
    Engine::default().validate_all(rules)
}

/// Evaluates every rule with the default engine and collects the failures.
pub fn validate_all_collect<'a>(rules: impl IntoIterator<Item = &'a Rule>) -> Errors {
    Engine::default().validate_all_collect(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ERR_FORMAT, ERR_LENGTH, ERR_RANGE, ERR_REQUIRED, ValidationError};
    use crate::foundation::{ValidateExt, from_fn};
    use crate::quantity::LengthMode;
    use crate::validators::{length, max_length, range, required};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter(calls: &Arc<AtomicUsize>) -> impl crate::foundation::Validate + 'static {
        let calls = Arc::clone(calls);
        from_fn(move |_, _| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    #[test]
    fn test_stops_at_first_validator_error() {
        let calls = Arc::new(AtomicUsize::new(0));
        let rule = Rule::new("").with(required()).with(counter(&calls));
        assert!(validate(&rule).unwrap_err().is(&ERR_REQUIRED));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_fresh_state_per_rule() {
        let rules = [
            Rule::new("x").with(required()),
            Rule::new("").with(length(1, 10)),
        ];
        assert!(validate_all(&rules).is_ok());
    }

    #[test]
    fn test_validate_all_stops_at_first_rule() {
        let calls = Arc::new(AtomicUsize::new(0));
        let rules = [
            Rule::new(-1).with(range(0, 5)),
            Rule::new("later").with(counter(&calls)),
        ];
        assert!(validate_all(&rules).unwrap_err().is(&ERR_RANGE));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let errors = validate_all_collect(&rules);
        assert_eq!(errors.len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_collect_keeps_rule_order() {
        let rules = [
            Rule::new("toolong").with(length(1, 3)),
            Rule::new("ok").with(length(1, 3)),
            Rule::new("").with(required()),
        ];
        let errors = validate_all_collect(&rules);
        assert_eq!(errors.len(), 2);
        assert!(errors.errors()[0].is(&ERR_LENGTH));
        assert!(errors.errors()[1].is(&ERR_REQUIRED));
        assert!(validate_all_collect(&rules[1..2]).is_empty());
        assert_eq!(validate_all_collect(&rules[1..]).len(), 1);
    }

    #[test]
    fn test_rule_name_attached() {
        let err = validate(&Rule::named("email", "").with(required())).unwrap_err();
        let failure = err.as_validation().unwrap();
        assert_eq!(failure.field.as_deref(), Some("email"));
        assert_eq!(err.to_string(), "[email] tavern: missing required value");

        let quiet = Engine::new(EngineConfig::default().with_rule_names(false));
        let err = quiet
            .validate(&Rule::named("email", "").with(required()))
            .unwrap_err();
        assert_eq!(err.as_validation().unwrap().field, None);
    }

    #[test]
    fn test_existing_field_kept() {
        let custom = ValidationError::custom("bad").with_field("inner");
        let rule = Rule::named("outer", "x").with(max_length(0).with_error(custom));
        let err = validate(&rule).unwrap_err();
        assert_eq!(err.as_validation().unwrap().field.as_deref(), Some("inner"));
    }

    #[test]
    fn test_usage_error_not_renamed() {
        let err = validate(&Rule::named("flag", true).with(length(1, 2))).unwrap_err();
        assert!(err.is_usage());
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn test_length_mode_from_config() {
        let rule = Rule::new("héllo").with(max_length(5));
        assert!(validate(&rule).is_ok());

        let bytes = Engine::new(EngineConfig::default().with_length_mode(LengthMode::Bytes));
        assert!(bytes.validate(&rule).unwrap_err().is(&ERR_LENGTH));
        assert_eq!(bytes.config().length_mode, LengthMode::Bytes);
    }

    #[test]
    fn test_custom_validator_sees_value() {
        let rule = Rule::new(7).with(from_fn(|_, value| {
            if value.numeric() == Some(7.0) {
                Err(Error::Validation(ERR_FORMAT))
            } else {
                Ok(())
            }
        }));
        assert!(validate(&rule).unwrap_err().is(&ERR_FORMAT));
    }
}
