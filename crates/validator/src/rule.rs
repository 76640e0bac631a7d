//! Rules: a value plus the validators it must satisfy.
//!
//! A [`Rule`] owns its value and an ordered chain of validators. It is
//! built once, handed to the driver, and evaluated with a fresh
//! [`ChainState`](crate::foundation::ChainState). [`RuleSet`] collects rules
//! for batch evaluation.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use crate::engine::Engine;
use crate::error::{Errors, Result};
use crate::foundation::{BoxValidator, Validate};
use crate::value::Value;

/// Most rules carry a handful of validators; these stay inline.
type Chain = SmallVec<[BoxValidator; 4]>;

// ============================================================================
// RULE
// ============================================================================

/// A value and the ordered validators it must pass.
///
/// Usually built with the [`rule!`](crate::rule!) macro.
///
/// # Examples
///
/// ```
/// use tavern_validator::prelude::*;
///
/// let rule = Rule::named("email", "someone@example.com")
///     .with(required())
///     .with(email());
/// assert_eq!(rule.name(), Some("email"));
/// assert_eq!(rule.validators().len(), 2);
/// assert!(rule.validate().is_ok());
/// ```
pub struct Rule {
    name: Option<Cow<'static, str>>,
    value: Value,
    validators: Chain,
}

impl Rule {
    /// Creates an unnamed rule with no validators.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            name: None,
            value: value.into(),
            validators: SmallVec::new(),
        }
    }

    /// Creates a rule whose failures are reported under `name`.
    pub fn named(name: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(value)
        }
    }

    /// Appends a validator to the chain.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, validator: impl Validate + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Appends an already boxed validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_boxed(mut self, validator: BoxValidator) -> Self {
        self.validators.push(validator);
        self
    }

    /// The rule's name, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The value under validation.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The validators, in evaluation order.
    pub fn validators(&self) -> &[BoxValidator] {
        &self.validators
    }

    /// Evaluates the rule with the default engine.
    ///
    /// # Errors
    ///
    /// The first error of the chain.
    pub fn validate(&self) -> Result<()> {
        Engine::default().validate(self)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("validators", &self.validators.len())
            .finish()
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// An ordered batch of rules.
///
/// # Examples
///
/// ```
/// use tavern_validator::prelude::*;
///
/// let set = RuleSet::new()
///     .add_named("name", "Ferris", [required().boxed(), length(1, 32).boxed()])
///     .add(42, [range(0, 10).boxed()]);
///
/// let errors = set.validate_collect();
/// assert_eq!(errors.len(), 1);
/// assert!(errors.errors()[0].is(&ERR_RANGE));
/// ```
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an unnamed rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn add(
        mut self,
        value: impl Into<Value>,
        validators: impl IntoIterator<Item = BoxValidator>,
    ) -> Self {
        self.rules.push(Rule {
            name: None,
            value: value.into(),
            validators: validators.into_iter().collect(),
        });
        self
    }

    /// Adds a named rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn add_named(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Value>,
        validators: impl IntoIterator<Item = BoxValidator>,
    ) -> Self {
        self.rules.push(Rule {
            name: Some(name.into()),
            value: value.into(),
            validators: validators.into_iter().collect(),
        });
        self
    }

    /// Adds a prepared rule.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rules, in insertion order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluates every rule, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// The error of the first failing rule.
    pub fn validate(&self) -> Result<()> {
        Engine::default().validate_all(&self.rules)
    }

    /// Evaluates every rule and returns one error per failing rule.
    pub fn validate_collect(&self) -> Errors {
        Engine::default().validate_all_collect(&self.rules)
    }

    /// Evaluates every rule with `engine`, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// The error of the first failing rule.
    pub fn validate_with(&self, engine: &Engine) -> Result<()> {
        engine.validate_all(&self.rules)
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<Rule> for RuleSet {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl IntoIterator for RuleSet {
    type Item = Rule;
    type IntoIter = std::vec::IntoIter<Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
