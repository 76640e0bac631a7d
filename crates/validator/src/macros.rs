//! Macros for creating validators and rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`] — Create a leaf validator (struct + `Validate` impl + factory fn)
//! - [`rule!`] — Build a [`Rule`](crate::rule::Rule) from a value and validators
//!
//! # Examples
//!
//! ```
//! use tavern_validator::prelude::*;
//! use tavern_validator::validator;
//!
//! validator! {
//!     /// Accepts strings without whitespace.
//!     pub NoWhitespace for str;
//!     rule(input) { !input.chars().any(char::is_whitespace) }
//!     error { ERR_FORMAT }
//!     fn no_whitespace();
//! }
//!
//! assert!(validate(&rule!("hello"; no_whitespace())).is_ok());
//! assert!(validate(&rule!("hello world"; no_whitespace())).is_err());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a leaf validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// The generated `validate`:
///
/// 1. passes zero values when no `required` ran earlier in the chain,
/// 2. borrows the input through [`Inspect`](crate::foundation::Inspect),
///    reporting `WrongType` (named after the factory) for other kinds,
/// 3. evaluates `rule` and returns the `error` expression when it is false.
///
/// # Variants
///
/// **Unit validator**:
/// ```ignore
/// validator! {
///     pub Ascii for str;
///     rule(input) { input.is_ascii() }
///     error { ERR_FORMAT }
///     fn ascii();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```ignore
/// validator! {
///     #[derive(PartialEq, Eq, Hash)]
///     pub Equal { expected: Value } for Value;
///     rule(self, input) { *input == self.expected }
///     error { ERR_FORMAT }
///     fn equal(expected: Value);
/// }
/// ```
///
/// **Custom constructor**:
/// ```ignore
/// validator! {
///     pub Prefix { prefix: String } for str;
///     rule(self, input) { input.starts_with(&self.prefix) }
///     error { ERR_FORMAT }
///     new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
///     fn prefix(prefix: impl Into<String>);
/// }
/// ```
///
/// **Fallible constructor** (the type after `->` is the error type):
/// ```ignore
/// validator! {
///     pub Matches { pattern: Regex } for str;
///     rule(self, input) { self.pattern.is_match(input) }
///     error { ERR_FORMAT }
///     new(pattern: &str) -> regex::Error { Ok(Self { pattern: Regex::new(pattern)? }) }
///     fn regex(pattern: &str) -> regex::Error;
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit validator (no fields) ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            fn validate(
                &self,
                state: &mut $crate::foundation::ChainState,
                value: &$crate::value::Value,
            ) -> $crate::error::Result<()> {
                if state.skip_zero(value) {
                    return Ok(());
                }
                let $inp: &$input = <$input as $crate::foundation::Inspect>::inspect(value)
                    .ok_or_else(|| {
                        $crate::error::UsageError::wrong_type(stringify!($factory), value.kind())
                    })?;
                if $rule {
                    Ok(())
                } else {
                    Err($crate::error::Error::Validation($err))
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator!(@struct
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error $err
            factory $factory
        );

        impl $name {
            /// Creates the validator.
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + fallible new + fallible factory ─────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $crate::validator!(@struct
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error $err
            factory $factory
        );

        impl $name {
            /// Creates the validator, failing if its configuration is invalid.
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator!(@struct
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error $err
            factory $factory
        );

        impl $name {
            /// Creates the validator.
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Internal: struct definition + Validate impl ──────────────────────
    (@struct
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error $err:block
        factory $factory:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $crate::foundation::Validate for $name {
            fn validate(
                &$self_,
                state: &mut $crate::foundation::ChainState,
                value: &$crate::value::Value,
            ) -> $crate::error::Result<()> {
                if state.skip_zero(value) {
                    return Ok(());
                }
                let $inp: &$input = <$input as $crate::foundation::Inspect>::inspect(value)
                    .ok_or_else(|| {
                        $crate::error::UsageError::wrong_type(stringify!($factory), value.kind())
                    })?;
                if $rule {
                    Ok(())
                } else {
                    Err($crate::error::Error::Validation($err))
                }
            }
        }
    };
}

// ============================================================================
// RULE MACRO
// ============================================================================

/// Builds a [`Rule`](crate::rule::Rule).
///
/// ```text
/// rule!(value)                          // no validators, always passes
/// rule!(value; v1, v2, ...)             // unnamed rule
/// rule!("name" => value; v1, v2, ...)   // named rule
/// ```
///
/// Validators run in the order written.
///
/// # Examples
///
/// ```
/// use tavern_validator::prelude::*;
///
/// let rules = [
///     rule!("username" => "alice"; required(), length(3, 20), alphanumeric()),
///     rule!("age" => 30; min_range(18)),
///     rule!("nickname" => ""; length(3, 20)),
/// ];
/// assert!(validate_all(&rules).is_ok());
/// ```
#[macro_export]
macro_rules! rule {
    ($name:literal => $value:expr $(; $($validator:expr),* $(,)?)?) => {
        $crate::rule::Rule::named($name, $value)$($(.with($validator))*)?
    };
    ($value:expr $(; $($validator:expr),* $(,)?)?) => {
        $crate::rule::Rule::new($value)$($(.with($validator))*)?
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::error::{ERR_FORMAT, ERR_LENGTH};
    use crate::foundation::{ChainState, Validate};
    use crate::value::{Value, ValueKind};

    crate::validator! {
        /// Test validator: non-empty after trimming.
        pub NotBlank for str;
        rule(input) { !input.trim().is_empty() }
        error { ERR_FORMAT }
        fn not_blank();
    }

    crate::validator! {
        #[derive(PartialEq, Eq)]
        pub StartsWith { prefix: String } for str;
        rule(self, input) { input.starts_with(&self.prefix) }
        error { ERR_FORMAT }
        new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
        fn starts_with(prefix: impl Into<String>);
    }

    crate::validator! {
        pub ByteCap { max: usize } for [u8];
        rule(self, input) { input.len() <= self.max }
        error { ERR_LENGTH }
        fn byte_cap(max: usize);
    }

    crate::validator! {
        pub Matches { pattern: regex::Regex } for str;
        rule(self, input) { self.pattern.is_match(input) }
        error { ERR_FORMAT }
        new(pattern: &str) -> regex::Error {
            Ok(Self { pattern: regex::Regex::new(pattern)? })
        }
        fn matches(pattern: &str) -> regex::Error;
    }

    fn run(validator: &impl Validate, value: impl Into<Value>) -> crate::error::Result<()> {
        validator.validate(&mut ChainState::new(), &value.into())
    }

    #[test]
    fn test_unit_validator() {
        assert!(run(&not_blank(), "x").is_ok());
        assert!(run(&not_blank(), "   ").unwrap_err().is(&ERR_FORMAT));
        assert_eq!(NotBlank, not_blank());
    }

    #[test]
    fn test_zero_value_is_skipped() {
        assert!(run(&not_blank(), "").is_ok());

        let mut state = ChainState::new();
        state.mark_required();
        assert!(not_blank().validate(&mut state, &Value::from("")).is_err());
    }

    #[test]
    fn test_wrong_type_names_factory() {
        let err = run(&starts_with("a"), 5).unwrap_err();
        assert_eq!(
            err,
            crate::error::UsageError::wrong_type("starts_with", ValueKind::Int).into()
        );
    }

    #[test]
    fn test_field_validators() {
        assert!(run(&starts_with("ab"), "abc").is_ok());
        assert!(run(&starts_with("ab"), "cab").is_err());
        assert!(run(&byte_cap(2), Value::bytes(*b"ab")).is_ok());
        assert!(run(&byte_cap(2), "abc").is_err());
    }

    #[test]
    fn test_fallible_constructor() {
        assert!(matches("(").is_err());
        let validator = matches("^[0-9]+$").unwrap();
        assert!(run(&validator, "123").is_ok());
        assert!(run(&validator, "12a").is_err());
    }

    #[test]
    fn test_rule_macro_forms() {
        let bare = rule!(5);
        assert!(bare.validators().is_empty());

        let unnamed = rule!("x"; not_blank(), starts_with("x"));
        assert_eq!(unnamed.name(), None);
        assert_eq!(unnamed.validators().len(), 2);

        let named = rule!("field" => "x"; not_blank(),);
        assert_eq!(named.name(), Some("field"));
        assert_eq!(named.value(), &Value::from("x"));
    }
}
