//! End-to-end scenarios for the evaluation driver.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tavern_validator::prelude::*;

// ============================================================================
// REQUIRED AND ZERO VALUES
// ============================================================================

#[test]
fn required_rejects_empty_string() {
    let err = validate(&rule!(""; required())).unwrap_err();
    assert!(err.is(&ERR_REQUIRED));
    assert_eq!(err.kind(), Some(ErrorKind::Required));
}

#[test]
fn required_rejects_empty_collection() {
    let empty: Vec<String> = Vec::new();
    assert!(validate(&rule!(empty; required())).unwrap_err().is(&ERR_REQUIRED));
    assert!(validate(&rule!(vec!["a"]; required())).is_ok());
}

#[rstest]
#[case::empty_string(Value::from(""))]
#[case::zero_int(Value::from(0))]
#[case::zero_uint(Value::from(0u32))]
#[case::zero_float(Value::from(0.0))]
#[case::null(Value::Null)]
fn optional_zero_skips_every_check(#[case] zero: Value) {
    let rule = Rule::new(zero).with(length(5, 10)).with(range(1, 2)).with(email());
    assert!(validate(&rule).is_ok());
}

#[test]
fn required_disables_skip_for_later_validators_only() {
    // Before `required`, the zero value is still skipped.
    assert!(validate(&rule!(0; range(1, 5), required())).unwrap_err().is(&ERR_REQUIRED));

    let wrapped = with_custom_error(required(), ValidationError::custom("name please"));
    let err = validate(&rule!(""; wrapped, length(1, 10))).unwrap_err();
    assert_eq!(err.to_string(), "name please");
}

// ============================================================================
// LENGTH AND RANGE
// ============================================================================

#[rstest]
#[case("A", true)]
#[case("", true)]
#[case("ABCDEFGHIJ", true)]
#[case("ABCDEFGHIJK", false)]
fn length_on_strings(#[case] input: &str, #[case] ok: bool) {
    assert_eq!(validate(&rule!(input; length(1, 10))).is_ok(), ok);
}

#[rstest]
#[case(-1, false)]
#[case(3, true)]
#[case(5, true)]
#[case(6, false)]
fn range_on_integers(#[case] input: i64, #[case] ok: bool) {
    let result = validate(&rule!(input; range(0, 5)));
    assert_eq!(result.is_ok(), ok);
    if !ok {
        assert!(result.unwrap_err().is(&ERR_RANGE));
    }
}

#[test]
fn size_and_magnitude_are_independent() {
    assert!(validate(&rule!(1000; max_length(4))).is_ok());
    assert!(validate(&rule!(1000; max_range(999))).unwrap_err().is(&ERR_RANGE));
    assert!(validate(&rule!(-10; fixed_length(3))).is_ok());
    assert!(validate(&rule!(0.25; fixed_length(4))).is_ok());
    assert!(validate(&rule!(1_000_000.0; fixed_length(5))).is_ok());
}

#[test]
fn float_ranges_are_exact_at_integer_limits() {
    let two_pow_63 = 9_223_372_036_854_775_808.0_f64;
    assert!(validate(&rule!(two_pow_63; max_range(i64::MAX - 1))).unwrap_err().is(&ERR_RANGE));
    assert!(validate(&rule!(two_pow_63; max_range(i64::MAX))).unwrap_err().is(&ERR_RANGE));
    assert!(validate(&rule!((-two_pow_63); min_range(i64::MIN))).is_ok());
    assert!(validate(&rule!(4.5; range(4, 5))).is_ok());
    assert!(validate(&rule!(5.5; range(4, 5))).unwrap_err().is(&ERR_RANGE));
}

#[test]
fn minimum_and_maximum_dispatch_per_value() {
    assert!(validate(&rule!("abcdef"; maximum(5))).unwrap_err().is(&ERR_LENGTH));
    assert!(validate(&rule!(6; maximum(5))).unwrap_err().is(&ERR_RANGE));
    assert!(validate(&rule!(vec![1, 2]; minimum(3))).unwrap_err().is(&ERR_LENGTH));
    assert!(validate(&rule!(2.5; minimum(3))).unwrap_err().is(&ERR_RANGE));
    assert!(validate(&rule!("abc"; minimum(3), maximum(3))).is_ok());
}

#[test]
fn range_rejects_non_numbers_as_usage_error() {
    let err = validate(&rule!("12"; range(0, 100))).unwrap_err();
    assert!(err.is_usage());
    assert!(!err.is_validation());
    assert!(matches!(
        err,
        Error::Usage(UsageError::WrongType {
            validator: "min_range",
            found: ValueKind::String
        })
    ));
}

// ============================================================================
// DATETIME
// ============================================================================

#[cfg(feature = "temporal")]
#[test]
fn datetime_round_trip() {
    let layout = datetime("2006-01-02").unwrap();
    let err = validate(&rule!("1998-07-32"; layout.clone())).unwrap_err();
    assert!(err.is(&ERR_DATETIME));
    assert!(validate(&rule!("1998-07-31"; layout)).is_ok());
}

// ============================================================================
// BATCHES
// ============================================================================

fn signup(username: &str, email_address: &str, age: i64) -> [Rule; 3] {
    [
        rule!("username" => username.to_owned(); required(), length(3, 16), alphanumeric()),
        rule!("email" => email_address.to_owned(); required(), email()),
        rule!("age" => age; range(13, 130)),
    ]
}

#[test]
fn batch_passes() {
    assert!(validate_all(&signup("ferris", "ferris@example.com", 7 + 13)).is_ok());
}

#[test]
fn batch_fail_fast_and_collect() {
    let rules = signup("", "nope", 200);

    let first = validate_all(&rules).unwrap_err();
    assert!(first.is(&ERR_REQUIRED));

    let fields: Vec<String> = validate_all_collect(&rules)
        .into_iter()
        .map(|e| e.to_string())
        .collect();
    assert_eq!(
        fields,
        vec![
            "[username] tavern: missing required value".to_owned(),
            "[email] tavern: invalid format".to_owned(),
            "[age] tavern: out of the range".to_owned(),
        ]
    );
}

#[test]
fn collected_errors_into_result() {
    let rules = signup("ferris", "ferris@example.com", 5);
    let errors = validate_all_collect(&rules).into_result().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(!errors.has_usage_errors());
}

#[test]
fn rule_set_builder() {
    let set = RuleSet::new()
        .add_named("port", 8080, [range(1, 65535).boxed()])
        .add_named("host", "", [required().boxed(), length(1, 253).boxed()])
        .add(vec!["a", "b", "c"], [max_length(2).boxed()]);

    let errors = set.validate_collect();
    assert_eq!(errors.len(), 2);
    assert!(errors.errors()[0].is(&ERR_REQUIRED));
    assert!(errors.errors()[1].is(&ERR_LENGTH));
    assert_eq!(
        errors.errors()[0].as_validation().unwrap().field.as_deref(),
        Some("host")
    );
}

#[test]
fn engines_are_shared_across_threads() {
    let engine = Engine::default();
    std::thread::scope(|scope| {
        for n in 0..4i64 {
            let engine = &engine;
            scope.spawn(move || {
                let rule = rule!(n * 10; range(0, 25));
                assert_eq!(engine.validate(&rule).is_ok(), n * 10 <= 25);
            });
        }
    });
}
