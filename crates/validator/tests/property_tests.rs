//! Property-based tests for tavern-validator.

use tavern_validator::prelude::*;
use proptest::prelude::*;

fn check(value: impl Into<Value>, validator: impl Validate + 'static) -> Result<()> {
    validate(&Rule::new(value).with(validator))
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn length_idempotent(s in ".*") {
        let rule = rule!(s; length(3, 10));
        prop_assert_eq!(validate(&rule), validate(&rule));
    }

    #[test]
    fn email_idempotent(s in ".*") {
        let rule = rule!(s; email());
        prop_assert_eq!(validate(&rule), validate(&rule));
    }
}

// ============================================================================
// COMPOSITION LAWS
// ============================================================================

proptest! {
    #[test]
    fn fixed_length_is_min_and_max(s in ".{0,12}", n in 0usize..12) {
        let fixed = check(s.clone(), fixed_length(n));
        let split = validate(&rule!(s; min_length(n), max_length(n)));
        prop_assert_eq!(fixed, split);
    }

    #[test]
    fn length_passes_iff_within_bounds(s in ".{0,20}", min in 0usize..10, extra in 0usize..10) {
        let max = min + extra;
        let chars = s.chars().count();
        let expected = s.is_empty() || (min..=max).contains(&chars);
        prop_assert_eq!(check(s, length(min, max)).is_ok(), expected);
    }

    #[test]
    fn and_fails_iff_either_fails(s in ".{0,30}") {
        let a_ok = check(s.clone(), min_length(3)).is_ok();
        let b_ok = check(s.clone(), max_length(10)).is_ok();
        let combined_ok = check(s, min_length(3).and(max_length(10))).is_ok();
        prop_assert_eq!(combined_ok, a_ok && b_ok);
    }

    #[test]
    fn custom_error_replaces_only_failures(n in any::<i64>()) {
        let custom = ValidationError::custom("out of bounds");
        let plain = check(n, range(-100, 100));
        let wrapped = check(n, with_custom_error(range(-100, 100), custom.clone()));

        prop_assert_eq!(plain.is_ok(), wrapped.is_ok());
        if let Err(err) = wrapped {
            prop_assert!(err.is(&custom));
        }
    }
}

// ============================================================================
// SIZE AND MAGNITUDE
// ============================================================================

proptest! {
    #[test]
    fn integer_size_is_decimal_width(n in any::<i64>().prop_filter("non-zero", |n| *n != 0)) {
        let width = n.to_string().len();
        prop_assert!(check(n, fixed_length(width)).is_ok());
        prop_assert!(check(n, max_length(width - 1)).unwrap_err().is(&ERR_LENGTH));
    }

    #[test]
    fn range_is_inclusive(n in -1000i64..1000, min in -500i64..0, max in 0i64..500) {
        let expected = n == 0 || (min..=max).contains(&n);
        prop_assert_eq!(check(n, range(min, max)).is_ok(), expected);
    }

    #[test]
    fn zero_passes_without_required(min in 1usize..10, lo in 1i64..10) {
        prop_assert!(check("", length(min, min + 5)).is_ok());
        prop_assert!(check(0, range(lo, lo + 5)).is_ok());
        prop_assert!(check(Vec::<i64>::new(), min_length(min)).is_ok());
    }
}

// ============================================================================
// BATCH EVALUATION
// ============================================================================

proptest! {
    #[test]
    fn collect_reports_each_failing_rule(values in prop::collection::vec(-50i64..150, 0..20)) {
        let rules: Vec<Rule> = values.iter().map(|v| rule!(*v; range(0, 100))).collect();
        let failing: Vec<i64> = values
            .iter()
            .copied()
            .filter(|v| !(0..=100).contains(v))
            .collect();

        let errors = validate_all_collect(&rules);
        prop_assert_eq!(errors.len(), failing.len());
        prop_assert!(errors.iter().all(|e| e.is(&ERR_RANGE)));
        prop_assert_eq!(validate_all(&rules).is_ok(), failing.is_empty());
    }
}
