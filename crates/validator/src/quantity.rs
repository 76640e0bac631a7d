//! Quantity classification and zero detection
//!
//! A value has two independent quantities:
//!
//! - **size**: how long it is. Characters of a string, elements of a
//!   collection, and for numbers the length of their decimal form
//!   (`1000` has size 4, `-10` has size 3, `0.25` has size 4).
//! - **magnitude**: how big it is. Only numbers have one.
//!
//! Length validators constrain size, range validators constrain magnitude.
//! The same `1000` passes `max_length(4)` and fails `max_range(999)`.

use serde::{Deserialize, Serialize};

use crate::value::Value;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count the size of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures a string according to this mode.
    #[inline]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// MAGNITUDE
// ============================================================================

/// Exact magnitude of a numeric value.
///
/// Integers are compared in `i128` so that every `i64` and `u64` value and
/// every `i64` bound are ordered without loss. Floats are rounded toward
/// the bound first (`ceil` for a lower bound, `floor` for an upper one),
/// which is exact because bounds are integers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Magnitude {
    Integer(i128),
    Float(f64),
}

impl Magnitude {
    /// `self >= bound`. NaN satisfies no bound.
    pub(crate) fn at_least(self, bound: i64) -> bool {
        match self {
            Magnitude::Integer(i) => i >= i128::from(bound),
            Magnitude::Float(f) => !f.is_nan() && (f.ceil() as i128) >= i128::from(bound),
        }
    }

    /// `self <= bound`. NaN satisfies no bound.
    pub(crate) fn at_most(self, bound: i64) -> bool {
        match self {
            Magnitude::Integer(i) => i <= i128::from(bound),
            Magnitude::Float(f) => !f.is_nan() && (f.floor() as i128) <= i128::from(bound),
        }
    }
}

// ============================================================================
// CLASSIFIER
// ============================================================================

impl Value {
    /// Returns true if this is the zero value of its kind.
    ///
    /// `Null`, `false`, `""`, `0`, `0.0`, and empty bytes, sequences and
    /// maps are zero. Every other value is not.
    ///
    /// # Examples
    ///
    /// ```
    /// use tavern_validator::value::Value;
    ///
    /// assert!(Value::from("").is_zero());
    /// assert!(Value::from(0u32).is_zero());
    /// assert!(Value::from(Vec::<i32>::new()).is_zero());
    /// assert!(!Value::from(" ").is_zero());
    /// ```
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::String(s) => s.is_empty(),
            Value::Int(i) => *i == 0,
            Value::Uint(u) => *u == 0,
            Value::Float(f) => *f == 0.0,
            Value::Bytes(b) => b.is_empty(),
            Value::Sequence(items) => items.is_empty(),
            Value::Map(map) => map.is_empty(),
        }
    }

    /// Returns the size of the value, or `None` for kinds without one
    /// (`Null` and `Bool`).
    ///
    /// # Examples
    ///
    /// ```
    /// use tavern_validator::quantity::LengthMode;
    /// use tavern_validator::value::Value;
    ///
    /// assert_eq!(Value::from("héllo").size(LengthMode::Chars), Some(5));
    /// assert_eq!(Value::from("héllo").size(LengthMode::Bytes), Some(6));
    /// assert_eq!(Value::from(1000).size(LengthMode::Chars), Some(4));
    /// assert_eq!(Value::from(1e6).size(LengthMode::Chars), Some(5)); // "1e+06"
    /// assert_eq!(Value::from(true).size(LengthMode::Chars), None);
    /// ```
    pub fn size(&self, mode: LengthMode) -> Option<usize> {
        match self {
            Value::String(s) => Some(mode.measure(s)),
            Value::Bytes(b) => Some(b.len()),
            Value::Sequence(items) => Some(items.len()),
            Value::Map(map) => Some(map.len()),
            Value::Int(i) => Some(decimal_len(i.unsigned_abs()) + usize::from(*i < 0)),
            Value::Uint(u) => Some(decimal_len(*u)),
            Value::Float(f) => Some(format_general(*f).len()),
            Value::Null | Value::Bool(_) => None,
        }
    }

    /// Returns the magnitude of a numeric value as `f64`, or `None` for
    /// non-numeric kinds.
    pub fn numeric(&self) -> Option<f64> {
        match self.magnitude()? {
            Magnitude::Integer(i) => Some(i as f64),
            Magnitude::Float(f) => Some(f),
        }
    }

    pub(crate) fn magnitude(&self) -> Option<Magnitude> {
        match self {
            Value::Int(i) => Some(Magnitude::Integer(i128::from(*i))),
            Value::Uint(u) => Some(Magnitude::Integer(i128::from(*u))),
            Value::Float(f) => Some(Magnitude::Float(*f)),
            _ => None,
        }
    }
}

/// Number of digits in the base-10 form of `n`.
fn decimal_len(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

// ============================================================================
// GENERAL FLOAT FORMAT
// ============================================================================

/// Formats a float in the shortest general form: plain decimal notation
/// unless the decimal exponent is below -4 or at least 6, in which case
/// `d.ddde±XX` with a two-digit minimum exponent.
///
/// This is the form whose length counts as the size of a float.
///
/// # Examples
///
/// ```
/// use tavern_validator::quantity::format_general;
///
/// assert_eq!(format_general(0.3), "0.3");
/// assert_eq!(format_general(100000.0), "100000");
/// assert_eq!(format_general(1000000.0), "1e+06");
/// assert_eq!(format_general(0.00001), "1e-05");
/// assert_eq!(format_general(f64::NEG_INFINITY), "-Inf");
/// ```
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_owned();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.2345e-7".
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }

    if digits.bytes().all(|b| b == b'0') {
        out.push('0');
        return out;
    }

    if !(-4..6).contains(&exponent) {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exponent.unsigned_abs()));
        return out;
    }

    let point = exponent + 1;
    if point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', point.unsigned_abs() as usize));
        out.push_str(&digits);
    } else {
        let point = point as usize;
        if point >= digits.len() {
            out.push_str(&digits);
            out.extend(std::iter::repeat_n('0', point - digits.len()));
        } else {
            out.push_str(&digits[..point]);
            out.push('.');
            out.push_str(&digits[point..]);
        }
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================
