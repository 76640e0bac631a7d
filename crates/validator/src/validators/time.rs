//! Datetime validator
//!
//! Layouts use the reference-time notation: a layout is the way the moment
//! `Mon Jan 2 15:04:05 -0700 2006` would be written. `"2006-01-02"` is an
//! ISO date, `"03:04 PM"` a 12-hour clock time, and so on.
//!
//! A layout is compiled once, at construction, into a `chrono` format
//! string. Validation parses the input with it and then formats the parsed
//! moment back with the same layout; the input is only valid when the two
//! strings are identical. That rejects both impossible dates (`1998-07-32`)
//! and inputs that parse loosely but are not written the way the layout
//! says.

use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Timelike};

use crate::error::{ERR_DATETIME, Error, Result, UsageError};
use crate::foundation::{ChainState, Validate};
use crate::value::Value;

// Separates the defaults appended to both the format and the input.
const SEP: char = '\u{1f}';

// chrono encodes a leap second as a nanosecond count past one second.
const LEAP_NANOS: u32 = 1_000_000_000;

// ============================================================================
// LAYOUT TRANSLATION
// ============================================================================

/// Which fields a translated layout sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Fields {
    year: bool,
    month: bool,
    day: bool,
    hour24: bool,
    hour12: bool,
    meridiem: bool,
    minute: bool,
    offset: bool,
}

/// A reference layout compiled to `chrono` format strings.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CompiledLayout {
    /// Formats a parsed moment back into the layout.
    format: String,
    /// `format` plus the defaults for fields the layout leaves out.
    parse_format: String,
    /// Input suffix matching the defaults in `parse_format`.
    defaults: String,
    has_offset: bool,
}

/// What a layout token compiles to.
#[derive(Debug, Clone, Copy)]
enum Token {
    Spec(&'static str),
    Unsupported(&'static str),
}

/// Layout tokens, longest first wherever one is a prefix of another.
const TOKENS: &[(&str, Token)] = &[
    ("January", Token::Spec("%B")),
    ("Jan", Token::Spec("%b")),
    ("Monday", Token::Spec("%A")),
    ("Mon", Token::Spec("%a")),
    ("MST", Token::Unsupported("time zone abbreviations cannot be parsed")),
    ("Z07", Token::Unsupported("`Z` offsets are not supported")),
    ("2006", Token::Spec("%Y")),
    ("002", Token::Spec("%j")),
    ("__2", Token::Unsupported("space-padded day of year is not supported")),
    ("_2", Token::Spec("%e")),
    ("-07:00:00", Token::Unsupported("offsets with seconds are not supported")),
    ("-07:00", Token::Spec("%:z")),
    ("-0700", Token::Spec("%z")),
    ("-07", Token::Unsupported("hour-only offsets are not supported")),
    ("01", Token::Spec("%m")),
    ("02", Token::Spec("%d")),
    ("03", Token::Spec("%I")),
    ("04", Token::Spec("%M")),
    ("05", Token::Spec("%S")),
    ("06", Token::Spec("%y")),
    ("15", Token::Spec("%H")),
    ("PM", Token::Spec("%p")),
    ("pm", Token::Spec("%P")),
    ("1", Token::Spec("%-m")),
    ("2", Token::Spec("%-d")),
    ("3", Token::Spec("%-I")),
    ("4", Token::Spec("%-M")),
    ("5", Token::Spec("%-S")),
];

fn invalid(layout: &str, reason: &'static str) -> UsageError {
    UsageError::InvalidLayout {
        layout: layout.to_owned(),
        reason: reason.into(),
    }
}

impl Fields {
    fn record(&mut self, spec: &str) {
        match spec {
            "%Y" | "%y" => self.year = true,
            "%B" | "%b" | "%m" | "%-m" => self.month = true,
            "%d" | "%-d" | "%e" => self.day = true,
            "%j" => {
                self.month = true;
                self.day = true;
            }
            "%H" => self.hour24 = true,
            "%I" | "%-I" => self.hour12 = true,
            "%p" | "%P" => self.meridiem = true,
            "%M" | "%-M" => self.minute = true,
            "%z" | "%:z" => self.offset = true,
            _ => {}
        }
    }
}

/// Reads a fractional-second run (`.000`, `.999999`) at the start of `rest`.
///
/// Returns the `chrono` spec and the run length including the dot.
fn fraction(layout: &str, rest: &str) -> Result<Option<(&'static str, usize)>, UsageError> {
    let Some(digits) = rest.strip_prefix('.') else {
        return Ok(None);
    };
    let Some(digit) = digits.chars().next().filter(|c| *c == '0' || *c == '9') else {
        return Ok(None);
    };
    let count = digits.chars().take_while(|c| *c == digit).count();
    if digits[count..].starts_with(|c: char| c.is_ascii_digit()) {
        return Ok(None);
    }
    let spec = match (digit, count) {
        ('0', 3) => "%.3f",
        ('0', 6) => "%.6f",
        ('0', 9) => "%.9f",
        ('0', _) => return Err(invalid(layout, "fractional seconds need 3, 6 or 9 digits")),
        _ => return Err(invalid(layout, "trimmed fractional seconds are not supported")),
    };
    Ok(Some((spec, count + 1)))
}

fn compile(layout: &str) -> Result<CompiledLayout, UsageError> {
    let mut format = String::with_capacity(layout.len() * 2);
    let mut fields = Fields::default();
    let mut rest = layout;

    while let Some(ch) = rest.chars().next() {
        if let Some((spec, len)) = fraction(layout, rest)? {
            format.push_str(spec);
            rest = &rest[len..];
            continue;
        }
        match TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
            Some(&(_, Token::Unsupported(reason))) => return Err(invalid(layout, reason)),
            Some(&(token, Token::Spec(spec))) => {
                fields.record(spec);
                format.push_str(spec);
                rest = &rest[token.len()..];
                continue;
            }
            None => {}
        }
        if ch == '%' {
            format.push_str("%%");
        } else {
            format.push(ch);
        }
        rest = &rest[ch.len_utf8()..];
    }

    let mut parse_format = format.clone();
    let mut defaults = String::new();
    let mut default = |spec: &str, value: &str| {
        parse_format.push(SEP);
        parse_format.push_str(spec);
        defaults.push(SEP);
        defaults.push_str(value);
    };
    if !fields.year {
        default("%Y", "2000");
    }
    if !fields.month {
        default("%m", "01");
    }
    if !fields.day {
        default("%d", "01");
    }
    if !fields.hour24 && !fields.hour12 {
        default("%H", "00");
    }
    if fields.hour12 && !fields.meridiem {
        default("%p", "AM");
    }
    if !fields.minute {
        default("%M", "00");
    }

    Ok(CompiledLayout {
        format,
        parse_format,
        defaults,
        has_offset: fields.offset,
    })
}

impl CompiledLayout {
    /// Parses `input` and formats it back; `None` when parsing fails or
    /// lands on a leap second.
    fn round_trip(&self, input: &str) -> Option<String> {
        let augmented = format!("{input}{}", self.defaults);
        let mut out = String::with_capacity(input.len());
        let written = if self.has_offset {
            let parsed =
                DateTime::<FixedOffset>::parse_from_str(&augmented, &self.parse_format).ok()?;
            if parsed.nanosecond() >= LEAP_NANOS {
                return None;
            }
            write!(out, "{}", parsed.format(&self.format))
        } else {
            let parsed = NaiveDateTime::parse_from_str(&augmented, &self.parse_format).ok()?;
            if parsed.nanosecond() >= LEAP_NANOS {
                return None;
            }
            write!(out, "{}", parsed.format(&self.format))
        };
        written.ok().map(|()| out)
    }

    fn matches(&self, input: &str) -> bool {
        self.round_trip(input).is_some_and(|formatted| formatted == input)
    }
}

// ============================================================================
// DATETIME VALIDATOR
// ============================================================================

/// Validates that a string is a moment written in a given layout.
///
/// # Examples
///
/// ```
/// use tavern_validator::prelude::*;
///
/// let iso = datetime("2006-01-02").unwrap();
/// assert!(validate(&rule!("2018-02-14"; iso.clone())).is_ok());
/// assert!(validate(&rule!("1998-07-32"; iso)).unwrap_err().is(&ERR_DATETIME));
///
/// assert!(datetime("15:04 MST").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datetime {
    layout: String,
    compiled: CompiledLayout,
}

impl Datetime {
    /// Compiles `layout`.
    ///
    /// # Errors
    ///
    /// [`UsageError::InvalidLayout`] when the layout uses a token that
    /// cannot be parsed back (zone abbreviations, `Z07:00` offsets, odd
    /// fractional widths).
    pub fn new(layout: impl Into<String>) -> Result<Self, UsageError> {
        let layout = layout.into();
        let compiled = compile(&layout)?;
        Ok(Self { layout, compiled })
    }

    /// The layout as supplied.
    pub fn layout(&self) -> &str {
        &self.layout
    }
}

impl Validate for Datetime {
    fn validate(&self, state: &mut ChainState, value: &Value) -> Result<()> {
        if state.skip_zero(value) {
            return Ok(());
        }
        let input = value
            .as_str()
            .ok_or_else(|| UsageError::wrong_type("datetime", value.kind()))?;
        if self.compiled.matches(input) {
            Ok(())
        } else {
            Err(Error::Validation(ERR_DATETIME))
        }
    }
}

/// Creates a [`Datetime`] validator for `layout`.
///
/// # Errors
///
/// See [`Datetime::new`].
pub fn datetime(layout: impl Into<String>) -> Result<Datetime, UsageError> {
    Datetime::new(layout)
}
