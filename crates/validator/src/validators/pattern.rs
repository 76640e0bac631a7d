//! String pattern validators
//!
//! Character-class and shape checks on strings. Every failure is
//! [`ERR_FORMAT`].

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ERR_FORMAT;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email regex is valid")
});

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*://[^\s/?#]+[^\s]*$").expect("url regex is valid")
});

static URI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*:\S+$").expect("uri regex is valid"));

static URN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^urn:([a-z0-9][a-z0-9-]{0,31}):(?:[a-z0-9()+,\-.:=@;$_!*'/?#]|%[0-9a-f]{2})+$")
        .expect("urn regex is valid")
});

static ALPHA_UNICODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}+$").expect("alpha unicode regex is valid"));

static ALPHANUMERIC_UNICODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}]+$").expect("alphanumeric unicode regex is valid"));

static NUMERIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?[0-9]+(?:\.[0-9]+)?$").expect("numeric regex is valid")
});

static HEXADECIMAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:0[xX])?[0-9a-fA-F]+$").expect("hexadecimal regex is valid"));

static LATITUDE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(?:[1-8]?[0-9](?:\.[0-9]+)?|90(?:\.0+)?)$").expect("latitude regex is valid")
});

static LONGITUDE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(?:180(?:\.0+)?|(?:1[0-7][0-9]|[1-9]?[0-9])(?:\.[0-9]+)?)$")
        .expect("longitude regex is valid")
});

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    ///
    /// The pattern is compiled once, when the validator is created.
    ///
    /// # Examples
    ///
    /// ```
    /// use tavern_validator::prelude::*;
    ///
    /// let validator = regex(r"^[a-z]+-[0-9]+$").unwrap();
    /// assert!(validate(&rule!("build-42"; validator)).is_ok());
    /// assert!(regex("(").is_err());
    /// ```
    pub MatchesRegex { pattern: Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error { ERR_FORMAT }
    new(pattern: &str) -> regex::Error {
        Ok(Self { pattern: Regex::new(pattern)? })
    }
    fn regex(pattern: &str) -> regex::Error;
}

// ============================================================================
// EMAIL / URL
// ============================================================================

crate::validator! {
    /// Validates an email address: a local part, `@`, and a domain with at
    /// least one dot.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn email();
}

crate::validator! {
    /// Validates an absolute URL with a scheme and a host.
    pub Url for str;
    rule(input) { URL_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn url();
}

crate::validator! {
    /// Validates a URI: a scheme, a colon, and a non-empty remainder without
    /// whitespace (`mailto:ferris@example.com`, `urn:isbn:0451450523`).
    pub Uri for str;
    rule(input) { URI_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn uri();
}

/// RFC 2141 syntax; the namespace identifier `urn` itself is reserved.
fn is_urn(input: &str) -> bool {
    URN_REGEX
        .captures(input)
        .and_then(|caps| caps.get(1))
        .is_some_and(|nid| !nid.as_str().eq_ignore_ascii_case("urn"))
}

crate::validator! {
    /// Validates a URN per RFC 2141: `urn:<NID>:<NSS>`.
    pub UrnRfc2141 for str;
    rule(input) { is_urn(input) }
    error { ERR_FORMAT }
    fn urn_rfc2141();
}

crate::validator! {
    /// Validates a file path: no NUL bytes, and not ending in a separator,
    /// which would name a directory. The file system is not consulted.
    pub FilePath for str;
    rule(input) { !input.contains('\0') && !input.ends_with(['/', '\\']) }
    error { ERR_FORMAT }
    fn file_path();
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

crate::validator! {
    /// ASCII letters only.
    pub Alpha for str;
    rule(input) { input.bytes().all(|b| b.is_ascii_alphabetic()) }
    error { ERR_FORMAT }
    fn alpha();
}

crate::validator! {
    /// ASCII letters and digits only.
    pub Alphanumeric for str;
    rule(input) { input.bytes().all(|b| b.is_ascii_alphanumeric()) }
    error { ERR_FORMAT }
    fn alphanumeric();
}

crate::validator! {
    /// Unicode letters only.
    pub AlphaUnicode for str;
    rule(input) { ALPHA_UNICODE_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn alpha_unicode();
}

crate::validator! {
    /// Unicode letters and numbers only.
    pub AlphanumericUnicode for str;
    rule(input) { ALPHANUMERIC_UNICODE_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn alphanumeric_unicode();
}

crate::validator! {
    /// A decimal number with an optional sign and fraction, e.g. `-12.5`.
    pub Numeric for str;
    rule(input) { NUMERIC_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn numeric();
}

crate::validator! {
    /// Hex digits with an optional `0x` prefix.
    pub Hexadecimal for str;
    rule(input) { HEXADECIMAL_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn hexadecimal();
}

crate::validator! {
    /// No uppercase characters.
    pub Lowercase for str;
    rule(input) { !input.chars().any(char::is_uppercase) }
    error { ERR_FORMAT }
    fn lowercase();
}

crate::validator! {
    /// No lowercase characters.
    pub Uppercase for str;
    rule(input) { !input.chars().any(char::is_lowercase) }
    error { ERR_FORMAT }
    fn uppercase();
}

// ============================================================================
// COORDINATES
// ============================================================================

crate::validator! {
    /// A latitude in degrees, `-90` to `90`.
    pub Latitude for str;
    rule(input) { LATITUDE_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn latitude();
}

crate::validator! {
    /// A longitude in degrees, `-180` to `180`.
    pub Longitude for str;
    rule(input) { LONGITUDE_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn longitude();
}

// ============================================================================
// TESTS
// ============================================================================
