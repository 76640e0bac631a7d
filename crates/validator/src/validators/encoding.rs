//! Encoding and character set validators

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ERR_FORMAT;

static BASE64_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{4})$",
    )
    .expect("base64 regex is valid")
});

static BASE64_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9_-]{4})*(?:[A-Za-z0-9_-]{2}==|[A-Za-z0-9_-]{3}=|[A-Za-z0-9_-]{4})$",
    )
    .expect("base64url regex is valid")
});

static DATA_URI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^data:(?:[a-zA-Z0-9!#$&^_.+-]+/[a-zA-Z0-9!#$&^_.+-]+)?(?:;[a-zA-Z0-9_-]+=[a-zA-Z0-9_.-]+)*(;base64)?,(.*)$",
    )
    .expect("data uri regex is valid")
});

// ============================================================================
// BASE64
// ============================================================================

crate::validator! {
    /// Padded standard base64.
    pub Base64 for str;
    rule(input) { BASE64_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn base64();
}

crate::validator! {
    /// Padded URL-safe base64 (`-` and `_` instead of `+` and `/`).
    pub Base64Url for str;
    rule(input) { BASE64_URL_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn base64_url();
}

// ============================================================================
// CHARACTER SETS
// ============================================================================

crate::validator! {
    /// ASCII characters only, control characters included.
    pub Ascii for str;
    rule(input) { input.is_ascii() }
    error { ERR_FORMAT }
    fn ascii();
}

crate::validator! {
    /// Printable ASCII only: space through `~`.
    pub PrintableAscii for str;
    rule(input) { input.bytes().all(|b| (0x20..=0x7e).contains(&b)) }
    error { ERR_FORMAT }
    fn printable_ascii();
}

crate::validator! {
    /// At least one character outside ASCII.
    pub Multibyte for str;
    rule(input) { !input.is_ascii() }
    error { ERR_FORMAT }
    fn multibyte();
}

// ============================================================================
// DATA URI
// ============================================================================

crate::validator! {
    /// An RFC 2397 `data:` URI. When marked `;base64` the payload must be
    /// valid base64.
    ///
    /// # Examples
    ///
    /// ```
    /// use tavern_validator::prelude::*;
    ///
    /// assert!(validate(&rule!("data:text/plain;base64,SGVsbG8="; data_uri())).is_ok());
    /// assert!(validate(&rule!("data:text/plain;base64,SGVsbG8"; data_uri())).is_err());
    /// ```
    pub DataUri for str;
    rule(input) { is_data_uri(input) }
    error { ERR_FORMAT }
    fn data_uri();
}

fn is_data_uri(input: &str) -> bool {
    let Some(captures) = DATA_URI_REGEX.captures(input) else {
        return false;
    };
    let payload = captures.get(2).map_or("", |m| m.as_str());
    if captures.get(1).is_some() {
        return payload.is_empty() || BASE64_REGEX.is_match(payload);
    }
    !payload.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::foundation::{ChainState, Validate};
    use crate::value::Value;
    use rstest::rstest;

    fn run(validator: &impl Validate, value: impl Into<Value>) -> Result<()> {
        validator.validate(&mut ChainState::new(), &value.into())
    }

    #[rstest]
    #[case("SGVsbG8=", true)]
    #[case("SGVsbG8h", true)]
    #[case("SGVsbA==", true)]
    #[case("SGVsbG8", false)]
    #[case("SGV$bG8=", false)]
    fn test_base64(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(run(&base64(), input).is_ok(), ok);
    }

    #[test]
    fn test_base64_url() {
        assert!(run(&base64_url(), "a-_b").is_ok());
        assert!(run(&base64_url(), "a+/b").is_err());
        assert!(run(&base64(), "a+/b").is_ok());
    }

    #[test]
    fn test_character_sets() {
        assert!(run(&ascii(), "hello\n").is_ok());
        assert!(run(&ascii(), "héllo").is_err());
        assert!(run(&printable_ascii(), "hello ~").is_ok());
        assert!(run(&printable_ascii(), "hello\n").is_err());
        assert!(run(&multibyte(), "abc日本").is_ok());
        assert!(run(&multibyte(), "abc").is_err());
    }

    #[rstest]
    #[case("data:,Hello%2C%20World", true)]
    #[case("data:text/plain;charset=utf-8,hi", true)]
    #[case("data:image/png;base64,iVBORw0KGgo=", true)]
    #[case("data:image/png;base64,not base64", false)]
    #[case("image/png;base64,iVBORw0KGgo=", false)]
    #[case("data:text/plain", false)]
    fn test_data_uri(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(run(&data_uri(), input).is_ok(), ok);
    }
}
