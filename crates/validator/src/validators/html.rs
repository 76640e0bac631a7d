//! HTML validator

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ERR_HTML;

static HTML_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[a-zA-Z][a-zA-Z0-9-]*[^<>]*>").expect("html regex is valid"));

crate::validator! {
    /// Validates that a string contains at least one complete HTML tag.
    ///
    /// This is a presence check, not a parser: `<b>hello` passes, `<bhello`
    /// and plain text do not.
    pub Html for str;
    rule(input) { HTML_TAG_REGEX.is_match(input) }
    error { ERR_HTML }
    fn html();
}
