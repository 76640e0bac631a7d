//! Hostname validator (RFC 1123).
//!
//! - Total length: 1..=253 characters, not counting an optional trailing dot
//! - Labels separated by `.`, each 1..=63 characters of `[a-zA-Z0-9-]`
//! - Labels must not start or end with a hyphen

use crate::error::ERR_FORMAT;

const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

fn is_label(label: &str) -> bool {
    (1..=MAX_LABEL_LEN).contains(&label.len())
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

fn is_hostname(input: &str) -> bool {
    // FQDN notation
    let hostname = input.strip_suffix('.').unwrap_or(input);
    (1..=MAX_HOSTNAME_LEN).contains(&hostname.len()) && hostname.split('.').all(is_label)
}

crate::validator! {
    /// Validates a hostname per RFC 1123.
    ///
    /// # Examples
    ///
    /// ```
    /// use tavern_validator::prelude::*;
    ///
    /// assert!(validate(&rule!("api.example.com"; hostname())).is_ok());
    /// assert!(validate(&rule!("example.com."; hostname())).is_ok());
    /// assert!(validate(&rule!("-bad.com"; hostname())).unwrap_err().is(&ERR_FORMAT));
    /// ```
    pub Hostname for str;
    rule(input) { is_hostname(input) }
    error { ERR_FORMAT }
    fn hostname();
}
