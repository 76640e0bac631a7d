//! Built-in validators
//!
//! Every validator here is built by a factory function and passes zero
//! values (`""`, `0`, empty collections) unless [`required`] ran earlier in
//! the same chain.
//!
//! # Categories
//!
//! - **Presence**: [`required`]
//! - **Quantity**: [`length`], [`fixed_length`], [`min_length`],
//!   [`max_length`], [`range`], [`minimum`], [`maximum`]
//! - **Format**: [`email`], [`regex`], [`url`], [`uri`], [`urn_rfc2141`],
//!   [`file_path`], [`hostname`], [`mac`], character classes, colors,
//!   encodings, identifiers, [`json`], [`html`]
//! - **Comparison**: [`equal`], [`not_equal`], [`one_of`], [`not_one_of`]
//! - **Datetime** (feature `temporal`): [`datetime`]
//! - **Network** (feature `network`): [`tcp_address`], [`ip_address`],
//!   [`unix_address`] and their per-family variants
//!
//! # Examples
//!
//! ```
//! use tavern_validator::prelude::*;
//!
//! let username = rule!("alice"; required(), length(3, 20), alphanumeric());
//! assert!(validate(&username).is_ok());
//!
//! let age = rule!(17; range(18, 130));
//! assert!(validate(&age).unwrap_err().is(&ERR_RANGE));
//! ```

pub mod bounds;
pub mod color;
pub mod content;
pub mod encoding;
pub mod hostname;
pub mod html;
pub mod identifier;
pub mod json_string;
pub mod length;
pub mod mac_address;
pub mod pattern;
pub mod range;
pub mod required;

#[cfg(feature = "network")]
pub mod network;
#[cfg(feature = "temporal")]
pub mod time;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use bounds::{Maximum, Minimum, maximum, minimum};
pub use color::{Hsl, Hsla, HexColor, Rgb, Rgba, hex_color, hsl, hsla, rgb, rgba};
pub use content::{
    Contains, Equal, NotContains, NotEqual, NotOneOf, OneOf, Prefix, Suffix, contains, equal,
    not_contains, not_equal, not_one_of, one_of, prefix, suffix,
};
pub use encoding::{
    Ascii, Base64, Base64Url, DataUri, Multibyte, PrintableAscii, ascii, base64, base64_url,
    data_uri, multibyte, printable_ascii,
};
pub use hostname::{Hostname, hostname};
pub use html::{Html, html};
pub use identifier::{
    BitcoinAddress, BitcoinAddressBech32, EthereumAddress, Isbn, Isbn10, Isbn13, Uuid, Uuid3,
    Uuid4, Uuid5, bitcoin_address, bitcoin_address_bech32, ethereum_address, isbn, isbn10,
    isbn13, uuid, uuid3, uuid4, uuid5,
};
pub use json_string::{Json, json};
pub use length::{
    FixedLength, Length, MaxLength, MinLength, fixed_length, length, max_length, min_length,
};
pub use mac_address::{Mac, mac};
pub use pattern::{
    Alpha, AlphaUnicode, Alphanumeric, AlphanumericUnicode, Email, FilePath, Hexadecimal,
    Latitude, Longitude, Lowercase, MatchesRegex, Numeric, Uppercase, Uri, Url, UrnRfc2141,
    alpha, alpha_unicode, alphanumeric, alphanumeric_unicode, email, file_path, hexadecimal,
    latitude, longitude, lowercase, numeric, regex, uppercase, uri, url, urn_rfc2141,
};
pub use range::{MaxRange, MinRange, Range, max_range, min_range, range};
pub use required::{Required, required};

#[cfg(feature = "network")]
pub use network::{
    Ip4Address, Ip6Address, IpAddress, Tcp4Address, Tcp6Address, TcpAddress, Udp4Address,
    Udp6Address, UdpAddress, UnixAddress, ip_address, ip4_address, ip6_address, tcp_address,
    tcp4_address, tcp6_address, udp_address, udp4_address, udp6_address, unix_address,
};
#[cfg(feature = "temporal")]
pub use time::{Datetime, datetime};
