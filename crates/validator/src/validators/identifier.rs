//! Identifier validators: UUIDs, URNs, ISBNs and blockchain addresses

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ERR_FORMAT;

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid regex is valid")
});

static UUID3_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-3[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid3 regex is valid")
});

static UUID4_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("uuid4 regex is valid")
});

static UUID5_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-5[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("uuid5 regex is valid")
});

static BTC_ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[13][a-km-zA-HJ-NP-Z1-9]{25,34}$").expect("bitcoin address regex is valid")
});

static ETH_ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("ethereum address regex is valid")
});

// ============================================================================
// UUID
// ============================================================================

crate::validator! {
    /// A lowercase hyphenated UUID of any version.
    pub Uuid for str;
    rule(input) { UUID_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn uuid();
}

crate::validator! {
    /// A version 3 UUID.
    pub Uuid3 for str;
    rule(input) { UUID3_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn uuid3();
}

crate::validator! {
    /// A version 4 UUID with the RFC 4122 variant.
    pub Uuid4 for str;
    rule(input) { UUID4_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn uuid4();
}

crate::validator! {
    /// A version 5 UUID with the RFC 4122 variant.
    pub Uuid5 for str;
    rule(input) { UUID5_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn uuid5();
}

// ============================================================================
// ISBN
// ============================================================================

/// Ten characters, the last may be `X`, weighted checksum divisible by 11.
fn is_isbn10(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != 10 || !bytes[..9].iter().all(u8::is_ascii_digit) {
        return false;
    }
    let check = match bytes[9] {
        b'X' => 10,
        b if b.is_ascii_digit() => u32::from(b - b'0'),
        _ => return false,
    };
    let sum: u32 = bytes[..9]
        .iter()
        .zip(1..)
        .map(|(b, weight)| weight * u32::from(b - b'0'))
        .sum();
    (sum + 10 * check) % 11 == 0
}

/// Thirteen digits starting with 978 or 979, alternating 1/3 weights.
fn is_isbn13(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != 13
        || !bytes.iter().all(u8::is_ascii_digit)
        || !(input.starts_with("978") || input.starts_with("979"))
    {
        return false;
    }
    let sum: u32 = bytes[..12]
        .iter()
        .enumerate()
        .map(|(i, b)| u32::from(b - b'0') * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    (10 - sum % 10) % 10 == u32::from(bytes[12] - b'0')
}

crate::validator! {
    /// An ISBN-10 with a valid check digit.
    pub Isbn10 for str;
    rule(input) { is_isbn10(input) }
    error { ERR_FORMAT }
    fn isbn10();
}

crate::validator! {
    /// An ISBN-13 with a valid check digit.
    pub Isbn13 for str;
    rule(input) { is_isbn13(input) }
    error { ERR_FORMAT }
    fn isbn13();
}

crate::validator! {
    /// Either an ISBN-10 or an ISBN-13.
    pub Isbn for str;
    rule(input) { is_isbn10(input) || is_isbn13(input) }
    error { ERR_FORMAT }
    fn isbn();
}

// ============================================================================
// ADDRESSES
// ============================================================================

crate::validator! {
    /// A base58 P2PKH or P2SH Bitcoin address.
    pub BitcoinAddress for str;
    rule(input) { BTC_ADDRESS_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn bitcoin_address();
}

const BECH32_CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";
const BECH32_GENERATOR: [u32; 5] = [0x3b6a_57b2, 0x2650_8e6d, 0x1ea1_19fa, 0x3d42_33dd, 0x2a14_62b3];
const BECH32_CONST: u32 = 1;
const BECH32M_CONST: u32 = 0x2bc8_30a3;

fn bech32_polymod(values: impl IntoIterator<Item = u8>) -> u32 {
    values.into_iter().fold(1, |chk, value| {
        let top = chk >> 25;
        let chk = ((chk & 0x01ff_ffff) << 5) ^ u32::from(value);
        BECH32_GENERATOR
            .iter()
            .enumerate()
            .filter(|(i, _)| (top >> i) & 1 == 1)
            .fold(chk, |chk, (_, g)| chk ^ g)
    })
}

/// A mainnet segwit address (BIP 173 / BIP 350): `bc1`, witness version,
/// program, six checksum characters. Version 0 uses the bech32 checksum,
/// later versions bech32m.
fn is_bech32_address(input: &str) -> bool {
    if !(14..=74).contains(&input.len())
        || (input != input.to_ascii_lowercase() && input != input.to_ascii_uppercase())
    {
        return false;
    }
    let lower = input.to_ascii_lowercase();
    let Some(data_part) = lower.strip_prefix("bc1") else {
        return false;
    };
    let Some(data) = data_part
        .bytes()
        .map(|b| BECH32_CHARSET.iter().position(|c| *c == b).map(|i| i as u8))
        .collect::<Option<Vec<u8>>>()
    else {
        return false;
    };
    if data.len() < 7 || data[0] > 16 {
        return false;
    }

    let hrp = [b'b', b'c'];
    let expanded = hrp
        .iter()
        .map(|c| c >> 5)
        .chain([0])
        .chain(hrp.iter().map(|c| c & 31));
    let expected = if data[0] == 0 { BECH32_CONST } else { BECH32M_CONST };
    if bech32_polymod(expanded.chain(data.iter().copied())) != expected {
        return false;
    }

    let program = &data[1..data.len() - 6];
    let bits = program.len() * 5;
    let padding = bits % 8;
    if padding >= 5 || program.last().is_some_and(|last| last & ((1u8 << padding) - 1) != 0) {
        return false;
    }
    let bytes = bits / 8;
    (2..=40).contains(&bytes) && (data[0] != 0 || bytes == 20 || bytes == 32)
}

crate::validator! {
    /// A bech32 or bech32m encoded (`bc1...`) Bitcoin segwit address with a
    /// valid checksum.
    pub BitcoinAddressBech32 for str;
    rule(input) { is_bech32_address(input) }
    error { ERR_FORMAT }
    fn bitcoin_address_bech32();
}

crate::validator! {
    /// A `0x`-prefixed, 40 hex digit Ethereum address.
    pub EthereumAddress for str;
    rule(input) { ETH_ADDRESS_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn ethereum_address();
}
