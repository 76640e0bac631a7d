//! CSS color validators

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ERR_FORMAT;

// One RGB channel: 0-255 without leading zeros.
const CHANNEL: &str = r"(?:0|[1-9][0-9]?|1[0-9][0-9]|2[0-4][0-9]|25[0-5])";
// Hue in degrees: 0-360.
const HUE: &str = r"(?:0|[1-9][0-9]?|[12][0-9][0-9]|3[0-5][0-9]|360)";
// Percentage: 0%-100%.
const PERCENT: &str = r"(?:0|[1-9][0-9]?|100)%";
// Alpha: 0, 1, or a fraction.
const ALPHA: &str = r"(?:0?\.[0-9]+|[01](?:\.0+)?)";

fn rgb_channels() -> String {
    format!(
        r"(?:{CHANNEL}\s*,\s*{CHANNEL}\s*,\s*{CHANNEL}|{CHANNEL}%\s*,\s*{CHANNEL}%\s*,\s*{CHANNEL}%)"
    )
}

static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color regex is valid")
});

static RGB_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^rgb\(\s*{}\s*\)$", rgb_channels())).expect("rgb regex is valid")
});

static RGBA_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^rgba\(\s*{}\s*,\s*{ALPHA}\s*\)$", rgb_channels()))
        .expect("rgba regex is valid")
});

static HSL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^hsl\(\s*{HUE}\s*,\s*{PERCENT}\s*,\s*{PERCENT}\s*\)$"))
        .expect("hsl regex is valid")
});

static HSLA_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^hsla\(\s*{HUE}\s*,\s*{PERCENT}\s*,\s*{PERCENT}\s*,\s*{ALPHA}\s*\)$"
    ))
    .expect("hsla regex is valid")
});

crate::validator! {
    /// `#rgb` or `#rrggbb`.
    pub HexColor for str;
    rule(input) { HEX_COLOR_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn hex_color();
}

crate::validator! {
    /// `rgb(r, g, b)` with integer or percentage channels.
    pub Rgb for str;
    rule(input) { RGB_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn rgb();
}

crate::validator! {
    /// `rgba(r, g, b, a)`.
    pub Rgba for str;
    rule(input) { RGBA_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn rgba();
}

crate::validator! {
    /// `hsl(h, s%, l%)`.
    pub Hsl for str;
    rule(input) { HSL_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn hsl();
}

crate::validator! {
    /// `hsla(h, s%, l%, a)`.
    pub Hsla for str;
    rule(input) { HSLA_REGEX.is_match(input) }
    error { ERR_FORMAT }
    fn hsla();
}
