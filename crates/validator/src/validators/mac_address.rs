//! MAC address validator.
//!
//! Accepts 48-bit (EUI-48) and 64-bit (EUI-64) hardware addresses in the
//! common notations:
//!
//! - Colon-separated: `AA:BB:CC:DD:EE:FF`
//! - Hyphen-separated: `AA-BB-CC-DD-EE-FF`
//! - Dot-separated (Cisco): `AABB.CCDD.EEFF`

use crate::error::ERR_FORMAT;

fn is_hex_group(group: &str, width: usize) -> bool {
    group.len() == width && group.bytes().all(|b| b.is_ascii_hexdigit())
}

fn groups_of(input: &str, separator: char, width: usize, counts: &[usize]) -> bool {
    let groups: Vec<&str> = input.split(separator).collect();
    counts.contains(&groups.len()) && groups.iter().all(|group| is_hex_group(group, width))
}

fn is_mac(input: &str) -> bool {
    groups_of(input, ':', 2, &[6, 8])
        || groups_of(input, '-', 2, &[6, 8])
        || groups_of(input, '.', 4, &[3, 4])
}

crate::validator! {
    /// Validates a MAC address.
    ///
    /// # Examples
    ///
    /// ```
    /// use tavern_validator::prelude::*;
    ///
    /// assert!(validate(&rule!("aa:bb:cc:dd:ee:ff"; mac())).is_ok());
    /// assert!(validate(&rule!("AABB.CCDD.EEFF"; mac())).is_ok());
    /// assert!(validate(&rule!("GG:HH:II:JJ:KK:LL"; mac())).unwrap_err().is(&ERR_FORMAT));
    /// ```
    pub Mac for str;
    rule(input) { is_mac(input) }
    error { ERR_FORMAT }
    fn mac();
}
