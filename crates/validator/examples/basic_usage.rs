//! Basic usage example for tavern-validator
//!
//! Run with `RUST_LOG=tavern_validator=trace` to see each validator step.

use tavern_validator::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A single rule: the value and the validators it must pass, in order.
    let username = rule!("username" => "ferris"; required(), length(3, 16), alphanumeric());
    match validate(&username) {
        Ok(()) => println!("✓ 'ferris' is a valid username"),
        Err(e) => println!("✗ Error: {e}"),
    }

    // Empty values skip every check unless `required` comes first.
    let nickname = rule!("nickname" => ""; length(3, 16));
    match validate(&nickname) {
        Ok(()) => println!("✓ empty nickname is fine, it is optional"),
        Err(e) => println!("✗ Error: {e}"),
    }

    // Length counts digits of a number, range compares its magnitude.
    let pin = rule!("pin" => 1000; fixed_length(4), max_range(999));
    match validate(&pin) {
        Ok(()) => println!("✓ 1000 is a valid pin"),
        Err(e) => println!("✗ 1000 has 4 digits but is too big: {e}"),
    }

    // Replace a failure with your own error.
    let too_young = ValidationError::custom("too young to sign up");
    let age = rule!("age" => 12; with_custom_error(range(13, 130), too_young));
    if let Err(e) = validate(&age) {
        println!("✗ {e}");
    }
}
