//! Integration tests for the prelude module.
//!
//! Verifies that `use tavern_validator::prelude::*` brings in everything
//! a consumer needs for common validation scenarios.

use tavern_validator::prelude::*;

// ============================================================================
// PRELUDE IMPORT SMOKE TEST
// ============================================================================

#[test]
fn prelude_import_provides_validate_trait() {
    let v = min_length(3).and(max_length(20));
    let mut state = ChainState::new();
    assert!(v.validate(&mut state, &Value::from("hello")).is_ok());
    assert!(v.validate(&mut state, &Value::from("hi")).is_err());
}

#[test]
fn boxed_validators_mix_types() {
    let chain: Vec<Box<dyn Validate>> = vec![required().boxed(), email().boxed()];
    let rule = chain
        .into_iter()
        .fold(Rule::named("email", "ferris@example.com"), Rule::with_boxed);
    assert!(validate(&rule).is_ok());
}

// ============================================================================
// CATALOGUE VIA PRELUDE
// ============================================================================

#[test]
fn format_validators_via_prelude() {
    let rules = [
        rule!("#ff0000"; hex_color()),
        rule!("rgb(255, 0, 0)"; rgb()),
        rule!("hsla(0, 100%, 50%, 0.5)"; hsla()),
        rule!("SGVsbG8="; base64()),
        rule!("57b73598-8764-4ad0-a76a-679bb6640eb1"; uuid4()),
        rule!("9780306406157"; isbn13()),
        rule!("-33.8688"; latitude()),
        rule!("151.2093"; longitude()),
        rule!("<p>hi</p>"; html()),
        rule!("https://example.com/path"; url()),
        rule!("mailto:ferris@example.com"; uri()),
        rule!("urn:isbn:0451450523"; urn_rfc2141()),
        rule!("/etc/hosts"; file_path()),
        rule!("api.example.com"; hostname()),
        rule!("00:1a:2b:3c:4d:5e"; mac()),
        rule!("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4"; bitcoin_address_bech32()),
        rule!("tavern"; prefix("tav"), suffix("ern"), contains("ver")),
        rule!("b"; one_of(["a", "b", "c"])),
    ];
    let errors = validate_all_collect(&rules);
    assert!(errors.is_empty(), "{errors}");
}

#[test]
fn regex_factory_is_fallible() {
    assert!(regex("[").is_err());
    let slug = regex(r"^[a-z0-9-]+$").unwrap();
    assert!(validate(&rule!("hello-world"; slug.clone())).is_ok());
    assert!(validate(&rule!("Hello World"; slug)).unwrap_err().is(&ERR_FORMAT));
}

#[cfg(feature = "temporal")]
#[test]
fn datetime_via_prelude() {
    let date = datetime("2006-01-02").unwrap();
    assert!(validate(&rule!("2018-02-14"; date.clone())).is_ok());
    assert!(validate(&rule!("1998-07-32"; date)).unwrap_err().is(&ERR_DATETIME));
}

#[cfg(feature = "network")]
#[test]
fn network_via_prelude() {
    assert!(validate(&rule!("127.0.0.1:8080"; tcp4_address())).is_ok());
    assert!(validate(&rule!("127.0.0.1"; tcp_address())).unwrap_err().is(&ERR_ADDRESS));
    assert!(validate(&rule!("/tmp/app.sock"; unix_address())).is_ok());
}

// ============================================================================
// CONFIGURED ENGINE
// ============================================================================

#[test]
fn engine_from_config() {
    let config = EngineConfig::from_json_str(r#"{"length_mode": "bytes"}"#).unwrap();
    let engine = Engine::new(config);
    let rule = rule!("日本"; max_length(2));

    assert!(validate(&rule).is_ok());
    assert!(engine.validate(&rule).unwrap_err().is(&ERR_LENGTH));
}
