//! Validating a whole form at once
//!
//! Builds a `RuleSet` from a JSON request body and reports the failing
//! fields, first fail-fast and then collected.

use serde_json::json;
use tavern_validator::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let body = json!({
        "email": "ferris@example",
        "website": "https://rustacean.net",
        "color": "#f74c00",
        "joined": "2015-05-15",
        "tags": ["crab", "rust", "mascot", "orange"]
    });

    let phone = regex(r"^\+?[0-9 ]{7,15}$")?;
    let joined = datetime("2006-01-02")?;

    let set = RuleSet::new()
        .add_named("email", body["email"].clone(), [required().boxed(), email().boxed()])
        .add_named("website", body["website"].clone(), [url().boxed()])
        .add_named("color", body["color"].clone(), [hex_color().boxed()])
        .add_named("tags", body["tags"].clone(), [length(1, 3).boxed()])
        .add_named("phone", body["phone"].clone(), [phone.boxed()])
        .add_named("joined", body["joined"].clone(), [required().boxed(), joined.boxed()]);

    if let Err(e) = set.validate() {
        println!("first failure: {e}");
    }

    let errors = set.validate_collect();
    if errors.is_empty() {
        println!("all {} fields are valid", set.len());
    } else {
        print!("{errors}");
    }

    // Counting bytes instead of characters.
    let engine = Engine::new(EngineConfig::default().with_length_mode(LengthMode::Bytes));
    let greeting = rule!("greeting" => "こんにちは"; max_length(10));
    println!("as chars: {}", validate(&greeting).is_ok());
    println!("as bytes: {}", engine.validate(&greeting).is_ok());

    Ok(())
}
