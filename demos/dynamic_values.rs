//! Flattening JSON input with arguments supplied at runtime.
//!
//! Run with: cargo run --example dynamic_values

use serde_flatkeys::{flatten_args, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let document: Value = serde_json::from_str(
        r#"{
            "User": { "Name": "Alice", "Emails": ["a@example.com", "alice@example.com"] },
            "Session": null
        }"#,
    )?;

    // Arguments as they might arrive in a request body
    let request: Value = serde_json::from_str(
        r#"{ "glue": "/", "includeNullish": true, "options": { "keyTransform": "lowercase" } }"#,
    )?;
    let args = request.as_object().ok_or("request must be an object")?;

    let flat = flatten_args(
        &document,
        args.get("glue"),
        args.get("includeNullish"),
        args.get("options"),
    )?;
    println!("{}", serde_json::to_string_pretty(&flat)?);

    // A transform name that does not exist is rejected before flattening
    let bad: Value = serde_json::from_str(r#"{ "keyTransform": "not-a-function" }"#)?;
    match flatten_args(&document, None, None, Some(&bad)) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("rejected: {}", e),
    }

    Ok(())
}
