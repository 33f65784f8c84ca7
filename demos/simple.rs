//! Flattening a nested struct into dotted keys.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_flatkeys::{to_flat_map, FlattenOptions};
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    address: Address,
    roles: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Address {
    city: String,
    zip: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let user = User {
        id: 42,
        name: "Alice Johnson".to_string(),
        address: Address {
            city: "Lyon".to_string(),
            zip: None,
        },
        roles: vec!["admin".to_string(), "dev".to_string()],
    };

    let flat = to_flat_map(&user, &FlattenOptions::new())?;

    println!("Flattened keys:");
    for (key, value) in &flat {
        println!("  {} = {}", key, value);
    }

    // `address.zip` is None and skipped by default
    assert!(!flat.contains_key("address.zip"));
    println!("✓ {} leaves", flat.len());

    Ok(())
}
