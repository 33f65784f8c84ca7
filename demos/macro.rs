//! Building documents with the value! macro and flattening them.
//!
//! Run with: cargo run --example macro

use serde_flatkeys::{flatten, value};

fn main() {
    let doc = value!({
        "name": "widget",
        "dimensions": { "w": 10, "h": (-2) },
        "tags": ["blue", null, "large"],
        "empty": {}
    });

    println!("Document: {}\n", doc);

    let flat = flatten(&doc);
    for (key, value) in &flat {
        println!("{:>14} = {}", key, value);
    }

    // Empty containers and null leaves produce no keys
    assert!(!flat.contains_key("empty"));
    assert!(!flat.contains_key("tags.1"));
}
