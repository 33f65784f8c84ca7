//! Customizing flattening with FlattenOptions.
//!
//! Run with: cargo run --example custom_options

use serde_flatkeys::{flatten_with_options, value, BuiltinTransform, FlattenOptions, Map};
use std::error::Error;

fn print(title: &str, flat: &Map) {
    println!("{}:", title);
    for (key, value) in flat {
        println!("  {} = {}", key, value);
    }
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = value!({
        "serverConfig": {
            "listenPort": 8080,
            "tlsCert": null
        },
        "featureFlags": ["search", "export"]
    });

    print(
        "Default (dot glue)",
        &flatten_with_options(&config, &FlattenOptions::new())?,
    );

    // Environment-variable style keys
    let env_style = FlattenOptions::new()
        .with_glue("__")
        .with_key_transform(|_, key| key.to_uppercase());
    print("Env style", &flatten_with_options(&config, &env_style)?);

    // Keep nulls so missing settings stay visible
    let with_nulls = FlattenOptions::new()
        .include_nullish(true)
        .with_builtin_transform(BuiltinTransform::SnakeCase);
    print("Snake case with nulls", &flatten_with_options(&config, &with_nulls)?);

    // Empty glue must be allowed explicitly
    let glued = FlattenOptions::new().with_glue("").allow_empty_glue(true);
    print("Empty glue", &flatten_with_options(&config, &glued)?);

    Ok(())
}
