//! # serde_flatkeys
//!
//! Flatten nested documents into a single-level map whose keys are the paths
//! to each leaf, joined with a glue string.
//!
//! ```text
//! { "a": { "b": 1 }, "list": [10, 20] }   =>   { "a.b": 1, "list.0": 10, "list.1": 20 }
//! ```
//!
//! ## Key Features
//!
//! - **Serde Compatible**: flatten any `T: Serialize` with [`to_flat_map`]
//! - **Deterministic**: keys come out in depth-first traversal order, container keys in insertion order
//! - **Configurable**: custom glue, optional `null` leaves, key transforms
//! - **Stack Safe Traversal**: the flatten walk keeps pending nodes on a heap stack, not the call stack
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_flatkeys::{flatten, value, Value};
//!
//! let doc = value!({
//!     "user": { "name": "Alice", "roles": ["admin", "dev"] },
//!     "active": true
//! });
//!
//! let flat = flatten(&doc);
//! assert_eq!(flat.get("user.name"), Some(&Value::from("Alice")));
//! assert_eq!(flat.get("user.roles.1"), Some(&Value::from("dev")));
//! assert_eq!(flat.get("active"), Some(&Value::from(true)));
//! ```
//!
//! ### Flattening Rust Types
//!
//! ```rust
//! use serde::Serialize;
//! use serde_flatkeys::{to_flat_map, FlattenOptions};
//!
//! #[derive(Serialize)]
//! struct Config { server: Server }
//!
//! #[derive(Serialize)]
//! struct Server { host: String, port: u16 }
//!
//! let config = Config { server: Server { host: "localhost".into(), port: 8080 } };
//! let flat = to_flat_map(&config, &FlattenOptions::new().with_glue("__")).unwrap();
//!
//! let keys: Vec<_> = flat.keys().cloned().collect();
//! assert_eq!(keys, vec!["server__host", "server__port"]);
//! ```
//!
//! ## Behavior
//!
//! - Only containers are walked: a scalar or `null` input yields an empty map.
//! - Containers never appear as output values; empty containers contribute nothing.
//! - `null` leaves are skipped unless [`FlattenOptions::include_nullish`] is set.
//! - An empty glue is honored only with [`FlattenOptions::allow_empty_glue`].
//! - When two leaves produce the same key, the one visited last wins.
//!
//! ## Examples
//!
//! See the `demos/` directory, registered as cargo examples:
//!
//! - **`simple.rs`** - flattening a document with defaults
//! - **`custom_options.rs`** - glue, nullish leaves and key transforms
//! - **`dynamic_values.rs`** - flattening `serde_json` input with loose arguments
//! - **`macro.rs`** - building documents with the `value!` macro
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod flatten;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod transform;
pub mod value;

pub use error::{Error, Result};
pub use flatten::{flatten, flatten_args, flatten_with, flatten_with_options};
pub use map::Map;
pub use options::{FlattenOptions, DEFAULT_GLUE};
pub use ser::{to_value, ValueSerializer};
pub use transform::{BuiltinTransform, KeyTransform};
pub use value::{Number, Value, ValueKind};

use serde::Serialize;

/// Flattens any `T: Serialize` as configured by `options`.
///
/// The options are validated before `value` is converted, so an invalid key
/// transform is reported even if serialization would also fail.
///
/// # Examples
///
/// ```rust
/// use serde_flatkeys::{to_flat_map, FlattenOptions, Value};
/// use std::collections::BTreeMap;
///
/// let mut scores = BTreeMap::new();
/// scores.insert("alice", vec![3, 5]);
///
/// let flat = to_flat_map(&scores, &FlattenOptions::new()).unwrap();
/// assert_eq!(flat.get("alice.1"), Some(&Value::from(5)));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for an invalid key transform, or a
/// serde bridge error if `value` cannot be converted.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_flat_map<T>(value: &T, options: &FlattenOptions) -> Result<Map>
where
    T: ?Sized + Serialize,
{
    let flattener = flatten::Flattener::new(options)?;
    let document = to_value(value)?;
    Ok(flattener.run(&document))
}
