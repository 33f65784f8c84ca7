//! Key transforms applied to keyed-container keys.
//!
//! A transform receives the parent prefix (the parent path with its trailing
//! glue already appended, or `""` at the root) and the raw key, and returns
//! the path segment to use. Sequence indices are never transformed.
//!
//! ## Examples
//!
//! ```rust
//! use serde_flatkeys::{flatten_with_options, value, BuiltinTransform, FlattenOptions};
//!
//! let options = FlattenOptions::new().with_builtin_transform(BuiltinTransform::SnakeCase);
//! let flat = flatten_with_options(&value!({ "userName": { "firstName": "Ada" } }), &options).unwrap();
//!
//! assert!(flat.contains_key("user_name.first_name"));
//! ```

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Signature of a caller-supplied key transform: `(prefix, key) -> segment`.
pub type KeyTransformFn = dyn Fn(&str, &str) -> String + Send + Sync;

/// A key transform as configured on [`FlattenOptions`](crate::FlattenOptions).
#[derive(Clone)]
pub enum KeyTransform {
    /// A caller closure.
    Custom(Arc<KeyTransformFn>),
    /// One of the built-in case conversions.
    Builtin(BuiltinTransform),
    /// A built-in looked up by name when the flatten call starts.
    Named(String),
}

impl KeyTransform {
    /// Wraps a closure as a key transform.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        KeyTransform::Custom(Arc::new(f))
    }

    /// Turns this transform into something that can be called.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when a named transform does not
    /// refer to a built-in.
    pub(crate) fn resolve(&self) -> Result<ResolvedTransform<'_>> {
        match self {
            KeyTransform::Custom(f) => Ok(ResolvedTransform::Custom(f.as_ref())),
            KeyTransform::Builtin(b) => Ok(ResolvedTransform::Builtin(*b)),
            KeyTransform::Named(name) => name.parse().map(ResolvedTransform::Builtin),
        }
    }
}

impl fmt::Debug for KeyTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyTransform::Custom(_) => f.write_str("Custom(<fn>)"),
            KeyTransform::Builtin(b) => f.debug_tuple("Builtin").field(b).finish(),
            KeyTransform::Named(name) => f.debug_tuple("Named").field(name).finish(),
        }
    }
}

impl From<BuiltinTransform> for KeyTransform {
    fn from(value: BuiltinTransform) -> Self {
        KeyTransform::Builtin(value)
    }
}

/// A transform that has passed validation for the current call.
#[derive(Clone, Copy)]
pub(crate) enum ResolvedTransform<'a> {
    Custom(&'a KeyTransformFn),
    Builtin(BuiltinTransform),
}

impl ResolvedTransform<'_> {
    pub(crate) fn apply(&self, prefix: &str, key: &str) -> String {
        match self {
            ResolvedTransform::Custom(f) => f(prefix, key),
            ResolvedTransform::Builtin(b) => b.apply(key),
        }
    }
}

/// Case conversions available without writing a closure.
///
/// ```rust
/// use serde_flatkeys::BuiltinTransform;
///
/// assert_eq!(BuiltinTransform::SnakeCase.apply("HTTPServerPort"), "http_server_port");
/// assert_eq!(BuiltinTransform::CamelCase.apply("max-retry_count"), "maxRetryCount");
/// assert_eq!("kebab-case".parse::<BuiltinTransform>().unwrap(), BuiltinTransform::KebabCase);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinTransform {
    Lowercase,
    Uppercase,
    SnakeCase,
    KebabCase,
    CamelCase,
}

impl BuiltinTransform {
    /// Canonical name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BuiltinTransform::Lowercase => "lowercase",
            BuiltinTransform::Uppercase => "uppercase",
            BuiltinTransform::SnakeCase => "snake_case",
            BuiltinTransform::KebabCase => "kebab-case",
            BuiltinTransform::CamelCase => "camelCase",
        }
    }

    /// Applies the conversion to a single key.
    #[must_use]
    pub fn apply(&self, key: &str) -> String {
        match self {
            BuiltinTransform::Lowercase => key.to_lowercase(),
            BuiltinTransform::Uppercase => key.to_uppercase(),
            BuiltinTransform::SnakeCase => join_words(key, "_"),
            BuiltinTransform::KebabCase => join_words(key, "-"),
            BuiltinTransform::CamelCase => {
                let mut out = String::with_capacity(key.len());
                for (i, word) in split_words(key).iter().enumerate() {
                    if i == 0 {
                        out.push_str(word);
                    } else {
                        let mut chars = word.chars();
                        if let Some(first) = chars.next() {
                            out.extend(first.to_uppercase());
                            out.push_str(chars.as_str());
                        }
                    }
                }
                out
            }
        }
    }
}

impl fmt::Display for BuiltinTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuiltinTransform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lowercase" | "lower" => Ok(BuiltinTransform::Lowercase),
            "uppercase" | "upper" => Ok(BuiltinTransform::Uppercase),
            "snake_case" | "snake" => Ok(BuiltinTransform::SnakeCase),
            "kebab-case" | "kebab" => Ok(BuiltinTransform::KebabCase),
            "camelCase" | "camel" => Ok(BuiltinTransform::CamelCase),
            other => {
                tracing::debug!(name = other, "rejected unknown key transform");
                Err(Error::invalid_argument(format!(
                    "value of keyTransform must be a function returning a string, \
                     got unknown transform {:?}",
                    other
                )))
            }
        }
    }
}

fn join_words(key: &str, sep: &str) -> String {
    split_words(key).join(sep)
}

/// Splits a key into lowercase words on `_`, `-`, whitespace and case
/// boundaries. An acronym run ends before its last capital when a lowercase
/// letter follows (`HTTPServer` -> `http`, `server`).
fn split_words(key: &str) -> Vec<String> {
    let chars: Vec<char> = key.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("userName"), vec!["user", "name"]);
        assert_eq!(split_words("HTTPServer"), vec!["http", "server"]);
        assert_eq!(split_words("already_snake"), vec!["already", "snake"]);
        assert_eq!(split_words("v2Api"), vec!["v2", "api"]);
        assert!(split_words("__").is_empty());
    }

    #[test]
    fn test_builtin_apply() {
        assert_eq!(BuiltinTransform::Lowercase.apply("ABC"), "abc");
        assert_eq!(BuiltinTransform::Uppercase.apply("abc"), "ABC");
        assert_eq!(BuiltinTransform::SnakeCase.apply("fooBar"), "foo_bar");
        assert_eq!(BuiltinTransform::KebabCase.apply("FooBar"), "foo-bar");
        assert_eq!(BuiltinTransform::CamelCase.apply("foo_bar"), "fooBar");
    }

    #[test]
    fn test_names_roundtrip_through_from_str() {
        for b in [
            BuiltinTransform::Lowercase,
            BuiltinTransform::Uppercase,
            BuiltinTransform::SnakeCase,
            BuiltinTransform::KebabCase,
            BuiltinTransform::CamelCase,
        ] {
            assert_eq!(b.as_str().parse::<BuiltinTransform>().unwrap(), b);
        }
    }

    #[test]
    fn test_unknown_name_is_invalid_argument() {
        let err = "not-a-function".parse::<BuiltinTransform>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_resolve_named() {
        let t = KeyTransform::Named("upper".to_string());
        let resolved = t.resolve().unwrap();
        assert_eq!(resolved.apply("x.", "k"), "K");

        assert!(KeyTransform::Named("shout".to_string()).resolve().is_err());
    }

    #[test]
    fn test_custom_receives_prefix() {
        let t = KeyTransform::custom(|prefix, key| format!("{}|{}", prefix.len(), key));
        let resolved = t.resolve().unwrap();
        assert_eq!(resolved.apply("ab.", "c"), "3|c");
    }
}
