//! Configuration options for flattening.
//!
//! [`FlattenOptions`] carries everything a flatten call can be configured with:
//!
//! - `glue`: separator inserted between path segments (default `"."`)
//! - `include_nullish`: whether `null` leaves are written to the output
//! - `allow_empty_glue`: whether an empty glue is honored instead of falling back to `"."`
//! - `key_transform`: optional rewrite of container keys, see [`KeyTransform`]
//!
//! ## Examples
//!
//! ```rust
//! use serde_flatkeys::{flatten_with_options, value, FlattenOptions};
//!
//! let data = value!({ "a": { "b": 1, "c": null } });
//!
//! let options = FlattenOptions::new().with_glue("/").include_nullish(true);
//! let flat = flatten_with_options(&data, &options).unwrap();
//!
//! let keys: Vec<_> = flat.keys().cloned().collect();
//! assert_eq!(keys, vec!["a/b", "a/c"]);
//! ```

use crate::transform::{BuiltinTransform, KeyTransform};
use crate::{Error, Result, Value};

/// Separator used when no usable glue is configured.
pub const DEFAULT_GLUE: &str = ".";

/// Per-call configuration for the flattener.
///
/// # Examples
///
/// ```rust
/// use serde_flatkeys::FlattenOptions;
///
/// // Empty glue falls back to "." unless explicitly allowed
/// assert_eq!(FlattenOptions::new().with_glue("").resolved_glue(), ".");
/// assert_eq!(
///     FlattenOptions::new().with_glue("").allow_empty_glue(true).resolved_glue(),
///     ""
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct FlattenOptions {
    pub glue: Option<String>,
    pub include_nullish: bool,
    pub allow_empty_glue: bool,
    pub key_transform: Option<KeyTransform>,
}

impl FlattenOptions {
    /// Creates default options (`"."` glue, nullish leaves skipped, no key transform).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the glue placed between path segments.
    #[must_use]
    pub fn with_glue(mut self, glue: impl Into<String>) -> Self {
        self.glue = Some(glue.into());
        self
    }

    /// Writes `null` leaves to the output instead of skipping them.
    #[must_use]
    pub fn include_nullish(mut self, include: bool) -> Self {
        self.include_nullish = include;
        self
    }

    /// Honors an empty glue instead of falling back to [`DEFAULT_GLUE`].
    #[must_use]
    pub fn allow_empty_glue(mut self, allow: bool) -> Self {
        self.allow_empty_glue = allow;
        self
    }

    /// Rewrites every container key through `f(prefix, key)`.
    ///
    /// `prefix` is the parent path with its trailing glue, or `""` at the root.
    ///
    /// ```rust
    /// use serde_flatkeys::{flatten_with_options, value, FlattenOptions};
    ///
    /// let options = FlattenOptions::new()
    ///     .with_key_transform(|prefix, key| if prefix.is_empty() { key.to_uppercase() } else { key.to_string() });
    /// let flat = flatten_with_options(&value!({ "a": { "b": 1 } }), &options).unwrap();
    /// assert!(flat.contains_key("A.b"));
    /// ```
    #[must_use]
    pub fn with_key_transform<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        self.key_transform = Some(KeyTransform::custom(f));
        self
    }

    /// Rewrites every container key with a built-in case conversion.
    #[must_use]
    pub fn with_builtin_transform(mut self, transform: BuiltinTransform) -> Self {
        self.key_transform = Some(KeyTransform::Builtin(transform));
        self
    }

    /// Rewrites every container key with the built-in transform called `name`.
    ///
    /// The name is checked when a flatten call starts; an unknown name makes
    /// that call fail with [`Error::InvalidArgument`].
    #[must_use]
    pub fn with_named_transform(mut self, name: impl Into<String>) -> Self {
        self.key_transform = Some(KeyTransform::Named(name.into()));
        self
    }

    /// The glue a flatten call will actually use.
    ///
    /// A non-empty glue is used as-is. An empty glue is used only when
    /// `allow_empty_glue` is set. Anything else yields [`DEFAULT_GLUE`].
    #[must_use]
    pub fn resolved_glue(&self) -> &str {
        resolve_glue(self.glue.as_deref(), self.allow_empty_glue)
    }

    /// Reads options from a loose options object.
    ///
    /// Recognized fields are `glue`, `includeNullish`, `allowEmptyGlue` and
    /// `keyTransform`. Boolean fields are coerced with [`Value::is_truthy`].
    /// A `glue` that is not a string is ignored. A falsy `keyTransform`
    /// (`null`, `false`, `0`, `""`) counts as absent; any other value must be
    /// the name of a built-in transform. An `options` value that is not an
    /// object carries no fields, so the defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `keyTransform` is set to a truthy
    /// value that is not a known transform name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_flatkeys::{value, Error, FlattenOptions};
    ///
    /// let options = FlattenOptions::from_value(&value!({ "glue": "_", "keyTransform": "lowercase" })).unwrap();
    /// assert_eq!(options.resolved_glue(), "_");
    ///
    /// let err = FlattenOptions::from_value(&value!({ "keyTransform": 42 })).unwrap_err();
    /// assert!(matches!(err, Error::InvalidArgument(_)));
    /// ```
    pub fn from_value(options: &Value) -> Result<Self> {
        let obj = match options {
            Value::Object(obj) => obj,
            other => {
                if !other.is_null() {
                    tracing::debug!(found = other.type_name(), "options is not an object, using defaults");
                }
                return Ok(Self::default());
            }
        };

        let key_transform = match obj.get("keyTransform") {
            None => None,
            Some(value) if !value.is_truthy() => None,
            Some(Value::String(name)) => {
                let builtin: BuiltinTransform = name.parse()?;
                Some(KeyTransform::Builtin(builtin))
            }
            Some(other) => {
                tracing::debug!(found = other.type_name(), "rejected non-callable key transform");
                return Err(Error::invalid_argument(format!(
                    "value of keyTransform must be a function returning a string, found {}",
                    other.type_name()
                )));
            }
        };

        Ok(FlattenOptions {
            glue: obj.get("glue").and_then(Value::as_str).map(str::to_string),
            include_nullish: obj.get("includeNullish").is_some_and(Value::is_truthy),
            allow_empty_glue: obj.get("allowEmptyGlue").is_some_and(Value::is_truthy),
            key_transform,
        })
    }

    /// Builds options from the loose four-argument calling convention.
    ///
    /// `glue` and `include_nullish`, when supplied, override the fields of
    /// the `options` object. A supplied `glue` that is not a string counts as
    /// no glue, so the default applies.
    ///
    /// # Errors
    ///
    /// Same as [`FlattenOptions::from_value`].
    pub fn from_args(
        glue: Option<&Value>,
        include_nullish: Option<&Value>,
        options: Option<&Value>,
    ) -> Result<Self> {
        let mut resolved = match options {
            Some(options) => Self::from_value(options)?,
            None => Self::default(),
        };
        if let Some(glue) = glue {
            resolved.glue = glue.as_str().map(str::to_string);
        }
        if let Some(flag) = include_nullish {
            resolved.include_nullish = flag.is_truthy();
        }
        Ok(resolved)
    }
}

pub(crate) fn resolve_glue(glue: Option<&str>, allow_empty_glue: bool) -> &str {
    match glue {
        Some(glue) if !glue.is_empty() => glue,
        Some("") if allow_empty_glue => "",
        _ => DEFAULT_GLUE,
    }
}
