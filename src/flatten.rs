//! Depth-first flattening of nested documents.
//!
//! The walk visits nodes in pre-order: sequence children by ascending index,
//! container children in insertion order. Every leaf is written under the
//! path built from the segments above it, joined with the configured glue.
//! When two leaves produce the same path, the one visited last wins.
//!
//! The walk itself does not recurse: pending nodes live on a heap stack.
//! Building, cloning, comparing and dropping a `Value` still recurse, so
//! extremely deep documents remain limited by those operations.

use crate::options::{resolve_glue, DEFAULT_GLUE};
use crate::transform::ResolvedTransform;
use crate::{FlattenOptions, Map, Result, Value};
use std::rc::Rc;

/// Flattens `input` with the default configuration.
///
/// Keys are joined with `"."`, `null` leaves are skipped and keys are used
/// verbatim. A non-container `input` yields an empty map.
///
/// # Examples
///
/// ```rust
/// use serde_flatkeys::{flatten, value, Value};
///
/// let flat = flatten(&value!({ "a": { "b": 1 }, "list": [10, 20] }));
///
/// let keys: Vec<_> = flat.keys().cloned().collect();
/// assert_eq!(keys, vec!["a.b", "list.0", "list.1"]);
/// assert_eq!(flat.get("list.1"), Some(&Value::from(20)));
///
/// assert!(flatten(&value!(5)).is_empty());
/// ```
#[must_use]
pub fn flatten(input: &Value) -> Map {
    Flattener {
        glue: DEFAULT_GLUE,
        include_nullish: false,
        transform: None,
    }
    .run(input)
}

/// Flattens `input` as configured by `options`.
///
/// # Examples
///
/// ```rust
/// use serde_flatkeys::{flatten_with_options, value, FlattenOptions, Value};
///
/// let options = FlattenOptions::new().with_glue("").allow_empty_glue(true);
/// let flat = flatten_with_options(&value!({ "a": { "b": 1 } }), &options).unwrap();
/// assert_eq!(flat.get("ab"), Some(&Value::from(1)));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the
/// configured key transform cannot be resolved. Nothing is traversed in that
/// case.
pub fn flatten_with_options(input: &Value, options: &FlattenOptions) -> Result<Map> {
    Ok(Flattener::new(options)?.run(input))
}

/// Flattens `input` with positional `glue` and `include_nullish` arguments.
///
/// `options.glue` and `options.include_nullish` are not read: the positional
/// `glue` and `include_nullish` replace them, and a `None` glue means the
/// default `"."`. Only `allow_empty_glue` and the key transform are taken
/// from `options`.
///
/// # Examples
///
/// ```rust
/// use serde_flatkeys::{flatten_with, value, FlattenOptions, Value};
///
/// let data = value!({ "a": null, "b": 1 });
/// let flat = flatten_with(&data, Some("."), true, &FlattenOptions::new()).unwrap();
/// assert_eq!(flat.get("a"), Some(&Value::Null));
/// assert_eq!(flat.len(), 2);
/// ```
///
/// # Errors
///
/// Same as [`flatten_with_options`].
pub fn flatten_with(
    input: &Value,
    glue: Option<&str>,
    include_nullish: bool,
    options: &FlattenOptions,
) -> Result<Map> {
    let flattener = Flattener {
        glue: resolve_glue(glue, options.allow_empty_glue),
        include_nullish,
        transform: resolve_transform(options)?,
    };
    Ok(flattener.run(input))
}

/// Flattens `input` with every argument supplied as a loose [`Value`].
///
/// This is the form to use when arguments arrive at runtime, for example
/// from a JSON request. See [`FlattenOptions::from_args`] for how the
/// arguments are read.
///
/// # Examples
///
/// ```rust
/// use serde_flatkeys::{flatten_args, value, Error};
///
/// let data = value!({ "A": { "B": 1 } });
/// let flat = flatten_args(&data, None, None, Some(&value!({ "keyTransform": "lowercase" }))).unwrap();
/// assert!(flat.contains_key("a.b"));
///
/// let err = flatten_args(&data, None, None, Some(&value!({ "keyTransform": true }))).unwrap_err();
/// assert!(matches!(err, Error::InvalidArgument(_)));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the
/// options cannot be read.
pub fn flatten_args(
    input: &Value,
    glue: Option<&Value>,
    include_nullish: Option<&Value>,
    options: Option<&Value>,
) -> Result<Map> {
    let options = FlattenOptions::from_args(glue, include_nullish, options)?;
    flatten_with_options(input, &options)
}

fn resolve_transform(options: &FlattenOptions) -> Result<Option<ResolvedTransform<'_>>> {
    options
        .key_transform
        .as_ref()
        .map(|t| t.resolve())
        .transpose()
}

/// Validated configuration for one flatten call.
pub(crate) struct Flattener<'a> {
    glue: &'a str,
    include_nullish: bool,
    transform: Option<ResolvedTransform<'a>>,
}

/// A node waiting to be visited. Its path is `prefix` followed by `segment`.
struct Pending<'v> {
    value: &'v Value,
    prefix: Rc<str>,
    segment: Segment<'v>,
}

enum Segment<'v> {
    Root,
    Index(usize),
    Key(&'v str),
}

impl<'a> Flattener<'a> {
    pub(crate) fn new(options: &'a FlattenOptions) -> Result<Self> {
        Ok(Flattener {
            glue: options.resolved_glue(),
            include_nullish: options.include_nullish,
            transform: resolve_transform(options)?,
        })
    }

    pub(crate) fn run(&self, input: &Value) -> Map {
        tracing::debug!(
            glue = self.glue,
            include_nullish = self.include_nullish,
            key_transform = self.transform.is_some(),
            "flattening {}",
            input.type_name()
        );

        let mut output = Map::new();
        if !input.is_container() {
            return output;
        }

        let mut stack = vec![Pending {
            value: input,
            prefix: Rc::from(""),
            segment: Segment::Root,
        }];

        while let Some(node) = stack.pop() {
            let path = self.path_of(&node);

            match node.value {
                Value::Null => {
                    if self.include_nullish {
                        output.insert(path, Value::Null);
                    }
                }
                Value::Array(items) => {
                    let prefix = self.child_prefix(path);
                    // Reversed so the lowest index is popped first
                    stack.extend(items.iter().enumerate().rev().map(|(i, item)| Pending {
                        value: item,
                        prefix: Rc::clone(&prefix),
                        segment: Segment::Index(i),
                    }));
                }
                Value::Object(obj) => {
                    let prefix = self.child_prefix(path);
                    stack.extend(obj.iter().rev().map(|(key, item)| Pending {
                        value: item,
                        prefix: Rc::clone(&prefix),
                        segment: Segment::Key(key),
                    }));
                }
                scalar => {
                    output.insert(path, scalar.clone());
                }
            }
        }

        tracing::debug!(entries = output.len(), "flattened");
        output
    }

    /// Builds the full path of a node when it is visited, so key transforms
    /// run in the same order as a recursive walk would call them.
    fn path_of(&self, node: &Pending<'_>) -> String {
        match node.segment {
            Segment::Root => String::new(),
            Segment::Index(i) => format!("{}{}", node.prefix, i),
            Segment::Key(key) => match &self.transform {
                Some(t) => {
                    let segment = t.apply(&node.prefix, key);
                    format!("{}{}", node.prefix, segment)
                }
                None => format!("{}{}", node.prefix, key),
            },
        }
    }

    /// The prefix handed to children: the path plus glue, or nothing at an
    /// empty path.
    fn child_prefix(&self, mut path: String) -> Rc<str> {
        if !path.is_empty() {
            path.push_str(self.glue);
        }
        Rc::from(path)
    }
}
