//! Error types for flattening and for the serde bridge.
//!
//! ## Error Categories
//!
//! - **Invalid Arguments**: a key transform that cannot be called, whether set
//!   directly or named in a loose options object. This is the only error the flatten
//!   operations raise, and it is raised before any traversal happens.
//! - **Non-string Keys**: map keys the serde bridge cannot turn into path segments
//! - **Custom**: errors reported by a `Serialize` implementation
//!
//! ## Examples
//!
//! ```rust
//! use serde_flatkeys::{flatten_with_options, value, Error, FlattenOptions};
//!
//! let options = FlattenOptions::new().with_named_transform("not-a-function");
//! let result = flatten_with_options(&value!({ "a": 1 }), &options);
//!
//! assert!(matches!(result, Err(Error::InvalidArgument(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An argument passed to a flatten call was rejected before traversal
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A map key could not be rendered as a path segment
    #[error("Map key must be a string, found {0}")]
    KeyMustBeString(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid argument error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_flatkeys::Error;
    ///
    /// let err = Error::invalid_argument("value of keyTransform must be a function");
    /// assert!(err.to_string().contains("keyTransform"));
    /// ```
    pub fn invalid_argument<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidArgument(msg.to_string())
    }

    /// Creates an error for a map key that is not string-like.
    pub fn key_must_be_string(found: &str) -> Self {
        Error::KeyMustBeString(found.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::invalid_argument("bad transform");
        assert_eq!(err.to_string(), "Invalid argument: bad transform");
    }

    #[test]
    fn test_key_must_be_string_display() {
        let err = Error::key_must_be_string("array");
        assert_eq!(err.to_string(), "Map key must be a string, found array");
    }

    #[test]
    fn test_serde_custom() {
        let err = <Error as serde::ser::Error>::custom("boom");
        assert_eq!(err, Error::Custom("boom".to_string()));
    }
}
