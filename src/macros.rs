/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Object keys must be string literals. Nested values must be single token
/// trees, so wrap negative numbers and other expressions in parentheses.
///
/// ```rust
/// use serde_flatkeys::{value, Value};
///
/// let doc = value!({
///     "name": "Alice",
///     "offset": (-3),
///     "tags": ["a", null]
/// });
/// assert_eq!(doc.as_object().and_then(|o| o.get("offset")), Some(&Value::from(-3)));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Anything else goes through the serde bridge
    ($s:expr) => {
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Map, Number, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(42), Value::Number(Number::Integer(42)));
        assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_nested() {
        let doc = value!({ "a": [1, { "b": null }], "c": {} });
        let obj = doc.as_object().unwrap();

        let a = obj.get("a").and_then(Value::as_array).unwrap();
        assert_eq!(a[0], Value::from(1));
        assert_eq!(
            a[1].as_object().and_then(|o| o.get("b")),
            Some(&Value::Null)
        );
        assert_eq!(obj.get("c"), Some(&Value::Object(Map::new())));
    }

    #[test]
    fn test_value_macro_keeps_key_order() {
        let doc = value!({ "z": 1, "a": 2, "10": 3 });
        let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "10"]);
    }
}
