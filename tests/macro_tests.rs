use serde_flatkeys::{flatten, value, Map, Number, Value};

#[test]
fn test_value_macro_null() {
    assert_eq!(value!(null), Value::Null);
}

#[test]
fn test_value_macro_booleans() {
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    assert_eq!(value!(42), Value::Number(Number::Integer(42)));
    assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(value!(-123), Value::Number(Number::Integer(-123)));
}

#[test]
fn test_value_macro_strings() {
    assert_eq!(value!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(value!(""), Value::String(String::new()));
}

#[test]
fn test_value_macro_arrays() {
    assert_eq!(value!([]), Value::Array(vec![]));

    let arr = value!([1, "two", null, [3]]);
    let items = arr.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[1], Value::from("two"));
    assert_eq!(items[2], Value::Null);
    assert_eq!(items[3], Value::Array(vec![Value::from(3)]));
}

#[test]
fn test_value_macro_objects() {
    assert_eq!(value!({}), Value::Object(Map::new()));

    let obj = value!({
        "name": "Alice",
        "age": 30,
        "address": { "city": "Paris" },
    });
    let map = obj.as_object().unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map.get("age"), Some(&Value::from(30)));
    assert!(map.get("address").is_some_and(Value::is_object));
}

#[test]
fn test_value_macro_expressions() {
    let count = 7u32;
    let doc = value!({ "count": count, "neg": (-1), "list": (vec![1, 2]) });
    let flat = flatten(&doc);

    let keys: Vec<_> = flat.keys().cloned().collect();
    assert_eq!(keys, vec!["count", "neg", "list.0", "list.1"]);
    assert_eq!(flat.get("neg"), Some(&Value::from(-1)));
}
