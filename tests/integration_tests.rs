use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_flatkeys::{
    flatten, flatten_with_options, to_flat_map, to_value, FlattenOptions, Map, Number, Value,
};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    note: Option<String>,
}

fn order() -> Order {
    Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 49.99,
                quantity: 1,
            },
        ],
        note: None,
    }
}

#[test]
fn test_nested_struct() {
    let flat = to_flat_map(&order(), &FlattenOptions::new()).unwrap();

    let keys: Vec<_> = flat.keys().cloned().collect();
    assert_eq!(
        keys,
        vec![
            "order_id",
            "customer.id",
            "customer.name",
            "customer.active",
            "customer.tags.0",
            "items.0.sku",
            "items.0.price",
            "items.0.quantity",
            "items.1.sku",
            "items.1.price",
            "items.1.quantity",
        ]
    );
    assert_eq!(
        flat.get("items.1.price"),
        Some(&Value::Number(Number::Float(49.99)))
    );
}

#[test]
fn test_nested_struct_with_nullish() {
    let options = FlattenOptions::new().include_nullish(true);
    let flat = to_flat_map(&order(), &options).unwrap();
    assert_eq!(flat.keys().last().map(String::as_str), Some("note"));
    assert_eq!(flat.get("note"), Some(&Value::Null));
}

#[test]
fn test_json_document_order_is_preserved() {
    let json = r#"{"z": {"2": "two", "1": "one"}, "a": [{"k": null}, 3.5]}"#;
    let doc: Value = serde_json::from_str(json).unwrap();

    let options = FlattenOptions::new().include_nullish(true);
    let flat = flatten_with_options(&doc, &options).unwrap();

    let keys: Vec<_> = flat.keys().cloned().collect();
    assert_eq!(keys, vec!["z.2", "z.1", "a.0.k", "a.1"]);
}

#[test]
fn test_flat_map_serializes_to_json() {
    let doc: Value = serde_json::from_str(r#"{"a": {"b": 1, "c": [true, "x"]}}"#).unwrap();
    let flat = flatten(&doc);

    let json = serde_json::to_string(&flat).unwrap();
    assert_eq!(json, r#"{"a.b":1,"a.c.0":true,"a.c.1":"x"}"#);
}

#[test]
fn test_flat_map_deserializes_from_json() {
    let flat: Map = serde_json::from_str(r#"{"a.b": 1, "c": null}"#).unwrap();
    assert_eq!(flat.len(), 2);
    assert_eq!(flat.get("c"), Some(&Value::Null));

    // Flattening an already-flat map leaves it as-is
    let again = flatten_with_options(
        &Value::Object(flat.clone()),
        &FlattenOptions::new().include_nullish(true),
    )
    .unwrap();
    assert_eq!(again, flat);
}

#[test]
fn test_serde_json_value_input() {
    let doc = serde_json::json!({
        "server": { "host": "localhost", "ports": [80, 443] },
        "debug": false
    });

    let flat = to_flat_map(&doc, &FlattenOptions::new().with_glue("_")).unwrap();
    assert_eq!(flat.get("server_ports_1"), Some(&Value::from(443)));
    assert_eq!(flat.get("debug"), Some(&Value::from(false)));
}

#[test]
fn test_dates_and_bigints_are_leaves() {
    let when = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let mut inner = Map::new();
    inner.insert("at".to_string(), Value::from(when));
    inner.insert(
        "big".to_string(),
        Value::BigInt("123456789012345678901234567890".parse().unwrap()),
    );
    let mut root = Map::new();
    root.insert("event".to_string(), Value::Object(inner));

    let flat = flatten(&Value::Object(root));
    assert_eq!(flat.get("event.at"), Some(&Value::Date(when)));
    assert!(matches!(flat.get("event.big"), Some(Value::BigInt(_))));

    let json = serde_json::to_string(&flat).unwrap();
    assert!(json.contains("\"event.at\":\"2024-01-02T03:04:05+00:00\""));
    assert!(json.contains("\"event.big\":\"123456789012345678901234567890\""));
}

#[test]
fn test_to_value_matches_json_shape() {
    let value = to_value(&order()).unwrap();
    let via_json: Value = serde_json::from_str(&serde_json::to_string(&order()).unwrap()).unwrap();
    assert_eq!(flatten(&value), flatten(&via_json));
}
