//! Integration tests for the Value type.

use dohmane::foundation::{record, Value};

// =============================================================================
// Equality
// =============================================================================

#[test]
fn scalar_equality() {
    assert_eq!(Value::Int(1), Value::Int(1));
    assert_ne!(Value::Int(1), Value::Int(2));
    assert_ne!(Value::Int(1), Value::Float(1.0));
    assert_eq!(Value::from("a"), Value::from("a"));
    assert_eq!(Value::Nil, Value::Nil);
}

#[test]
fn structural_equality_recurses_through_records() {
    let a = Value::from(record! {
        "id" => 1,
        "meta" => record! { "tier" => "free" },
    });
    let b = Value::from(record! {
        "meta" => record! { "tier" => "free" },
        "id" => 1,
    });

    assert_eq!(a, b);
}

#[test]
fn structural_equality_recurses_through_lists() {
    let a = Value::from(vec![Value::Int(1), Value::from("x")]);
    let b = Value::from(vec![Value::Int(1), Value::from("x")]);
    let c = Value::from(vec![Value::from("x"), Value::Int(1)]);

    assert_eq!(a, b);
    assert_ne!(a, c); // lists are ordered
}

// =============================================================================
// Keys
// =============================================================================

#[test]
fn values_work_as_map_keys() {
    use dohmane::foundation::DmMap;

    let m = DmMap::new()
        .insert(Value::Int(-1), "local")
        .insert(Value::Int(5), "server")
        .insert(Value::from("uuid-1"), "string-keyed");

    assert_eq!(m.get(&Value::Int(-1)), Some(&"local"));
    assert_eq!(m.get(&Value::Int(5)), Some(&"server"));
    assert_eq!(m.get(&Value::from("uuid-1")), Some(&"string-keyed"));
}

// =============================================================================
// Conversions
// =============================================================================

#[test]
fn from_conversions() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(7i64), Value::Int(7));
    assert_eq!(Value::from(7i32), Value::Int(7));
    assert_eq!(Value::from(2.5), Value::Float(2.5));
    assert_eq!(Value::from("s"), Value::String("s".into()));
}

#[test]
fn display_renders_literals() {
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::Int(-2).to_string(), "-2");
    assert_eq!(Value::from("a").to_string(), "a");
    assert_eq!(
        Value::from(vec![1i64, 2]).to_string(),
        "[1, 2]"
    );
}
