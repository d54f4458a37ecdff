//! Integration tests for Record and path addressing.

use dohmane::foundation::{record, KeyPath, Record, Value};

// =============================================================================
// Field Access
// =============================================================================

#[test]
fn records_are_persistent() {
    let r1 = record! { "id" => 1 };
    let r2 = r1.set("name", "A");
    let r3 = r2.remove("id");

    assert_eq!(r1.len(), 1);
    assert_eq!(r2.len(), 2);
    assert_eq!(r3.len(), 1);
    assert_eq!(r3.get("name"), Some(&Value::from("A")));
    assert_eq!(r1.get("name"), None);
}

#[test]
fn record_equality_is_structural() {
    let a = record! { "id" => 1, "name" => "A" };
    let b = record! { "name" => "A", "id" => 1 };
    assert_eq!(a, b);

    let c = b.set("name", "B");
    assert_ne!(a, c);
}

// =============================================================================
// Path Addressing
// =============================================================================

#[test]
fn get_in_and_set_in_round_trip() {
    let path = KeyPath::from(["meta", "owner", "id"]);
    let rec = Record::new().set_in(&path, 9);

    assert_eq!(rec.get_in(&path), Some(&Value::Int(9)));
    // Intermediates were created as records.
    assert!(rec.get("meta").and_then(Value::as_record).is_some());
}

#[test]
fn set_in_shares_unrelated_structure() {
    let rec = record! {
        "id" => 1,
        "meta" => record! { "a" => 1, "b" => 2 },
    };
    let updated = rec.set_in(&KeyPath::from(["meta", "a"]), 10);

    assert_eq!(
        updated.get_in(&KeyPath::from(["meta", "a"])),
        Some(&Value::Int(10))
    );
    assert_eq!(
        updated.get_in(&KeyPath::from(["meta", "b"])),
        Some(&Value::Int(2))
    );
    // Original untouched.
    assert_eq!(
        rec.get_in(&KeyPath::from(["meta", "a"])),
        Some(&Value::Int(1))
    );
}

#[test]
fn try_from_value_raises_records_only() {
    assert!(Record::try_from(Value::from(record! { "id" => 1 })).is_ok());
    assert!(Record::try_from(Value::Nil).is_err());
    assert!(Record::try_from(Value::from(vec![1i64])).is_err());
}
