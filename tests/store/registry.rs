//! Registry construction and facade lookup.

use dohmane::foundation::ErrorKind;
use dohmane::store::{Registry, Typedef};

use crate::ad_registry;

#[test]
fn facades_resolve_for_every_registered_type() {
    let registry = ad_registry();
    for name in ["Account", "Campaign", "Ad"] {
        assert!(registry.entity(name).is_ok(), "{name} should resolve");
    }
}

#[test]
fn unknown_type_is_an_error() {
    let registry = ad_registry();
    let err = registry.entity("Creative").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnregisteredType(_)));
}

#[test]
fn duplicate_typedefs_are_rejected() {
    let err = Registry::new([
        Typedef::new("Account", ["id"]),
        Typedef::new("Account", ["id"]),
    ])
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateType(_)));
}

#[test]
fn relations_must_reference_registered_types() {
    let err = Registry::new([
        Typedef::new("Campaign", ["id"]).with_inverse_foreign_key("Ad", ["campaign_id"])
    ])
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnregisteredType(_)));
}

#[test]
fn facade_exposes_name() {
    let registry = ad_registry();
    assert_eq!(registry.entity("Ad").unwrap().name(), "Ad");
}
