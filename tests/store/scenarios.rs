//! End-to-end editing scenarios over the Account/Campaign/Ad chain.

use dohmane::foundation::{record, Value};
use dohmane::store::{EntityState, Store};

use crate::ad_registry;

#[test]
fn create_then_accept_remaps_child_fks() {
    let registry = ad_registry();
    let account = registry.entity("Account").unwrap();
    let campaign = registry.entity("Campaign").unwrap();

    let (store, _, account_key) = account
        .current()
        .create(&Store::new(), Some(record! { "name" => "A" }.into()))
        .unwrap();
    assert_eq!(account_key, Value::Int(-1));

    let (store, _, campaign_key) = campaign
        .current()
        .create(
            &store,
            Some(record! { "name" => "C", "account_id" => -1 }.into()),
        )
        .unwrap();
    assert_eq!(campaign_key, Value::Int(-2));

    let store = account
        .current()
        .accept(
            &store,
            &Value::Int(-1),
            record! { "id" => 5, "name" => "A" }.into(),
        )
        .unwrap();

    let camp = campaign.current().get(&store, &Value::Int(-2)).unwrap();
    assert_eq!(camp.get("account_id"), Some(&Value::Int(5)));

    let accounts = account.current().get_all(&store);
    assert_eq!(accounts.len(), 1);
    assert_eq!(
        accounts.get(&Value::Int(5)),
        Some(&record! { "id" => 5, "name" => "A" })
    );
    assert_eq!(account.current().get_all(&store), account.initial().get_all(&store));
}

#[test]
fn delete_cascades_through_the_relation_tree() {
    let registry = ad_registry();
    let account = registry.entity("Account").unwrap();
    let campaign = registry.entity("Campaign").unwrap();
    let ad = registry.entity("Ad").unwrap();

    let store = account
        .initial()
        .load(&Store::new(), [record! { "id" => 1 }.into()])
        .unwrap();
    let store = campaign
        .initial()
        .load(&store, [record! { "id" => 2, "account_id" => 1 }.into()])
        .unwrap();
    let store = ad
        .initial()
        .load(&store, [record! { "id" => 3, "campaign_id" => 2 }.into()])
        .unwrap();

    let store = account.current().delete(&store, &Value::Int(1));
    let store = account.deleted().accept(&store, &Value::Int(1));

    assert!(store.is_empty());
}

#[test]
fn reject_after_edit_restores_the_baseline() {
    let registry = ad_registry();
    let account = registry.entity("Account").unwrap();

    let store = account
        .initial()
        .load(&Store::new(), [record! { "id" => 1, "name" => "A" }.into()])
        .unwrap();
    let store = account
        .current()
        .set(&store, Value::Int(1), record! { "id" => 1, "name" => "B" });
    let store = account.current().reject(&store, &Value::Int(1));

    let rec = account.current().get(&store, &Value::Int(1)).unwrap();
    assert_eq!(rec.get("name"), Some(&Value::from("A")));
    assert!(account.current().get_all_changed(&store).is_empty());
}

#[test]
fn deleting_a_new_record_removes_rather_than_tombstones() {
    let registry = ad_registry();
    let account = registry.entity("Account").unwrap();

    let (store, _, key) = account
        .current()
        .create(&Store::new(), Some(record! { "name" => "X" }.into()))
        .unwrap();
    assert_eq!(key, Value::Int(-1));

    let store = account.current().delete(&store, &key);

    assert!(account.current().get_all(&store).is_empty());
    assert!(account.deleted().get_all(&store).is_empty());
}

#[test]
fn editing_back_to_the_original_clears_modified() {
    let registry = ad_registry();
    let account = registry.entity("Account").unwrap();

    let store = account
        .initial()
        .load(&Store::new(), [record! { "id" => 1, "name" => "A" }.into()])
        .unwrap();
    let store = account
        .current()
        .set(&store, Value::Int(1), record! { "id" => 1, "name" => "B" });
    let store = account
        .current()
        .set(&store, Value::Int(1), record! { "id" => 1, "name" => "A" });

    assert!(account.current().get_all_changed(&store).is_empty());
    let rec = account.current().get(&store, &Value::Int(1)).unwrap();
    assert_eq!(account.state(&store, &rec).unwrap(), EntityState::Unchanged);
}

#[test]
fn changed_properties_are_exactly_the_diff() {
    let registry = ad_registry();
    let account = registry.entity("Account").unwrap();

    let store = account
        .initial()
        .load(
            &Store::new(),
            [record! { "id" => 1, "name" => "A", "tier" => "free" }.into()],
        )
        .unwrap();
    let store = account.current().set(
        &store,
        Value::Int(1),
        record! { "id" => 1, "name" => "A", "tier" => "paid" },
    );

    assert_eq!(
        account.current().changed_properties(&store, &Value::Int(1)),
        record! { "tier" => "paid" }
    );
}
