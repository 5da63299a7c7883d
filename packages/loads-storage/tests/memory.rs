use std::str::FromStr;

use rust_decimal::Decimal;

use loads_storage::{
	Error,
	item::{AttrValue, Item},
	memory::MemoryStore,
	predicate::{Condition, Predicate},
	store::RecordStore,
};

fn record(load_id: &str, origin: &str) -> Item {
	let mut item = Item::new();

	item.insert("load_id".to_string(), AttrValue::S(load_id.to_string()));
	item.insert("origin".to_string(), AttrValue::S(origin.to_string()));

	item
}

fn all() -> Predicate {
	Predicate::new().and(Condition::Exists { attr: "load_id".to_string() })
}

#[tokio::test]
async fn put_overwrites_whole_item() {
	let store = MemoryStore::new();
	let mut first = record("L1", "Dallas, TX");

	first.insert("miles".to_string(), AttrValue::N(Decimal::from(450)));

	store.put(first).await.expect("first put");
	store.put(record("L1", "Austin, TX")).await.expect("second put");

	let items = store.scan(&all()).await.expect("scan");

	assert_eq!(items.len(), 1);
	assert_eq!(items[0].get("origin"), Some(&AttrValue::S("Austin, TX".to_string())));
	assert_eq!(items[0].get("miles"), None);
}

#[tokio::test]
async fn put_requires_a_key() {
	let store = MemoryStore::new();
	let mut item = record("L1", "Dallas, TX");

	item.insert("load_id".to_string(), AttrValue::Null);

	let err = store.put(item).await.expect_err("Expected missing key error.");

	assert!(matches!(err, Error::InvalidArgument(_)), "Unexpected error: {err}");
	assert!(store.is_empty());
}

#[tokio::test]
async fn scan_skips_items_without_a_key() {
	let store = MemoryStore::new();

	store.put(record("L1", "Dallas, TX")).await.expect("put");
	store.insert_raw("corrupt", {
		let mut item = Item::new();

		item.insert("origin".to_string(), AttrValue::S("Dallas, TX".to_string()));

		item
	});

	assert_eq!(store.len(), 2);
	assert_eq!(store.scan(&all()).await.expect("scan").len(), 1);
}

#[tokio::test]
async fn update_attribute_sets_one_field() {
	let store = MemoryStore::new();
	let rate = AttrValue::N(Decimal::from_str("1500.25").expect("decimal literal"));

	store.put(record("L1", "Dallas, TX")).await.expect("put");

	let stored =
		store.update_attribute("L1", "accepted_loadrate", rate.clone()).await.expect("update");

	assert_eq!(stored, rate);

	let items = store.scan(&all()).await.expect("scan");

	assert_eq!(items[0].get("accepted_loadrate"), Some(&rate));
	assert_eq!(items[0].get("origin"), Some(&AttrValue::S("Dallas, TX".to_string())));
}

#[tokio::test]
async fn update_attribute_on_missing_key_is_not_found() {
	let store = MemoryStore::new();
	let err = store
		.update_attribute("missing", "accepted_loadrate", AttrValue::N(Decimal::from(1)))
		.await
		.expect_err("Expected not found.");

	assert!(matches!(err, Error::NotFound(_)), "Unexpected error: {err}");
	assert!(store.is_empty());
}
