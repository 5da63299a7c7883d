use std::{collections::BTreeMap, sync::Mutex};

use crate::{
	Error, Result,
	item::{self, AttrValue, Item},
	predicate::Predicate,
	store::{BoxFuture, RecordStore},
};

/// Process-local store with the same semantics as the Postgres backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
	items: Mutex<BTreeMap<String, Item>>,
}
impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.items.lock().unwrap_or_else(|err| err.into_inner()).len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Inserts an item as-is, bypassing key validation. Used to seed partial or corrupt rows.
	pub fn insert_raw(&self, key: impl Into<String>, item: Item) {
		self.items.lock().unwrap_or_else(|err| err.into_inner()).insert(key.into(), item);
	}

	fn scan_now(&self, predicate: &Predicate) -> Vec<Item> {
		let items = self.items.lock().unwrap_or_else(|err| err.into_inner());

		items.values().filter(|item| predicate.matches(item)).cloned().collect()
	}

	fn put_now(&self, item: Item) -> Result<()> {
		let key = item::item_key(&item)
			.ok_or_else(|| Error::InvalidArgument("item is missing its key attribute.".to_string()))?
			.to_string();

		self.items.lock().unwrap_or_else(|err| err.into_inner()).insert(key, item);

		Ok(())
	}

	fn update_now(&self, key: &str, name: &str, value: AttrValue) -> Result<AttrValue> {
		let mut items = self.items.lock().unwrap_or_else(|err| err.into_inner());
		let item =
			items.get_mut(key).ok_or_else(|| Error::NotFound(format!("no item with key {key:?}.")))?;

		item.insert(name.to_string(), value.clone());

		Ok(value)
	}
}
impl RecordStore for MemoryStore {
	fn scan<'a>(&'a self, predicate: &'a Predicate) -> BoxFuture<'a, Result<Vec<Item>>> {
		let items = self.scan_now(predicate);

		Box::pin(async move { Ok(items) })
	}

	fn put<'a>(&'a self, item: Item) -> BoxFuture<'a, Result<()>> {
		let result = self.put_now(item);

		Box::pin(async move { result })
	}

	fn update_attribute<'a>(
		&'a self,
		key: &'a str,
		name: &'a str,
		value: AttrValue,
	) -> BoxFuture<'a, Result<AttrValue>> {
		let result = self.update_now(key, name, value);

		Box::pin(async move { result })
	}
}
