use std::{future::Future, pin::Pin};

use crate::{
	Result,
	item::{AttrValue, Item},
	predicate::Predicate,
};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Document store operations consumed by the service.
pub trait RecordStore
where
	Self: Send + Sync,
{
	/// Reads every item and keeps those matching `predicate`. No index, single page.
	fn scan<'a>(&'a self, predicate: &'a Predicate) -> BoxFuture<'a, Result<Vec<Item>>>;

	/// Creates the item or replaces the whole item stored under the same key.
	fn put<'a>(&'a self, item: Item) -> BoxFuture<'a, Result<()>>;

	/// Sets one attribute of an existing item and returns the stored value.
	fn update_attribute<'a>(
		&'a self,
		key: &'a str,
		name: &'a str,
		value: AttrValue,
	) -> BoxFuture<'a, Result<AttrValue>>;
}
