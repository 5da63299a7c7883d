use serde_json::{Map, Value};
use sqlx::{PgPool, postgres::PgPoolOptions, types::Json};

use crate::{
	Error, Result,
	item::{self, AttrValue, Item},
	predicate::Predicate,
	schema,
	store::{BoxFuture, RecordStore},
};

const SCHEMA_LOCK_ID: i64 = 5_310_477;

/// Load records kept as one JSONB document per row.
pub struct PgStore {
	pub pool: PgPool,
	table: String,
}
impl PgStore {
	pub async fn connect(cfg: &loads_config::Postgres) -> Result<Self> {
		let pool =
			PgPoolOptions::new().max_connections(cfg.pool_max_conns).connect(&cfg.dsn).await?;

		Ok(Self { pool, table: cfg.table.clone() })
	}

	pub fn table(&self) -> &str {
		&self.table
	}

	pub async fn ensure_schema(&self) -> Result<()> {
		let sql = schema::render_schema(&self.table);
		// Advisory locks are held per connection. Use a single transaction so the lock is scoped to
		// one connection and automatically released when the transaction ends.
		let mut tx = self.pool.begin().await?;

		sqlx::query("SELECT pg_advisory_xact_lock($1)")
			.bind(SCHEMA_LOCK_ID)
			.execute(&mut *tx)
			.await?;

		for statement in sql.split(';') {
			let trimmed = statement.trim();

			if trimmed.is_empty() {
				continue;
			}

			sqlx::query(trimmed).execute(&mut *tx).await?;
		}

		tx.commit().await?;

		Ok(())
	}

	async fn scan_rows(&self, predicate: &Predicate) -> Result<Vec<Item>> {
		let sql = format!("SELECT load_id, item FROM {}", self.table);
		let rows: Vec<(String, Json<Value>)> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
		let total = rows.len();
		let items: Vec<Item> = rows
			.into_iter()
			.map(|(load_id, Json(raw))| decode_item(&load_id, raw))
			.filter(|item| predicate.matches(item))
			.collect();

		tracing::debug!(table = %self.table, total, matched = items.len(), "Scanned load records.");

		Ok(items)
	}

	async fn put_item(&self, item: Item) -> Result<()> {
		let key = item::item_key(&item)
			.ok_or_else(|| Error::InvalidArgument("item is missing its key attribute.".to_string()))?
			.to_string();
		let sql = format!(
			"\
INSERT INTO {} (load_id, item, updated_at)
VALUES ($1, $2, now())
ON CONFLICT (load_id) DO UPDATE
SET item = EXCLUDED.item, updated_at = EXCLUDED.updated_at",
			self.table
		);

		sqlx::query(&sql).bind(key.as_str()).bind(Json(&item)).execute(&self.pool).await?;

		Ok(())
	}

	async fn update_item_attribute(
		&self,
		key: &str,
		name: &str,
		value: AttrValue,
	) -> Result<AttrValue> {
		let sql = format!(
			"\
UPDATE {}
SET item = jsonb_set(item, ARRAY[$2::text], $3::jsonb, true), updated_at = now()
WHERE load_id = $1
RETURNING item -> $2::text",
			self.table
		);
		let row: Option<(Json<AttrValue>,)> = sqlx::query_as(&sql)
			.bind(key)
			.bind(name)
			.bind(Json(&value))
			.fetch_optional(&self.pool)
			.await?;
		let (Json(stored),) =
			row.ok_or_else(|| Error::NotFound(format!("no item with key {key:?}.")))?;

		Ok(stored)
	}
}
impl RecordStore for PgStore {
	fn scan<'a>(&'a self, predicate: &'a Predicate) -> BoxFuture<'a, Result<Vec<Item>>> {
		Box::pin(self.scan_rows(predicate))
	}

	fn put<'a>(&'a self, item: Item) -> BoxFuture<'a, Result<()>> {
		Box::pin(self.put_item(item))
	}

	fn update_attribute<'a>(
		&'a self,
		key: &'a str,
		name: &'a str,
		value: AttrValue,
	) -> BoxFuture<'a, Result<AttrValue>> {
		Box::pin(self.update_item_attribute(key, name, value))
	}
}

/// Decodes a stored document attribute by attribute, dropping attributes that do not decode.
fn decode_item(load_id: &str, raw: Value) -> Item {
	let Value::Object(object) = raw else {
		tracing::warn!(load_id, "Stored load record is not an object.");

		return Item::new();
	};

	decode_attributes(load_id, object)
}

fn decode_attributes(load_id: &str, object: Map<String, Value>) -> Item {
	let mut item = Item::new();

	for (name, raw) in object {
		match serde_json::from_value::<AttrValue>(raw) {
			Ok(value) => {
				item.insert(name, value);
			},
			Err(err) => {
				tracing::warn!(load_id, attribute = %name, error = %err, "Dropped undecodable attribute.");
			},
		}
	}

	item
}
