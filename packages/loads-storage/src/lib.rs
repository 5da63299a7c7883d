pub mod db;
pub mod item;
pub mod memory;
pub mod predicate;
pub mod schema;
pub mod store;

mod error;

pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Partition key attribute of every stored item.
pub const KEY_ATTRIBUTE: &str = "load_id";
