// Key-value storage for cached feed responses.
// Stores opaque bytes; envelopes and expiry are the caller's concern.

mod error;
mod memory;
mod schema;
mod sqlite;
mod traits;

// Public API
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use schema::SCHEMA_VERSION;
pub use sqlite::SqliteStore;
pub use traits::{KeyValueStore, StoredValue};
