pub mod cache;
pub mod date_key;
pub mod language;

pub use cache::*;
pub use date_key::*;
pub use language::*;
