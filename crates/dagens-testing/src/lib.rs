//! Testing infrastructure for dagens integration tests.
//!
//! - `TestWorld`: isolated data directory plus CLI execution
//! - `doubles`: scripted feed and rates, recording surface, fixed clock,
//!   failing store
//! - `fixtures`: feed payload builders and cache seeding
//! - `assertions`: checks over `--format json` output

pub mod assertions;
pub mod doubles;
pub mod fixtures;
pub mod world;

pub use doubles::{FailingStore, FixedClock, MockFeed, MockRates, RecordingSurface};
pub use world::TestWorld;
