//! Question store implementations.

mod fixture;
mod memory;
mod sqlite;

pub use fixture::{Fixture, SeedStats};
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
