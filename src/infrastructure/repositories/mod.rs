// src/infrastructure/repositories/mod.rs
mod error;
mod memory_listing;
mod postgres_listing;

pub use error::map_sqlx;
pub use memory_listing::InMemoryListingStore;
pub use postgres_listing::{PostgresListingReadRepository, PostgresListingWriteRepository};
