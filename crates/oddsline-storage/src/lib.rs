// Postgres storage layer with sqlx
//
// This crate owns the durable schema for event records and the
// EventStore trait the service layer depends on; Database is the
// Postgres implementation.

pub mod models;
pub mod repositories;

pub use models::*;
pub use repositories::*;
