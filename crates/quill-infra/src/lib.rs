//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate owns the SQLite database: entity definitions, connection and
//! schema lifecycle, repository implementations, and the sample-data seeder.

pub mod database;
pub mod seed;

pub use database::{DatabaseConfig, DatabaseHandle};

// Re-exported so consumers can name connection types without depending on
// SeaORM directly.
pub use sea_orm::{DbConn, DbErr};
