//! SQLite storage implementation for Gemval.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `gemval-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for records and related entities
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist; `core` is database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod catalog;
pub mod receipts;
pub mod records;
pub mod users;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from gemval-core for convenience
pub use gemval_core::errors::{DatabaseError, Error, Result};
