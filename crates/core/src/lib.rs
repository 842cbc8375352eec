//! Gemval Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the diamond valuation
//! record workflow. It is database-agnostic and defines traits that are
//! implemented by the `storage-sqlite` crate.

pub mod catalog;
pub mod constants;
pub mod details;
pub mod errors;
pub mod receipts;
pub mod records;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
