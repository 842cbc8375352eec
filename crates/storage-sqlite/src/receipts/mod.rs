//! SQLite storage implementation for receipts.

mod model;
mod repository;

pub use model::ReceiptDB;
pub use repository::ReceiptRepository;
