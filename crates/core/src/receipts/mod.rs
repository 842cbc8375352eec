//! Receipts module - read-only intake data consumed at record creation.

mod receipts_model;
mod receipts_service;
mod receipts_traits;

pub use receipts_model::Receipt;
pub use receipts_service::ReceiptService;
pub use receipts_traits::{ReceiptRepositoryTrait, ReceiptServiceTrait};
