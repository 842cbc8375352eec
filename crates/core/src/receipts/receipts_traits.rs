use crate::errors::Result;
use crate::receipts::receipts_model::Receipt;

/// Trait for receipt repository operations
pub trait ReceiptRepositoryTrait: Send + Sync {
    fn get_by_id(&self, receipt_id: &str) -> Result<Receipt>;
}

/// Trait for receipt lookup operations
pub trait ReceiptServiceTrait: Send + Sync {
    fn get_receipt(&self, receipt_id: &str) -> Result<Receipt>;
}
