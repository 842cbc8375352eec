use std::sync::Arc;

use super::receipts_model::Receipt;
use super::receipts_traits::{ReceiptRepositoryTrait, ReceiptServiceTrait};
use crate::errors::Result;

/// Read-only lookup service over receipts.
pub struct ReceiptService {
    repository: Arc<dyn ReceiptRepositoryTrait>,
}

impl ReceiptService {
    pub fn new(repository: Arc<dyn ReceiptRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl ReceiptServiceTrait for ReceiptService {
    fn get_receipt(&self, receipt_id: &str) -> Result<Receipt> {
        self.repository.get_by_id(receipt_id)
    }
}
