use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::errors::Result;
use crate::records::records_model::{
    NewValuationRecord, RecordStatus, ValuationRecord, ValuationRecordUpdate,
};

/// Trait for valuation record repository operations
#[async_trait]
pub trait RecordRepositoryTrait: Send + Sync {
    fn get_by_id(&self, record_id: &str) -> Result<ValuationRecord>;
    fn list(&self, status: Option<RecordStatus>) -> Result<Vec<ValuationRecord>>;
    fn list_by_customer(&self, customer_id: &str) -> Result<Vec<ValuationRecord>>;
    async fn insert(&self, new_record: NewValuationRecord) -> Result<ValuationRecord>;
    async fn update(
        &self,
        record_id: &str,
        update: ValuationRecordUpdate,
    ) -> Result<ValuationRecord>;
    async fn mark_completed(
        &self,
        record_id: &str,
        validated_at: NaiveDateTime,
    ) -> Result<ValuationRecord>;
    async fn set_commitment_requested(&self, record_id: &str) -> Result<ValuationRecord>;
}

/// Trait for valuation record lifecycle operations
#[async_trait]
pub trait RecordServiceTrait: Send + Sync {
    async fn create_record(&self, receipt_id: &str) -> Result<ValuationRecord>;
    fn get_record(&self, record_id: &str) -> Result<ValuationRecord>;
    fn list_records(&self, status: Option<RecordStatus>) -> Result<Vec<ValuationRecord>>;
    fn get_records_in_progress(&self) -> Result<Vec<ValuationRecord>>;
    fn get_records_completed(&self) -> Result<Vec<ValuationRecord>>;
    fn get_records_by_customer(&self, customer_id: &str) -> Result<Vec<ValuationRecord>>;
    async fn update_record(
        &self,
        record_id: &str,
        update: ValuationRecordUpdate,
    ) -> Result<ValuationRecord>;
    async fn complete_record(&self, record_id: &str) -> Result<ValuationRecord>;
    async fn request_commitment(&self, record_id: &str) -> Result<ValuationRecord>;
}
