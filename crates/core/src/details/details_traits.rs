use crate::details::details_model::{RecordDetail, RecordTrackingItem};
use crate::errors::Result;

/// Trait for composed record reads
pub trait RecordDetailServiceTrait: Send + Sync {
    fn get_record_detail(&self, record_id: &str) -> Result<RecordDetail>;
    fn list_customer_records(&self, customer_id: &str) -> Result<Vec<RecordTrackingItem>>;
}
