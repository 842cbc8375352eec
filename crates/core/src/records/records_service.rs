use chrono::Utc;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::records_model::{
    NewValuationRecord, RecordStatus, ValuationRecord, ValuationRecordUpdate,
};
use super::records_traits::{RecordRepositoryTrait, RecordServiceTrait};
use crate::constants::RECORD_NUMBER_PREFIX;
use crate::errors::{Error, Result, ValidationError};
use crate::receipts::ReceiptServiceTrait;

/// Service enforcing the valuation record lifecycle.
///
/// Records are created from receipts, filled in by appraisers, and
/// completed exactly once by a consultant. All guards live here; the
/// repository is a plain store.
pub struct RecordService {
    repository: Arc<dyn RecordRepositoryTrait>,
    receipts: Arc<dyn ReceiptServiceTrait>,
}

impl RecordService {
    /// Creates a new RecordService instance
    pub fn new(
        repository: Arc<dyn RecordRepositoryTrait>,
        receipts: Arc<dyn ReceiptServiceTrait>,
    ) -> Self {
        Self {
            repository,
            receipts,
        }
    }

    fn generate_record_number() -> String {
        let suffix = Uuid::new_v4().simple().to_string();
        format!(
            "{}-{}-{}",
            RECORD_NUMBER_PREFIX,
            Utc::now().format("%Y%m%d"),
            suffix[..6].to_uppercase()
        )
    }
}

#[async_trait::async_trait]
impl RecordServiceTrait for RecordService {
    /// Creates a record from a receipt, denormalizing the customer and
    /// appointment fields at intake time.
    async fn create_record(&self, receipt_id: &str) -> Result<ValuationRecord> {
        let receipt = self.receipts.get_receipt(receipt_id)?;
        debug!(
            "Creating valuation record from receipt {} for customer {}",
            receipt.id, receipt.customer_id
        );

        let new_record = NewValuationRecord {
            id: None,
            record_number: Self::generate_record_number(),
            customer_id: receipt.customer_id,
            customer_name: receipt.customer_name,
            phone_number: receipt.phone_number,
            email: receipt.email,
            consultant_id: receipt.consultant_id,
            receipt_id: receipt.id,
            service_id: receipt.service_id,
            appointment_date: receipt.appointment_date,
            appointment_time: receipt.appointment_time,
            status: RecordStatus::InProgress,
        };

        self.repository.insert(new_record).await
    }

    fn get_record(&self, record_id: &str) -> Result<ValuationRecord> {
        self.repository.get_by_id(record_id)
    }

    fn list_records(&self, status: Option<RecordStatus>) -> Result<Vec<ValuationRecord>> {
        self.repository.list(status)
    }

    fn get_records_in_progress(&self) -> Result<Vec<ValuationRecord>> {
        self.repository.list(Some(RecordStatus::InProgress))
    }

    fn get_records_completed(&self) -> Result<Vec<ValuationRecord>> {
        self.repository.list(Some(RecordStatus::Completed))
    }

    fn get_records_by_customer(&self, customer_id: &str) -> Result<Vec<ValuationRecord>> {
        self.repository.list_by_customer(customer_id)
    }

    /// Applies a partial update, guarding the workflow invariants:
    /// completed records are immutable, diamond attributes require an
    /// assigned appraiser, and `Completed` is never reachable this way.
    async fn update_record(
        &self,
        record_id: &str,
        update: ValuationRecordUpdate,
    ) -> Result<ValuationRecord> {
        let existing = self.repository.get_by_id(record_id)?;

        if existing.status == RecordStatus::Completed {
            return Err(Error::ConstraintViolation(format!(
                "Record {} is completed and can no longer be modified",
                record_id
            )));
        }

        if update.status == Some(RecordStatus::Completed) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Records are completed through the complete operation, not a status update"
                    .to_string(),
            )));
        }

        if update.touches_diamond_attributes()
            && existing.appraiser_id.is_none()
            && update.appraiser_id.is_none()
        {
            return Err(Error::Validation(ValidationError::MissingField(
                "appraiserId".to_string(),
            )));
        }

        self.repository.update(record_id, update).await
    }

    /// Marks a record completed and stamps `validated_at`. A record is
    /// completed at most once; a second attempt is a constraint violation.
    async fn complete_record(&self, record_id: &str) -> Result<ValuationRecord> {
        let existing = self.repository.get_by_id(record_id)?;

        if existing.status == RecordStatus::Completed {
            return Err(Error::ConstraintViolation(format!(
                "Record {} is already completed",
                record_id
            )));
        }

        debug!("Completing valuation record {}", record_id);
        self.repository
            .mark_completed(record_id, Utc::now().naive_utc())
            .await
    }

    /// Sets the commitment flag. Idempotent: requesting again on a record
    /// that already has the flag is a no-op success. The flag never resets.
    async fn request_commitment(&self, record_id: &str) -> Result<ValuationRecord> {
        let existing = self.repository.get_by_id(record_id)?;

        if existing.commitment_requested {
            return Ok(existing);
        }

        self.repository.set_commitment_requested(record_id).await
    }
}
