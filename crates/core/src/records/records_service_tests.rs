//! Tests for the record lifecycle service.
//!
//! These cover the workflow guards: receipt-seeded creation, the
//! complete-once rule, appraiser-gated diamond attributes, and the
//! monotonic commitment flag.

#[cfg(test)]
mod tests {
    use crate::errors::{DatabaseError, Error, Result};
    use crate::receipts::{Receipt, ReceiptServiceTrait};
    use crate::records::{
        NewValuationRecord, RecordRepositoryTrait, RecordService, RecordServiceTrait,
        RecordStatus, ValuationRecord, ValuationRecordUpdate,
    };
    use async_trait::async_trait;
    use chrono::{NaiveDate, NaiveDateTime, Utc};
    use std::sync::{Arc, Mutex};

    // =========================================================================
    // Mock repository
    // =========================================================================

    #[derive(Clone, Default)]
    struct MockRecordRepository {
        records: Arc<Mutex<Vec<ValuationRecord>>>,
    }

    impl MockRecordRepository {
        fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl RecordRepositoryTrait for MockRecordRepository {
        fn get_by_id(&self, record_id: &str) -> Result<ValuationRecord> {
            self.records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == record_id)
                .cloned()
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(record_id.to_string()))
                })
        }

        fn list(&self, status: Option<RecordStatus>) -> Result<Vec<ValuationRecord>> {
            let records = self.records.lock().unwrap();
            Ok(records
                .iter()
                .filter(|r| status.map_or(true, |s| r.status == s))
                .cloned()
                .collect())
        }

        fn list_by_customer(&self, customer_id: &str) -> Result<Vec<ValuationRecord>> {
            let records = self.records.lock().unwrap();
            Ok(records
                .iter()
                .filter(|r| r.customer_id == customer_id)
                .cloned()
                .collect())
        }

        async fn insert(&self, new_record: NewValuationRecord) -> Result<ValuationRecord> {
            let now = Utc::now().naive_utc();
            let record = ValuationRecord {
                id: new_record
                    .id
                    .unwrap_or_else(|| format!("rec-{}", self.records.lock().unwrap().len())),
                record_number: new_record.record_number,
                customer_id: new_record.customer_id,
                customer_name: new_record.customer_name,
                phone_number: new_record.phone_number,
                email: new_record.email,
                consultant_id: new_record.consultant_id,
                appraiser_id: None,
                receipt_id: new_record.receipt_id,
                service_id: new_record.service_id,
                appointment_date: new_record.appointment_date,
                appointment_time: new_record.appointment_time,
                shape_and_cut: None,
                carat_weight: None,
                clarity: None,
                cut_grade: None,
                measurements: None,
                polish: None,
                symmetry: None,
                fluorescence: None,
                estimated_value: None,
                valuation_method: None,
                certificate_number: None,
                status: new_record.status,
                commitment_requested: false,
                created_at: now,
                updated_at: now,
                validated_at: None,
            };
            self.records.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn update(
            &self,
            record_id: &str,
            update: ValuationRecordUpdate,
        ) -> Result<ValuationRecord> {
            let mut records = self.records.lock().unwrap();
            let record = records
                .iter_mut()
                .find(|r| r.id == record_id)
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(record_id.to_string()))
                })?;

            if update.appraiser_id.is_some() {
                record.appraiser_id = update.appraiser_id;
            }
            if update.shape_and_cut.is_some() {
                record.shape_and_cut = update.shape_and_cut;
            }
            if update.carat_weight.is_some() {
                record.carat_weight = update.carat_weight;
            }
            if update.clarity.is_some() {
                record.clarity = update.clarity;
            }
            if update.estimated_value.is_some() {
                record.estimated_value = update.estimated_value;
            }
            if let Some(status) = update.status {
                record.status = status;
            }
            record.updated_at = Utc::now().naive_utc();
            Ok(record.clone())
        }

        async fn mark_completed(
            &self,
            record_id: &str,
            validated_at: NaiveDateTime,
        ) -> Result<ValuationRecord> {
            let mut records = self.records.lock().unwrap();
            let record = records
                .iter_mut()
                .find(|r| r.id == record_id)
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(record_id.to_string()))
                })?;
            record.status = RecordStatus::Completed;
            record.validated_at = Some(validated_at);
            record.updated_at = validated_at;
            Ok(record.clone())
        }

        async fn set_commitment_requested(&self, record_id: &str) -> Result<ValuationRecord> {
            let mut records = self.records.lock().unwrap();
            let record = records
                .iter_mut()
                .find(|r| r.id == record_id)
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(record_id.to_string()))
                })?;
            record.commitment_requested = true;
            Ok(record.clone())
        }
    }

    // =========================================================================
    // Mock receipt service
    // =========================================================================

    #[derive(Clone, Default)]
    struct MockReceiptService {
        receipts: Arc<Mutex<Vec<Receipt>>>,
    }

    impl MockReceiptService {
        fn with_receipt(receipt: Receipt) -> Self {
            Self {
                receipts: Arc::new(Mutex::new(vec![receipt])),
            }
        }
    }

    impl ReceiptServiceTrait for MockReceiptService {
        fn get_receipt(&self, receipt_id: &str) -> Result<Receipt> {
            self.receipts
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == receipt_id)
                .cloned()
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(receipt_id.to_string()))
                })
        }
    }

    // =========================================================================
    // Fixtures
    // =========================================================================

    fn test_receipt() -> Receipt {
        Receipt {
            id: "rcpt-1".to_string(),
            receipt_number: "RC-1001".to_string(),
            customer_id: "cust-1".to_string(),
            customer_name: "Jane Doe".to_string(),
            phone_number: "555-0100".to_string(),
            email: "jane@example.com".to_string(),
            appointment_date: NaiveDate::from_ymd_opt(2026, 8, 15).unwrap(),
            appointment_time: "10:30".to_string(),
            service_id: "svc-1".to_string(),
            consultant_id: "cons-1".to_string(),
            issue_date: Utc::now().naive_utc(),
        }
    }

    fn service_with(
        repo: MockRecordRepository,
        receipts: MockReceiptService,
    ) -> RecordService {
        RecordService::new(Arc::new(repo), Arc::new(receipts))
    }

    async fn seeded_record(service: &RecordService) -> ValuationRecord {
        service.create_record("rcpt-1").await.unwrap()
    }

    // =========================================================================
    // Creation
    // =========================================================================

    #[tokio::test]
    async fn test_create_record_seeds_from_receipt() {
        let service = service_with(
            MockRecordRepository::new(),
            MockReceiptService::with_receipt(test_receipt()),
        );

        let record = service.create_record("rcpt-1").await.unwrap();

        assert!(record.record_number.starts_with("VR-"));
        assert_eq!(record.customer_name, "Jane Doe");
        assert_eq!(record.consultant_id, "cons-1");
        assert_eq!(record.service_id, "svc-1");
        assert_eq!(record.receipt_id, "rcpt-1");
        assert_eq!(record.status, RecordStatus::InProgress);
        assert!(record.appraiser_id.is_none());
        assert!(record.validated_at.is_none());
        assert!(!record.commitment_requested);
    }

    #[tokio::test]
    async fn test_create_record_unknown_receipt_fails() {
        let service = service_with(
            MockRecordRepository::new(),
            MockReceiptService::with_receipt(test_receipt()),
        );

        let result = service.create_record("rcpt-missing").await;
        assert!(matches!(
            result,
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));
    }

    // =========================================================================
    // Completion
    // =========================================================================

    #[tokio::test]
    async fn test_complete_record_sets_status_and_validated_at() {
        let service = service_with(
            MockRecordRepository::new(),
            MockReceiptService::with_receipt(test_receipt()),
        );
        let record = seeded_record(&service).await;

        let completed = service.complete_record(&record.id).await.unwrap();
        assert_eq!(completed.status, RecordStatus::Completed);
        assert!(completed.validated_at.is_some());
    }

    #[tokio::test]
    async fn test_complete_record_twice_is_constraint_violation() {
        let service = service_with(
            MockRecordRepository::new(),
            MockReceiptService::with_receipt(test_receipt()),
        );
        let record = seeded_record(&service).await;

        service.complete_record(&record.id).await.unwrap();
        let second = service.complete_record(&record.id).await;
        assert!(matches!(second, Err(Error::ConstraintViolation(_))));
    }

    #[tokio::test]
    async fn test_complete_unknown_record_fails() {
        let service = service_with(
            MockRecordRepository::new(),
            MockReceiptService::with_receipt(test_receipt()),
        );

        let result = service.complete_record("rec-missing").await;
        assert!(matches!(
            result,
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));
    }

    // =========================================================================
    // Updates
    // =========================================================================

    #[tokio::test]
    async fn test_update_completed_record_is_rejected() {
        let service = service_with(
            MockRecordRepository::new(),
            MockReceiptService::with_receipt(test_receipt()),
        );
        let record = seeded_record(&service).await;
        service.complete_record(&record.id).await.unwrap();

        let update = ValuationRecordUpdate {
            status: Some(RecordStatus::Sealed),
            ..Default::default()
        };
        let result = service.update_record(&record.id, update).await;
        assert!(matches!(result, Err(Error::ConstraintViolation(_))));
    }

    #[tokio::test]
    async fn test_update_cannot_set_completed_status() {
        let service = service_with(
            MockRecordRepository::new(),
            MockReceiptService::with_receipt(test_receipt()),
        );
        let record = seeded_record(&service).await;

        let update = ValuationRecordUpdate {
            status: Some(RecordStatus::Completed),
            ..Default::default()
        };
        let result = service.update_record(&record.id, update).await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_diamond_attributes_require_appraiser() {
        let service = service_with(
            MockRecordRepository::new(),
            MockReceiptService::with_receipt(test_receipt()),
        );
        let record = seeded_record(&service).await;

        let update = ValuationRecordUpdate {
            carat_weight: Some(1.52),
            clarity: Some("VS1".to_string()),
            ..Default::default()
        };
        let result = service.update_record(&record.id, update).await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_diamond_attributes_with_appraiser_assignment() {
        let service = service_with(
            MockRecordRepository::new(),
            MockReceiptService::with_receipt(test_receipt()),
        );
        let record = seeded_record(&service).await;

        // Assigning the appraiser in the same update satisfies the guard
        let update = ValuationRecordUpdate {
            appraiser_id: Some("appr-1".to_string()),
            carat_weight: Some(1.52),
            clarity: Some("VS1".to_string()),
            ..Default::default()
        };
        let updated = service.update_record(&record.id, update).await.unwrap();
        assert_eq!(updated.appraiser_id.as_deref(), Some("appr-1"));
        assert_eq!(updated.carat_weight, Some(1.52));

        // Once assigned, further fills pass without re-sending the appraiser
        let update = ValuationRecordUpdate {
            estimated_value: Some(12500.0),
            ..Default::default()
        };
        let updated = service.update_record(&record.id, update).await.unwrap();
        assert_eq!(updated.estimated_value, Some(12500.0));
    }

    #[tokio::test]
    async fn test_update_can_seal_record() {
        let service = service_with(
            MockRecordRepository::new(),
            MockReceiptService::with_receipt(test_receipt()),
        );
        let record = seeded_record(&service).await;

        let update = ValuationRecordUpdate {
            status: Some(RecordStatus::Sealed),
            ..Default::default()
        };
        let updated = service.update_record(&record.id, update).await.unwrap();
        assert_eq!(updated.status, RecordStatus::Sealed);
    }

    // =========================================================================
    // Commitment
    // =========================================================================

    #[tokio::test]
    async fn test_request_commitment_is_monotonic_and_idempotent() {
        let service = service_with(
            MockRecordRepository::new(),
            MockReceiptService::with_receipt(test_receipt()),
        );
        let record = seeded_record(&service).await;

        let first = service.request_commitment(&record.id).await.unwrap();
        assert!(first.commitment_requested);

        let second = service.request_commitment(&record.id).await.unwrap();
        assert!(second.commitment_requested);
    }

    // =========================================================================
    // Listing
    // =========================================================================

    #[tokio::test]
    async fn test_list_by_status_returns_exact_matches() {
        let repo = MockRecordRepository::new();
        let service = service_with(
            repo.clone(),
            MockReceiptService::with_receipt(test_receipt()),
        );

        let first = seeded_record(&service).await;
        let second = seeded_record(&service).await;
        service.complete_record(&second.id).await.unwrap();

        let in_progress = service.get_records_in_progress().unwrap();
        assert_eq!(in_progress.len(), 1);
        assert_eq!(in_progress[0].id, first.id);

        let completed = service.get_records_completed().unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, second.id);

        let all = service.list_records(None).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_list_by_customer_empty_is_ok() {
        let service = service_with(
            MockRecordRepository::new(),
            MockReceiptService::with_receipt(test_receipt()),
        );

        let records = service.get_records_by_customer("cust-without-records").unwrap();
        assert!(records.is_empty());
    }
}
