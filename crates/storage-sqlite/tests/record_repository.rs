//! Integration tests for the record repository on a real SQLite database.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tempfile::tempdir;

use gemval_core::records::{
    NewValuationRecord, RecordRepositoryTrait, RecordStatus, ValuationRecordUpdate,
};
use gemval_core::catalog::Service;
use gemval_core::receipts::{Receipt, ReceiptRepositoryTrait};
use gemval_storage_sqlite::catalog::CatalogRepository;
use gemval_storage_sqlite::receipts::ReceiptRepository;
use gemval_storage_sqlite::records::RecordRepository;
use gemval_storage_sqlite::{create_pool, db, init, run_migrations, DbPool};

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

fn new_record(receipt: &Receipt, record_number: &str) -> NewValuationRecord {
    NewValuationRecord {
        id: None,
        record_number: record_number.to_string(),
        customer_id: receipt.customer_id.clone(),
        customer_name: receipt.customer_name.clone(),
        phone_number: receipt.phone_number.clone(),
        email: receipt.email.clone(),
        consultant_id: receipt.consultant_id.clone(),
        receipt_id: receipt.id.clone(),
        service_id: receipt.service_id.clone(),
        appointment_date: receipt.appointment_date,
        appointment_time: receipt.appointment_time.clone(),
        status: RecordStatus::InProgress,
    }
}

fn setup(db_path: &str) -> Arc<DbPool> {
    init(db_path).unwrap();
    let pool = create_pool(db_path).unwrap();
    run_migrations(&pool).unwrap();

    // FKs require catalog and receipt rows before records can exist.
    let catalog = CatalogRepository::new(pool.clone());
    catalog
        .insert(Service {
            id: "svc-1".to_string(),
            name: "Standard Appraisal".to_string(),
            description: None,
        })
        .unwrap();

    let receipts = ReceiptRepository::new(pool.clone());
    receipts.insert(test_receipt()).unwrap();
    assert_eq!(receipts.get_by_id("rcpt-1").unwrap().receipt_number, "RC-1001");

    pool
}

#[tokio::test]
async fn record_lifecycle_round_trip() {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("records.db");
    let pool = setup(db_path.to_str().unwrap());
    let writer = db::spawn_writer((*pool).clone());
    let repo = RecordRepository::new(pool.clone(), writer);

    let receipt = test_receipt();
    let created = repo.insert(new_record(&receipt, "VR-20260815-TEST01")).await.unwrap();
    assert_eq!(created.status, RecordStatus::InProgress);
    assert!(created.validated_at.is_none());
    assert!(!created.commitment_requested);

    let fetched = repo.get_by_id(&created.id).unwrap();
    assert_eq!(fetched, created);

    // Partial update: assign appraiser and fill a couple of attributes
    let update = ValuationRecordUpdate {
        appraiser_id: Some("appr-1".to_string()),
        carat_weight: Some(1.52),
        clarity: Some("VS1".to_string()),
        ..Default::default()
    };
    let updated = repo.update(&created.id, update).await.unwrap();
    assert_eq!(updated.appraiser_id.as_deref(), Some("appr-1"));
    assert_eq!(updated.carat_weight, Some(1.52));
    // Untouched fields survive
    assert_eq!(updated.record_number, "VR-20260815-TEST01");
    assert_eq!(updated.customer_name, "Jane Doe");

    let validated_at = Utc::now().naive_utc();
    let completed = repo.mark_completed(&created.id, validated_at).await.unwrap();
    assert_eq!(completed.status, RecordStatus::Completed);
    assert!(completed.validated_at.is_some());

    let flagged = repo.set_commitment_requested(&created.id).await.unwrap();
    assert!(flagged.commitment_requested);
}

#[tokio::test]
async fn list_filters_by_status_and_customer() {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("lists.db");
    let pool = setup(db_path.to_str().unwrap());
    let writer = db::spawn_writer((*pool).clone());
    let repo = RecordRepository::new(pool.clone(), writer);

    let receipt = test_receipt();
    let first = repo.insert(new_record(&receipt, "VR-20260815-AAAA01")).await.unwrap();
    let second = repo.insert(new_record(&receipt, "VR-20260815-BBBB02")).await.unwrap();
    repo.mark_completed(&second.id, Utc::now().naive_utc()).await.unwrap();

    let in_progress = repo.list(Some(RecordStatus::InProgress)).unwrap();
    assert_eq!(in_progress.len(), 1);
    assert_eq!(in_progress[0].id, first.id);

    let completed = repo.list(Some(RecordStatus::Completed)).unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, second.id);

    assert_eq!(repo.list(None).unwrap().len(), 2);
    assert_eq!(repo.list_by_customer("cust-1").unwrap().len(), 2);
    assert!(repo.list_by_customer("cust-unknown").unwrap().is_empty());
}

#[tokio::test]
async fn get_missing_record_is_not_found() {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("missing.db");
    let pool = setup(db_path.to_str().unwrap());
    let writer = db::spawn_writer((*pool).clone());
    let repo = RecordRepository::new(pool.clone(), writer);

    let result = repo.get_by_id("rec-404");
    assert!(matches!(
        result,
        Err(gemval_core::Error::Database(
            gemval_storage_sqlite::DatabaseError::NotFound(_)
        ))
    ));
}
