use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use gemval_core::records::{
    NewValuationRecord, RecordRepositoryTrait, RecordStatus, ValuationRecord,
    ValuationRecordUpdate,
};
use gemval_core::Result;

use super::model::{NewValuationRecordDB, ValuationRecordChangesetDB, ValuationRecordDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::valuation_records;

/// Diesel-backed record store. Reads go through the pool; writes are
/// funneled through the single-writer actor.
pub struct RecordRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RecordRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        RecordRepository { pool, writer }
    }
}

#[async_trait]
impl RecordRepositoryTrait for RecordRepository {
    fn get_by_id(&self, record_id: &str) -> Result<ValuationRecord> {
        let mut conn = get_connection(&self.pool)?;
        let record_db = valuation_records::table
            .find(record_id)
            .select(ValuationRecordDB::as_select())
            .first::<ValuationRecordDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(ValuationRecord::from(record_db))
    }

    fn list(&self, status: Option<RecordStatus>) -> Result<Vec<ValuationRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = valuation_records::table.into_boxed();
        if let Some(status) = status {
            query = query.filter(valuation_records::status.eq(status.as_str()));
        }
        let records_db = query
            .order(valuation_records::created_at.desc())
            .select(ValuationRecordDB::as_select())
            .load::<ValuationRecordDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(records_db.into_iter().map(ValuationRecord::from).collect())
    }

    fn list_by_customer(&self, customer_id: &str) -> Result<Vec<ValuationRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let records_db = valuation_records::table
            .filter(valuation_records::customer_id.eq(customer_id))
            .order(valuation_records::created_at.desc())
            .select(ValuationRecordDB::as_select())
            .load::<ValuationRecordDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(records_db.into_iter().map(ValuationRecord::from).collect())
    }

    async fn insert(&self, new_record: NewValuationRecord) -> Result<ValuationRecord> {
        self.writer
            .exec(move |conn| {
                let new_record_db: NewValuationRecordDB = new_record.into();
                let record_db = diesel::insert_into(valuation_records::table)
                    .values(&new_record_db)
                    .returning(ValuationRecordDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(ValuationRecord::from(record_db))
            })
            .await
    }

    async fn update(
        &self,
        record_id: &str,
        update: ValuationRecordUpdate,
    ) -> Result<ValuationRecord> {
        let record_id = record_id.to_string();
        self.writer
            .exec(move |conn| {
                let changeset: ValuationRecordChangesetDB = update.into();
                let record_db = diesel::update(valuation_records::table.find(&record_id))
                    .set(&changeset)
                    .returning(ValuationRecordDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(ValuationRecord::from(record_db))
            })
            .await
    }

    async fn mark_completed(
        &self,
        record_id: &str,
        validated_at: NaiveDateTime,
    ) -> Result<ValuationRecord> {
        let record_id = record_id.to_string();
        self.writer
            .exec(move |conn| {
                let record_db = diesel::update(valuation_records::table.find(&record_id))
                    .set((
                        valuation_records::status.eq(RecordStatus::Completed.as_str()),
                        valuation_records::validated_at.eq(Some(validated_at)),
                        valuation_records::updated_at.eq(validated_at),
                    ))
                    .returning(ValuationRecordDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(ValuationRecord::from(record_db))
            })
            .await
    }

    async fn set_commitment_requested(&self, record_id: &str) -> Result<ValuationRecord> {
        let record_id = record_id.to_string();
        self.writer
            .exec(move |conn| {
                let record_db = diesel::update(valuation_records::table.find(&record_id))
                    .set((
                        valuation_records::commitment_requested.eq(true),
                        valuation_records::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .returning(ValuationRecordDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(ValuationRecord::from(record_db))
            })
            .await
    }
}
