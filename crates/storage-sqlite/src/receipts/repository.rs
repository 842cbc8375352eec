use std::sync::Arc;

use diesel::prelude::*;

use gemval_core::receipts::{Receipt, ReceiptRepositoryTrait};
use gemval_core::Result;

use super::model::ReceiptDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::receipts;

/// Read-only receipt store. Receipts are issued by the intake flow; this
/// system only looks them up. `insert` exists for seeding and tests.
pub struct ReceiptRepository {
    pool: Arc<DbPool>,
}

impl ReceiptRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        ReceiptRepository { pool }
    }

    pub fn insert(&self, receipt: Receipt) -> Result<Receipt> {
        let mut conn = get_connection(&self.pool)?;
        let receipt_db: ReceiptDB = receipt.into();
        let inserted = diesel::insert_into(receipts::table)
            .values(&receipt_db)
            .returning(ReceiptDB::as_returning())
            .get_result(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Receipt::from(inserted))
    }
}

impl ReceiptRepositoryTrait for ReceiptRepository {
    fn get_by_id(&self, receipt_id: &str) -> Result<Receipt> {
        let mut conn = get_connection(&self.pool)?;
        let receipt_db = receipts::table
            .find(receipt_id)
            .select(ReceiptDB::as_select())
            .first::<ReceiptDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Receipt::from(receipt_db))
    }
}
