//! Database model for receipts.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use gemval_core::receipts::Receipt;

/// Database model for receipts
#[derive(
    Insertable, Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::receipts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDB {
    pub id: String,
    pub receipt_number: String,
    pub customer_id: String,
    pub customer_name: String,
    pub phone_number: String,
    pub email: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub service_id: String,
    pub consultant_id: String,
    pub issue_date: NaiveDateTime,
}

impl From<ReceiptDB> for Receipt {
    fn from(db: ReceiptDB) -> Self {
        Self {
            id: db.id,
            receipt_number: db.receipt_number,
            customer_id: db.customer_id,
            customer_name: db.customer_name,
            phone_number: db.phone_number,
            email: db.email,
            appointment_date: db.appointment_date,
            appointment_time: db.appointment_time,
            service_id: db.service_id,
            consultant_id: db.consultant_id,
            issue_date: db.issue_date,
        }
    }
}

impl From<Receipt> for ReceiptDB {
    fn from(domain: Receipt) -> Self {
        Self {
            id: domain.id,
            receipt_number: domain.receipt_number,
            customer_id: domain.customer_id,
            customer_name: domain.customer_name,
            phone_number: domain.phone_number,
            email: domain.email,
            appointment_date: domain.appointment_date,
            appointment_time: domain.appointment_time,
            service_id: domain.service_id,
            consultant_id: domain.consultant_id,
            issue_date: domain.issue_date,
        }
    }
}
