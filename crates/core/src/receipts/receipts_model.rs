//! Receipt domain model.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A service receipt issued to a customer at intake.
///
/// Receipts are produced by a separate intake flow; this system only reads
/// them, both to seed a valuation record and to display the issue date on
/// the record detail view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
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
