//! Display payloads composing a record with related-entity data.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::records::{RecordStatus, ValuationRecord};

/// A valuation record enriched with display names and the receipt issue
/// date, as shown on the detail view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordDetail {
    #[serde(flatten)]
    pub record: ValuationRecord,
    pub service_name: String,
    pub consultant_name: String,
    /// Absent until an appraiser has been assigned
    pub appraiser_name: Option<String>,
    pub receipt_issued_at: NaiveDateTime,
}

/// One row of the customer tracking view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordTrackingItem {
    pub record_id: String,
    pub record_number: String,
    pub customer_name: String,
    pub status: RecordStatus,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub service_name: String,
    pub commitment_requested: bool,
}
