//! Database models for valuation records.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gemval_core::records::{NewValuationRecord, ValuationRecord};

/// Database model for valuation records
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::valuation_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ValuationRecordDB {
    pub id: String,
    pub record_number: String,
    pub customer_id: String,
    pub customer_name: String,
    pub phone_number: String,
    pub email: String,
    pub consultant_id: String,
    pub appraiser_id: Option<String>,
    pub receipt_id: String,
    pub service_id: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub shape_and_cut: Option<String>,
    pub carat_weight: Option<f64>,
    pub clarity: Option<String>,
    pub cut_grade: Option<String>,
    pub measurements: Option<String>,
    pub polish: Option<String>,
    pub symmetry: Option<String>,
    pub fluorescence: Option<String>,
    pub estimated_value: Option<f64>,
    pub valuation_method: Option<String>,
    pub certificate_number: Option<String>,
    pub status: String,
    pub commitment_requested: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub validated_at: Option<NaiveDateTime>,
}

/// Database model for inserting a new valuation record
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::valuation_records)]
#[serde(rename_all = "camelCase")]
pub struct NewValuationRecordDB {
    pub id: String,
    pub record_number: String,
    pub customer_id: String,
    pub customer_name: String,
    pub phone_number: String,
    pub email: String,
    pub consultant_id: String,
    pub receipt_id: String,
    pub service_id: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub status: String,
    pub commitment_requested: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset applied by the generic update; `None` fields are skipped.
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = crate::schema::valuation_records)]
pub struct ValuationRecordChangesetDB {
    pub appraiser_id: Option<String>,
    pub shape_and_cut: Option<String>,
    pub carat_weight: Option<f64>,
    pub clarity: Option<String>,
    pub cut_grade: Option<String>,
    pub measurements: Option<String>,
    pub polish: Option<String>,
    pub symmetry: Option<String>,
    pub fluorescence: Option<String>,
    pub estimated_value: Option<f64>,
    pub valuation_method: Option<String>,
    pub certificate_number: Option<String>,
    pub status: Option<String>,
    pub updated_at: NaiveDateTime,
}

// Conversion to domain models
impl From<ValuationRecordDB> for ValuationRecord {
    fn from(db: ValuationRecordDB) -> Self {
        Self {
            id: db.id,
            record_number: db.record_number,
            customer_id: db.customer_id,
            customer_name: db.customer_name,
            phone_number: db.phone_number,
            email: db.email,
            consultant_id: db.consultant_id,
            appraiser_id: db.appraiser_id,
            receipt_id: db.receipt_id,
            service_id: db.service_id,
            appointment_date: db.appointment_date,
            appointment_time: db.appointment_time,
            shape_and_cut: db.shape_and_cut,
            carat_weight: db.carat_weight,
            clarity: db.clarity,
            cut_grade: db.cut_grade,
            measurements: db.measurements,
            polish: db.polish,
            symmetry: db.symmetry,
            fluorescence: db.fluorescence,
            estimated_value: db.estimated_value,
            valuation_method: db.valuation_method,
            certificate_number: db.certificate_number,
            // Unknown values cannot appear through this application; the
            // column carries a CHECK constraint.
            status: db.status.parse().unwrap_or_default(),
            commitment_requested: db.commitment_requested,
            created_at: db.created_at,
            updated_at: db.updated_at,
            validated_at: db.validated_at,
        }
    }
}

impl From<NewValuationRecord> for NewValuationRecordDB {
    fn from(domain: NewValuationRecord) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            record_number: domain.record_number,
            customer_id: domain.customer_id,
            customer_name: domain.customer_name,
            phone_number: domain.phone_number,
            email: domain.email,
            consultant_id: domain.consultant_id,
            receipt_id: domain.receipt_id,
            service_id: domain.service_id,
            appointment_date: domain.appointment_date,
            appointment_time: domain.appointment_time,
            status: domain.status.as_str().to_string(),
            commitment_requested: false,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<gemval_core::records::ValuationRecordUpdate> for ValuationRecordChangesetDB {
    fn from(domain: gemval_core::records::ValuationRecordUpdate) -> Self {
        Self {
            appraiser_id: domain.appraiser_id,
            shape_and_cut: domain.shape_and_cut,
            carat_weight: domain.carat_weight,
            clarity: domain.clarity,
            cut_grade: domain.cut_grade,
            measurements: domain.measurements,
            polish: domain.polish,
            symmetry: domain.symmetry,
            fluorescence: domain.fluorescence,
            estimated_value: domain.estimated_value,
            valuation_method: domain.valuation_method,
            certificate_number: domain.certificate_number,
            status: domain.status.map(|s| s.as_str().to_string()),
            updated_at: Utc::now().naive_utc(),
        }
    }
}
