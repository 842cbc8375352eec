//! Valuation record domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Workflow status of a valuation record.
///
/// A record starts in `InProgress` when created from a receipt, may be
/// sealed by a consultant, and ends in `Completed` once verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    /// Record created, appraisal underway
    #[default]
    InProgress,
    /// Diamond sealed, awaiting verification
    Sealed,
    /// Verified by a consultant; terminal state
    Completed,
}

impl RecordStatus {
    /// Stable string form used on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::InProgress => "IN_PROGRESS",
            RecordStatus::Sealed => "SEALED",
            RecordStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IN_PROGRESS" => Ok(RecordStatus::InProgress),
            "SEALED" => Ok(RecordStatus::Sealed),
            "COMPLETED" => Ok(RecordStatus::Completed),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown record status '{}'",
                other
            ))),
        }
    }
}

/// Domain model representing a diamond valuation record.
///
/// Customer and appointment fields are denormalized from the receipt at
/// intake time. Diamond attributes stay empty until an appraiser is
/// assigned and fills them in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRecord {
    pub id: String,
    /// Human-readable record number, generated at intake
    pub record_number: String,

    // Parties
    pub customer_id: String,
    pub customer_name: String,
    pub phone_number: String,
    pub email: String,
    pub consultant_id: String,
    pub appraiser_id: Option<String>,
    pub receipt_id: String,
    pub service_id: String,

    // Appointment
    pub appointment_date: NaiveDate,
    pub appointment_time: String,

    // Diamond attributes, filled by the appraiser
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

    // Workflow
    pub status: RecordStatus,
    pub commitment_requested: bool,

    // Timestamps
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Set once, when the record is completed
    pub validated_at: Option<NaiveDateTime>,
}

impl ValuationRecord {
    /// True if any diamond attribute has been filled in.
    pub fn has_diamond_attributes(&self) -> bool {
        self.shape_and_cut.is_some()
            || self.carat_weight.is_some()
            || self.clarity.is_some()
            || self.cut_grade.is_some()
            || self.measurements.is_some()
            || self.polish.is_some()
            || self.symmetry.is_some()
            || self.fluorescence.is_some()
            || self.estimated_value.is_some()
            || self.valuation_method.is_some()
            || self.certificate_number.is_some()
    }

    /// Clears all diamond attributes. Detail reads use this to hide
    /// appraisal data until an appraiser is assigned.
    pub fn clear_diamond_attributes(&mut self) {
        self.shape_and_cut = None;
        self.carat_weight = None;
        self.clarity = None;
        self.cut_grade = None;
        self.measurements = None;
        self.polish = None;
        self.symmetry = None;
        self.fluorescence = None;
        self.estimated_value = None;
        self.valuation_method = None;
        self.certificate_number = None;
    }
}

/// Input model for creating a new valuation record from a receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewValuationRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
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
    pub status: RecordStatus,
}

/// Partial update applied to an existing record.
///
/// `None` fields are left unchanged. The completion timestamp and the
/// commitment flag are deliberately absent; they move only through their
/// dedicated operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRecordUpdate {
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
    pub status: Option<RecordStatus>,
}

impl ValuationRecordUpdate {
    /// True if the update carries any diamond attribute.
    pub fn touches_diamond_attributes(&self) -> bool {
        self.shape_and_cut.is_some()
            || self.carat_weight.is_some()
            || self.clarity.is_some()
            || self.cut_grade.is_some()
            || self.measurements.is_some()
            || self.polish.is_some()
            || self.symmetry.is_some()
            || self.fluorescence.is_some()
            || self.estimated_value.is_some()
            || self.valuation_method.is_some()
            || self.certificate_number.is_some()
    }
}
