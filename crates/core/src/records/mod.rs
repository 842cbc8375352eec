//! Valuation records module - domain models, services, and traits.

mod records_model;
mod records_service;
mod records_traits;

#[cfg(test)]
mod records_service_tests;

// Re-export the public interface
pub use records_model::{
    NewValuationRecord, RecordStatus, ValuationRecord, ValuationRecordUpdate,
};
pub use records_service::RecordService;
pub use records_traits::{RecordRepositoryTrait, RecordServiceTrait};
