//! SQLite storage implementation for valuation records.

mod model;
mod repository;

pub use model::{NewValuationRecordDB, ValuationRecordChangesetDB, ValuationRecordDB};
pub use repository::RecordRepository;
