//! Details module - records composed with denormalized display data.

mod details_model;
mod details_service;
mod details_traits;


pub use details_model::{RecordDetail, RecordTrackingItem};
pub use details_service::RecordDetailService;
pub use details_traits::RecordDetailServiceTrait;
