//! Catalog module - the valuation service offerings referenced by records.

mod catalog_model;
mod catalog_service;
mod catalog_traits;

pub use catalog_model::Service;
pub use catalog_service::CatalogService;
pub use catalog_traits::{CatalogRepositoryTrait, CatalogServiceTrait};
