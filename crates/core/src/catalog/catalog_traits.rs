use crate::catalog::catalog_model::Service;
use crate::errors::Result;

/// Trait for service catalog repository operations
pub trait CatalogRepositoryTrait: Send + Sync {
    fn get_by_id(&self, service_id: &str) -> Result<Service>;
}

/// Trait for service catalog lookup operations
pub trait CatalogServiceTrait: Send + Sync {
    fn get_service(&self, service_id: &str) -> Result<Service>;
}
