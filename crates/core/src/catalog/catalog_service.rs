use std::sync::Arc;

use super::catalog_model::Service;
use super::catalog_traits::{CatalogRepositoryTrait, CatalogServiceTrait};
use crate::errors::Result;

/// Read-only lookup service over the service catalog.
pub struct CatalogService {
    repository: Arc<dyn CatalogRepositoryTrait>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl CatalogServiceTrait for CatalogService {
    fn get_service(&self, service_id: &str) -> Result<Service> {
        self.repository.get_by_id(service_id)
    }
}
