use std::sync::Arc;

use diesel::prelude::*;

use gemval_core::catalog::{CatalogRepositoryTrait, Service};
use gemval_core::Result;

use super::model::ServiceDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::services;

/// Read-only service catalog store. `insert` exists for seeding and tests.
pub struct CatalogRepository {
    pool: Arc<DbPool>,
}

impl CatalogRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        CatalogRepository { pool }
    }

    pub fn insert(&self, service: Service) -> Result<Service> {
        let mut conn = get_connection(&self.pool)?;
        let service_db: ServiceDB = service.into();
        let inserted = diesel::insert_into(services::table)
            .values(&service_db)
            .returning(ServiceDB::as_returning())
            .get_result(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Service::from(inserted))
    }
}

impl CatalogRepositoryTrait for CatalogRepository {
    fn get_by_id(&self, service_id: &str) -> Result<Service> {
        let mut conn = get_connection(&self.pool)?;
        let service_db = services::table
            .find(service_id)
            .select(ServiceDB::as_select())
            .first::<ServiceDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Service::from(service_db))
    }
}
