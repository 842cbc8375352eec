//! Database model for service catalog entries.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use gemval_core::catalog::Service;

/// Database model for services
#[derive(
    Insertable, Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::services)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ServiceDB {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<ServiceDB> for Service {
    fn from(db: ServiceDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            description: db.description,
        }
    }
}

impl From<Service> for ServiceDB {
    fn from(domain: Service) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            description: domain.description,
        }
    }
}
