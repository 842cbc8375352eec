//! Database model for users.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use gemval_core::users::User;

/// Database model for users
#[derive(
    Insertable, Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct UserDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            role: db.role.parse().unwrap_or_default(),
        }
    }
}

impl From<User> for UserDB {
    fn from(domain: User) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            email: domain.email,
            role: domain.role.as_str().to_string(),
        }
    }
}
