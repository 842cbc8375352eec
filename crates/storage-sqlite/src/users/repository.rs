use std::sync::Arc;

use diesel::prelude::*;

use gemval_core::users::{User, UserRepositoryTrait};
use gemval_core::Result;

use super::model::UserDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::users;

/// Read-only user store. Accounts live in a separate identity system;
/// this system only resolves names. `insert` exists for seeding and tests.
pub struct UserRepository {
    pool: Arc<DbPool>,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        UserRepository { pool }
    }

    pub fn insert(&self, user: User) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        let user_db: UserDB = user.into();
        let inserted = diesel::insert_into(users::table)
            .values(&user_db)
            .returning(UserDB::as_returning())
            .get_result(&mut conn)
            .map_err(StorageError::from)?;
        Ok(User::from(inserted))
    }
}

impl UserRepositoryTrait for UserRepository {
    fn get_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users::table
            .find(user_id)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(User::from(user_db))
    }
}
