use std::sync::Arc;

use super::users_model::User;
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::Result;

/// Read-only lookup service over users.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl UserServiceTrait for UserService {
    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository.get_by_id(user_id)
    }
}
