use crate::errors::Result;
use crate::users::users_model::User;

/// Trait for user repository operations
pub trait UserRepositoryTrait: Send + Sync {
    fn get_by_id(&self, user_id: &str) -> Result<User>;
}

/// Trait for user lookup operations
pub trait UserServiceTrait: Send + Sync {
    fn get_user(&self, user_id: &str) -> Result<User>;
}
