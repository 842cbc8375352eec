//! Users module - consultants, appraisers, and customers referenced by records.

mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{User, UserRole};
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
