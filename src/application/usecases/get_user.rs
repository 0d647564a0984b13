use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::User,
    repositories::UserRepository,
};

pub struct GetUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: Uuid) -> DomainResult<User> {
        self.repo
            .get(&user_id)
            .await?
            .map(|a| a.profile)
            .ok_or_else(|| DomainError::NotFound(format!("user {user_id}")))
    }
}
