use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{
    errors::DomainResult,
    models::{User, UserProfileUpdate},
    repositories::UserRepository,
};

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: Uuid, update: UserProfileUpdate) -> DomainResult<User> {
        update.validate()?;

        let stored = self.repo.update_profile(&user_id, update).await?;
        info!(%user_id, "user updated");
        Ok(stored.profile)
    }
}
