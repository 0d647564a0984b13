use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{errors::DomainResult, models::User, repositories::UserRepository};

/// Removes the account only. Tweets keep their embedded copy of the author.
pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: Uuid) -> DomainResult<User> {
        let removed = self.repo.delete(&user_id).await?;
        info!(%user_id, "user deleted");
        Ok(removed.profile)
    }
}
