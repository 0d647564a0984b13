use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::domain::{
    errors::DomainResult,
    models::{Registration, User},
    repositories::UserRepository,
};

pub struct RegisterUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl RegisterUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, registration: Registration) -> DomainResult<User> {
        registration.validate()?;

        let stored = self.repo.insert(registration.into_account()).await?;
        info!(user_id = %stored.profile.user_id, "user registered");
        Ok(stored.profile)
    }
}
