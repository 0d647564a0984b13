use std::sync::Arc;

use tracing::warn;
use validator::Validate;

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::{Credentials, User},
    repositories::UserRepository,
};

/// Checks an email/password pair against the stored accounts. Passwords
/// are stored and compared as plain text; no session is issued.
pub struct LoginUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl LoginUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, credentials: Credentials) -> DomainResult<User> {
        credentials.validate()?;

        match self.repo.find_by_email(&credentials.email).await? {
            Some(account)
                if account.password == credentials.password
                    && credentials
                        .user_id
                        .is_none_or(|id| id == account.profile.user_id) =>
            {
                Ok(account.profile)
            }
            _ => {
                warn!(email = %credentials.email, "rejected login attempt");
                Err(DomainError::InvalidCredentials)
            }
        }
    }
}
