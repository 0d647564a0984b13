use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::Tweet,
    repositories::TweetRepository,
};

pub struct GetTweetUseCase {
    repo: Arc<dyn TweetRepository>,
}

impl GetTweetUseCase {
    pub fn new(repo: Arc<dyn TweetRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, tweet_id: Uuid) -> DomainResult<Tweet> {
        self.repo
            .get(&tweet_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("tweet {tweet_id}")))
    }
}
