use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{errors::DomainResult, models::Tweet, repositories::TweetRepository};

pub struct DeleteTweetUseCase {
    repo: Arc<dyn TweetRepository>,
}

impl DeleteTweetUseCase {
    pub fn new(repo: Arc<dyn TweetRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, tweet_id: Uuid) -> DomainResult<Tweet> {
        let removed = self.repo.delete(&tweet_id).await?;
        info!(%tweet_id, "tweet deleted");
        Ok(removed)
    }
}
