use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use validator::Validate;

use crate::domain::{
    errors::DomainResult,
    models::{Tweet, TweetDraft},
    repositories::TweetRepository,
};

pub struct PostTweetUseCase {
    repo: Arc<dyn TweetRepository>,
}

impl PostTweetUseCase {
    pub fn new(repo: Arc<dyn TweetRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, draft: TweetDraft) -> DomainResult<Tweet> {
        draft.validate()?;

        let tweet = self.repo.insert(draft.into_tweet(Utc::now())).await?;
        info!(tweet_id = %tweet.tweet_id, author = %tweet.by.user_id, "tweet posted");
        Ok(tweet)
    }
}
