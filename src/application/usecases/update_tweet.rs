use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use validator::Validate;

use crate::domain::{
    errors::DomainResult,
    models::{Tweet, TweetEdit},
    repositories::TweetRepository,
};

pub struct UpdateTweetUseCase {
    repo: Arc<dyn TweetRepository>,
}

impl UpdateTweetUseCase {
    pub fn new(repo: Arc<dyn TweetRepository>) -> Self {
        Self { repo }
    }

    /// Replaces the content and stamps `update_at`; id, author and
    /// creation time are kept.
    pub async fn execute(&self, tweet_id: Uuid, edit: TweetEdit) -> DomainResult<Tweet> {
        edit.validate()?;

        let stored = self
            .repo
            .edit_content(&tweet_id, edit.content, Utc::now())
            .await?;
        info!(%tweet_id, "tweet updated");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{errors::DomainError, models::User},
        infrastructure::repositories::in_memory::InMemoryTweetRepository,
    };

    #[tokio::test]
    async fn stamps_update_time_and_keeps_the_rest() {
        let repo = Arc::new(InMemoryTweetRepository::new());
        let original = repo
            .insert(Tweet {
                tweet_id: Uuid::new_v4(),
                content: "first draft".into(),
                created_at: Utc::now(),
                update_at: None,
                by: User {
                    user_id: Uuid::new_v4(),
                    email: "a@b.com".into(),
                    first_name: "A".into(),
                    last_name: "B".into(),
                    birth_date: None,
                },
            })
            .await
            .unwrap();

        let usecase = UpdateTweetUseCase::new(repo.clone());
        let updated = usecase
            .execute(
                original.tweet_id,
                TweetEdit {
                    content: "final".into(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.content, "final");
        assert!(updated.update_at.is_some());
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.by, original.by);
        assert_eq!(repo.get(&original.tweet_id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn empty_content_is_rejected_before_lookup() {
        let usecase = UpdateTweetUseCase::new(Arc::new(InMemoryTweetRepository::new()));
        assert!(matches!(
            usecase
                .execute(Uuid::new_v4(), TweetEdit::default())
                .await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn unknown_tweet_is_not_found() {
        let usecase = UpdateTweetUseCase::new(Arc::new(InMemoryTweetRepository::new()));
        let edit = TweetEdit {
            content: "hello".into(),
        };
        assert!(matches!(
            usecase.execute(Uuid::new_v4(), edit).await,
            Err(DomainError::NotFound(_))
        ));
    }
}
