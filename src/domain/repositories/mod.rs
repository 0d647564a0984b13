use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    errors::DomainResult,
    models::{Tweet, UserAccount, UserProfileUpdate},
};

/// A stored entity addressable by its identifier.
pub trait Record {
    const KIND: &'static str;

    fn id(&self) -> Uuid;
}

impl Record for UserAccount {
    const KIND: &'static str = "user";

    fn id(&self) -> Uuid {
        self.profile.user_id
    }
}

impl Record for Tweet {
    const KIND: &'static str = "tweet";

    fn id(&self) -> Uuid {
        self.tweet_id
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<UserAccount>>;
    async fn get(&self, id: &Uuid) -> DomainResult<Option<UserAccount>>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<UserAccount>>;
    /// Fails with `AlreadyExists` when the id or the email is taken.
    async fn insert(&self, account: UserAccount) -> DomainResult<UserAccount>;
    /// Applies `update` to the stored profile in one locked step, keeping
    /// the password.
    async fn update_profile(
        &self,
        id: &Uuid,
        update: UserProfileUpdate,
    ) -> DomainResult<UserAccount>;
    async fn delete(&self, id: &Uuid) -> DomainResult<UserAccount>;
}

#[async_trait]
pub trait TweetRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Tweet>>;
    async fn get(&self, id: &Uuid) -> DomainResult<Option<Tweet>>;
    async fn insert(&self, tweet: Tweet) -> DomainResult<Tweet>;
    /// Swaps the content and stamps `update_at` in one locked step.
    async fn edit_content(
        &self,
        id: &Uuid,
        content: String,
        at: DateTime<Utc>,
    ) -> DomainResult<Tweet>;
    async fn delete(&self, id: &Uuid) -> DomainResult<Tweet>;
}
