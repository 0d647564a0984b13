use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{
        errors::DomainResult,
        models::{Tweet, UserAccount, UserProfileUpdate},
        repositories::{TweetRepository, UserRepository},
    },
    infrastructure::repositories::records,
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    accounts: Arc<RwLock<Vec<UserAccount>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> DomainResult<Vec<UserAccount>> {
        Ok(self.accounts.read().await.clone())
    }

    async fn get(&self, id: &Uuid) -> DomainResult<Option<UserAccount>> {
        let accounts = self.accounts.read().await;
        Ok(records::find_by_id(&accounts, id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<UserAccount>> {
        let accounts = self.accounts.read().await;
        Ok(records::find_by_email(&accounts, email).cloned())
    }

    async fn insert(&self, account: UserAccount) -> DomainResult<UserAccount> {
        let mut accounts = self.accounts.write().await;
        records::insert_account(&mut accounts, account)
    }

    async fn update_profile(
        &self,
        id: &Uuid,
        update: UserProfileUpdate,
    ) -> DomainResult<UserAccount> {
        let mut accounts = self.accounts.write().await;
        records::update_profile(&mut accounts, id, update)
    }

    async fn delete(&self, id: &Uuid) -> DomainResult<UserAccount> {
        let mut accounts = self.accounts.write().await;
        records::remove(&mut accounts, id)
    }
}

#[derive(Default)]
pub struct InMemoryTweetRepository {
    tweets: Arc<RwLock<Vec<Tweet>>>,
}

impl InMemoryTweetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TweetRepository for InMemoryTweetRepository {
    async fn list(&self) -> DomainResult<Vec<Tweet>> {
        Ok(self.tweets.read().await.clone())
    }

    async fn get(&self, id: &Uuid) -> DomainResult<Option<Tweet>> {
        let tweets = self.tweets.read().await;
        Ok(records::find_by_id(&tweets, id).cloned())
    }

    async fn insert(&self, tweet: Tweet) -> DomainResult<Tweet> {
        let mut tweets = self.tweets.write().await;
        records::insert(&mut tweets, tweet)
    }

    async fn edit_content(
        &self,
        id: &Uuid,
        content: String,
        at: DateTime<Utc>,
    ) -> DomainResult<Tweet> {
        let mut tweets = self.tweets.write().await;
        records::edit(&mut tweets, id, |tweet| {
            tweet.content = content;
            tweet.update_at = Some(at);
        })
    }

    async fn delete(&self, id: &Uuid) -> DomainResult<Tweet> {
        let mut tweets = self.tweets.write().await;
        records::remove(&mut tweets, id)
    }
}
