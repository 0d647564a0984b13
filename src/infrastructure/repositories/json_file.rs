use std::{
    ffi::OsString,
    marker::PhantomData,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    domain::{
        errors::DomainResult,
        models::{Tweet, UserAccount, UserProfileUpdate},
        repositories::{TweetRepository, UserRepository},
    },
    infrastructure::repositories::records,
};

pub const USERS_FILE: &str = "users.json";
pub const TWEETS_FILE: &str = "tweets.json";

/// One JSON array per entity type, rewritten in full on every change.
///
/// Mutations are serialized through `write_lock` and land on disk through
/// a temporary sibling file that is fsynced and renamed over the original,
/// so readers only ever observe a complete array.
pub struct JsonFileStore<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Opens the store at `path`, creating an empty array if the file is
    /// missing. An existing file must already hold a valid array.
    pub async fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let exists = fs::try_exists(&path)
            .await
            .with_context(|| format!("failed to stat {}", path.display()))?;
        if !exists {
            write_atomic(&path, b"[]").await?;
            info!(path = %path.display(), "created empty record file");
        }

        let store = Self {
            path,
            write_lock: Mutex::new(()),
            _records: PhantomData,
        };
        let count = store.list().await?.len();
        debug!(path = %store.path.display(), count, "opened record file");
        Ok(store)
    }

    /// Every record in file order.
    pub async fn list(&self) -> anyhow::Result<Vec<T>> {
        let bytes = fs::read(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("failed to parse {} as a JSON array", self.path.display()))
    }

    /// Loads the array, lets `change` edit it and writes it back. Nothing
    /// is written when `change` fails.
    pub async fn mutate<R, F>(&self, change: F) -> DomainResult<R>
    where
        F: FnOnce(&mut Vec<T>) -> DomainResult<R>,
    {
        let _guard = self.write_lock.lock().await;
        let mut records = self.list().await?;
        let result = change(&mut records)?;
        self.persist(&records).await?;
        debug!(path = %self.path.display(), count = records.len(), "rewrote record file");
        Ok(result)
    }

    async fn persist(&self, records: &[T]) -> anyhow::Result<()> {
        let bytes = serde_json::to_vec_pretty(records).context("failed to serialize records")?;
        write_atomic(&self.path, &bytes).await
    }
}

async fn write_atomic(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let tmp = tmp_path(path);
    let mut file = fs::File::create(&tmp)
        .await
        .with_context(|| format!("failed to create {}", tmp.display()))?;
    file.write_all(bytes)
        .await
        .with_context(|| format!("failed to write {}", tmp.display()))?;
    file.sync_all()
        .await
        .with_context(|| format!("failed to sync {}", tmp.display()))?;
    drop(file);

    fs::rename(&tmp, path)
        .await
        .with_context(|| format!("failed to move {} into place", tmp.display()))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

pub struct JsonFileUserRepository {
    store: JsonFileStore<UserAccount>,
}

impl JsonFileUserRepository {
    pub async fn open(data_dir: &Path) -> anyhow::Result<Arc<Self>> {
        let store = JsonFileStore::open(data_dir.join(USERS_FILE)).await?;
        Ok(Arc::new(Self { store }))
    }
}

#[async_trait]
impl UserRepository for JsonFileUserRepository {
    async fn list(&self) -> DomainResult<Vec<UserAccount>> {
        Ok(self.store.list().await?)
    }

    async fn get(&self, id: &Uuid) -> DomainResult<Option<UserAccount>> {
        let accounts = self.store.list().await?;
        Ok(records::find_by_id(&accounts, id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<UserAccount>> {
        let accounts = self.store.list().await?;
        Ok(records::find_by_email(&accounts, email).cloned())
    }

    async fn insert(&self, account: UserAccount) -> DomainResult<UserAccount> {
        self.store
            .mutate(|accounts| records::insert_account(accounts, account))
            .await
    }

    async fn update_profile(
        &self,
        id: &Uuid,
        update: UserProfileUpdate,
    ) -> DomainResult<UserAccount> {
        self.store
            .mutate(|accounts| records::update_profile(accounts, id, update))
            .await
    }

    async fn delete(&self, id: &Uuid) -> DomainResult<UserAccount> {
        self.store
            .mutate(|accounts| records::remove(accounts, id))
            .await
    }
}

pub struct JsonFileTweetRepository {
    store: JsonFileStore<Tweet>,
}

impl JsonFileTweetRepository {
    pub async fn open(data_dir: &Path) -> anyhow::Result<Arc<Self>> {
        let store = JsonFileStore::open(data_dir.join(TWEETS_FILE)).await?;
        Ok(Arc::new(Self { store }))
    }
}

#[async_trait]
impl TweetRepository for JsonFileTweetRepository {
    async fn list(&self) -> DomainResult<Vec<Tweet>> {
        Ok(self.store.list().await?)
    }

    async fn get(&self, id: &Uuid) -> DomainResult<Option<Tweet>> {
        let tweets = self.store.list().await?;
        Ok(records::find_by_id(&tweets, id).cloned())
    }

    async fn insert(&self, tweet: Tweet) -> DomainResult<Tweet> {
        self.store
            .mutate(|tweets| records::insert(tweets, tweet))
            .await
    }

    async fn edit_content(
        &self,
        id: &Uuid,
        content: String,
        at: DateTime<Utc>,
    ) -> DomainResult<Tweet> {
        self.store
            .mutate(|tweets| {
                records::edit(tweets, id, |tweet| {
                    tweet.content = content;
                    tweet.update_at = Some(at);
                })
            })
            .await
    }

    async fn delete(&self, id: &Uuid) -> DomainResult<Tweet> {
        self.store
            .mutate(|tweets| records::remove(tweets, id))
            .await
    }
}
