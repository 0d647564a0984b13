use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::User;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tweet {
    pub tweet_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub update_at: Option<DateTime<Utc>>,
    pub by: User,
}

/// A tweet as submitted by a client. `created_at` is filled in when the
/// request is handled if the client left it out.
#[derive(Debug, Clone, Default, Validate)]
pub struct TweetDraft {
    pub tweet_id: Uuid,
    #[validate(length(min = 1, max = 256, message = "must contain 1 to 256 characters"))]
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
    pub update_at: Option<DateTime<Utc>>,
    #[validate(nested)]
    pub by: User,
}

impl TweetDraft {
    pub fn into_tweet(self, now: DateTime<Utc>) -> Tweet {
        Tweet {
            tweet_id: self.tweet_id,
            content: self.content,
            created_at: self.created_at.unwrap_or(now),
            update_at: self.update_at,
            by: self.by,
        }
    }
}

/// New content for an existing tweet.
#[derive(Debug, Clone, Default, Validate)]
pub struct TweetEdit {
    #[validate(length(min = 1, max = 256, message = "must contain 1 to 256 characters"))]
    pub content: String,
}
