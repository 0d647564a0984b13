pub mod tweet;
pub mod user;

pub use tweet::{Tweet, TweetDraft, TweetEdit};
pub use user::{Credentials, Registration, User, UserAccount, UserProfileUpdate};
