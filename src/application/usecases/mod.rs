pub mod delete_tweet;
pub mod delete_user;
pub mod get_tweet;
pub mod get_user;
pub mod list_tweets;
pub mod list_users;
pub mod login_user;
pub mod post_tweet;
pub mod register_user;
pub mod update_tweet;
pub mod update_user;
