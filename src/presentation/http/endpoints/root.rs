use std::{path::Path, sync::Arc};

use poem_openapi::Tags;

use crate::{
    application::usecases::{
        delete_tweet::DeleteTweetUseCase, delete_user::DeleteUserUseCase,
        get_tweet::GetTweetUseCase, get_user::GetUserUseCase, list_tweets::ListTweetsUseCase,
        list_users::ListUsersUseCase, login_user::LoginUserUseCase, post_tweet::PostTweetUseCase,
        register_user::RegisterUserUseCase, update_tweet::UpdateTweetUseCase,
        update_user::UpdateUserUseCase,
    },
    domain::repositories::{TweetRepository, UserRepository},
    infrastructure::repositories::json_file::{JsonFileTweetRepository, JsonFileUserRepository},
};

#[derive(Clone)]
pub struct ApiState {
    pub register_user_usecase: Arc<RegisterUserUseCase>,
    pub login_user_usecase: Arc<LoginUserUseCase>,
    pub list_users_usecase: Arc<ListUsersUseCase>,
    pub get_user_usecase: Arc<GetUserUseCase>,
    pub update_user_usecase: Arc<UpdateUserUseCase>,
    pub delete_user_usecase: Arc<DeleteUserUseCase>,
    pub list_tweets_usecase: Arc<ListTweetsUseCase>,
    pub post_tweet_usecase: Arc<PostTweetUseCase>,
    pub get_tweet_usecase: Arc<GetTweetUseCase>,
    pub update_tweet_usecase: Arc<UpdateTweetUseCase>,
    pub delete_tweet_usecase: Arc<DeleteTweetUseCase>,
}

impl ApiState {
    pub fn new(user_repo: Arc<dyn UserRepository>, tweet_repo: Arc<dyn TweetRepository>) -> Self {
        Self {
            register_user_usecase: Arc::new(RegisterUserUseCase::new(user_repo.clone())),
            login_user_usecase: Arc::new(LoginUserUseCase::new(user_repo.clone())),
            list_users_usecase: Arc::new(ListUsersUseCase::new(user_repo.clone())),
            get_user_usecase: Arc::new(GetUserUseCase::new(user_repo.clone())),
            update_user_usecase: Arc::new(UpdateUserUseCase::new(user_repo.clone())),
            delete_user_usecase: Arc::new(DeleteUserUseCase::new(user_repo)),
            list_tweets_usecase: Arc::new(ListTweetsUseCase::new(tweet_repo.clone())),
            post_tweet_usecase: Arc::new(PostTweetUseCase::new(tweet_repo.clone())),
            get_tweet_usecase: Arc::new(GetTweetUseCase::new(tweet_repo.clone())),
            update_tweet_usecase: Arc::new(UpdateTweetUseCase::new(tweet_repo.clone())),
            delete_tweet_usecase: Arc::new(DeleteTweetUseCase::new(tweet_repo)),
        }
    }

    /// Opens (or creates) `users.json` and `tweets.json` under `data_dir`.
    pub async fn open(data_dir: &Path) -> anyhow::Result<Self> {
        let users = JsonFileUserRepository::open(data_dir).await?;
        let tweets = JsonFileTweetRepository::open(data_dir).await?;
        Ok(Self::new(users, tweets))
    }
}

pub struct Endpoints;

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Auth,
    Users,
    Tweets,
}
