use crate::{
    domain::models::{
        Credentials, Registration, Tweet, TweetDraft, TweetEdit, User, UserProfileUpdate,
    },
    presentation::{
        http::{
            requests::{
                LoginRequestDto, PostTweetRequestDto, SignupRequestDto, UpdateTweetRequestDto,
                UpdateUserRequestDto,
            },
            responses::TweetDto,
        },
        models::UserDto,
    },
};

pub fn map_users(users: Vec<User>) -> Vec<UserDto> {
    users.into_iter().map(UserDto::from).collect()
}

pub fn map_tweet(tweet: Tweet) -> TweetDto {
    TweetDto {
        tweet_id: tweet.tweet_id,
        content: tweet.content,
        created_at: tweet.created_at,
        update_at: tweet.update_at,
        by: tweet.by.into(),
    }
}

pub fn map_tweets(tweets: Vec<Tweet>) -> Vec<TweetDto> {
    tweets.into_iter().map(map_tweet).collect()
}

pub fn signup_to_registration(request: SignupRequestDto) -> Registration {
    Registration {
        user_id: request.user_id,
        email: request.email,
        password: request.password,
        first_name: request.first_name,
        last_name: request.last_name,
        birth_date: request.birth_date,
    }
}

pub fn login_to_credentials(request: LoginRequestDto) -> Credentials {
    Credentials {
        user_id: request.user_id,
        email: request.email,
        password: request.password,
    }
}

pub fn update_to_profile(request: UpdateUserRequestDto) -> UserProfileUpdate {
    UserProfileUpdate {
        email: request.email,
        first_name: request.first_name,
        last_name: request.last_name,
        birth_date: request.birth_date,
    }
}

pub fn post_to_draft(request: PostTweetRequestDto) -> TweetDraft {
    TweetDraft {
        tweet_id: request.tweet_id,
        content: request.content,
        created_at: request.created_at,
        update_at: request.update_at,
        by: request.by.into(),
    }
}

pub fn edit_from_request(request: UpdateTweetRequestDto) -> TweetEdit {
    TweetEdit {
        content: request.content,
    }
}
