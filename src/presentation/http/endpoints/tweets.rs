use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use crate::presentation::http::{
    endpoints::root::{ApiState, EndpointsTags},
    errors::domain_error,
    mappers::{edit_from_request, map_tweet, map_tweets, post_to_draft},
    payload::JsonBody,
    requests::{PostTweetRequestDto, UpdateTweetRequestDto},
    responses::{PostTweetResponse, TweetDto},
};

#[derive(Clone)]
pub struct TweetsEndpoints {
    state: Arc<ApiState>,
}

impl TweetsEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl TweetsEndpoints {
    /// Show all tweets
    #[oai(path = "/", method = "get", tag = EndpointsTags::Tweets)]
    pub async fn home(&self) -> poem::Result<Json<Vec<TweetDto>>> {
        let tweets = self
            .state
            .list_tweets_usecase
            .execute()
            .await
            .map_err(domain_error)?;

        Ok(Json(map_tweets(tweets)))
    }

    /// Post a tweet
    #[oai(path = "/post", method = "post", tag = EndpointsTags::Tweets)]
    pub async fn post(
        &self,
        request: JsonBody<PostTweetRequestDto>,
    ) -> poem::Result<PostTweetResponse> {
        let tweet = self
            .state
            .post_tweet_usecase
            .execute(post_to_draft(request.0))
            .await
            .map_err(domain_error)?;

        Ok(PostTweetResponse::Created(Json(map_tweet(tweet))))
    }

    /// Show a tweet
    #[oai(path = "/tweets/:tweet_id", method = "get", tag = EndpointsTags::Tweets)]
    pub async fn get_tweet(&self, tweet_id: Path<Uuid>) -> poem::Result<Json<TweetDto>> {
        let tweet = self
            .state
            .get_tweet_usecase
            .execute(tweet_id.0)
            .await
            .map_err(domain_error)?;

        Ok(Json(map_tweet(tweet)))
    }

    /// Update a tweet
    #[oai(path = "/tweets/:tweet_id", method = "put", tag = EndpointsTags::Tweets)]
    pub async fn update_tweet(
        &self,
        tweet_id: Path<Uuid>,
        request: JsonBody<UpdateTweetRequestDto>,
    ) -> poem::Result<Json<TweetDto>> {
        let tweet = self
            .state
            .update_tweet_usecase
            .execute(tweet_id.0, edit_from_request(request.0))
            .await
            .map_err(domain_error)?;

        Ok(Json(map_tweet(tweet)))
    }

    /// Delete a tweet
    #[oai(path = "/tweets/:tweet_id", method = "delete", tag = EndpointsTags::Tweets)]
    pub async fn delete_tweet(&self, tweet_id: Path<Uuid>) -> poem::Result<Json<TweetDto>> {
        let tweet = self
            .state
            .delete_tweet_usecase
            .execute(tweet_id.0)
            .await
            .map_err(domain_error)?;

        Ok(Json(map_tweet(tweet)))
    }
}
