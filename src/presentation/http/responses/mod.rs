use chrono::{DateTime, Utc};
use poem_openapi::{ApiResponse, Object, payload::Json};
use uuid::Uuid;

use crate::presentation::models::UserDto;

#[derive(Object, Debug, Clone)]
pub struct TweetDto {
    pub tweet_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub update_at: Option<DateTime<Utc>>,
    pub by: UserDto,
}

#[derive(ApiResponse)]
pub enum SignupResponse {
    #[oai(status = 201)]
    Created(Json<UserDto>),
}

#[derive(ApiResponse)]
pub enum PostTweetResponse {
    #[oai(status = 201)]
    Created(Json<TweetDto>),
}
