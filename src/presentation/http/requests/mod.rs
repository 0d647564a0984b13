use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::Object;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::presentation::{
    http::{
        mappers::{
            edit_from_request, login_to_credentials, post_to_draft, signup_to_registration,
            update_to_profile,
        },
        payload::{Fields, FromFields},
    },
    models::UserDto,
};

#[derive(Object, Debug, Clone, Default)]
pub struct SignupRequestDto {
    pub user_id: Uuid,
    /// A well-formed email address.
    pub email: String,
    /// 8 to 50 characters.
    pub password: String,
    /// 1 to 50 characters.
    pub first_name: String,
    /// 1 to 50 characters.
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
}

impl FromFields for SignupRequestDto {
    fn from_fields(fields: &mut Fields<'_>) -> Self {
        Self {
            user_id: fields.required("user_id"),
            email: fields.required("email"),
            password: fields.required("password"),
            first_name: fields.required("first_name"),
            last_name: fields.required("last_name"),
            birth_date: fields.optional("birth_date"),
        }
    }

    fn check(&self) -> Result<(), ValidationErrors> {
        signup_to_registration(self.clone()).validate()
    }
}

#[derive(Object, Debug, Clone, Default)]
pub struct LoginRequestDto {
    /// Optional. When given it must match the account's id.
    pub user_id: Option<Uuid>,
    pub email: String,
    /// 8 to 50 characters.
    pub password: String,
}

impl FromFields for LoginRequestDto {
    fn from_fields(fields: &mut Fields<'_>) -> Self {
        Self {
            user_id: fields.optional("user_id"),
            email: fields.required("email"),
            password: fields.required("password"),
        }
    }

    fn check(&self) -> Result<(), ValidationErrors> {
        login_to_credentials(self.clone()).validate()
    }
}

#[derive(Object, Debug, Clone, Default)]
pub struct UpdateUserRequestDto {
    pub email: String,
    /// 1 to 50 characters.
    pub first_name: String,
    /// 1 to 50 characters.
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
}

impl FromFields for UpdateUserRequestDto {
    fn from_fields(fields: &mut Fields<'_>) -> Self {
        Self {
            email: fields.required("email"),
            first_name: fields.required("first_name"),
            last_name: fields.required("last_name"),
            birth_date: fields.optional("birth_date"),
        }
    }

    fn check(&self) -> Result<(), ValidationErrors> {
        update_to_profile(self.clone()).validate()
    }
}

#[derive(Object, Debug, Clone, Default)]
pub struct PostTweetRequestDto {
    pub tweet_id: Uuid,
    /// 1 to 256 characters.
    pub content: String,
    /// Defaults to the time the request is handled. A value without an
    /// offset is read as UTC.
    pub created_at: Option<DateTime<Utc>>,
    pub update_at: Option<DateTime<Utc>>,
    pub by: UserDto,
}

impl FromFields for PostTweetRequestDto {
    fn from_fields(fields: &mut Fields<'_>) -> Self {
        Self {
            tweet_id: fields.required("tweet_id"),
            content: fields.required("content"),
            created_at: fields.timestamp("created_at"),
            update_at: fields.timestamp("update_at"),
            by: fields.nested("by"),
        }
    }

    fn check(&self) -> Result<(), ValidationErrors> {
        post_to_draft(self.clone()).validate()
    }
}

#[derive(Object, Debug, Clone, Default)]
pub struct UpdateTweetRequestDto {
    /// 1 to 256 characters.
    pub content: String,
}

impl FromFields for UpdateTweetRequestDto {
    fn from_fields(fields: &mut Fields<'_>) -> Self {
        Self {
            content: fields.required("content"),
        }
    }

    fn check(&self) -> Result<(), ValidationErrors> {
        edit_from_request(self.clone()).validate()
    }
}
