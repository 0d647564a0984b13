use chrono::NaiveDate;
use poem_openapi::Object;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::{
    domain::models::User,
    presentation::http::payload::{Fields, FromFields},
};

/// Public user profile. Used both as a response body and as the embedded
/// author of a posted tweet.
#[derive(Object, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDto {
    pub user_id: Uuid,
    /// A well-formed email address.
    pub email: String,
    /// 1 to 50 characters.
    pub first_name: String,
    /// 1 to 50 characters.
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        UserDto {
            user_id: value.user_id,
            email: value.email,
            first_name: value.first_name,
            last_name: value.last_name,
            birth_date: value.birth_date,
        }
    }
}

impl From<UserDto> for User {
    fn from(value: UserDto) -> Self {
        User {
            user_id: value.user_id,
            email: value.email,
            first_name: value.first_name,
            last_name: value.last_name,
            birth_date: value.birth_date,
        }
    }
}

impl FromFields for UserDto {
    fn from_fields(fields: &mut Fields<'_>) -> Self {
        Self {
            user_id: fields.required("user_id"),
            email: fields.required("email"),
            first_name: fields.required("first_name"),
            last_name: fields.required("last_name"),
            birth_date: fields.optional("birth_date"),
        }
    }

    fn check(&self) -> Result<(), ValidationErrors> {
        User::from(self.clone()).validate()
    }
}
