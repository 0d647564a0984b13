use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use crate::presentation::{
    http::{
        endpoints::root::{ApiState, EndpointsTags},
        errors::domain_error,
        mappers::{map_users, update_to_profile},
        payload::JsonBody,
        requests::UpdateUserRequestDto,
    },
    models::UserDto,
};

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UsersEndpoints {
    /// Show all users
    ///
    /// Also served as `/users/`; trailing slashes are trimmed before routing.
    #[oai(path = "/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(&self) -> poem::Result<Json<Vec<UserDto>>> {
        let users = self
            .state
            .list_users_usecase
            .execute()
            .await
            .map_err(domain_error)?;

        Ok(Json(map_users(users)))
    }

    /// Show a user
    #[oai(path = "/users/:user_id", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_user(&self, user_id: Path<Uuid>) -> poem::Result<Json<UserDto>> {
        let user = self
            .state
            .get_user_usecase
            .execute(user_id.0)
            .await
            .map_err(domain_error)?;

        Ok(Json(user.into()))
    }

    /// Update a user
    #[oai(path = "/users/:user_id", method = "put", tag = EndpointsTags::Users)]
    pub async fn update_user(
        &self,
        user_id: Path<Uuid>,
        request: JsonBody<UpdateUserRequestDto>,
    ) -> poem::Result<Json<UserDto>> {
        let user = self
            .state
            .update_user_usecase
            .execute(user_id.0, update_to_profile(request.0))
            .await
            .map_err(domain_error)?;

        Ok(Json(user.into()))
    }

    /// Delete a user
    #[oai(path = "/users/:user_id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_user(&self, user_id: Path<Uuid>) -> poem::Result<Json<UserDto>> {
        let user = self
            .state
            .delete_user_usecase
            .execute(user_id.0)
            .await
            .map_err(domain_error)?;

        Ok(Json(user.into()))
    }
}
