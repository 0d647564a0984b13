use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use crate::presentation::{
    http::{
        endpoints::root::{ApiState, EndpointsTags},
        errors::domain_error,
        mappers::{login_to_credentials, signup_to_registration},
        payload::JsonBody,
        requests::{LoginRequestDto, SignupRequestDto},
        responses::SignupResponse,
    },
    models::UserDto,
};

#[derive(Clone)]
pub struct AuthEndpoints {
    state: Arc<ApiState>,
}

impl AuthEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl AuthEndpoints {
    /// Register a user
    #[oai(
        path = "/auth/signup",
        method = "post",
        tag = EndpointsTags::Auth,
        tag = EndpointsTags::Users
    )]
    pub async fn signup(
        &self,
        request: JsonBody<SignupRequestDto>,
    ) -> poem::Result<SignupResponse> {
        let user = self
            .state
            .register_user_usecase
            .execute(signup_to_registration(request.0))
            .await
            .map_err(domain_error)?;

        Ok(SignupResponse::Created(Json(user.into())))
    }

    /// Login a user
    #[oai(
        path = "/auth/login",
        method = "post",
        tag = EndpointsTags::Auth,
        tag = EndpointsTags::Users
    )]
    pub async fn login(&self, request: JsonBody<LoginRequestDto>) -> poem::Result<Json<UserDto>> {
        let user = self
            .state
            .login_user_usecase
            .execute(login_to_credentials(request.0))
            .await
            .map_err(domain_error)?;

        Ok(Json(user.into()))
    }
}
