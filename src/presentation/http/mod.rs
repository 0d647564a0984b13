use std::sync::Arc;

use poem::{
    Endpoint, EndpointExt, Route,
    middleware::{NormalizePath, Tracing, TrailingSlash},
};
use poem_openapi::OpenApiService;

use crate::presentation::http::endpoints::{
    auth::AuthEndpoints,
    root::{ApiState, Endpoints},
    tweets::TweetsEndpoints,
    users::UsersEndpoints,
};

pub mod endpoints;
pub mod errors;
pub mod mappers;
pub mod payload;
pub mod requests;
pub mod responses;

/// The full HTTP application: API at the root, Swagger UI under `/docs`,
/// the OpenAPI document at `/openapi.json`.
pub fn build_app(state: Arc<ApiState>, server_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (
            Endpoints,
            AuthEndpoints::new(state.clone()),
            UsersEndpoints::new(state.clone()),
            TweetsEndpoints::new(state),
        ),
        "Twitter API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/docs", ui)
        .at("/openapi.json", spec)
        .nest("/", api_service)
        .with(NormalizePath::new(TrailingSlash::Trim))
        .with(Tracing)
}
