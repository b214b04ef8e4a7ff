//! Registration and login handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::services::TokenResponse;
use crate::types::ItemResponse;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password (1 to 128 characters)
    #[validate(length(min = 1, max = 128, message = "Password must be 1 to 128 characters"))]
    #[schema(example = "supersecret", min_length = 1, max_length = 128)]
    pub password: String,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email address
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password
    #[validate(length(min = 1, max = 128, message = "Password must be 1 to 128 characters"))]
    #[schema(example = "supersecret", min_length = 1, max_length = 128)]
    pub password: String,
}

/// Create public registration and login routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(register))
        .route("/tokens", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered successfully", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<Json<ItemResponse<UserResponse>>> {
    let user = state
        .registration_service
        .register(&payload.email, &payload.password)
        .await?;

    Ok(Json(ItemResponse::new(UserResponse::from(user))))
}

/// Login and get a bearer token
#[utoipa::path(
    post,
    path = "/api/users/tokens",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(token))
}
