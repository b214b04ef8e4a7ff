//! Bearer-token authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::domain::User;
use crate::errors::AppError;

/// Authenticated user resolved from the bearer token.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// Authentication middleware.
///
/// Reads the Authorization header, resolves it through the `Authorizer`,
/// then injects the CurrentUser into the request extensions. A header that
/// is not valid UTF-8 counts as missing.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(str::to_owned);

    let user = state.authorizer.authorize(auth_header.as_deref()).await?;

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}
