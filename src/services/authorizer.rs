//! Bearer-token authorization for protected operations.
//!
//! Transport-agnostic: takes the raw `Authorization` header value and
//! resolves it to a stored user. Every failure is `Unauthenticated`.

use std::sync::Arc;

use super::token_issuer::TokenIssuer;
use crate::config::BEARER_SCHEME;
use crate::domain::User;
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Resolves bearer tokens to users.
#[derive(Clone)]
pub struct Authorizer {
    users: Arc<dyn UserRepository>,
    tokens: TokenIssuer,
}

impl Authorizer {
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenIssuer) -> Self {
        Self { users, tokens }
    }

    /// Authorize a request from its `Authorization` header value.
    ///
    /// Fails with `Unauthenticated` when the header is missing, is not a
    /// `Bearer` credential, carries an invalid or expired token, or names a
    /// user that no longer exists. Repository outages propagate as-is.
    pub async fn authorize(&self, authorization: Option<&str>) -> AppResult<User> {
        let token = authorization
            .and_then(bearer_token)
            .ok_or(AppError::Unauthenticated)?;

        let user_id = self.tokens.validate(token)?;

        self.users.find_by_id(user_id).await?.ok_or_else(|| {
            tracing::warn!(user_id, "Valid token for unknown user");
            AppError::Unauthenticated
        })
    }
}

/// Extract the credential from a `Bearer <token>` header value.
///
/// The scheme name is case-insensitive.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim_start().split_once(char::is_whitespace)?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case(BEARER_SCHEME) && !token.is_empty()).then_some(token)
}
