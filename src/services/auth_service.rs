//! Authentication service - Exchanges credentials for a bearer token.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::sync::Arc;

use super::token_issuer::{TokenIssuer, TokenResponse};
use crate::config::{MAX_PASSWORD_LENGTH, TOKEN_TYPE_BEARER};
use crate::domain::Password;
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Real Argon2 hash verified when the email is unknown, so a miss costs the
/// same as a wrong password.
static DUMMY_PASSWORD: Lazy<Password> = Lazy::new(|| {
    Password::hash("timing-equalizer-not-a-real-password")
        .unwrap_or_else(|_| Password::from_hash(""))
});

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Login and return a bearer token.
    ///
    /// Unknown email and wrong password both yield
    /// `AppError::InvalidCredentials`.
    async fn login(&self, email: &str, password: &str) -> AppResult<TokenResponse>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    tokens: TokenIssuer,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenIssuer) -> Self {
        Self { users, tokens }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, email: &str, password: &str) -> AppResult<TokenResponse> {
        // No stored password can be longer, so skip hashing oversized input
        if password.chars().count() > MAX_PASSWORD_LENGTH {
            tracing::info!("Login rejected: password exceeds maximum length");
            return Err(AppError::InvalidCredentials);
        }

        let user = self.users.find_by_email(email.trim()).await?;

        let password_valid = match &user {
            Some(user) => Password::from_hash(user.password_hash.as_str()).verify(password),
            None => {
                DUMMY_PASSWORD.verify(password);
                false
            }
        };

        let user = match user {
            Some(user) if password_valid => user,
            _ => {
                tracing::info!("Login rejected");
                return Err(AppError::InvalidCredentials);
            }
        };

        let token = self.tokens.issue(user.id)?;
        tracing::info!(user_id = user.id, "Login succeeded");

        Ok(TokenResponse {
            token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.tokens.ttl().num_seconds(),
        })
    }
}
