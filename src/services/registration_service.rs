//! Registration service - Creates new users.
//!
//! The password is hashed before anything touches the repository, and the
//! repository alone decides whether an email is taken.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::domain::{NewUser, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Registration service trait for dependency injection.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a new user.
    ///
    /// Returns `AppError::Conflict` if the email is already registered,
    /// `AppError::Validation` for unusable input.
    async fn register(&self, email: &str, password: &str) -> AppResult<User>;
}

/// Concrete implementation of RegistrationService.
pub struct Registrar {
    users: Arc<dyn UserRepository>,
}

impl Registrar {
    /// Create new registration service backed by the given repository
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

/// Normalize and validate an email for storage.
///
/// Emails are trimmed and otherwise kept as given; matching is exact.
pub(crate) fn normalize_email(email: &str) -> AppResult<&str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::validation("Email is required"));
    }
    Ok(email)
}

fn validate_password(password: &str) -> AppResult<()> {
    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(AppError::validation("Password is required"));
    }
    if length > MAX_PASSWORD_LENGTH {
        return Err(AppError::validation(format!(
            "Password must be at most {} characters",
            MAX_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

#[async_trait]
impl RegistrationService for Registrar {
    async fn register(&self, email: &str, password: &str) -> AppResult<User> {
        let email = normalize_email(email)?;
        validate_password(password)?;

        let password_hash = Password::hash(password)?.into_string();

        match self.users.save(NewUser::new(email, password_hash)).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, "User registered");
                Ok(user)
            }
            Err(AppError::Conflict(field)) => {
                tracing::info!("Registration rejected: email already registered");
                Err(AppError::Conflict(field))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use chrono::Utc;

    fn stored(new_user: NewUser) -> User {
        User {
            id: 1,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_before_saving() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .withf(|u| u.email == "a@b.com" && u.password_hash != "secret")
            .times(1)
            .returning(|u| Ok(stored(u)));

        let service = Registrar::new(Arc::new(repo));
        let user = service.register("a@b.com", "secret").await.unwrap();

        assert_eq!(user.email, "a@b.com");
        assert!(Password::from_hash(user.password_hash).verify("secret"));
    }

    #[tokio::test]
    async fn test_register_trims_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .withf(|u| u.email == "a@b.com")
            .times(1)
            .returning(|u| Ok(stored(u)));

        let service = Registrar::new(Arc::new(repo));
        assert!(service.register("  a@b.com \n", "secret").await.is_ok());
    }

    #[tokio::test]
    async fn test_register_passes_through_conflict() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .returning(|_| Err(AppError::conflict("email")));

        let service = Registrar::new(Arc::new(repo));
        let result = service.register("a@b.com", "secret").await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_register_does_not_turn_outage_into_conflict() {
        let mut repo = MockUserRepository::new();
        repo.expect_save().returning(|_| {
            Err(AppError::Database(sea_orm::DbErr::Conn(
                sea_orm::RuntimeErr::Internal("connection refused".to_string()),
            )))
        });

        let service = Registrar::new(Arc::new(repo));
        let result = service.register("a@b.com", "secret").await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_register_rejects_blank_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_save().never();

        let service = Registrar::new(Arc::new(repo));
        let result = service.register("   ", "secret").await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_register_rejects_empty_and_oversized_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_save().never();

        let service = Registrar::new(Arc::new(repo));
        let too_long = "x".repeat(MAX_PASSWORD_LENGTH + 1);

        assert!(matches!(
            service.register("a@b.com", "").await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            service.register("a@b.com", &too_long).await,
            Err(AppError::Validation(_))
        ));
    }
}
