//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::UserRepository;
use crate::services::{
    AuthService, Authenticator, Authorizer, Registrar, RegistrationService, TokenIssuer,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User registration
    pub registration_service: Arc<dyn RegistrationService>,
    /// Login
    pub auth_service: Arc<dyn AuthService>,
    /// Bearer-token authorization for protected routes
    pub authorizer: Authorizer,
    /// User repository (also used for health checks)
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Wire every service around one repository and the configured secret.
    ///
    /// The token issuer is built once here, so the signing secret is fixed
    /// for the lifetime of the state.
    pub fn from_config(users: Arc<dyn UserRepository>, config: &Config) -> Self {
        let tokens = TokenIssuer::from_config(config);

        Self {
            registration_service: Arc::new(Registrar::new(users.clone())),
            auth_service: Arc::new(Authenticator::new(users.clone(), tokens.clone())),
            authorizer: Authorizer::new(users.clone(), tokens),
            users,
        }
    }
}
