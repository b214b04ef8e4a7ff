//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They receive the user repository as an
//! `Arc<dyn UserRepository>` and never touch storage directly.

mod auth_service;
mod authorizer;
mod registration_service;
mod token_issuer;

pub use auth_service::{AuthService, Authenticator};
pub use authorizer::Authorizer;
pub use registration_service::{Registrar, RegistrationService};
pub use token_issuer::{Claims, InvalidToken, TokenIssuer, TokenResponse};
