//! Credential service - registration, login and bearer-token authorization.
//!
//! Users register with an email and password, exchange those credentials
//! for a signed, time-bounded bearer token, and present the token to reach
//! protected operations such as reading their own profile.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User entity and the password value object
//! - **services**: Registration, login, token issuing and authorization
//! - **infra**: Database, migrations and user repositories
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{NewUser, Password, User, UserId};
pub use errors::{AppError, AppResult};
