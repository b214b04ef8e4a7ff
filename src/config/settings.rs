//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATABASE_URL, DEFAULT_JWT_EXPIRATION_HOURS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEV_JWT_SECRET, MAX_JWT_EXPIRATION_HOURS,
    MIN_JWT_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    jwt_secret: String,
    jwt_expiration_hours: i64,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Build a configuration with default settings and the given signing secret.
    ///
    /// # Errors
    /// Returns a validation error if the secret is shorter than
    /// `MIN_JWT_SECRET_LENGTH` bytes.
    pub fn new(jwt_secret: impl Into<String>) -> AppResult<Self> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::validation(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        Ok(Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            jwt_secret,
            jwt_expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// The signing secret is read once here and kept for the lifetime of the
    /// process. Restarting with a different `JWT_SECRET` invalidates every
    /// token issued under the old one.
    ///
    /// # Errors
    /// Fails if `JWT_SECRET` is missing in a release build or is too short.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                // Development mode: use default but warn
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                DEV_JWT_SECRET.to_string()
            }
            Err(_) => {
                return Err(AppError::validation(
                    "JWT_SECRET environment variable must be set in production",
                ))
            }
        };

        let mut config = Self::new(jwt_secret)?;

        if let Ok(url) = env::var("DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(max) = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.database_max_connections = max;
        }
        if let Ok(raw) = env::var("JWT_EXPIRATION_HOURS") {
            let hours = raw.trim().parse().map_err(|_| {
                AppError::validation(format!("JWT_EXPIRATION_HOURS is not a number: {}", raw))
            })?;
            config.set_jwt_expiration_hours(hours)?;
        }
        if let Ok(host) = env::var("SERVER_HOST") {
            config.server_host = host;
        }
        if let Some(port) = env::var("SERVER_PORT").ok().and_then(|v| v.parse().ok()) {
            config.server_port = port;
        }

        Ok(config)
    }

    /// Token lifetime in hours, always within `1..=MAX_JWT_EXPIRATION_HOURS`.
    pub fn jwt_expiration_hours(&self) -> i64 {
        self.jwt_expiration_hours
    }

    /// Set the token lifetime.
    ///
    /// # Errors
    /// Returns a validation error unless `1 <= hours <= MAX_JWT_EXPIRATION_HOURS`.
    pub fn set_jwt_expiration_hours(&mut self, hours: i64) -> AppResult<()> {
        if !(1..=MAX_JWT_EXPIRATION_HOURS).contains(&hours) {
            return Err(AppError::validation(format!(
                "JWT_EXPIRATION_HOURS must be between 1 and {}",
                MAX_JWT_EXPIRATION_HOURS
            )));
        }
        self.jwt_expiration_hours = hours;
        Ok(())
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_secret_rejected() {
        let result = Config::new("too-short");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_defaults() {
        let config = Config::new("test-secret-key-for-testing-only-32chars").unwrap();
        assert_eq!(config.jwt_expiration_hours(), DEFAULT_JWT_EXPIRATION_HOURS);
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_expiration_hours_out_of_range_rejected() {
        let mut config = Config::new("test-secret-key-for-testing-only-32chars").unwrap();

        let rejected = [
            0,
            -1,
            MAX_JWT_EXPIRATION_HOURS + 1,
            10_000_000_000,
            i64::MAX / 3600,
            i64::MIN,
        ];
        for hours in rejected {
            let result = config.set_jwt_expiration_hours(hours);
            assert!(
                matches!(result, Err(AppError::Validation(_))),
                "{} hours was accepted",
                hours
            );
        }
        assert_eq!(config.jwt_expiration_hours(), DEFAULT_JWT_EXPIRATION_HOURS);
    }

    #[test]
    fn test_expiration_hours_in_range_accepted() {
        let mut config = Config::new("test-secret-key-for-testing-only-32chars").unwrap();

        for hours in [1, 48, MAX_JWT_EXPIRATION_HOURS] {
            config.set_jwt_expiration_hours(hours).unwrap();
            assert_eq!(config.jwt_expiration_hours(), hours);
        }
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = Config::new("test-secret-key-for-testing-only-32chars").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("test-secret-key"));
        assert!(debug.contains("[REDACTED]"));
    }
}
