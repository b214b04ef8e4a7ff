//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Longest accepted token lifetime in hours (one year)
pub const MAX_JWT_EXPIRATION_HOURS: i64 = 24 * 365;

/// Authorization scheme for bearer tokens, matched case-insensitively
pub const BEARER_SCHEME: &str = "Bearer";

/// Token type identifier returned to clients
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Secret used in debug builds when `JWT_SECRET` is unset
pub const DEV_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (SQLite file, created on first use)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://credentials.db?mode=rwc";

/// Default connection pool size
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 1;

/// Maximum password length in characters (caps Argon2 input)
pub const MAX_PASSWORD_LENGTH: usize = 128;
