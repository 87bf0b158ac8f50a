//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default API title shown in the OpenAPI document
pub const DEFAULT_APP_NAME: &str = "User Registry API";

/// Default log filter when neither RUST_LOG nor LOG_LEVEL is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db?mode=rwc";

/// Default upper bound on pooled connections
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// API Documentation
// =============================================================================

/// Machine-readable OpenAPI document
pub const OPENAPI_URL: &str = "/swagger.json";

/// Swagger UI mount point
pub const SWAGGER_UI_URL: &str = "/docs";

// =============================================================================
// Validation
// =============================================================================

/// Username shape: alphanumeric or underscore, 3-20 characters
pub const USERNAME_PATTERN: &str = r"^[A-Za-z0-9_]{3,20}$";

/// Optional leading '+', 1-4 digit country code, 9-15 digit number
pub const PHONE_PATTERN: &str = r"^\+?\d{1,4}\d{9,15}$";

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length requirement
pub const MAX_PASSWORD_LENGTH: usize = 64;

/// Symbols accepted as the "special character" of a strong password
pub const PASSWORD_SYMBOLS: &str = r#"!@#$%^&*(),.?'":{}|<>"#;

/// Passwords rejected regardless of shape (compared lowercased)
pub const COMMON_PASSWORDS: &[&str] = &["admin@123", "pass@123", "password@123"];

/// Characters removed by input sanitization
pub const SANITIZE_STRIP_CHARS: &[char] = &['<', '>', '&', '\'', '"', '(', ')'];
