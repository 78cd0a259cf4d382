//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// Application Info
// =============================================================================

/// Default application name reported by the info endpoint
pub const DEFAULT_APP_NAME: &str = "user-directory";

/// Default application version (the crate version)
pub const DEFAULT_APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default deployment environment
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Known deployment environments
pub const KNOWN_ENVIRONMENTS: &[&str] = &["development", "staging", "production"];

// =============================================================================
// User Roles
// =============================================================================

/// Role given to regular users
pub const ROLE_USER: &str = "USER";

/// Administrator role
pub const ROLE_ADMIN: &str = "ADMIN";

// =============================================================================
// Sample Data
// =============================================================================

/// Seed users loaded at startup: (name, email, role).
/// Ids are issued by the store in this order, starting at 1.
pub const SAMPLE_USERS: &[(&str, &str, &str)] = &[
    ("John Doe", "john.doe@example.com", ROLE_USER),
    ("Jane Smith", "jane.smith@example.com", ROLE_ADMIN),
];

/// Whether sample users are seeded when SEED_SAMPLE_USERS is not set
pub const DEFAULT_SEED_SAMPLE_USERS: bool = true;
