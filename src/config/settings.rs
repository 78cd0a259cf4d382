//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_APP_NAME, DEFAULT_APP_VERSION, DEFAULT_ENVIRONMENT, DEFAULT_SEED_SAMPLE_USERS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, KNOWN_ENVIRONMENTS,
};
use crate::domain::AppInfo;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub app_name: String,
    pub app_version: String,
    pub environment: String,
    pub seed_sample_users: bool,
}

impl Config {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let environment =
            env::var("APP_ENVIRONMENT").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());
        if !KNOWN_ENVIRONMENTS.contains(&environment.as_str()) {
            tracing::warn!("Unrecognised APP_ENVIRONMENT '{}'", environment);
        }

        Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            app_name: env::var("APP_NAME").unwrap_or_else(|_| DEFAULT_APP_NAME.to_string()),
            app_version: env::var("APP_VERSION")
                .unwrap_or_else(|_| DEFAULT_APP_VERSION.to_string()),
            environment,
            seed_sample_users: env::var("SEED_SAMPLE_USERS")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(DEFAULT_SEED_SAMPLE_USERS),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Static metadata served by the info endpoint.
    pub fn app_info(&self) -> AppInfo {
        AppInfo {
            name: self.app_name.clone(),
            version: self.app_version.clone(),
            environment: self.environment.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            app_name: DEFAULT_APP_NAME.to_string(),
            app_version: DEFAULT_APP_VERSION.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            seed_sample_users: DEFAULT_SEED_SAMPLE_USERS,
        }
    }
}

/// Parse a boolean-ish environment value.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" YES "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert!(config.seed_sample_users);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_app_info_mirrors_config() {
        let config = Config {
            app_name: "directory".to_string(),
            app_version: "1.0.0".to_string(),
            environment: "staging".to_string(),
            ..Config::default()
        };

        let info = config.app_info();
        assert_eq!(info.name, "directory");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.environment, "staging");
    }
}
