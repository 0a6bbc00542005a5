//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// User accounts the login endpoint authenticates against
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

/// Server configuration for the HTTP API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8477
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Token signing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared HMAC secret used to sign and verify tokens
    #[serde(default = "default_secret")]
    pub secret: String,

    /// How long issued tokens stay valid, in minutes
    #[serde(default = "default_token_lifetime")]
    pub token_lifetime_minutes: i64,
}

fn default_secret() -> String {
    "gatekeeper-secret-change-in-production".to_string()
}

fn default_token_lifetime() -> i64 {
    60
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            token_lifetime_minutes: default_token_lifetime(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit error-level records for rejected requests
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,
}

fn default_logging_enabled() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
        }
    }
}

/// A user account declared in the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,

    pub email: String,

    /// bcrypt hash of the account password
    pub password_hash: String,
}

impl Config {
    /// Get a user record by email
    pub fn get_user(&self, email: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.email == email)
    }
}
