//! Configuration loading and environment variable interpolation

use crate::error::{Error, Result};
use regex::Regex;
use std::env;
use std::fs;
use std::path::Path;

use super::Config;

const CONFIG_FILENAME: &str = "gatekeeper.toml";

/// Load configuration from gatekeeper.toml
pub fn load_config() -> Result<Config> {
    let config_path = find_config_file()?;
    load_config_from_path(&config_path)
}

/// Load configuration from a specific path
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|_| Error::ConfigNotFound)?;
    let content = interpolate_env_vars(&content);
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Check invariants the rest of the crate relies on
fn validate(config: &Config) -> Result<()> {
    if config.auth.secret.is_empty() {
        return Err(Error::Config("auth.secret must not be empty".to_string()));
    }

    if config.auth.token_lifetime_minutes <= 0 {
        return Err(Error::Config(format!(
            "auth.token_lifetime_minutes must be positive, got {}",
            config.auth.token_lifetime_minutes
        )));
    }

    Ok(())
}

/// Find the configuration file, searching upward from current directory
fn find_config_file() -> Result<std::path::PathBuf> {
    let mut current = env::current_dir().map_err(|e| Error::Config(e.to_string()))?;

    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Ok(config_path);
        }

        if !current.pop() {
            return Err(Error::ConfigNotFound);
        }
    }
}

/// Interpolate environment variables in the format ${VAR_NAME} or ${VAR_NAME:-default}
fn interpolate_env_vars(content: &str) -> String {
    // This regex is a compile-time constant, panicking is acceptable here
    // as it indicates a programming error in the codebase, not a runtime issue
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}")
        .expect("Invalid regex pattern - this is a bug in the codebase");

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        env::var(var_name).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}

/// Generate a default configuration file content
pub fn default_config_content() -> &'static str {
    r#"# Gatekeeper Configuration

[server]
host = "0.0.0.0"
port = 8477

[auth]
# Shared HMAC secret used to sign and verify session tokens.
# Set GATEKEEPER_SECRET in the environment rather than committing a real value.
secret = "${GATEKEEPER_SECRET:-change-me-in-production}"
# How long issued tokens stay valid
token_lifetime_minutes = 60

[logging]
# Log rejected requests at error level
enabled = true

# User accounts. Generate entries with 'gatekeeper user-add'.
# [[users]]
# id = "6f2d9a3e-0000-0000-0000-000000000000"
# email = "admin@example.com"
# password_hash = "$2b$12$..."
"#
}
