//! CLI command implementations

use anyhow::Result;
use std::fs;

use crate::auth::jwt;
use crate::auth::models::User;
use crate::cli::{error, info, success, warn};
use crate::config;

/// Initialize a new gatekeeper.toml configuration file
pub async fn init() -> Result<()> {
    let config_path = std::path::Path::new("gatekeeper.toml");

    if config_path.exists() {
        warn("gatekeeper.toml already exists");
        return Ok(());
    }

    fs::write(config_path, config::loader::default_config_content())?;

    success("Created gatekeeper.toml");
    info("Set a real secret, add users with 'gatekeeper user-add', then run 'gatekeeper serve'");

    Ok(())
}

/// Start the HTTP API server
pub async fn serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = config::load_config()?;

    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    info(&format!("Starting server at http://{}:{}", host, port));

    crate::api::run_server(config, &host, port).await?;

    Ok(())
}

/// Mint a token for the given identity
pub async fn token(id: &str, email: &str) -> Result<()> {
    let config = config::load_config()?;

    let user = User {
        id: id.to_string(),
        email: email.to_string(),
    };

    match jwt::create_token(&user, &config.auth) {
        Ok(token) => {
            println!("{}", token);
            Ok(())
        }
        Err(e) => {
            error(&format!("Failed to mint token: {}", e));
            Err(e.into())
        }
    }
}

/// Hash a password and print a [[users]] config entry
pub async fn user_add(email: &str, password: &str) -> Result<()> {
    let id = uuid::Uuid::new_v4().to_string();
    let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

    println!("[[users]]");
    println!("id = \"{}\"", id);
    println!("email = \"{}\"", email);
    println!("password_hash = \"{}\"", hash);

    success("Append the entry above to gatekeeper.toml");

    Ok(())
}
