//! User store backed by the configuration file

use crate::auth::models::User;
use crate::config::{Config, UserRecord};

/// Read-only user lookup, loaded once at startup and shared across requests
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<UserRecord>,
}

impl UserStore {
    /// Build the store from the configured user accounts
    pub fn from_config(config: &Config) -> Self {
        Self {
            users: config.users.clone(),
        }
    }

    /// Look up a user by email and check the password against its bcrypt hash
    ///
    /// An unknown email and a wrong password are indistinguishable to the caller.
    pub fn verify(&self, email: &str, password: &str) -> Option<User> {
        let record = self.users.iter().find(|u| u.email == email)?;

        match bcrypt::verify(password, &record.password_hash) {
            Ok(true) => Some(User {
                id: record.id.clone(),
                email: record.email.clone(),
            }),
            _ => None,
        }
    }

    /// Number of configured accounts
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
