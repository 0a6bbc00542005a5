//! CLI interface for Gatekeeper

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gatekeeper")]
#[command(version = "0.3.0")]
#[command(about = "Issue and validate signed session tokens", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new gatekeeper.toml configuration file
    Init,

    /// Start the HTTP API server
    Serve {
        /// Host to bind to (defaults to the configured host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Mint a token for a user with the configured secret
    Token {
        /// User identifier embedded in the token
        #[arg(long)]
        id: String,

        /// Email address embedded in the token
        #[arg(long)]
        email: String,
    },

    /// Hash a password and print a ready-to-paste [[users]] entry
    UserAdd {
        /// Email address for the new account
        #[arg(long)]
        email: String,

        /// Plaintext password to hash
        #[arg(long)]
        password: String,
    },
}
