// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    auth_user_header: String,
    auth_role_header: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://aboutblog.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

impl AppConfig {
    /// Build configuration from environment variables, with sensible
    /// defaults for everything.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let auth_user_header =
            env::var("AUTH_USER_HEADER").unwrap_or_else(|_| "x-auth-user".into());
        let auth_role_header =
            env::var("AUTH_ROLE_HEADER").unwrap_or_else(|_| "x-auth-role".into());

        for (name, value) in [
            ("AUTH_USER_HEADER", &auth_user_header),
            ("AUTH_ROLE_HEADER", &auth_role_header),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{name} must not be empty")));
            }
        }

        Ok(Self {
            database_url,
            listen_addr,
            // HeaderMap lookups are case-insensitive but take lowercase names.
            auth_user_header: auth_user_header.to_ascii_lowercase(),
            auth_role_header: auth_role_header.to_ascii_lowercase(),
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn auth_user_header(&self) -> &str {
        &self.auth_user_header
    }

    pub fn auth_role_header(&self) -> &str {
        &self.auth_role_header
    }
}
