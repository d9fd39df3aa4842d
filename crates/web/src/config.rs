//! Web application configuration.

use std::env;

use axum_extra::extract::cookie::Key;
use rand::distr::{Alphanumeric, SampleString};

use common::{AppError, AppResult, DatabaseConfig, DEFAULT_DATABASE_URL};

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Minimum secret key length (cookie key derivation requirement)
pub const MIN_SECRET_KEY_LENGTH: usize = 32;

/// Length of the secret generated when none is configured
const GENERATED_SECRET_LENGTH: usize = 64;

/// Web application configuration.
#[derive(Clone)]
pub struct WebConfig {
    /// Backing store
    pub database: DatabaseConfig,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Verify CSRF tokens on form submissions
    pub csrf_enabled: bool,
    /// Signs the flash and CSRF cookies
    secret_key: String,
}

impl std::fmt::Debug for WebConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebConfig")
            .field("database_url", &self.database.url)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("csrf_enabled", &self.csrf_enabled)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

impl WebConfig {
    /// Defaults for the given database, with a freshly generated secret.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database: DatabaseConfig::new(database_url),
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            csrf_enabled: true,
            secret_key: generate_secret(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Without `SECRET_KEY` a random secret is generated, so cookies issued
    /// by one process are rejected after a restart.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::new(
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
        );

        config.host = env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string());
        config.port = env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_SERVER_PORT);
        config.csrf_enabled = env::var("CSRF_ENABLED")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        match env::var("SECRET_KEY") {
            Ok(secret) => config.with_secret_key(secret),
            Err(_) => {
                tracing::warn!("SECRET_KEY not set, cookies will not survive a restart");
                Ok(config)
            }
        }
    }

    /// Use a fixed secret instead of the generated one.
    pub fn with_secret_key(mut self, secret: impl Into<String>) -> AppResult<Self> {
        let secret = secret.into();
        if secret.len() < MIN_SECRET_KEY_LENGTH {
            return Err(AppError::internal(format!(
                "SECRET_KEY must be at least {} characters long",
                MIN_SECRET_KEY_LENGTH
            )));
        }
        self.secret_key = secret;
        Ok(self)
    }

    /// Toggle CSRF verification.
    pub fn with_csrf(mut self, enabled: bool) -> Self {
        self.csrf_enabled = enabled;
        self
    }

    /// Key used to sign cookies.
    pub fn cookie_key(&self) -> Key {
        Key::derive_from(self.secret_key.as_bytes())
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn generate_secret() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), GENERATED_SECRET_LENGTH)
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
