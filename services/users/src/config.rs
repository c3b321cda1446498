//! Service configuration loaded from the environment

use anyhow::Result;
use serde::Deserialize;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    ///
    /// # Environment Variables
    /// - `SERVER_HOST`: Interface to bind (default: "0.0.0.0")
    /// - `SERVER_PORT`: Port to listen on (default: 8000)
    pub fn from_env() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8000)?
            .add_source(config::Environment::with_prefix("SERVER"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Address the listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Superuser created at startup when none exists with this email
#[derive(Debug, Clone)]
pub struct SuperuserConfig {
    pub email: String,
    pub password: String,
}

impl SuperuserConfig {
    /// Read the bootstrap superuser from the environment
    ///
    /// # Environment Variables
    /// - `SUPERUSER_EMAIL`
    /// - `SUPERUSER_PASSWORD`
    ///
    /// Returns `None` unless both are set and non-empty.
    pub fn from_env() -> Option<Self> {
        let email = std::env::var("SUPERUSER_EMAIL").ok()?;
        let password = std::env::var("SUPERUSER_PASSWORD").ok()?;

        if email.trim().is_empty() || password.is_empty() {
            return None;
        }

        Some(SuperuserConfig { email, password })
    }
}
