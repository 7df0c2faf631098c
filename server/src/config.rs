//! Server configuration parsed from environment variables.

use client::net::config::IdentityConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// `None` disables sign-in; the page reports it as not configured.
    pub identity: Option<IdentityConfig>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `IDENTITY_URL`: identity-provider base URL
    /// - `IDENTITY_ANON_KEY`: public API key for the identity provider
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let identity = parse_identity(
            std::env::var("IDENTITY_URL").ok().as_deref(),
            std::env::var("IDENTITY_ANON_KEY").ok().as_deref(),
        );
        Ok(Self { port, identity })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    raw.parse::<u16>()
        .map_err(|e| ConfigError::InvalidPort { value: raw.to_owned(), reason: e.to_string() })
}

fn parse_identity(url: Option<&str>, anon_key: Option<&str>) -> Option<IdentityConfig> {
    IdentityConfig::new(url?, anon_key?)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
