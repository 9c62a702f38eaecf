//! Service configuration for datagate
//!
//! All settings come from `DATAGATE_*` environment variables. The four
//! connection settings have no defaults; startup fails without them so
//! a misconfigured deployment never serves traffic.

use std::env;

use thiserror::Error;

/// Identifier of the database resource to execute against
pub const ENV_RESOURCE_ID: &str = "DATAGATE_RESOURCE_ID";
/// Identifier of the stored credential used to authenticate
pub const ENV_CREDENTIAL_ID: &str = "DATAGATE_CREDENTIAL_ID";
/// Logical database name
pub const ENV_DATABASE: &str = "DATAGATE_DATABASE";
/// Base URL of the data gateway endpoint
pub const ENV_GATEWAY_ENDPOINT: &str = "DATAGATE_GATEWAY_ENDPOINT";
/// HTTP listen port, defaults to 8080
pub const ENV_PORT: &str = "DATAGATE_PORT";

const DEFAULT_PORT: u16 = 8080;

/// Configuration error raised during startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty
    #[error("missing required environment variable {0}")]
    MissingVariable(&'static str),
    /// An environment variable holds an unparseable value
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Identifier of the database resource
    pub resource_id: String,
    /// Identifier of the stored credential
    pub credential_id: String,
    /// Logical database name
    pub database: String,
    /// Base URL of the data gateway
    pub gateway_endpoint: String,
    /// HTTP listen port
    pub port: u16,
}

impl Config {
    /// Load the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load the configuration from an arbitrary variable source
    ///
    /// An unset variable and an empty one are treated the same: both
    /// count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| -> Result<String, ConfigError> {
            match lookup(name) {
                Some(value) if !value.is_empty() => Ok(value),
                _ => Err(ConfigError::MissingVariable(name)),
            }
        };

        let resource_id = require(ENV_RESOURCE_ID)?;
        let credential_id = require(ENV_CREDENTIAL_ID)?;
        let database = require(ENV_DATABASE)?;
        let gateway_endpoint = require(ENV_GATEWAY_ENDPOINT)?;

        let port = match lookup(ENV_PORT) {
            Some(value) if !value.is_empty() => {
                value
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidValue {
                        name: ENV_PORT,
                        value,
                    })?
            }
            _ => DEFAULT_PORT,
        };

        Ok(Self {
            resource_id,
            credential_id,
            database,
            gateway_endpoint,
            port,
        })
    }
}
