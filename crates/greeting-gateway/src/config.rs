//! Application configuration

use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

pub const HOST_VAR: &str = "GREETING_GATEWAY_HOST";
pub const PORT_VAR: &str = "GREETING_GATEWAY_PORT";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the gateway binds to
    pub host: String,

    /// Port for the gateway
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value if set
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: lookup(HOST_VAR).unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_var(&lookup, PORT_VAR)?.unwrap_or(8080),
        })
    }

    /// `host:port` string accepted by `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(e) => Err(ConfigError::InvalidValue {
                var,
                reason: e.to_string(),
                value,
            }),
        },
    }
}
