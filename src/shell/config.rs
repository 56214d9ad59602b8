use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const HOST_VAR: &str = "APPOINTMENTS_HOST";
pub const PORT_VAR: &str = "APPOINTMENTS_PORT";

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an IP address, got {value:?}")]
    InvalidHost { var: &'static str, value: String },

    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset variables fall back to `0.0.0.0:8080`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup(HOST_VAR) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidHost {
                var: HOST_VAR,
                value,
            })?,
            None => DEFAULT_HOST,
        };
        let port = match lookup(PORT_VAR) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value,
            })?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
        })
    }
}
