//! Runtime configuration, read from the environment (and an optional `.env` file).

use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use axum::http::HeaderValue;

pub const HOST_VAR: &str = "MERGINGTON_HOST";
pub const PORT_VAR: &str = "MERGINGTON_PORT";
pub const STATIC_DIR_VAR: &str = "MERGINGTON_STATIC_DIR";
pub const ALLOWED_ORIGINS_VAR: &str = "MERGINGTON_ALLOWED_ORIGINS";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";
const DEV_PORTS: [u16; 5] = [3000, 8000, 8080, 8081, 5173];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid IP address: {value}")]
    InvalidHost { var: &'static str, value: String },
    #[error("{var} is not a valid port: {value}")]
    InvalidPort { var: &'static str, value: String },
    #[error("{var} contains an invalid origin: {value}")]
    InvalidOrigin { var: &'static str, value: String },
    #[error("Failed to load .env file")]
    DotEnv(#[source] dotenvy::Error),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// Origins allowed by the CORS layer.
    pub allowed_origins: Vec<HeaderValue>,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        check_dotenv(dotenvy::dotenv())?;
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup(HOST_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidHost {
                var: HOST_VAR,
                value,
            })?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match lookup(PORT_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let static_dir = lookup(STATIC_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let allowed_origins = match lookup(ALLOWED_ORIGINS_VAR) {
            Some(value) => parse_origins(&value)?,
            None => default_origins(),
        };

        Ok(Self {
            host,
            port,
            static_dir,
            allowed_origins,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// A missing `.env` file is fine; one that exists but can't be read or parsed is not.
fn check_dotenv(loaded: Result<PathBuf, dotenvy::Error>) -> Result<(), ConfigError> {
    match loaded {
        Ok(_) => Ok(()),
        Err(dotenvy::Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(ConfigError::DotEnv(err)),
    }
}

fn parse_origins(value: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin {
                var: ALLOWED_ORIGINS_VAR,
                value: origin.to_string(),
            })
        })
        .collect()
}

fn default_origins() -> Vec<HeaderValue> {
    if !cfg!(debug_assertions) {
        // Production origins must be configured explicitly
        return Vec::new();
    }

    DEV_PORTS
        .iter()
        .flat_map(|port| {
            [
                format!("http://localhost:{port}"),
                format!("http://127.0.0.1:{port}"),
            ]
        })
        .filter_map(|origin| HeaderValue::from_str(&origin).ok())
        .collect()
}
