use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;

pub const DEFAULT_PORT: u16 = 1234;

/// Browser origins accepted when `CORS_ORIGINS` is unset.
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:8080",
    "http://localhost:1234",
    "https://movies.com",
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `1234`).
    pub port: u16,
    /// Origins allowed through the origin gate, parsed from comma-separated
    /// `CORS_ORIGINS`. Requests without an `Origin` header always pass.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                                          |
    /// |------------------------|------------------------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                                        |
    /// | `PORT`                 | `1234`                                                           |
    /// | `CORS_ORIGINS`         | `http://localhost:8080,http://localhost:1234,https://movies.com` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                                             |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(raw) => parse_var("HOST", "IP address", raw)?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(raw) => parse_var("PORT", "u16", raw)?,
            None => defaults.port,
        };

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults.cors_origins,
        };
        for origin in &cors_origins {
            if HeaderValue::from_str(origin).is_err() {
                return Err(ConfigError::InvalidOrigin(origin.clone()));
            }
        }

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => parse_var("REQUEST_TIMEOUT_SECS", "u64", raw)?,
            None => defaults.request_timeout_secs,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Exact, case-sensitive match against the configured allow-list.
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.cors_origins.iter().any(|o| o == origin)
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    expected: &'static str,
    raw: String,
) -> Result<T, ConfigError> {
    let parsed = raw.trim().parse::<T>();
    parsed.map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value: raw,
    })
}
