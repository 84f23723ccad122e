use anyhow::{bail, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Mock API endpoint the proxy forwards to when `UPSTREAM_BASE_URL` is unset
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://601f1754b5a0e9001706a292.mockapi.io/podcasts";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 8080,
                host: "0.0.0.0".to_string(),
            },
            upstream: UpstreamConfig {
                base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
                timeout_secs: 10,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            server: ServerConfig {
                port: match lookup("PORT") {
                    Some(port) => port.trim().parse()?,
                    None => defaults.server.port,
                },
                host: lookup("HOST").unwrap_or(defaults.server.host),
            },
            upstream: UpstreamConfig {
                base_url: lookup("UPSTREAM_BASE_URL").unwrap_or(defaults.upstream.base_url),
                timeout_secs: match lookup("UPSTREAM_TIMEOUT_SECS") {
                    Some(secs) => secs.trim().parse()?,
                    None => defaults.upstream.timeout_secs,
                },
            },
        };

        if config.upstream.timeout_secs == 0 {
            bail!("UPSTREAM_TIMEOUT_SECS must be greater than zero");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.upstream.base_url, DEFAULT_UPSTREAM_BASE_URL);
        assert_eq!(config.upstream.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9090"),
            ("HOST", "127.0.0.1"),
            ("UPSTREAM_BASE_URL", "http://localhost:3001/podcasts"),
            ("UPSTREAM_TIMEOUT_SECS", " 3 "),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.upstream.base_url, "http://localhost:3001/podcasts");
        assert_eq!(config.upstream.timeout_secs, 3);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("PORT", "eighty")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("UPSTREAM_TIMEOUT_SECS", "0")])).is_err());
    }
}
