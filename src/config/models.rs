// src/config/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub target: CheckRequest,

    /// Request deadline; no deadline when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let target = &self.target;

        if target.host.trim().is_empty() {
            anyhow::bail!("Target host must not be empty");
        }

        if target.port == 0 {
            anyhow::bail!("Target port must be in 1..=65535");
        }

        if target.method.trim().is_empty() {
            anyhow::bail!("Request method must not be empty");
        }

        if !target.path.starts_with('/') {
            anyhow::bail!("Request path must start with '/': {}", target.path);
        }

        if self.timeout_secs == Some(0) {
            anyhow::bail!("timeout_secs must be greater than 0");
        }

        Ok(())
    }
}

/// The single request a liveness check issues.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CheckRequest {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_method")]
    pub method: String,
}

impl CheckRequest {
    pub fn new(host: impl Into<String>, port: u16, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            path: path.into(),
            method: default_method(),
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.path)
    }
}

impl Default for CheckRequest {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
            method: default_method(),
        }
    }
}

impl fmt::Display for CheckRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url())
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_path() -> String {
    "/".to_string()
}

fn default_method() -> String {
    "GET".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_target_loopback_root() {
        let config = Config::default();

        assert_eq!(config.target.host, "127.0.0.1");
        assert_eq!(config.target.port, 3000);
        assert_eq!(config.target.path, "/");
        assert_eq!(config.target.method, "GET");
        assert!(config.timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("target:\n  port: 8081\n").unwrap();

        assert_eq!(config.target.port, 8081);
        assert_eq!(config.target.host, "127.0.0.1");
        assert_eq!(config.target.path, "/");
    }

    #[test]
    fn test_validate_rejects_bad_targets() {
        let mut config = Config::default();
        config.target.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.target.host = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.target.path = "health".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_url_keeps_path_verbatim() {
        let request = CheckRequest::new("localhost", 5173, "/gallery?view=grid");
        assert_eq!(request.url(), "http://localhost:5173/gallery?view=grid");
        assert_eq!(request.to_string(), "GET http://localhost:5173/gallery?view=grid");
    }
}
