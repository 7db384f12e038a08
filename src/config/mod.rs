mod models;

pub use models::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a file (YAML or JSON)
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&contents).context("Failed to parse YAML config")?
        }
        _ => serde_json::from_str(&contents).context("Failed to parse JSON config")?,
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_yaml_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("liveness.yaml");
        tokio::fs::write(
            &path,
            "target:\n  host: localhost\n  port: 5173\n  path: /gallery\ntimeout_secs: 5\n",
        )
        .await
        .unwrap();

        let config = load_config(&path).await.unwrap();

        assert_eq!(config.target.host, "localhost");
        assert_eq!(config.target.port, 5173);
        assert_eq!(config.target.path, "/gallery");
        assert_eq!(config.target.method, "GET");
        assert_eq!(config.timeout_secs, Some(5));
    }

    #[tokio::test]
    async fn test_load_json_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("liveness.json");
        tokio::fs::write(&path, r#"{"target": {"port": 4000, "method": "HEAD"}}"#)
            .await
            .unwrap();

        let config = load_config(&path).await.unwrap();

        assert_eq!(config.target.port, 4000);
        assert_eq!(config.target.method, "HEAD");
        assert!(config.timeout_secs.is_none());
    }

    #[tokio::test]
    async fn test_load_rejects_invalid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("liveness.yml");
        tokio::fs::write(&path, "target:\n  port: 0\n").await.unwrap();

        assert!(load_config(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_config(dir.path().join("absent.yaml")).await.unwrap_err();

        assert!(err.to_string().contains("Failed to read config file"));
    }
}
