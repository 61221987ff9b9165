use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RemoteConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            base_url: "https://jsonplaceholder.typicode.com".to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SyncConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Sync right after a local add or import
    #[serde(default = "default_on_change")]
    pub on_change: bool,
}

impl SyncConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            interval_secs: default_interval_secs(),
            on_change: default_on_change(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_interval_secs() -> u64 {
    30
}

fn default_on_change() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    pub data_path: Option<String>,
}

impl AppConfig {
    /// Loads the default config file, or the defaults when it does not exist.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "quotebook", "quotebook")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn default_data_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_path {
            return Ok(PathBuf::from(custom_path));
        }
        let proj_dirs = ProjectDirs::from("dev", "quotebook", "quotebook")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
remote:
  base_url: "http://example.com/api"
  timeout_secs: 3
sync:
  interval_secs: 60
  on_change: false
data_path: "/tmp/quotes"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.remote.base_url, "http://example.com/api");
        assert_eq!(config.remote.timeout(), Duration::from_secs(3));
        assert_eq!(config.sync.interval(), Duration::from_secs(60));
        assert!(!config.sync.on_change);
        assert_eq!(config.data_path.as_deref(), Some("/tmp/quotes"));
        assert_eq!(
            config.default_data_path().unwrap(),
            PathBuf::from("/tmp/quotes")
        );
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            config.remote.base_url,
            "https://jsonplaceholder.typicode.com"
        );
        assert_eq!(config.remote.timeout_secs, 10);
        assert_eq!(config.sync.interval_secs, 30);
        assert!(config.sync.on_change);
        assert!(config.data_path.is_none());

        let partial: AppConfig = serde_yaml::from_str(
            r#"
remote:
  base_url: "http://localhost:8080"
"#,
        )
        .unwrap();
        assert_eq!(partial.remote.timeout_secs, 10);
        assert_eq!(partial.sync, SyncConfig::default());
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let sync = SyncConfig {
            interval_secs: 0,
            on_change: true,
        };
        assert_eq!(sync.interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let result = AppConfig::load_from_path("/definitely/not/here.yaml");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
