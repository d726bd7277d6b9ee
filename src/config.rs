use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default port the upload service listens on.
pub const DEFAULT_PORT: u16 = 5000;

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to listen on. The `PORT` environment variable takes precedence.
    pub port: u16,
}

/// Upload storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Override the default uploads directory.
    pub uploads_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { uploads_dir: None }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/docuhub/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e} — using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {} — using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Effective listen port: the `PORT` environment variable wins over the
    /// config file.
    pub fn port(&self) -> u16 {
        resolve_port(self.server.port, std::env::var("PORT").ok().as_deref())
    }

    /// Resolved uploads directory (override or `uploads/` in the working
    /// directory).
    pub fn uploads_dir(&self) -> PathBuf {
        self.storage
            .uploads_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("uploads"))
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("docuhub").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

fn resolve_port(configured: u16, env_port: Option<&str>) -> u16 {
    env_port
        .and_then(|p| p.parse().ok())
        .unwrap_or(configured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert!(config.storage.uploads_dir.is_none());
    }

    #[test]
    fn test_resolve_port_prefers_env() {
        assert_eq!(resolve_port(5000, Some("8080")), 8080);
    }

    #[test]
    fn test_resolve_port_ignores_bad_env() {
        assert_eq!(resolve_port(5000, Some("not-a-port")), 5000);
        assert_eq!(resolve_port(5000, None), 5000);
    }

    #[test]
    fn test_uploads_dir_default() {
        let config = AppConfig::default();
        assert_eq!(config.uploads_dir(), PathBuf::from("uploads"));
    }

    #[test]
    fn test_uploads_dir_override() {
        let mut config = AppConfig::default();
        config.storage.uploads_dir = Some(PathBuf::from("/tmp/custom"));
        assert_eq!(config.uploads_dir(), PathBuf::from("/tmp/custom"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.server.port, config.server.port);
    }
}
