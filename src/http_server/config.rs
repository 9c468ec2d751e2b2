//! HTTP Server Configuration
//!
//! Host, port, data file and CORS settings. Values are layered: built-in
//! defaults, then an optional JSON config file, then the `PORT`
//! environment variable, then command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the listen port
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3001)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Backing data file (default: "./data/animals.json")
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// CORS allowed origins (empty: allow any)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./data/animals.json")
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_path: default_data_path(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file; missing keys take defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override the port from the process environment, if set.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_port_var(std::env::var(PORT_ENV).ok().as_deref())
    }

    /// Override the port from a raw `PORT` value. Blank values are ignored.
    pub fn apply_port_var(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        match value.map(str::trim) {
            None | Some("") => Ok(()),
            Some(raw) => {
                self.port = raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?;
                Ok(())
            }
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3001);
        assert_eq!(config.data_path, PathBuf::from("./data/animals.json"));
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_port_var_overrides() {
        let mut config = HttpServerConfig::default();
        config.apply_port_var(Some("4000")).unwrap();
        assert_eq!(config.port, 4000);

        config.apply_port_var(None).unwrap();
        config.apply_port_var(Some("  ")).unwrap();
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn test_invalid_port_var() {
        let mut config = HttpServerConfig::default();
        let err = config.apply_port_var(Some("http")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(v) if v == "http"));
        assert_eq!(config.port, 3001);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("menagerie.json");
        fs::write(&path, r#"{"port": 9000, "cors_origins": ["http://localhost:5173"]}"#).unwrap();

        let config = HttpServerConfig::load(&path).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.cors_origins.len(), 1);
    }

    #[test]
    fn test_load_bad_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("menagerie.json");
        fs::write(&path, "{port: 9000").unwrap();
        assert!(matches!(
            HttpServerConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
