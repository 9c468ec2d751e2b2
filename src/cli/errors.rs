//! CLI-specific error types
//!
//! All CLI errors are fatal: `main` prints them and exits non-zero.

use std::fmt;
use std::io;

use crate::http_server::ConfigError;
use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file or environment error
    ConfigError,
    /// Data file could not be loaded or created
    StoreError,
    /// Data file already present
    AlreadyInitialized,
    /// Runtime or listener failure
    ServeFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "MENAGERIE_CLI_CONFIG_ERROR",
            Self::StoreError => "MENAGERIE_CLI_STORE_ERROR",
            Self::AlreadyInitialized => "MENAGERIE_CLI_ALREADY_INITIALIZED",
            Self::ServeFailed => "MENAGERIE_CLI_SERVE_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// Store error
    pub fn store_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::StoreError, msg)
    }

    /// Serve failed
    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServeFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::serve_failed(e.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::AlreadyExists(_) => Self::new(
                CliErrorCode::AlreadyInitialized,
                format!("{}. Pass --force to overwrite.", e),
            ),
            other => Self::store_error(other.to_string()),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config_error("bad port");
        assert_eq!(err.to_string(), "MENAGERIE_CLI_CONFIG_ERROR: bad port");
    }

    #[test]
    fn test_already_exists_maps_to_own_code() {
        let err = CliError::from(StoreError::AlreadyExists(PathBuf::from("a.json")));
        assert_eq!(err.code(), &CliErrorCode::AlreadyInitialized);
        assert!(err.message().contains("--force"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err = CliError::from(ConfigError::InvalidPort("x".into()));
        assert_eq!(err.code_str(), "MENAGERIE_CLI_CONFIG_ERROR");
    }
}
