//! CLI command implementations
//!
//! `serve` resolves configuration, loads the data file once and runs the
//! HTTP server on a Tokio runtime. `init` writes an empty collection.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{self, log_event_with_fields, Event};
use crate::store::AnimalStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments, set up logging and dispatch.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    observability::init_logging("info");
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, port, data } => {
            let config = resolve_config(config.as_deref(), port, data)?;
            serve(config)
        }
        Command::Init { data, force } => init(&data, force),
    }
}

/// Layer configuration: defaults, config file, `PORT`, then flags.
pub fn resolve_config(
    config_path: Option<&Path>,
    port: Option<u16>,
    data: Option<PathBuf>,
) -> CliResult<HttpServerConfig> {
    let mut config = match config_path {
        Some(path) => HttpServerConfig::load(path)?,
        None => HttpServerConfig::default(),
    };
    config.apply_env()?;

    if let Some(port) = port {
        config.port = port;
    }
    if let Some(data) = data {
        config.data_path = data;
    }

    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("addr", config.socket_addr().as_str()),
            ("data", config.data_path.display().to_string().as_str()),
        ],
    );
    Ok(config)
}

/// Load the store and serve until interrupted
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    let store = Arc::new(AnimalStore::open(&config.data_path)?);
    let server = HttpServer::new(config, store);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("failed to start runtime: {}", e)))?;
    runtime.block_on(server.start())?;
    Ok(())
}

/// Write an empty data file
pub fn init(data: &Path, force: bool) -> CliResult<()> {
    AnimalStore::init(data, force)?;
    println!("Initialized empty animal collection at {}", data.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("menagerie.json");
        fs::write(&config_path, r#"{"port": 9000, "data_path": "from-file.json"}"#).unwrap();

        let config = resolve_config(
            Some(&config_path),
            Some(9100),
            Some(PathBuf::from("from-flag.json")),
        )
        .unwrap();

        assert_eq!(config.port, 9100);
        assert_eq!(config.data_path, PathBuf::from("from-flag.json"));
    }

    #[test]
    fn test_missing_config_file() {
        let dir = TempDir::new().unwrap();
        let err = resolve_config(Some(&dir.path().join("absent.json")), None, None).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_init_command() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("animals.json");

        run_command(Command::Init {
            data: data.clone(),
            force: false,
        })
        .unwrap();
        assert_eq!(AnimalStore::open(&data).unwrap().len().unwrap(), 0);

        let err = init(&data, false).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::AlreadyInitialized);
    }

    #[test]
    fn test_serve_without_data_file_fails() {
        let dir = TempDir::new().unwrap();
        let config = HttpServerConfig {
            data_path: dir.path().join("missing.json"),
            ..Default::default()
        };
        let err = serve(config).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::StoreError);
    }
}
