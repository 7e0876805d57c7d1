//! CLI argument definitions for the kiosk binary.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use std::path::PathBuf;

use clap::Parser;

/// Kiosk - campus FAQ chatbot server with session-aware dialogue.
#[derive(Parser, Debug)]
#[command(name = "kiosk", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// HTTP server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Path to the FAQ catalog JSON file.
    #[arg(long = "catalog")]
    pub catalog: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > KIOSK_CONFIG env var > ./kiosk.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("KIOSK_CONFIG") {
            return PathBuf::from(p);
        }
        PathBuf::from("kiosk.toml")
    }

    /// Resolve the HTTP server port.
    ///
    /// Priority: --port flag > KIOSK_PORT env var > config file value > 5000.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        if let Ok(val) = std::env::var("KIOSK_PORT") {
            if let Ok(p) = val.parse::<u16>() {
                return p;
            }
        }
        if config_port != 0 {
            return config_port;
        }
        5000
    }

    /// Resolve the FAQ catalog path.
    ///
    /// Priority: --catalog flag > config file value.
    pub fn resolve_catalog_path(&self, config_path: &str) -> PathBuf {
        match self.catalog {
            Some(ref p) => p.clone(),
            None => PathBuf::from(config_path),
        }
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}
