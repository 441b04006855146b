//! Error types for the ccmpoll tool

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ToolError>;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to load config from {path}: {source}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("unknown output format: {0}")]
    UnknownFormat(String),

    #[error("failed to read hosts file {path}: {source}")]
    HostsFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read capture file {path}: {source}")]
    CaptureLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse capture file {path}: {source}")]
    CaptureParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("no capture file configured: pass --capture or set [capture] path in the config")]
    NoTransport,
}
