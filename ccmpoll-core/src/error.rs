//! Error types for poll operations

use crate::transport::{Protocol, TransportError};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PollError>;

#[derive(Debug, Error)]
pub enum PollError {
    #[error("failed to open {protocol} session to {host}: {reason}")]
    SessionOpen {
        host: String,
        protocol: Protocol,
        reason: String,
    },

    #[error("{protocol} query failed on {host}: {reason}")]
    Query {
        host: String,
        protocol: Protocol,
        reason: String,
    },

    #[error("failed to append to error log {path}: {source}")]
    ErrorLog {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PollError {
    pub fn session_open(host: &str, protocol: Protocol, error: &TransportError) -> Self {
        Self::SessionOpen {
            host: host.to_string(),
            protocol,
            reason: error.to_string(),
        }
    }

    pub fn query(host: &str, protocol: Protocol, error: &TransportError) -> Self {
        Self::Query {
            host: host.to_string(),
            protocol,
            reason: error.to_string(),
        }
    }
}
