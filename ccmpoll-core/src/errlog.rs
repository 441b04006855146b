//! Append-only error log for fully-failed hosts
//!
//! The file is opened in append mode for every write; no handle is held
//! across hosts. Safe for sequential use only.

use crate::error::{PollError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Append one `"<host> : <error text>"` line
    pub fn append(&self, host: &str, error_text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| PollError::ErrorLog {
                path: self.path.clone(),
                source,
            })?;

        writeln!(file, "{} : {}", host, error_text).map_err(|source| PollError::ErrorLog {
            path: self.path.clone(),
            source,
        })
    }
}
