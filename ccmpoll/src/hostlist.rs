//! Host list input
//!
//! Hosts are polled in file order; duplicates are kept and polled
//! independently.

use crate::error::{Result, ToolError};
use std::fs;
use std::path::Path;

/// Read hosts from a file, one per line
///
/// Lines are trimmed; blank lines and `#` comments are skipped.
pub fn read_hosts_file(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| ToolError::HostsFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_hosts(&contents))
}

fn parse_hosts(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
