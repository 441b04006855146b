//! Configuration schema types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete tool configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub poll: PollConfig,
    #[serde(default)]
    pub capture: CaptureConfig,
}

/// Poll behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PollConfig {
    /// File that collects failure details for hosts that exhaust both
    /// protocols; nothing is written when unset
    #[serde(default)]
    pub error_log: Option<PathBuf>,

    /// Output format for status records: text | json
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            error_log: None,
            format: default_format(),
        }
    }
}

/// Replay transport settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CaptureConfig {
    /// Capture file describing per-host, per-protocol agent state
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.poll.format, "text");
        assert!(config.poll.error_log.is_none());
        assert!(config.capture.path.is_none());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[poll]
error_log = "/var/log/ccmpoll/errors.log"
format = "json"

[capture]
path = "/srv/captures/fleet.json"
"#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.poll.format, "json");
        assert_eq!(
            config.poll.error_log.as_deref(),
            Some(std::path::Path::new("/var/log/ccmpoll/errors.log"))
        );
        assert_eq!(
            config.capture.path.as_deref(),
            Some(std::path::Path::new("/srv/captures/fleet.json"))
        );
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let toml_str = r#"
[poll]
retries = 3
"#;
        let result: std::result::Result<Config, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }
}
