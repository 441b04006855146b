//! Replay transport backed by a capture file
//!
//! Stands in for the external WS-Management/DCOM providers: a JSON capture
//! describes, per host and per protocol, either a session-open failure, a
//! query failure, or the update rows the agent would return. Hosts or
//! protocols absent from the capture behave as session-open failures, so a
//! partial capture still exercises the fallback path.

use crate::error::{Result, ToolError};
use async_trait::async_trait;
use ccmpoll_core::{ManagementSession, ManagementTransport, Protocol, TransportError, UpdateRow};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Top-level capture file contents
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Capture {
    #[serde(default)]
    pub hosts: HashMap<String, HostCapture>,
}

/// Captured agent state for one host
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostCapture {
    #[serde(default)]
    pub wsman: Option<AttemptCapture>,
    #[serde(default)]
    pub dcom: Option<AttemptCapture>,
}

/// What one protocol attempt against the host replays
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttemptCapture {
    /// Session-open failure to replay
    #[serde(default)]
    pub session_error: Option<String>,
    /// Query failure to replay after a successful open
    #[serde(default)]
    pub query_error: Option<String>,
    #[serde(default)]
    pub updates: Vec<UpdateRow>,
}

pub struct ReplayTransport {
    capture: Capture,
}

impl ReplayTransport {
    pub fn new(capture: Capture) -> Self {
        Self { capture }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ToolError::CaptureLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let capture = serde_json::from_str(&contents).map_err(|source| ToolError::CaptureParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(capture))
    }
}

#[async_trait]
impl ManagementTransport for ReplayTransport {
    async fn open_session(
        &self,
        host: &str,
        protocol: Protocol,
    ) -> std::result::Result<Box<dyn ManagementSession>, TransportError> {
        let attempt = self
            .capture
            .hosts
            .get(host)
            .and_then(|captured| match protocol {
                Protocol::Wsman => captured.wsman.as_ref(),
                Protocol::Dcom => captured.dcom.as_ref(),
            })
            .ok_or_else(|| {
                TransportError::new(format!("no captured {} data for {}", protocol, host))
            })?;

        if let Some(message) = &attempt.session_error {
            return Err(TransportError::new(message.clone()));
        }

        Ok(Box::new(ReplaySession {
            query_error: attempt.query_error.clone(),
            updates: attempt.updates.clone(),
        }))
    }
}

struct ReplaySession {
    query_error: Option<String>,
    updates: Vec<UpdateRow>,
}

#[async_trait]
impl ManagementSession for ReplaySession {
    async fn query(
        &mut self,
        _namespace: &str,
        _class: &str,
    ) -> std::result::Result<Vec<UpdateRow>, TransportError> {
        if let Some(message) = &self.query_error {
            return Err(TransportError::new(message.clone()));
        }
        Ok(self.updates.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccmpoll_core::Poller;
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::NamedTempFile;

    const CAPTURE: &str = r#"{
        "hosts": {
            "pc-01": {
                "wsman": {
                    "updates": [
                        {"EvaluationState": 7, "Name": "KB5031234"},
                        {"EvaluationState": 0, "Name": "KB5029876"}
                    ]
                }
            },
            "pc-02": {
                "wsman": {"session_error": "WinRM unreachable"},
                "dcom": {"updates": []}
            },
            "pc-03": {
                "wsman": {"session_error": "WinRM unreachable"},
                "dcom": {"query_error": "access denied"}
            }
        }
    }"#;

    fn capture_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CAPTURE.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_capture() {
        let file = capture_file();
        let transport = ReplayTransport::from_file(file.path()).unwrap();
        assert_eq!(transport.capture.hosts.len(), 3);

        let rows = &transport.capture.hosts["pc-01"].wsman.as_ref().unwrap().updates;
        assert_eq!(rows[0].evaluation_state, 7);
        assert_eq!(rows[0].name, "KB5031234");
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let result: std::result::Result<Capture, _> =
            serde_json::from_str(r#"{"hosts": {"pc-01": {"winrm": {}}}}"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_replay_drives_the_full_loop() {
        let file = capture_file();
        let transport = Arc::new(ReplayTransport::from_file(file.path()).unwrap());
        let poller = Poller::new(transport);

        let hosts: Vec<String> = ["pc-01", "pc-02", "pc-03", "pc-04"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let records = poller.run_collect(&hosts).await.unwrap();

        // pc-01: two updates over Wsman
        assert_eq!(records[0].job_state.as_deref(), Some("Installing"));
        assert_eq!(records[1].job_state.as_deref(), Some("None(0)"));
        // pc-02: Wsman refused, Dcom empty result
        assert_eq!(records[2].computer_name, "pc-02");
        assert_eq!(records[2].job_state.as_deref(), Some("Empty"));
        // pc-03: both protocols fail
        assert!(records[3].is_unreachable());
        // pc-04: absent from the capture entirely
        assert!(records[4].is_unreachable());
        assert_eq!(records.len(), 5);
    }

    #[tokio::test]
    async fn test_missing_protocol_reads_as_session_failure() {
        let transport = ReplayTransport::new(Capture::default());
        let err = transport
            .open_session("pc-99", Protocol::Wsman)
            .await
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "no captured Wsman data for pc-99");
    }
}
