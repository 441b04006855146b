//! Transport seam for remote-management providers
//!
//! The WS-Management and DCOM providers themselves are external; this module
//! defines the session and query surface they implement. Sessions are opened
//! per attempt and closed after use.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Namespace the patch agent exposes its client SDK under
pub const UPDATE_NAMESPACE: &str = "root/ccm/clientsdk";

/// Class holding one instance per pending software update
pub const UPDATE_CLASS: &str = "CCM_SoftwareUpdate";

/// Remote-management protocol for a session attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// WS-Management, tried first
    Wsman,
    /// DCOM fallback
    Dcom,
}

impl Protocol {
    pub fn name(&self) -> &'static str {
        match self {
            Protocol::Wsman => "Wsman",
            Protocol::Dcom => "Dcom",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw error text produced by a provider
///
/// Kept verbatim: the failure branch writes this text to the error log
/// unmodified.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for TransportError {
    fn from(error: std::io::Error) -> Self {
        Self::new(error.to_string())
    }
}

/// One row of a `CCM_SoftwareUpdate` query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRow {
    #[serde(rename = "EvaluationState")]
    pub evaluation_state: i32,
    #[serde(rename = "Name")]
    pub name: String,
}

/// An open session to a host's management interface
#[async_trait]
pub trait ManagementSession: Send {
    /// Query all instances of `class` under `namespace`
    async fn query(
        &mut self,
        namespace: &str,
        class: &str,
    ) -> std::result::Result<Vec<UpdateRow>, TransportError>;

    /// Release the session; best-effort
    async fn close(self: Box<Self>) {}
}

/// Provider capable of opening sessions over either protocol
#[async_trait]
pub trait ManagementTransport: Send + Sync {
    async fn open_session(
        &self,
        host: &str,
        protocol: Protocol,
    ) -> std::result::Result<Box<dyn ManagementSession>, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_names() {
        assert_eq!(Protocol::Wsman.to_string(), "Wsman");
        assert_eq!(Protocol::Dcom.to_string(), "Dcom");
    }

    #[test]
    fn test_transport_error_preserves_text() {
        let err = TransportError::new("WinRM cannot complete the operation");
        assert_eq!(err.to_string(), "WinRM cannot complete the operation");
    }

    #[test]
    fn test_transport_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = TransportError::from(io);
        assert!(err.to_string().contains("refused"));
    }
}
