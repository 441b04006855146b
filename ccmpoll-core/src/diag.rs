//! Diagnostic sink for progress and warning output
//!
//! Diagnostics are advisory: the poll loop behaves identically with any sink
//! installed, including the silent one.

use crate::error::PollError;
use crate::transport::Protocol;
use tracing::{info, warn};

/// Receiver for the poll loop's progress and warning notifications
pub trait DiagnosticSink: Send + Sync {
    /// Called before each host is polled
    fn progress(&self, current: usize, total: usize, host: &str);

    /// Called when one protocol attempt fails (session open or query)
    fn attempt_failed(&self, host: &str, protocol: Protocol, error: &PollError);

    /// Called when a host has exhausted both protocols
    fn host_unreachable(&self, host: &str);
}

/// Discards all diagnostics
pub struct NoopDiagnostics;

impl DiagnosticSink for NoopDiagnostics {
    fn progress(&self, _current: usize, _total: usize, _host: &str) {}
    fn attempt_failed(&self, _host: &str, _protocol: Protocol, _error: &PollError) {}
    fn host_unreachable(&self, _host: &str) {}
}

/// Forwards diagnostics to the `tracing` macros
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn progress(&self, current: usize, total: usize, host: &str) {
        info!("polling {} ({} of {})", host, current, total);
    }

    fn attempt_failed(&self, host: &str, protocol: Protocol, error: &PollError) {
        warn!("{} attempt failed for {}: {}", protocol, host, error);
    }

    fn host_unreachable(&self, host: &str) {
        warn!("no connection to {} over any protocol", host);
    }
}
