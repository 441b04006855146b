//! Per-host query loop and the sequential driver
//!
//! Each host gets at most two attempts: Wsman, then Dcom. The first
//! successful query ends the host's loop, a zero-row result included. A host
//! that exhausts both protocols produces exactly one unreachable record and
//! never aborts the run.

use crate::diag::{DiagnosticSink, NoopDiagnostics};
use crate::errlog::ErrorLog;
use crate::error::{PollError, Result};
use crate::record::{RecordSink, StatusRecord};
use crate::transport::{
    ManagementTransport, Protocol, TransportError, UpdateRow, UPDATE_CLASS, UPDATE_NAMESPACE,
};
use std::sync::Arc;

/// Attempt state for one host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    TryPrimary,
    TrySecondary,
    Done,
}

impl Attempt {
    fn protocol(self) -> Option<Protocol> {
        match self {
            Attempt::TryPrimary => Some(Protocol::Wsman),
            Attempt::TrySecondary => Some(Protocol::Dcom),
            Attempt::Done => None,
        }
    }

    fn next(self) -> Attempt {
        match self {
            Attempt::TryPrimary => Attempt::TrySecondary,
            Attempt::TrySecondary | Attempt::Done => Attempt::Done,
        }
    }
}

enum AttemptOutcome {
    Rows(Vec<UpdateRow>),
    SessionFailed(TransportError),
    QueryFailed(TransportError),
}

/// Sequential update-status poller
pub struct Poller {
    transport: Arc<dyn ManagementTransport>,
    diagnostics: Arc<dyn DiagnosticSink>,
    error_log: Option<ErrorLog>,
}

impl Poller {
    pub fn new(transport: Arc<dyn ManagementTransport>) -> Self {
        Self {
            transport,
            diagnostics: Arc::new(NoopDiagnostics),
            error_log: None,
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_error_log(mut self, error_log: ErrorLog) -> Self {
        self.error_log = Some(error_log);
        self
    }

    /// Poll every host in order, streaming records into `sink`
    ///
    /// A host failing both protocols surfaces as an unreachable record, not
    /// as an error from this function.
    pub async fn run(&self, hosts: &[String], sink: &mut dyn RecordSink) -> Result<()> {
        let total = hosts.len();
        for (index, host) in hosts.iter().enumerate() {
            self.diagnostics.progress(index + 1, total, host);
            self.poll_host(host, sink).await?;
        }
        Ok(())
    }

    /// Convenience wrapper collecting the record stream into a `Vec`
    pub async fn run_collect(&self, hosts: &[String]) -> Result<Vec<StatusRecord>> {
        let mut records = Vec::new();
        self.run(hosts, &mut records).await?;
        Ok(records)
    }

    /// Run the two-attempt state machine for one host
    pub async fn poll_host(&self, host: &str, sink: &mut dyn RecordSink) -> Result<()> {
        let mut state = Attempt::TryPrimary;
        let mut session_error: Option<String> = None;
        let mut query_error: Option<String> = None;

        while let Some(protocol) = state.protocol() {
            match self.attempt(host, protocol).await {
                AttemptOutcome::Rows(rows) => {
                    if rows.is_empty() {
                        sink.emit(StatusRecord::no_updates(host))?;
                    } else {
                        for row in &rows {
                            sink.emit(StatusRecord::update(host, row.evaluation_state, &row.name))?;
                        }
                    }
                    return Ok(());
                }
                AttemptOutcome::SessionFailed(error) => {
                    self.diagnostics.attempt_failed(
                        host,
                        protocol,
                        &PollError::session_open(host, protocol, &error),
                    );
                    session_error = Some(error.to_string());
                    state = state.next();
                }
                AttemptOutcome::QueryFailed(error) => {
                    self.diagnostics.attempt_failed(
                        host,
                        protocol,
                        &PollError::query(host, protocol, &error),
                    );
                    query_error = Some(error.to_string());
                    state = state.next();
                }
            }
        }

        // Both protocols exhausted
        self.diagnostics.host_unreachable(host);
        sink.emit(StatusRecord::unreachable(host))?;

        // Two lines, always: the last session error and the last query error,
        // either of which may be empty. Downstream tooling keys on the pair.
        if let Some(log) = &self.error_log {
            log.append(host, session_error.as_deref().unwrap_or(""))?;
            log.append(host, query_error.as_deref().unwrap_or(""))?;
        }
        Ok(())
    }

    async fn attempt(&self, host: &str, protocol: Protocol) -> AttemptOutcome {
        let mut session = match self.transport.open_session(host, protocol).await {
            Ok(session) => session,
            Err(error) => return AttemptOutcome::SessionFailed(error),
        };

        let result = session.query(UPDATE_NAMESPACE, UPDATE_CLASS).await;
        session.close().await;

        match result {
            Ok(rows) => AttemptOutcome::Rows(rows),
            Err(error) => AttemptOutcome::QueryFailed(error),
        }
    }
}
