//! Core library for polling managed hosts for pending software updates
//!
//! Provides the per-host query loop with protocol fallback (Wsman first,
//! Dcom second), record normalization, and the transport seam that concrete
//! remote-management providers plug into.

pub mod diag;
pub mod errlog;
pub mod error;
pub mod poller;
pub mod record;
pub mod states;
pub mod transport;

pub use diag::{DiagnosticSink, NoopDiagnostics, TracingDiagnostics};
pub use errlog::ErrorLog;
pub use error::{PollError, Result};
pub use poller::Poller;
pub use record::{RecordSink, StatusRecord};
pub use transport::{ManagementSession, ManagementTransport, Protocol, TransportError, UpdateRow};
