//! CLI for polling managed hosts for pending software updates
//!
//! Wires the core poll loop to a transport, a host list, and an output
//! writer. Configuration is loaded from CLI args, environment, or config
//! file with proper precedence (CLI > env > file).

pub mod config;
pub mod error;
pub mod hostlist;
pub mod output;
pub mod replay;

pub use config::{Config, ConfigLoader};
pub use error::{Result, ToolError};
pub use output::{JsonWriter, OutputFormat, TextWriter};
pub use replay::{Capture, ReplayTransport};
