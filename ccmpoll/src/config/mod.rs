//! Configuration system for ccmpoll
//!
//! - Config: poll settings (error log, output format) and the capture file
//!   backing the replay transport
//! - ConfigLoader: file discovery and loading with env/XDG precedence

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{CaptureConfig, Config, PollConfig};
