//! Record output writers
//!
//! Both writers implement `RecordSink`, so the poll loop streams straight to
//! stdout without buffering across hosts.

use ccmpoll_core::{RecordSink, StatusRecord};
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a config-file format name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Aligned `ComputerName  JobState  Name` columns; a missing job state
/// renders as `-`
pub struct TextWriter<W: Write> {
    out: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> RecordSink for TextWriter<W> {
    fn emit(&mut self, record: StatusRecord) -> ccmpoll_core::Result<()> {
        let state = record.job_state.as_deref().unwrap_or("-");
        writeln!(
            self.out,
            "{:<24} {:<22} {}",
            record.computer_name, state, record.name
        )?;
        Ok(())
    }
}

/// One JSON object per line
pub struct JsonWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> RecordSink for JsonWriter<W> {
    fn emit(&mut self, record: StatusRecord) -> ccmpoll_core::Result<()> {
        let line = serde_json::to_string(&record).map_err(std::io::Error::other)?;
        writeln!(self.out, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<StatusRecord> {
        vec![
            StatusRecord::update("pc-01", 7, "KB5031234"),
            StatusRecord::unreachable("pc-02"),
        ]
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_name("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_name("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("xml"), None);
    }

    #[test]
    fn test_text_writer() {
        let mut buf = Vec::new();
        {
            let mut writer = TextWriter::new(&mut buf);
            for record in sample_records() {
                writer.emit(record).unwrap();
            }
        }

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("pc-01"));
        assert!(lines[0].contains("Installing"));
        assert!(lines[0].contains("KB5031234"));
        // Unreachable hosts have no job state
        assert!(lines[1].contains(" - "));
        assert!(lines[1].contains("No connection to client"));
    }

    #[test]
    fn test_json_writer_uses_original_field_names() {
        let mut buf = Vec::new();
        {
            let mut writer = JsonWriter::new(&mut buf);
            for record in sample_records() {
                writer.emit(record).unwrap();
            }
        }

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            r#"{"ComputerName":"pc-01","JobState":"Installing","Name":"KB5031234"}"#
        );
        assert_eq!(
            lines[1],
            r#"{"ComputerName":"pc-02","JobState":null,"Name":"No connection to client"}"#
        );
    }
}
