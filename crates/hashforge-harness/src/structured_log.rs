//! Structured logging contract for verification campaigns.
//!
//! Provides:
//! - [`LogEntry`]: canonical JSONL record with required + optional fields.
//! - [`LogEmitter`]: appends JSONL lines to any writer.
//! - [`validate_log_line`]: validates a single JSONL line against the schema.

use std::io::Write;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Verification outcome attached to per-hash events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    Skip,
}

/// Canonical structured log entry.
///
/// Required fields: `campaign`, `level`, `event`. The rest give
/// per-hash context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub campaign: String,
    pub level: LogLevel,
    pub event: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endian: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<u32>,
}

impl LogEntry {
    #[must_use]
    pub fn event(campaign: impl Into<String>, level: LogLevel, event: impl Into<String>) -> Self {
        LogEntry {
            campaign: campaign.into(),
            level,
            event: event.into(),
            hash: None,
            family: None,
            endian: None,
            outcome: None,
            computed: None,
            expected: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum LogError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid log line {line}: {reason}")]
    Invalid { line: usize, reason: String },
}

/// Serializes entries as JSONL into a shared writer.
pub struct LogEmitter<W: Write> {
    sink: Mutex<W>,
}

impl<W: Write> LogEmitter<W> {
    pub fn new(sink: W) -> Self {
        LogEmitter {
            sink: Mutex::new(sink),
        }
    }

    pub fn emit(&self, entry: &LogEntry) -> Result<(), LogError> {
        let line = serde_json::to_string(entry).expect("log entries serialize");
        let mut sink = self.sink.lock();
        writeln!(sink, "{line}")?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }
}

/// Validate one JSONL line against the schema.
pub fn validate_log_line(line_no: usize, line: &str) -> Result<LogEntry, LogError> {
    let entry: LogEntry = serde_json::from_str(line).map_err(|e| LogError::Invalid {
        line: line_no,
        reason: e.to_string(),
    })?;
    if entry.campaign.is_empty() || entry.event.is_empty() {
        return Err(LogError::Invalid {
            line: line_no,
            reason: "campaign and event are required".to_string(),
        });
    }
    Ok(entry)
}

/// Validate an entire JSONL document.
pub fn validate_log(text: &str) -> Result<Vec<LogEntry>, LogError> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| validate_log_line(i + 1, l))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_round_trip_through_jsonl() {
        let emitter = LogEmitter::new(Vec::new());
        let mut entry = LogEntry::event("smoke", LogLevel::Info, "verify");
        entry.hash = Some("wyhash".to_string());
        entry.outcome = Some(Outcome::Pass);
        entry.computed = Some(0x9DAE7DD3);
        emitter.emit(&entry).unwrap();
        emitter
            .emit(&LogEntry::event("smoke", LogLevel::Info, "done"))
            .unwrap();

        let text = String::from_utf8(emitter.into_inner()).unwrap();
        let entries = validate_log(&text).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].hash.as_deref(), Some("wyhash"));
        assert_eq!(entries[0].outcome, Some(Outcome::Pass));
    }

    #[test]
    fn missing_required_fields_fail_validation() {
        assert!(validate_log_line(1, r#"{"campaign":"","level":"info","event":"x"}"#).is_err());
        assert!(validate_log_line(1, "not json").is_err());
    }
}
