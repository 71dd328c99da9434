//! Logging Abstractions
//!
//! Two outbound seams towards the host's observability pipeline:
//!
//! - [`LogEmitter`]: the synchronous, fire-and-forget `emit(severity, text)`
//!   capability used by the logger module for every log call.
//! - [`LoggerSink`]: an async sink that receives structured [`LogEntry`]
//!   values mirrored from the `tracing` pipeline (see
//!   `core_runtime::logging`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};

use crate::error::Result;

/// Subsystem attached to every emitted log line unless overridden.
pub const DEFAULT_LOG_SUBSYSTEM: &str = "com.newarchspike";

/// Category attached to every emitted log line unless overridden.
pub const DEFAULT_LOG_CATEGORY: &str = "ExpoLogger";

/// Severity of a log call made through the logger module.
///
/// Every severity counts the same towards the log counter; it only decides
/// how the line is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound log line emitter.
///
/// Fire-and-forget: there is no acknowledgement and no error path. Hosts map
/// this onto OSLog, Logcat or a telemetry pipeline.
///
/// # Example
///
/// ```
/// use bridge_traits::logging::{LogEmitter, Severity};
///
/// struct Discard;
///
/// impl LogEmitter for Discard {
///     fn emit(&self, _severity: Severity, _text: &str) {}
/// }
///
/// Discard.emit(Severity::Warning, "low battery");
/// ```
pub trait LogEmitter: Send + Sync {
    /// Surface a human-readable line at the given severity.
    fn emit(&self, severity: Severity, text: &str);
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<Severity> for LogLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => LogLevel::Info,
            Severity::Warning => LogLevel::Warn,
            Severity::Error => LogLevel::Error,
        }
    }
}

/// Structured log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Target module/component
    pub target: String,
    /// Log message
    pub message: String,
    /// Structured fields
    pub fields: HashMap<String, String>,
    /// Name of the span the event was recorded in
    pub span_id: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: Utc::now(),
            target: target.into(),
            message: message.into(),
            fields: HashMap::new(),
            span_id: None,
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_span_id(mut self, span_id: impl Into<String>) -> Self {
        self.span_id = Some(span_id.into());
        self
    }
}

/// Logger sink trait
///
/// Forwards structured logs from the core to host logging pipelines:
/// - **iOS**: OSLog
/// - **Android**: Logcat
/// - **Desktop**: Console or file logs
///
/// # Security
///
/// Implementations should ensure no stored values are logged verbatim when
/// their key looks sensitive (see `core_runtime::logging::redact_if_sensitive`).
#[async_trait::async_trait]
pub trait LoggerSink: Send + Sync {
    /// Forward a log entry to the host logging system
    async fn log(&self, entry: LogEntry) -> Result<()>;

    /// Flush any buffered logs
    async fn flush(&self) -> Result<()> {
        Ok(())
    }

    /// Get the minimum log level that will be processed
    ///
    /// Logs below this level can be filtered out at the source for performance.
    fn min_level(&self) -> LogLevel {
        LogLevel::Info
    }
}

/// Console logger for development hosts and tests.
///
/// Writes one line per entry to stdout, followed by the structured fields
/// when there are any.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    pub min_level: LogLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    /// Writes `entry` to `out` if it passes `min_level`.
    pub fn write_entry(&self, out: &mut impl Write, entry: &LogEntry) -> io::Result<()> {
        if entry.level < self.min_level {
            return Ok(());
        }

        writeln!(
            out,
            "[{}] {:<5} {}: {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            level_label(entry.level),
            entry.target,
            entry.message
        )?;
        if !entry.fields.is_empty() {
            let mut fields: Vec<_> = entry.fields.iter().collect();
            fields.sort();
            writeln!(out, "  Fields: {:?}", fields)?;
        }
        Ok(())
    }
}

fn level_label(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "TRACE",
        LogLevel::Debug => "DEBUG",
        LogLevel::Info => "INFO",
        LogLevel::Warn => "WARN",
        LogLevel::Error => "ERROR",
    }
}

#[async_trait::async_trait]
impl LoggerSink for ConsoleLogger {
    async fn log(&self, entry: LogEntry) -> Result<()> {
        self.write_entry(&mut io::stdout().lock(), &entry)?;
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }

    fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

impl LogEmitter for ConsoleLogger {
    fn emit(&self, severity: Severity, text: &str) {
        let entry = LogEntry::new(severity.into(), "emitter", text);
        // No error path for emitters; a closed stdout drops the line.
        let _ = self.write_entry(&mut io::stdout().lock(), &entry);
    }
}
