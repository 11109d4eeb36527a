//! Structured log records and sinks.
//!
//! Every call to [`Logger::log`] produces exactly one JSON object with a
//! fixed reserved envelope (`event`, `timestamp`, `level`, `logger`, and
//! `correlation_token` when a token is active) merged with caller-supplied
//! fields, and hands it to the configured [`LogSink`] as one atomic line.
//!
//! Logging is fire-and-forget: neither serialization of odd field values nor
//! a failing sink ever surfaces an error to the caller. Observability must
//! not break the primary data path.

use crate::correlation;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Standard field names used in Vitrine log records.
///
/// Use these constants for consistency across logs.
pub mod fields {
    /// Stable dotted event tag, e.g. `catalog.remote_fetch_started`.
    pub const EVENT: &str = "event";

    /// ISO-8601 UTC timestamp.
    pub const TIMESTAMP: &str = "timestamp";

    /// Severity level field name.
    pub const LEVEL: &str = "level";

    /// Logger/source name field name.
    pub const LOGGER: &str = "logger";

    /// Correlation token field name.
    pub const CORRELATION_TOKEN: &str = "correlation_token";

    /// Error message field name.
    pub const ERROR: &str = "error";

    /// Operation name field name.
    pub const OPERATION: &str = "operation";
}

/// Reserved envelope keys that caller-supplied fields can never overwrite.
const RESERVED: [&str; 5] = [
    fields::EVENT,
    fields::TIMESTAMP,
    fields::LEVEL,
    fields::LOGGER,
    fields::CORRELATION_TOKEN,
];

/// Severity level of a structured log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Diagnostic detail.
    Debug,
    /// Normal operational events.
    Info,
    /// Degraded but recoverable situations, e.g. fallback engaged.
    Warn,
    /// Failures.
    Error,
}

impl Severity {
    /// Returns the lowercase name used in rendered records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination for rendered log records.
///
/// Implementations receive one complete record per call and must write it
/// without interleaving it with records from concurrent emitters. Write
/// failures are the sink's own concern; they are never reported upward.
pub trait LogSink: Send + Sync {
    /// Writes one rendered record.
    fn write(&self, line: &str);
}

/// Sink writing one JSON object per line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write(&self, line: &str) {
        // Locking stdout for the single writeln keeps the record atomic.
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{line}");
    }
}

/// In-memory sink for tests, capturing every rendered record.
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    /// Creates an empty capture sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw captured lines, in emission order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Returns the captured records parsed back into JSON values.
    ///
    /// Unparseable lines are skipped; every line emitted by [`Logger`] is a
    /// complete JSON object, so in practice nothing is skipped.
    #[must_use]
    pub fn records(&self) -> Vec<Value> {
        self.lines()
            .iter()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    /// Returns the captured records at the given severity.
    #[must_use]
    pub fn records_at(&self, severity: Severity) -> Vec<Value> {
        self.records()
            .into_iter()
            .filter(|r| r[fields::LEVEL] == severity.as_str())
            .collect()
    }
}

impl LogSink for CaptureSink {
    fn write(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}

/// Converts any serializable value into a named record field.
///
/// When the value cannot be serialized to JSON, its `Debug` rendering is
/// used instead: a `log` call never fails because of an odd field value.
pub fn field<T>(key: &str, value: &T) -> (String, Value)
where
    T: Serialize + std::fmt::Debug,
{
    let rendered = serde_json::to_value(value)
        .unwrap_or_else(|_| Value::String(format!("{value:?}")));
    (key.to_string(), rendered)
}

/// Emitter of structured log records.
///
/// A `Logger` is cheap to clone; clones share the underlying sink. The
/// active correlation token (see [`crate::correlation`]) is attached to
/// every record automatically.
#[derive(Clone)]
pub struct Logger {
    name: String,
    sink: Arc<dyn LogSink>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").field("name", &self.name).finish()
    }
}

impl Logger {
    /// Creates a logger writing to the given sink.
    #[must_use]
    pub fn new(name: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            name: name.into(),
            sink,
        }
    }

    /// Creates a logger writing one JSON object per line to stdout.
    #[must_use]
    pub fn stdout(name: impl Into<String>) -> Self {
        Self::new(name, Arc::new(StdoutSink))
    }

    /// Returns the logger/source name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Emits one structured record.
    ///
    /// `event` should be a stable dotted machine-readable tag (for example
    /// `catalog.remote_fetch_completed`), not a free-text sentence. Caller
    /// fields merge into the envelope; a field whose key collides with a
    /// reserved envelope key is kept under a `fields.`-prefixed key instead
    /// of overwriting it.
    pub fn log(&self, event: &str, severity: Severity, fields: Vec<(String, Value)>) {
        let mut record = Map::new();
        record.insert(fields::EVENT.to_string(), Value::String(event.to_string()));
        record.insert(
            fields::TIMESTAMP.to_string(),
            Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)),
        );
        record.insert(
            fields::LEVEL.to_string(),
            Value::String(severity.as_str().to_string()),
        );
        record.insert(fields::LOGGER.to_string(), Value::String(self.name.clone()));

        let token = correlation::current_token();
        if !token.is_empty() {
            record.insert(fields::CORRELATION_TOKEN.to_string(), Value::String(token));
        }

        for (key, value) in fields {
            if RESERVED.contains(&key.as_str()) {
                record.insert(format!("fields.{key}"), value);
            } else {
                record.insert(key, value);
            }
        }

        if let Ok(line) = serde_json::to_string(&Value::Object(record)) {
            self.sink.write(&line);
        }
    }

    /// Emits a debug-level record.
    pub fn debug(&self, event: &str, fields: Vec<(String, Value)>) {
        self.log(event, Severity::Debug, fields);
    }

    /// Emits an info-level record.
    pub fn info(&self, event: &str, fields: Vec<(String, Value)>) {
        self.log(event, Severity::Info, fields);
    }

    /// Emits a warning-level record.
    pub fn warn(&self, event: &str, fields: Vec<(String, Value)>) {
        self.log(event, Severity::Warn, fields);
    }

    /// Emits an error-level record.
    pub fn error(&self, event: &str, fields: Vec<(String, Value)>) {
        self.log(event, Severity::Error, fields);
    }
}
