//! Correlated structured logging for Vitrine.
//!
//! This crate is a leaf: nothing here depends on the catalog read path. It
//! provides the two halves of the logging pipeline:
//!
//! - **Correlation** ([`correlation`]): a per-unit-of-work token, propagated
//!   implicitly through a task-local scope so that any code running inside
//!   the unit of work can read it without threading it through call
//!   arguments. Concurrent units of work never observe each other's token.
//! - **Records** ([`record`]): a [`Logger`] that renders every log call as a
//!   single machine-parseable JSON object with a fixed reserved envelope
//!   (event, timestamp, level, logger, correlation token) and writes it
//!   atomically to a [`LogSink`].
//!
//! The global `tracing` subscriber setup ([`logging`]) is carried alongside
//! for the rest of the process's ambient logs.
//!
//! # Example
//!
//! ```
//! use vitrine_telemetry::{correlation, Logger, Severity};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! correlation::scope(async {
//!     let token = correlation::begin_unit_of_work(Some("abc-123"));
//!     assert_eq!(token.as_str(), "abc-123");
//!
//!     let logger = Logger::stdout("catalog");
//!     logger.log("catalog.remote_fetch_started", Severity::Info, Vec::new());
//! })
//! .await;
//! # }
//! ```

#![warn(missing_docs)]

pub mod correlation;
pub mod error;
pub mod logging;
pub mod record;

pub use correlation::{begin_unit_of_work, current_token, CorrelationToken};
pub use error::TelemetryError;
pub use logging::{init_logging, LogConfig, LogFormat};
pub use record::{field, CaptureSink, LogSink, Logger, Severity, StdoutSink};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
