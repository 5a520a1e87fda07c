// crates/algolab-cli/src/events.rs
// ============================================================================
// Module: Run Events
// Description: Structured events for CLI command runs.
// Purpose: Emit one JSON line per command without a logging framework.
// Dependencies: algolab-config, serde, serde_json
// ============================================================================

//! ## Overview
//! Every command run produces one [`RunEvent`]. Sinks serialize events as
//! JSON lines; [`sink_from_config`] picks the sink named by `[logging]`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use algolab_config::LogSink;
use algolab_config::LoggingConfig;
use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Outcome of a command run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// The command completed.
    Success,
    /// The command returned an error.
    Failure,
}

/// Command run event payload.
#[derive(Debug, Clone, Serialize)]
pub struct RunEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Command label, e.g. `matrix.multiply`.
    pub command: &'static str,
    /// Run outcome.
    pub outcome: RunOutcome,
    /// Wall-clock run time in milliseconds.
    pub duration_ms: u128,
    /// Error message on failure.
    pub detail: Option<String>,
}

impl RunEvent {
    /// Creates a run event stamped with the current time.
    #[must_use]
    pub fn new(command: &'static str, elapsed: Duration, error: Option<String>) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        let outcome = if error.is_some() { RunOutcome::Failure } else { RunOutcome::Success };
        Self {
            event: "command_run",
            timestamp_ms,
            command,
            outcome,
            duration_ms: elapsed.as_millis(),
            detail: error,
        }
    }
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Destination for run events.
pub trait RunEventSink: Send + Sync {
    /// Record a run event.
    fn record(&self, event: &RunEvent);
}

/// Sink that logs JSON lines to stderr.
pub struct StderrRunEventSink;

impl RunEventSink for StderrRunEventSink {
    fn record(&self, event: &RunEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Sink that appends JSON lines to a file.
pub struct FileRunEventSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileRunEventSink {
    /// Opens the event file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl RunEventSink for FileRunEventSink {
    fn record(&self, event: &RunEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op run event sink.
pub struct NoopRunEventSink;

impl RunEventSink for NoopRunEventSink {
    fn record(&self, _event: &RunEvent) {}
}

/// Builds the sink selected by `[logging]`.
///
/// # Errors
///
/// Returns an error if the `file` sink's path cannot be opened.
pub fn sink_from_config(logging: &LoggingConfig) -> io::Result<Box<dyn RunEventSink>> {
    match (logging.sink, logging.path.as_deref()) {
        (LogSink::None, _) => Ok(Box::new(NoopRunEventSink)),
        (LogSink::Stderr, _) => Ok(Box::new(StderrRunEventSink)),
        (LogSink::File, Some(path)) => Ok(Box::new(FileRunEventSink::new(Path::new(path.trim()))?)),
        (LogSink::File, None) => {
            Err(io::Error::new(io::ErrorKind::InvalidInput, "logging.path is required"))
        }
    }
}
