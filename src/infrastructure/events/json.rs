//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON shape of a deploy event
pub fn event_to_json(event: &DeployEvent) -> serde_json::Value {
    match event {
        DeployEvent::Before { target_count } => serde_json::json!({
            "event": "deploy_before",
            "command": "deploy",
            "targets": target_count,
        }),

        DeployEvent::TargetStarted { index, kind } => serde_json::json!({
            "event": "item_start",
            "command": "deploy",
            "index": index,
            "type": kind,
        }),

        DeployEvent::TargetCompleted { index, kind } => serde_json::json!({
            "event": "item_done",
            "command": "deploy",
            "index": index,
            "type": kind,
        }),

        DeployEvent::TargetSkipped { index } => serde_json::json!({
            "event": "item_skipped",
            "command": "deploy",
            "index": index,
            "reason": "missing type",
        }),

        DeployEvent::TargetNotFound { index, kind } => serde_json::json!({
            "event": "item_error",
            "command": "deploy",
            "index": index,
            "type": kind,
            "error": format!("Deployer not found: {}", kind),
        }),

        DeployEvent::TargetFailed { index, kind, error } => serde_json::json!({
            "event": "item_error",
            "command": "deploy",
            "index": index,
            "type": kind,
            "error": error,
            "fatal": true,
        }),

        DeployEvent::After {
            deployed,
            not_found,
            skipped,
        } => {
            let status = if *not_found == 0 { "success" } else { "partial" };
            serde_json::json!({
                "event": "deploy_after",
                "command": "deploy",
                "status": status,
                "deployed": deployed,
                "not_found": not_found,
                "skipped": skipped,
            })
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: &DeployEvent) {
        self.write_event(event_to_json(event));
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
