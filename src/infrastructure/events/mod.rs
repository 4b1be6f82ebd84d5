//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - HookEventSink: configured commands on `deployBefore` / `deployAfter`

mod hooks;
mod json;

pub use hooks::HookEventSink;
pub use json::{event_to_json, JsonEventSink};
