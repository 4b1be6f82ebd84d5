//! Deploy Event Port
//!
//! Provides an observable interface for deploy runs: the `deployBefore` /
//! `deployAfter` lifecycle signals plus per-target progress.

/// Event emitted during a deploy run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// `deployBefore`: configuration checked, build step done, nothing deployed yet
    Before { target_count: usize },

    /// A deployer is about to run
    TargetStarted { index: usize, kind: String },

    /// A deployer finished successfully
    TargetCompleted { index: usize, kind: String },

    /// Entry without a `type`, skipped
    TargetSkipped { index: usize },

    /// No deployer registered for the type
    TargetNotFound { index: usize, kind: String },

    /// A deployer failed; the run stops after this event
    TargetFailed {
        index: usize,
        kind: String,
        error: String,
    },

    /// `deployAfter`: every target has been attempted
    After {
        deployed: usize,
        not_found: usize,
        skipped: usize,
    },
}

impl DeployEvent {
    /// Lifecycle name as listeners know it
    pub fn name(&self) -> &'static str {
        match self {
            DeployEvent::Before { .. } => "deployBefore",
            DeployEvent::TargetStarted { .. } => "targetStarted",
            DeployEvent::TargetCompleted { .. } => "targetCompleted",
            DeployEvent::TargetSkipped { .. } => "targetSkipped",
            DeployEvent::TargetNotFound { .. } => "targetNotFound",
            DeployEvent::TargetFailed { .. } => "targetFailed",
            DeployEvent::After { .. } => "deployAfter",
        }
    }

    pub fn is_lifecycle(&self) -> bool {
        matches!(self, DeployEvent::Before { .. } | DeployEvent::After { .. })
    }
}

/// Trait for receiving deploy events
///
/// Listeners are notified synchronously and cannot influence the run:
/// there is no return value to act on.
///
/// Implementations:
/// - JsonEventSink: NDJSON event stream for CI
/// - HookEventSink: runs configured before/after commands
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: &DeployEvent);

    /// Check if this sink wants per-target events
    ///
    /// Sinks that only care about lifecycle signals return false.
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: &DeployEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
