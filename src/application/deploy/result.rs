//! Deploy Result
//!
//! Per-target outcomes of a deploy run that reached the end of its target list.

/// What happened to one configured target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    /// The deployer ran and succeeded
    Deployed,
    /// No deployer registered for the type
    NotFound,
    /// Entry had no `type`
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOutcome {
    /// Position in the configured list
    pub index: usize,
    pub kind: Option<String>,
    pub status: TargetStatus,
}

/// Result of a deploy run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployReport {
    /// Outcomes in declaration order
    pub outcomes: Vec<TargetOutcome>,
    /// Whether the build step ran before deploying
    pub generated: bool,
}

impl DeployReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, index: usize, kind: Option<&str>, status: TargetStatus) {
        self.outcomes.push(TargetOutcome {
            index,
            kind: kind.map(str::to_string),
            status,
        });
    }

    fn kinds_with(&self, status: TargetStatus) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.status == status)
            .filter_map(|o| o.kind.as_deref())
            .collect()
    }

    /// Types that were deployed, in order
    pub fn deployed(&self) -> Vec<&str> {
        self.kinds_with(TargetStatus::Deployed)
    }

    /// Types that had no registered deployer
    pub fn not_found(&self) -> Vec<&str> {
        self.kinds_with(TargetStatus::NotFound)
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == TargetStatus::Skipped)
            .count()
    }

    /// True when every typed target found its deployer
    pub fn is_success(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| o.status != TargetStatus::NotFound)
    }
}
