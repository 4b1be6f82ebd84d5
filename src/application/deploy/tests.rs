//! Tests for the deploy use case

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde_json::{json, Map, Value};

use super::*;
use crate::domain::ports::{
    CommandError, CommandRunner, DeployEvent, DeployEventSink, FileSystem, Invocation,
    SiteBuilder,
};
use crate::domain::services::DeployerRegistry;
use crate::domain::value_objects::{DeployConfig, DeployTarget};
use crate::error::DeployError;

/// Shared, ordered record of everything that happened during a run
#[derive(Clone, Default)]
struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn count(&self, entry: &str) -> usize {
        self.entries().iter().filter(|e| e.as_str() == entry).count()
    }

    fn position(&self, entry: &str) -> Option<usize> {
        self.entries().iter().position(|e| e == entry)
    }
}

struct FakeFs {
    public_exists: bool,
    public_is_file: bool,
}

impl FileSystem for FakeFs {
    fn is_dir(&self, _path: &Path) -> bool {
        self.public_exists && !self.public_is_file
    }
}

struct JournalBuilder {
    journal: Journal,
    fail: bool,
}

impl SiteBuilder for JournalBuilder {
    fn generate(&self, _options: &DeployOptions) -> anyhow::Result<()> {
        self.journal.push("build");
        if self.fail {
            anyhow::bail!("generator crashed");
        }
        Ok(())
    }
}

struct JournalSink {
    journal: Journal,
    events: Mutex<Vec<DeployEvent>>,
}

impl DeployEventSink for JournalSink {
    fn on_event(&self, event: &DeployEvent) {
        if event.is_lifecycle() {
            self.journal.push(event.name());
        }
        self.events.lock().unwrap().push(event.clone());
    }
}

struct NoopRunner;

impl CommandRunner for NoopRunner {
    fn run(&self, _invocation: &Invocation) -> Result<(), CommandError> {
        Ok(())
    }
}

type Calls = Arc<Mutex<Vec<(String, Map<String, Value>)>>>;

struct Harness {
    journal: Journal,
    calls: Calls,
    sink: Arc<JournalSink>,
    registry: DeployerRegistry,
    public_exists: bool,
    public_is_file: bool,
    build_fails: bool,
}

impl Harness {
    fn new() -> Self {
        let journal = Journal::default();
        let sink = Arc::new(JournalSink {
            journal: journal.clone(),
            events: Mutex::new(Vec::new()),
        });
        Self {
            journal,
            calls: Arc::new(Mutex::new(Vec::new())),
            sink,
            registry: DeployerRegistry::new(),
            public_exists: true,
            public_is_file: false,
            build_fails: false,
        }
    }

    fn with_recording(mut self, name: &str) -> Self {
        let journal = self.journal.clone();
        let calls = self.calls.clone();
        let entry = format!("deploy:{}", name);
        self.registry.register_fn(name, move |_ctx, options| {
            journal.push(entry.clone());
            calls
                .lock()
                .unwrap()
                .push((options.kind().to_string(), options.values().clone()));
            Ok(())
        });
        self
    }

    fn with_failing(mut self, name: &str) -> Self {
        let journal = self.journal.clone();
        let entry = format!("deploy:{}", name);
        self.registry.register_fn(name, move |_ctx, _options| {
            journal.push(entry.clone());
            anyhow::bail!("remote rejected the push")
        });
        self
    }

    fn public_missing(mut self) -> Self {
        self.public_exists = false;
        self
    }

    fn public_is_file(mut self) -> Self {
        self.public_is_file = true;
        self
    }

    fn build_fails(mut self) -> Self {
        self.build_fails = true;
        self
    }

    fn run(
        self,
        config: Option<DeployConfig>,
        options: DeployOptions,
    ) -> (Result<DeployReport, DeployError>, Journal, Calls, Vec<DeployEvent>) {
        let use_case = DeployUseCase::new(
            FakeFs {
                public_exists: self.public_exists,
                public_is_file: self.public_is_file,
            },
            JournalBuilder {
                journal: self.journal.clone(),
                fail: self.build_fails,
            },
            self.registry,
            Arc::new(NoopRunner),
        )
        .with_event_sink(self.sink.clone());

        let result = use_case.execute(config.as_ref(), &options);
        let events = self.sink.events.lock().unwrap().clone();
        (result, self.journal, self.calls, events)
    }
}

fn options() -> DeployOptions {
    DeployOptions::new("/site")
}

// ============================================================================
// Configuration presence
// ============================================================================

#[test]
fn absent_config_is_not_configured() {
    let (result, journal, calls, events) = Harness::new()
        .with_recording("git")
        .with_recording("rsync")
        .run(None, options());

    match result {
        Err(DeployError::NotConfigured { available }) => {
            assert_eq!(available, vec!["git", "rsync"]);
        }
        other => panic!("expected NotConfigured, got {:?}", other),
    }
    assert!(calls.lock().unwrap().is_empty());
    assert!(journal.entries().is_empty(), "no build, no events");
    assert!(events.is_empty());
}

#[test]
fn empty_list_is_not_configured() {
    let (result, _, calls, _) = Harness::new()
        .with_recording("git")
        .public_missing()
        .run(Some(DeployConfig::Many(vec![])), options());

    assert!(matches!(result, Err(DeployError::NotConfigured { .. })));
    assert!(calls.lock().unwrap().is_empty());
}

// ============================================================================
// Build step selection
// ============================================================================

#[test]
fn generate_flag_builds_even_when_output_exists() {
    let (result, journal, _, _) = Harness::new().with_recording("git").run(
        Some(DeployTarget::new("git").into()),
        options().with_generate(true),
    );

    assert!(result.unwrap().generated);
    assert_eq!(journal.count("build"), 1);
}

#[test]
fn missing_output_triggers_build() {
    let (result, journal, _, _) = Harness::new()
        .with_recording("git")
        .public_missing()
        .run(Some(DeployTarget::new("git").into()), options());

    assert!(result.unwrap().generated);
    assert_eq!(journal.count("build"), 1);
    assert!(journal.position("build") < journal.position("deployBefore"));
}

#[test]
fn output_path_that_is_a_file_triggers_build() {
    let (result, journal, _, _) = Harness::new()
        .with_recording("git")
        .public_is_file()
        .run(Some(DeployTarget::new("git").into()), options());

    assert!(result.unwrap().generated);
    assert_eq!(journal.count("build"), 1);
}

#[test]
fn existing_output_skips_build() {
    let (result, journal, _, _) = Harness::new()
        .with_recording("git")
        .run(Some(DeployTarget::new("git").into()), options());

    assert!(!result.unwrap().generated);
    assert_eq!(journal.count("build"), 0);
}

#[test]
fn build_failure_aborts_before_any_signal() {
    let (result, journal, calls, events) = Harness::new()
        .with_recording("git")
        .public_missing()
        .build_fails()
        .run(Some(DeployTarget::new("git").into()), options());

    assert!(matches!(result, Err(DeployError::BuildFailed(_))));
    assert!(calls.lock().unwrap().is_empty());
    assert_eq!(journal.entries(), vec!["build"]);
    assert!(events.is_empty());
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn deploys_every_target_in_declared_order() {
    let config = DeployConfig::Many(vec![
        DeployTarget::new("rsync"),
        DeployTarget::new("git"),
        DeployTarget::new("local"),
    ]);
    let (result, journal, calls, _) = Harness::new()
        .with_recording("git")
        .with_recording("local")
        .with_recording("rsync")
        .run(Some(config), options());

    let report = result.unwrap();
    assert_eq!(report.deployed(), vec!["rsync", "git", "local"]);
    assert_eq!(calls.lock().unwrap().len(), 3);
    assert_eq!(
        journal.entries(),
        vec![
            "deployBefore",
            "deploy:rsync",
            "deploy:git",
            "deploy:local",
            "deployAfter"
        ]
    );
}

#[test]
fn same_type_twice_runs_twice() {
    let config = DeployConfig::Many(vec![
        DeployTarget::new("git").with_option("repo", "a"),
        DeployTarget::new("git").with_option("repo", "b"),
    ]);
    let (_, _, calls, _) = Harness::new()
        .with_recording("git")
        .run(Some(config), options());

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].1["repo"], json!("a"));
    assert_eq!(calls[1].1["repo"], json!("b"));
}

#[test]
fn single_object_config_is_one_invocation() {
    let (result, _, calls, _) = Harness::new()
        .with_recording("git")
        .run(Some(DeployTarget::new("git").into()), options());

    assert_eq!(result.unwrap().deployed(), vec!["git"]);
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[test]
fn unknown_type_is_logged_and_skipped() {
    let config = DeployConfig::Many(vec![
        DeployTarget::new("git").with_option("branch", "gh-pages"),
        DeployTarget::new("ghost"),
    ]);
    let (result, journal, calls, events) = Harness::new()
        .with_recording("git")
        .run(
            Some(config),
            options().with_override("message", "release"),
        );

    let report = result.unwrap();
    assert_eq!(report.deployed(), vec!["git"]);
    assert_eq!(report.not_found(), vec!["ghost"]);
    assert!(!report.is_success());

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "git");
    assert_eq!(calls[0].1["branch"], json!("gh-pages"));
    assert_eq!(calls[0].1["message"], json!("release"));

    assert!(events.contains(&DeployEvent::TargetNotFound {
        index: 1,
        kind: "ghost".to_string()
    }));
    assert_eq!(journal.count("deployAfter"), 1);
}

#[test]
fn unknown_type_does_not_stop_later_targets() {
    let config = DeployConfig::Many(vec![DeployTarget::new("ghost"), DeployTarget::new("git")]);
    let (result, _, calls, _) = Harness::new()
        .with_recording("git")
        .run(Some(config), options());

    assert_eq!(result.unwrap().deployed(), vec!["git"]);
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[test]
fn entry_without_type_is_skipped_silently() {
    let config = DeployConfig::Many(vec![
        DeployTarget::default().with_option("repo", "placeholder"),
        DeployTarget::new(""),
        DeployTarget::new("git"),
    ]);
    let (result, _, calls, events) = Harness::new()
        .with_recording("git")
        .run(Some(config), options());

    let report = result.unwrap();
    assert_eq!(report.skipped_count(), 2);
    assert!(report.is_success());
    assert_eq!(calls.lock().unwrap().len(), 1);
    assert!(!events
        .iter()
        .any(|e| matches!(e, DeployEvent::TargetNotFound { .. })));
}

#[test]
fn invocation_overrides_take_precedence() {
    let config = DeployTarget::new("git")
        .with_option("branch", "gh-pages")
        .with_option("repo", "origin");
    let (_, _, calls, _) = Harness::new().with_recording("git").run(
        Some(config.into()),
        options().with_override("branch", "main"),
    );

    let calls = calls.lock().unwrap();
    assert_eq!(calls[0].1["branch"], json!("main"));
    assert_eq!(calls[0].1["repo"], json!("origin"));
}

#[test]
fn deployer_receives_resolved_paths() {
    let seen = Arc::new(Mutex::new(None));
    let seen_in = seen.clone();
    let mut harness = Harness::new();
    harness.registry.register_fn("local", move |ctx, _| {
        *seen_in.lock().unwrap() = Some((ctx.root.to_path_buf(), ctx.public_dir.to_path_buf()));
        Ok(())
    });

    let (result, _, _, _) = harness.run(
        Some(DeployTarget::new("local").into()),
        DeployOptions::new("/site").with_public_dir("dist"),
    );

    result.unwrap();
    let (root, public_dir) = seen.lock().unwrap().clone().unwrap();
    assert_eq!(root, Path::new("/site"));
    assert_eq!(public_dir, Path::new("/site").join("dist"));
}

// ============================================================================
// Failure propagation
// ============================================================================

#[test]
fn failing_deployer_aborts_remaining_targets() {
    let config = DeployConfig::Many(vec![DeployTarget::new("git"), DeployTarget::new("rsync")]);
    let (result, journal, calls, events) = Harness::new()
        .with_failing("git")
        .with_recording("rsync")
        .run(Some(config), options());

    match result {
        Err(DeployError::DeployerFailed { kind, index, source }) => {
            assert_eq!(kind, "git");
            assert_eq!(index, 0);
            assert_eq!(source.to_string(), "remote rejected the push");
        }
        other => panic!("expected DeployerFailed, got {:?}", other),
    }
    assert!(calls.lock().unwrap().is_empty(), "rsync must not run");
    assert_eq!(journal.entries(), vec!["deployBefore", "deploy:git"]);
    assert_eq!(journal.count("deployAfter"), 0);
    assert!(matches!(
        events.last(),
        Some(DeployEvent::TargetFailed { index: 0, .. })
    ));
}

// ============================================================================
// Lifecycle signals
// ============================================================================

#[test]
fn lifecycle_signals_fire_once_around_invocations() {
    let config = DeployConfig::Many(vec![DeployTarget::new("git"), DeployTarget::new("local")]);
    let (_, journal, _, events) = Harness::new()
        .with_recording("git")
        .with_recording("local")
        .run(Some(config), options());

    assert_eq!(journal.count("deployBefore"), 1);
    assert_eq!(journal.count("deployAfter"), 1);
    assert_eq!(journal.position("deployBefore"), Some(0));
    assert_eq!(journal.entries().last().map(String::as_str), Some("deployAfter"));

    assert_eq!(events.first(), Some(&DeployEvent::Before { target_count: 2 }));
    assert_eq!(
        events.last(),
        Some(&DeployEvent::After {
            deployed: 2,
            not_found: 0,
            skipped: 0
        })
    );
}

#[test]
fn after_fires_even_when_nothing_resolves() {
    let (result, journal, _, _) = Harness::new().run(
        Some(DeployConfig::Many(vec![DeployTarget::new("ghost")])),
        options(),
    );

    assert_eq!(result.unwrap().not_found(), vec!["ghost"]);
    assert_eq!(journal.entries(), vec!["deployBefore", "deployAfter"]);
}

#[test]
fn lifecycle_only_sinks_do_not_see_progress() {
    struct LifecycleOnly(Mutex<Vec<&'static str>>);

    impl DeployEventSink for LifecycleOnly {
        fn on_event(&self, event: &DeployEvent) {
            self.0.lock().unwrap().push(event.name());
        }

        fn wants_detailed_events(&self) -> bool {
            false
        }
    }

    let sink = Arc::new(LifecycleOnly(Mutex::new(Vec::new())));
    let mut registry = DeployerRegistry::new();
    registry.register_fn("git", |_, _| Ok(()));
    let use_case = DeployUseCase::new(
        FakeFs {
            public_exists: true,
            public_is_file: false,
        },
        JournalBuilder {
            journal: Journal::default(),
            fail: false,
        },
        registry,
        Arc::new(NoopRunner),
    )
    .with_event_sink(sink.clone());

    use_case
        .execute(Some(&DeployTarget::new("git").into()), &options())
        .unwrap();

    assert_eq!(
        *sink.0.lock().unwrap(),
        vec!["deployBefore", "deployAfter"]
    );
}
