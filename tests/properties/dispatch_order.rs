//! Property tests for deploy dispatch: order, counts and not-found handling.

use std::path::Path;
use std::sync::{Arc, Mutex};

use proptest::prelude::*;

use sitedeploy::application::{DeployOptions, DeployUseCase, TargetStatus};
use sitedeploy::domain::ports::{
    CommandError, CommandRunner, DeployEvent, DeployEventSink, FileSystem, Invocation,
    SiteBuilder,
};
use sitedeploy::domain::services::DeployerRegistry;
use sitedeploy::domain::value_objects::{DeployConfig, DeployTarget};

const REGISTERED: &[&str] = &["alpha", "beta", "gamma"];

struct PublicDirExists;

impl FileSystem for PublicDirExists {
    fn is_dir(&self, _path: &Path) -> bool {
        true
    }
}

struct NoBuild;

impl SiteBuilder for NoBuild {
    fn generate(&self, _options: &DeployOptions) -> anyhow::Result<()> {
        Ok(())
    }
}

struct NoCommands;

impl CommandRunner for NoCommands {
    fn run(&self, _invocation: &Invocation) -> Result<(), CommandError> {
        Ok(())
    }
}

#[derive(Default)]
struct LifecycleCounter {
    names: Mutex<Vec<&'static str>>,
}

impl DeployEventSink for LifecycleCounter {
    fn on_event(&self, event: &DeployEvent) {
        self.names.lock().unwrap().push(event.name());
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

fn target_kind() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        3 => proptest::sample::select(REGISTERED).prop_map(|s| Some(s.to_string())),
        1 => Just(Some("unknown".to_string())),
        1 => Just(None),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: registered targets run once each, in declared order;
    /// unknown and untyped entries never invoke anything.
    #[test]
    fn property_dispatch_follows_declaration_order(
        kinds in proptest::collection::vec(target_kind(), 1..12)
    ) {
        let calls = Arc::new(Mutex::new(Vec::<String>::new()));
        let mut registry = DeployerRegistry::new();
        for name in REGISTERED {
            let calls = calls.clone();
            registry.register_fn(*name, move |_ctx, options| {
                calls.lock().unwrap().push(options.kind().to_string());
                Ok(())
            });
        }

        let sink = Arc::new(LifecycleCounter::default());
        let use_case = DeployUseCase::new(PublicDirExists, NoBuild, registry, Arc::new(NoCommands))
            .with_event_sink(sink.clone());

        let targets: Vec<DeployTarget> = kinds
            .iter()
            .map(|kind| DeployTarget {
                kind: kind.clone(),
                ..Default::default()
            })
            .collect();
        let config = DeployConfig::Many(targets);
        let report = use_case
            .execute(Some(&config), &DeployOptions::new("/site"))
            .unwrap();

        let expected: Vec<String> = kinds
            .iter()
            .flatten()
            .filter(|k| REGISTERED.contains(&k.as_str()))
            .cloned()
            .collect();
        prop_assert_eq!(&*calls.lock().unwrap(), &expected);
        prop_assert_eq!(report.outcomes.len(), kinds.len());

        let unknown = kinds.iter().filter(|k| k.as_deref() == Some("unknown")).count();
        prop_assert_eq!(report.not_found().len(), unknown);
        prop_assert_eq!(
            report.outcomes.iter().filter(|o| o.status == TargetStatus::Skipped).count(),
            kinds.iter().filter(|k| k.is_none()).count()
        );

        prop_assert_eq!(&*sink.names.lock().unwrap(), &vec!["deployBefore", "deployAfter"]);
    }
}
