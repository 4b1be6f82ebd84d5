//! Property tests for merging invocation overrides into target options.

use proptest::prelude::*;
use serde_json::{Map, Value};

use sitedeploy::domain::value_objects::{DeployTarget, TargetOptions};

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z_]{1,8}").unwrap()
}

fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,16}".prop_map(Value::String),
    ]
}

fn mapping() -> impl Strategy<Value = Map<String, Value>> {
    proptest::collection::btree_map(key(), value(), 0..8)
        .prop_map(|m| m.into_iter().collect::<Map<String, Value>>())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every override key wins, every other target key survives.
    #[test]
    fn property_overrides_take_precedence(
        own in mapping(),
        overrides in mapping(),
    ) {
        let target = DeployTarget {
            kind: Some("git".to_string()),
            options: own.clone(),
            ..Default::default()
        };

        let merged = TargetOptions::merged("git", &target, &overrides);

        for (k, v) in &overrides {
            prop_assert_eq!(merged.get(k), Some(v));
        }
        for (k, v) in &own {
            if !overrides.contains_key(k) {
                prop_assert_eq!(merged.get(k), Some(v));
            }
        }
        let expected_len = own
            .keys()
            .chain(overrides.keys())
            .collect::<std::collections::BTreeSet<_>>()
            .len();
        prop_assert_eq!(merged.values().len(), expected_len);
    }

    /// PROPERTY: typed accessors never panic on arbitrary option values.
    #[test]
    fn property_accessors_never_panic(values in mapping(), probe in key()) {
        let options = TargetOptions::new("rsync", values);
        let _ = options.get_str(&probe);
        let _ = options.get_bool(&probe);
        let _ = options.get_u16(&probe);
        let _ = options.get_string_list(&probe);
        let _ = options.require_str(&probe);
    }
}
