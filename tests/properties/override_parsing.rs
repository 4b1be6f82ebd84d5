//! Property tests for `-o KEY=VALUE` parsing.

use proptest::prelude::*;
use serde_json::Value;

use sitedeploy::presentation::parse_override;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,64}") {
        let _ = parse_override(&s);
    }

    /// PROPERTY: everything after the first '=' is the value, kept verbatim
    /// unless it is a boolean or an integer.
    #[test]
    fn property_value_is_preserved(
        key in "[a-z][a-z_]{0,8}",
        value in "[a-zA-Z /:=.-]{0,24}",
    ) {
        let (parsed_key, parsed) = parse_override(&format!("{}={}", key, value)).unwrap();
        prop_assert_eq!(parsed_key, key);
        match parsed {
            Value::String(s) => prop_assert_eq!(s, value),
            Value::Bool(b) => prop_assert_eq!(b.to_string(), value),
            Value::Number(n) => prop_assert_eq!(n.to_string(), value),
            other => prop_assert!(false, "unexpected value {:?}", other),
        }
    }
}
