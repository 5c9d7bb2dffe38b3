//! Tests for the source abstraction.

use super::{Lookup, Origin, SourceSet, Sources, Value};

mod lookup {
    use super::*;

    #[test]
    fn unknown_key_is_absent() {
        let sources = Sources::new();

        assert_eq!(sources.lookup(Origin::Flag, "key"), Lookup::Absent);
        assert_eq!(sources, Sources::default());
    }

    #[test]
    fn explicit_value_is_set() {
        let sources = Sources::new().with_set(Origin::Config, "api_key", "abc");

        assert_eq!(
            sources.lookup(Origin::Config, "api_key"),
            Lookup::Set(&Value::Str("abc".to_string()))
        );
        assert!(sources.is_set(Origin::Config, "api_key"));
    }

    #[test]
    fn default_value_is_not_set() {
        let sources = Sources::new().with_default(Origin::Flag, "sync-offline-activity", 100_i64);

        assert_eq!(
            sources.lookup(Origin::Flag, "sync-offline-activity"),
            Lookup::Default(&Value::Int(100))
        );
        assert!(!sources.is_set(Origin::Flag, "sync-offline-activity"));
    }

    #[test]
    fn explicit_value_shadows_default() {
        let sources = Sources::new()
            .with_default(Origin::Flag, "sync-offline-activity", 100_i64)
            .with_set(Origin::Flag, "sync-offline-activity", 42_i64);

        assert_eq!(
            sources.lookup(Origin::Flag, "sync-offline-activity"),
            Lookup::Set(&Value::Int(42))
        );
    }

    #[test]
    fn origins_are_independent() {
        let sources = Sources::new().with_set(Origin::Flag, "proxy", "https://a.example");

        assert!(sources.is_set(Origin::Flag, "proxy"));
        assert_eq!(sources.lookup(Origin::Config, "proxy"), Lookup::Absent);
    }

    #[test]
    fn explicit_zero_values_are_still_set() {
        let sources = Sources::new()
            .with_set(Origin::Config, "timeout", 0_i64)
            .with_set(Origin::Config, "offline", false);

        assert!(sources.is_set(Origin::Config, "timeout"));
        assert!(sources.is_set(Origin::Config, "offline"));
    }

    #[test]
    fn lookup_through_reference() {
        let sources = Sources::new().with_set(Origin::Flag, "plugin", "vim");
        let by_ref: &dyn SourceSet = &sources;

        assert_eq!(by_ref.string(Origin::Flag, "plugin").as_deref(), Some("vim"));
    }
}

mod typed_getters {
    use super::*;

    #[test]
    fn string_renders_non_string_values() {
        let sources = Sources::new()
            .with_set(Origin::Config, "timeout", 10_i64)
            .with_set(Origin::Config, "offline", true);

        assert_eq!(sources.string(Origin::Config, "timeout").as_deref(), Some("10"));
        assert_eq!(sources.string(Origin::Config, "offline").as_deref(), Some("true"));
    }

    #[test]
    fn int_parses_numeric_strings() {
        let sources = Sources::new()
            .with_set(Origin::Flag, "timeout", " 30 ")
            .with_set(Origin::Flag, "bad", "thirty");

        assert_eq!(sources.int(Origin::Flag, "timeout"), Some(30));
        assert_eq!(sources.int(Origin::Flag, "bad"), None);
    }

    #[test]
    fn bool_accepts_common_spellings() {
        for (raw, expected) in [
            ("true", true),
            ("TRUE", true),
            ("1", true),
            ("on", true),
            ("false", false),
            ("0", false),
            ("No", false),
        ] {
            let sources = Sources::new().with_set(Origin::Config, "offline", raw);
            assert_eq!(
                sources.bool(Origin::Config, "offline"),
                Some(expected),
                "Failed for spelling: {raw}"
            );
        }
    }

    #[test]
    fn getters_see_defaults() {
        let sources = Sources::new().with_default(Origin::Flag, "sync-offline-activity", 100_i64);

        assert_eq!(sources.int(Origin::Flag, "sync-offline-activity"), Some(100));
    }
}

mod values {
    use super::*;

    #[test]
    fn blank_only_for_whitespace_strings() {
        assert!(Value::from("").is_blank());
        assert!(Value::from("   ").is_blank());
        assert!(!Value::from("x").is_blank());
        assert!(!Value::Int(0).is_blank());
        assert!(!Value::Bool(false).is_blank());
    }

    #[test]
    fn int_to_bool_is_non_zero() {
        assert_eq!(Value::Int(0).as_bool(), Some(false));
        assert_eq!(Value::Int(7).as_bool(), Some(true));
    }

    #[test]
    fn bool_is_not_an_int() {
        assert_eq!(Value::Bool(true).as_int(), None);
    }

    #[test]
    fn lookup_value_ignores_tag() {
        assert_eq!(Lookup::Default("x").value(), Some("x"));
    }
}
