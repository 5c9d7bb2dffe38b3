//! Tests for TOML configuration parsing.

use crate::source::{Lookup, Origin, SourceSet, Sources, Value};

use super::ConfigError;
use super::read::ConfigReadParams;
use super::toml::TomlConfig;

mod parsing {
    use super::*;

    #[test]
    fn parse_settings_section() {
        let toml = r#"
            [settings]
            api_key = "00000000-0000-4000-8000-000000000000"
            timeout = 10
            offline = false
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        let settings = config.settings().unwrap();

        assert_eq!(
            settings.get("api_key").and_then(|v| v.as_str()),
            Some("00000000-0000-4000-8000-000000000000")
        );
        assert_eq!(settings.get("timeout").and_then(toml::Value::as_integer), Some(10));
        assert_eq!(settings.get("offline").and_then(toml::Value::as_bool), Some(false));
    }

    #[test]
    fn parse_multiple_sections() {
        let toml = r#"
            [settings]
            debug = true

            [git]
            submodules_disabled = "true"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert!(config.settings().is_some());
        assert!(config.section("git").is_some());
        assert!(config.section("missing").is_none());
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.settings().is_none());
    }

    #[test]
    fn reject_top_level_values() {
        let result = TomlConfig::parse("api_key = \"abc\"");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn reject_invalid_toml() {
        let result = TomlConfig::parse("[settings\napi_key = ");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

mod apply {
    use super::*;

    #[test]
    fn settings_become_explicit_config_values() {
        let config = TomlConfig::parse(
            r#"
            [settings]
            api_url = "http://localhost:8081"
            timeout = 10
            offline = false
            sync_offline_activity = "none"
        "#,
        )
        .unwrap();
        let mut sources = Sources::new();

        config.apply_to(&mut sources).unwrap();

        assert_eq!(
            sources.lookup(Origin::Config, "api_url"),
            Lookup::Set(&Value::from("http://localhost:8081"))
        );
        assert_eq!(sources.lookup(Origin::Config, "timeout"), Lookup::Set(&Value::Int(10)));
        assert_eq!(sources.lookup(Origin::Config, "offline"), Lookup::Set(&Value::Bool(false)));
        assert_eq!(
            sources.string(Origin::Config, "sync_offline_activity").as_deref(),
            Some("none")
        );
    }

    #[test]
    fn other_sections_are_not_sources() {
        let config = TomlConfig::parse(
            r#"
            [git]
            api_key = "ignored"
        "#,
        )
        .unwrap();
        let mut sources = Sources::new();

        config.apply_to(&mut sources).unwrap();

        assert_eq!(sources, Sources::new());
    }

    #[test]
    fn settings_never_touch_flags() {
        let config = TomlConfig::parse("[settings]\nproxy = \"http://p.example\"").unwrap();
        let mut sources = Sources::new();

        config.apply_to(&mut sources).unwrap();

        assert_eq!(sources.lookup(Origin::Flag, "proxy"), Lookup::Absent);
    }

    #[test]
    fn skip_unread_non_scalars() {
        let config = TomlConfig::parse(
            r#"
            [settings]
            ignore = ["^/tmp/"]
            ratio = 0.5
            plugin = "vim"
        "#,
        )
        .unwrap();
        let mut sources = Sources::new();

        config.apply_to(&mut sources).unwrap();

        assert_eq!(sources.lookup(Origin::Config, "ignore"), Lookup::Absent);
        assert_eq!(sources.lookup(Origin::Config, "ratio"), Lookup::Absent);
        assert_eq!(
            sources.lookup(Origin::Config, "plugin"),
            Lookup::Set(&Value::from("vim"))
        );
    }

    #[test]
    fn reject_unsupported_types() {
        for (entry, kind) in [
            ("timeout = 1.5", "float"),
            ("proxy = [\"a\"]", "array"),
            ("offline = 1979-05-27", "datetime"),
        ] {
            let config = TomlConfig::parse(&format!("[settings]\n{entry}")).unwrap();
            let mut sources = Sources::new();

            let result = config.apply_to(&mut sources);

            assert!(
                matches!(result, Err(ConfigError::UnsupportedValue { kind: k, .. }) if k == kind),
                "Failed for entry: {entry}"
            );
        }
    }
}

mod read {
    use super::*;

    fn params(section: &str, key: &str) -> ConfigReadParams {
        ConfigReadParams {
            section: section.to_string(),
            key: key.to_string(),
        }
    }

    #[test]
    fn read_existing_values() {
        let config = TomlConfig::parse(
            r#"
            [settings]
            api_url = "http://localhost:8081"
            timeout = 10
            offline = false

            [git]
            project = "waka"
        "#,
        )
        .unwrap();

        assert_eq!(config.read(&params("settings", "api_url")), "http://localhost:8081");
        assert_eq!(config.read(&params("settings", "timeout")), "10");
        assert_eq!(config.read(&params("settings", "offline")), "false");
        assert_eq!(config.read(&params("git", "project")), "waka");
    }

    #[test]
    fn read_missing_is_empty() {
        let config = TomlConfig::parse("[settings]\ndebug = true").unwrap();

        assert_eq!(config.read(&params("settings", "api_key")), "");
        assert_eq!(config.read(&params("missing", "debug")), "");
    }

    #[test]
    fn read_non_scalar_renders_toml() {
        let config = TomlConfig::parse("[settings]\nignore = [\"a\", \"b\"]").unwrap();

        let rendered = config.read(&params("settings", "ignore"));

        assert!(rendered.contains("\"a\""));
        assert!(rendered.contains("\"b\""));
    }
}
