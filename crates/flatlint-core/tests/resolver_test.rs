//! Integration tests for flat configuration resolution
//!
//! Loads a realistic configuration file from fixtures and verifies the
//! resolution contract end to end: scoping, ignore precedence, key-wise
//! overrides, and preset globals union.

use std::path::PathBuf;

use flatlint_core::{
    ConfigFragment, ConfigLoader, ConfigSet, EcmaVersion, GlobalValue, LanguageOptions, Severity,
    SourceType, globals,
};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_fixture() -> ConfigSet {
    ConfigLoader::load_from_file(&fixture_path("flatlint.config.jsonc"))
        .expect("fixture config should load")
}

#[test]
fn test_resolve_source_file() {
    let set = load_fixture();
    let effective = set.resolve("src/app.js").unwrap();

    assert_eq!(effective.ecma_version, Some(EcmaVersion::Latest));
    assert_eq!(effective.source_type, Some(SourceType::Module));

    assert_eq!(effective.rule_severity("no-undef"), Some(Severity::Error));
    assert_eq!(effective.rule_severity("no-console"), Some(Severity::Off));
    assert_eq!(
        effective.rule_severity("no-unused-vars"),
        Some(Severity::Warn)
    );

    // Options tuple survives resolution
    let entry = &effective.rules["no-unused-vars"];
    assert_eq!(
        entry.options().unwrap()["argsIgnorePattern"],
        serde_json::json!("^_")
    );

    // Globals from both environments are present
    assert!(effective.is_global("process"));
    assert!(effective.is_global("window"));
    assert_eq!(effective.globals["window"], GlobalValue::Writable);
    assert_eq!(effective.globals["process"], GlobalValue::Readonly);
}

#[test]
fn test_ignored_paths_receive_nothing() {
    let set = load_fixture();

    for path in ["dist/bundle.js", "node_modules/pkg/index.js", "build/out.js"] {
        let effective = set.resolve(path).unwrap();
        assert!(effective.rules.is_empty(), "{path} should gain no rules");
        assert!(effective.globals.is_empty(), "{path} should gain no globals");
        assert_eq!(effective.ecma_version, None);
    }
}

#[test]
fn test_later_fragment_overrides_for_tests_dir() {
    let set = load_fixture();
    let effective = set.resolve("tests/app.test.js").unwrap();

    // The tests fragment overrides only no-console; everything else is kept
    assert_eq!(effective.rule_severity("no-console"), Some(Severity::Warn));
    assert_eq!(effective.rule_severity("no-undef"), Some(Severity::Error));
    assert!(effective.is_global("window"));
}

#[test]
fn test_resolution_is_idempotent() {
    let set = load_fixture();
    let first = set.resolve("src/lib/util.js").unwrap();
    let second = set.resolve("src/lib/util.js").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unmatched_extension_gets_nothing() {
    let set = load_fixture();
    let effective = set.resolve("README.md").unwrap();
    assert!(effective.rules.is_empty());
}

#[test]
fn test_preset_globals_spread_into_fragment() {
    // Build a fragment whose globals splice the browser and node presets
    // plus one project-specific entry, later sources winning on collision.
    let merged = globals::merge([
        globals::browser(),
        globals::node(),
        globals::GlobalsMap::from_iter([("myAppNamespace".to_string(), GlobalValue::Writable)]),
    ]);

    let fragment = ConfigFragment {
        language_options: Some(LanguageOptions {
            globals: merged,
            ..Default::default()
        }),
        ..Default::default()
    };

    let set = ConfigSet::compile(vec![fragment]).unwrap();
    let effective = set.resolve("app.js").unwrap();

    assert!(effective.is_global("window"));
    assert!(effective.is_global("document"));
    assert!(effective.is_global("process"));
    assert!(effective.is_global("myAppNamespace"));
}

#[test]
fn test_fragment_round_trips_through_json() {
    let set_fragments = ConfigLoader::load_fragments(&fixture_path("flatlint.config.jsonc"))
        .expect("fixture config should parse");

    let json = serde_json::to_string(&set_fragments).unwrap();
    let reparsed: Vec<ConfigFragment> = serde_json::from_str(&json).unwrap();
    assert_eq!(set_fragments, reparsed);
}

#[test]
fn test_schema_generation() {
    let schema = schemars::schema_for!(ConfigFragment);
    let json = serde_json::to_value(&schema).unwrap();

    let properties = json["properties"].as_object().unwrap();
    assert!(properties.contains_key("files"));
    assert!(properties.contains_key("ignores"));
    assert!(properties.contains_key("languageOptions"));
    assert!(properties.contains_key("rules"));
}
