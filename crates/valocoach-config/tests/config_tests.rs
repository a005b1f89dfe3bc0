// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Valocoach configuration system.

use valocoach_config::diagnostic::{ConfigError, suggest_key};
use valocoach_config::model::ValocoachConfig;
use valocoach_config::{load_and_validate_str, load_config_from_str};
use valocoach_core::{Platform, Region};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_valocoach_config() {
    let toml = r#"
[agent]
name = "test-coach"
log_level = "debug"

[riot]
api_key = "HDEV-123"
region = "eu"
platform = "pc"

[gemini]
api_key = "AIza-456"
model = "gemini-2.5-flash"
embed_model = "text-embedding-004"

[storage]
database_path = "/tmp/matches.db"

[knowledge]
database_path = "/tmp/knowledge.db"
index = "valorant_knowledge"
dimension = 768

[ingest]
page_size = 3
page_delay_ms = 2000
chunk_max_chars = 256
embed_batch_size = 50
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "test-coach");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.riot.api_key.as_deref(), Some("HDEV-123"));
    assert_eq!(config.riot.region, Region::Eu);
    assert_eq!(config.riot.platform, Platform::Pc);
    assert_eq!(config.gemini.api_key.as_deref(), Some("AIza-456"));
    assert_eq!(config.storage.database_path, "/tmp/matches.db");
    assert_eq!(config.knowledge.database_path, "/tmp/knowledge.db");
    assert_eq!(config.knowledge.dimension, 768);
    assert_eq!(config.ingest.page_size, 3);
    assert_eq!(config.ingest.page_delay_ms, 2000);
    assert_eq!(config.ingest.chunk_max_chars, 256);
    assert_eq!(config.ingest.embed_batch_size, 50);
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let toml = "";
    let config = load_config_from_str(toml).expect("empty TOML should use defaults");

    assert_eq!(config.agent.name, "valocoach");
    assert_eq!(config.agent.log_level, "info");
    assert!(config.riot.api_key.is_none());
    assert_eq!(config.riot.region, Region::Ap);
    assert_eq!(config.riot.platform, Platform::Pc);
    assert!(config.gemini.api_key.is_none());
    assert_eq!(config.gemini.model, "gemini-2.5-flash");
    assert_eq!(config.knowledge.index, "valorant_knowledge");
    assert_eq!(config.knowledge.dimension, 768);
    assert_eq!(config.ingest.page_size, 5);
    assert_eq!(config.ingest.page_delay_ms, 5000);
}

/// Unknown field in [riot] section is rejected.
#[test]
fn unknown_field_in_riot_produces_error() {
    let toml = r#"
[riot]
api_kye = "abc"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("api_kye"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[logging]
level = "debug"
"#;

    let err = load_config_from_str(toml).expect_err("unknown top-level section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("logging"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Dot-notation override maps onto nested section keys.
/// VALOCOACH_RIOT_API_KEY must map to riot.api_key, not riot.api.key.
#[test]
fn dot_notation_override_sets_riot_api_key() {
    use figment::{Figment, providers::Serialized};

    let config: ValocoachConfig = Figment::new()
        .merge(Serialized::defaults(ValocoachConfig::default()))
        .merge(("riot.api_key", "key-from-env"))
        .extract()
        .expect("should set api_key via dot notation");

    assert_eq!(config.riot.api_key.as_deref(), Some("key-from-env"));
}

/// Override takes precedence over TOML content.
#[test]
fn override_wins_over_toml() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let toml_content = r#"
[agent]
name = "from-toml"
"#;

    let config: ValocoachConfig = Figment::new()
        .merge(Serialized::defaults(ValocoachConfig::default()))
        .merge(Toml::string(toml_content))
        .merge(("agent.name", "from-env"))
        .extract()
        .expect("should merge env override");

    assert_eq!(config.agent.name, "from-env");
}

/// Missing config files are silently skipped (Figment's Toml::file() behavior).
#[test]
fn missing_config_files_silently_skipped() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let config: ValocoachConfig = Figment::new()
        .merge(Serialized::defaults(ValocoachConfig::default()))
        .merge(Toml::file("/nonexistent/path/valocoach.toml"))
        .extract()
        .expect("missing file should be silently skipped");

    assert_eq!(config.agent.name, "valocoach");
}

// ============================================================================
// Diagnostic tests
// ============================================================================

/// Unknown key "api_kye" in [riot] produces suggestion "did you mean `api_key`?"
#[test]
fn diagnostic_error_includes_unknown_key() {
    let toml = r#"
[riot]
api_kye = "test"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    assert!(!errors.is_empty(), "should have at least one error");

    let has_unknown_key = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "api_kye"
                && suggestion.as_deref() == Some("api_key")
                && valid_keys.contains("api_key")
        })
    });
    assert!(
        has_unknown_key,
        "should have UnknownKey error for 'api_kye' with suggestion 'api_key', got: {errors:?}"
    );
}

/// Unknown key with no close match does NOT produce a suggestion.
#[test]
fn diagnostic_no_suggestion_for_distant_typo() {
    let valid_keys = &["api_key", "region", "platform"];
    assert!(suggest_key("zzzzzz", valid_keys).is_none());
}

/// Invalid type (string where number expected) produces a clear message.
#[test]
fn diagnostic_invalid_type_message() {
    let toml = r#"
[ingest]
page_size = "not_a_number"
"#;

    let err = load_config_from_str(toml).expect_err("should reject invalid type");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("invalid type") || err_str.contains("page_size"),
        "error should mention type mismatch, got: {err_str}"
    );
}

/// ConfigError implements miette::Diagnostic (can be rendered).
#[test]
fn config_error_implements_diagnostic() {
    use miette::Diagnostic;

    let error = ConfigError::UnknownKey {
        key: "api_kye".to_string(),
        suggestion: Some("api_key".to_string()),
        valid_keys: "api_key, region, platform".to_string(),
        span: None,
        src: None,
    };

    assert!(error.code().is_some(), "should have diagnostic code");

    let help = error.help().expect("should have help text").to_string();
    assert!(
        help.contains("did you mean `api_key`"),
        "help should contain suggestion, got: {help}"
    );
}

/// load_and_validate_str with valid TOML returns Ok config.
#[test]
fn load_and_validate_valid_toml() {
    let toml = r#"
[agent]
name = "coach"
"#;

    let config = load_and_validate_str(toml).expect("valid TOML should validate");
    assert_eq!(config.agent.name, "coach");
}

/// Validation catches a page size over the upstream cap.
#[test]
fn validation_catches_oversized_page_size() {
    let toml = r#"
[ingest]
page_size = 50
"#;

    let errors = load_and_validate_str(toml).expect_err("oversized page_size should fail");
    let has_validation_error = errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("page_size")),
    );
    assert!(
        has_validation_error,
        "should have validation error for page_size"
    );
}
