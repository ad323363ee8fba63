//! Tests for configuration layer precedence.

use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::{apply_layer, build_config_from_layers};
use crate::GavelConfig;
use crate::config::{DEFAULT_API_BASE_URL, DEFAULT_PAGE_SIZE};

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"api_base_url": "http://default/api"})), ("file", json!({"api_base_url": "http://file/api"}))],
    "api_base_url",
    "http://file/api",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"display_name": "file-name"})), ("environment", json!({"display_name": "env-name"}))],
    "display_name",
    "env-name",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"chat_endpoint": "http://env/ws"})), ("cli", json!({"chat_endpoint": "http://cli/ws"}))],
    "chat_endpoint",
    "http://cli/ws",
    "CLI should override environment"
)]
#[case::query_defaults_file_env_cli(
    vec![
        ("defaults", json!({"query": "default"})),
        ("file", json!({"query": "file"})),
        ("environment", json!({"query": "env"})),
        ("cli", json!({"query": "cli"}))
    ],
    "query",
    "cli",
    "CLI should win for query"
)]
fn test_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] field: &str,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let mut composer = MergeComposer::new();

    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value);
    }

    let config = GavelConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

    let actual = match field {
        "api_base_url" => Some(config.api_base_url.as_str()),
        "chat_endpoint" => Some(config.chat_endpoint.as_str()),
        "display_name" => config.display_name.as_deref(),
        "query" => config.query.as_deref(),
        _ => panic!("unknown field: {field}"),
    };

    assert_eq!(actual, Some(expected), "{message}");
}

#[rstest]
fn defaults_apply_when_no_sources_provided() {
    let mut composer = MergeComposer::new();
    composer.push_defaults(json!({"query": null, "display_name": null}));

    let config = GavelConfig::merge_from_layers(composer.layers())
        .expect("merge should succeed with empty defaults");

    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(config.page, 1, "page should start at 1");
    assert_eq!(config.chat_endpoint, "http://localhost:8080/ws");
    assert!(config.query.is_none(), "query should be None");
    assert!(config.display_name.is_none(), "display_name should be None");
    assert!(!config.list && !config.chat, "flags should default to false");
}

#[rstest]
fn numeric_fields_follow_precedence() {
    let config = build_config_from_layers(&[
        ("file", json!({"page_size": 10, "page": 2})),
        ("cli", json!({"page": 3})),
    ]);

    assert_eq!(config.page_size, 10, "file value survives without override");
    assert_eq!(config.page, 3, "CLI wins for page");
}

#[rstest]
fn partial_overrides_preserve_lower_values() {
    let config = build_config_from_layers(&[
        ("defaults", json!({"category": "Agriculture", "display_name": "alice"})),
        ("cli", json!({"category": "Electronic"})),
    ]);

    assert_eq!(config.category.as_deref(), Some("Electronic"));
    assert_eq!(config.display_name.as_deref(), Some("alice"));
}
