//! Configuration loading from environment variables and YAML files

use std::io::Write;

use std::path::Path;

use cypher_pattern::config::{ConfigError, ConfigOverrides, EnvironmentConfig, LabelOperator};
use serial_test::serial;
use tempfile::NamedTempFile;

const VARS: [&str; 3] = [
    "CYPHER_PATTERN_PREFIX",
    "CYPHER_PATTERN_PARAM_PREFIX",
    "CYPHER_PATTERN_LABEL_OPERATOR",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = EnvironmentConfig::from_env().unwrap();
    assert_eq!(config, EnvironmentConfig::default());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    std::env::set_var("CYPHER_PATTERN_PREFIX", "var");
    std::env::set_var("CYPHER_PATTERN_PARAM_PREFIX", "p");
    std::env::set_var("CYPHER_PATTERN_LABEL_OPERATOR", "&");

    let config = EnvironmentConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.prefix, "var");
    assert_eq!(config.param_prefix, "p");
    assert_eq!(config.label_operator, LabelOperator::Ampersand);
}

#[test]
#[serial]
fn test_from_env_invalid_operator() {
    clear_env();
    std::env::set_var("CYPHER_PATTERN_LABEL_OPERATOR", "|");
    let result = EnvironmentConfig::from_env();
    clear_env();

    match result {
        Err(ConfigError::Parse { field, value, .. }) => {
            assert_eq!(field, "CYPHER_PATTERN_LABEL_OPERATOR");
            assert_eq!(value, "|");
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_from_env_invalid_prefix() {
    clear_env();
    std::env::set_var("CYPHER_PATTERN_PREFIX", "0abc");
    let result = EnvironmentConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn test_from_yaml_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "prefix: node\nparam_prefix: value\nlabel_operator: '&'").unwrap();

    let config = EnvironmentConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(config.prefix, "node");
    assert_eq!(config.param_prefix, "value");
    assert_eq!(config.label_operator, LabelOperator::Ampersand);
}

#[test]
fn test_from_yaml_file_partial_uses_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "param_prefix: arg").unwrap();

    let config = EnvironmentConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(config.prefix, "this");
    assert_eq!(config.param_prefix, "arg");
}

#[test]
fn test_from_yaml_file_rejects_empty_prefix() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "prefix: ''").unwrap();

    assert!(matches!(
        EnvironmentConfig::from_yaml_file(file.path()),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_missing_yaml_file() {
    assert!(matches!(
        EnvironmentConfig::from_yaml_file("/nonexistent/cypher-pattern.yaml"),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
#[serial]
fn test_flag_overrides_take_precedence_over_env() {
    clear_env();
    std::env::set_var("CYPHER_PATTERN_PREFIX", "var");
    std::env::set_var("CYPHER_PATTERN_PARAM_PREFIX", "p");

    let overrides = ConfigOverrides {
        prefix: Some("cli".to_string()),
        ..Default::default()
    };
    let config = EnvironmentConfig::load(None::<&Path>, overrides);
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.prefix, "cli");
    assert_eq!(config.param_prefix, "p");
    assert_eq!(config.label_operator, LabelOperator::Colon);
}

#[test]
#[serial]
fn test_flag_overrides_take_precedence_over_yaml() {
    clear_env();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "prefix: node\nparam_prefix: value").unwrap();

    let overrides = ConfigOverrides {
        param_prefix: Some("arg".to_string()),
        label_operator: Some(LabelOperator::Ampersand),
        ..Default::default()
    };
    let config = EnvironmentConfig::load(Some(file.path()), overrides).unwrap();
    assert_eq!(config.prefix, "node");
    assert_eq!(config.param_prefix, "arg");
    assert_eq!(config.label_operator, LabelOperator::Ampersand);
}

#[test]
#[serial]
fn test_invalid_override_is_rejected() {
    clear_env();
    let overrides = ConfigOverrides {
        prefix: Some("not valid".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        EnvironmentConfig::load(None::<&Path>, overrides),
        Err(ConfigError::Validation(_))
    ));
}
