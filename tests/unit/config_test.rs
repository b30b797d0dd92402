//! Tests for environment configuration

use std::collections::HashMap;

use hwbot::config::{Config, REQUIRED_VARS};
use hwbot::error::Error;

fn env_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
        .collect()
}

#[test]
fn test_all_variables_present() {
    let vars = env_map(&[
        ("PRACTICUM_TOKEN", "practicum-secret"),
        ("TELEGRAM_TOKEN", "123:bot-secret"),
        ("TELEGRAM_CHAT_ID", "42"),
    ]);

    let config = Config::from_lookup(|name| vars.get(name).cloned()).unwrap();
    assert_eq!(config.practicum_token, "practicum-secret");
    assert_eq!(config.telegram_token, "123:bot-secret");
    assert_eq!(config.telegram_chat_id, "42");
}

#[test]
fn test_one_missing_variable_is_named() {
    let vars = env_map(&[
        ("PRACTICUM_TOKEN", "practicum-secret"),
        ("TELEGRAM_TOKEN", "123:bot-secret"),
    ]);

    match Config::from_lookup(|name| vars.get(name).cloned()) {
        Err(Error::ConfigMissing { vars }) => assert_eq!(vars, vec!["TELEGRAM_CHAT_ID"]),
        other => panic!("expected ConfigMissing, got {other:?}"),
    }
}

#[test]
fn test_all_missing_variables_are_reported_together() {
    match Config::from_lookup(|_| None) {
        Err(Error::ConfigMissing { vars }) => assert_eq!(vars, REQUIRED_VARS.map(String::from)),
        other => panic!("expected ConfigMissing, got {other:?}"),
    }
}

#[test]
fn test_empty_value_counts_as_missing() {
    let vars = env_map(&[
        ("PRACTICUM_TOKEN", ""),
        ("TELEGRAM_TOKEN", "123:bot-secret"),
        ("TELEGRAM_CHAT_ID", "42"),
    ]);

    match Config::from_lookup(|name| vars.get(name).cloned()) {
        Err(Error::ConfigMissing { vars }) => assert_eq!(vars, vec!["PRACTICUM_TOKEN"]),
        other => panic!("expected ConfigMissing, got {other:?}"),
    }
}

#[test]
fn test_whitespace_value_counts_as_missing() {
    let vars = env_map(&[
        ("PRACTICUM_TOKEN", "practicum-secret"),
        ("TELEGRAM_TOKEN", "   "),
        ("TELEGRAM_CHAT_ID", "42"),
    ]);

    match Config::from_lookup(|name| vars.get(name).cloned()) {
        Err(Error::ConfigMissing { vars }) => assert_eq!(vars, vec!["TELEGRAM_TOKEN"]),
        other => panic!("expected ConfigMissing, got {other:?}"),
    }
}

#[test]
fn test_error_message_lists_every_missing_variable() {
    let error = Config::from_lookup(|_| None).unwrap_err();
    let message = error.to_string();
    for name in REQUIRED_VARS {
        assert!(message.contains(name), "{message} should name {name}");
    }
}
