//! Tests for configuration from `LOG_*` variables

use std::collections::HashMap;

use tinct_core::{Config, Level, PanicMode};
use tinct_utils::env::{LOG_COLOR, LOG_DATE, LOG_FUNC, LOG_LEVEL, LOG_PANIC, LOG_UTC};
use tinct_utils::{config_from_lookup, ConfigError};

fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError>
{
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    config_from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_unset_environment_gives_defaults()
{
    assert_eq!(load(&[]).unwrap(), Config::default());
}

#[test]
fn test_level_names_any_case()
{
    let cases = [
        ("debug", 6),
        ("DEBUG", 6),
        ("Debug", 6),
        ("trace", 5),
        ("info", 4),
        ("Warn", 3),
        ("ERROR", 2),
        ("fatal", 1),
        ("Panic", 0),
    ];
    for (name, rank) in cases {
        assert_eq!(load(&[(LOG_LEVEL, name)]).unwrap().threshold, rank, "LOG_LEVEL={name}");
    }
}

#[test]
fn test_numeric_level()
{
    assert_eq!(load(&[(LOG_LEVEL, "2")]).unwrap().threshold, Level::Error.rank());
    assert_eq!(load(&[(LOG_LEVEL, "-3")]).unwrap().threshold, -3);
}

#[test]
fn test_empty_level_means_default()
{
    assert_eq!(load(&[(LOG_LEVEL, "  ")]).unwrap().threshold, Level::Info.rank());
}

#[test]
fn test_unknown_level_is_rejected()
{
    match load(&[(LOG_LEVEL, "chatty")]) {
        Err(ConfigError::InvalidValue { key, .. }) => assert_eq!(key, LOG_LEVEL),
        other => panic!("Expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn test_switches_turn_off()
{
    let config = load(&[(LOG_DATE, "false"), (LOG_COLOR, "0"), (LOG_FUNC, "FALSE"), (LOG_UTC, "False")]).unwrap();
    assert!(!config.use_date);
    assert!(!config.use_color);
    assert!(!config.use_caller_location);
    assert!(!config.use_utc);
}

#[test]
fn test_other_switch_values_stay_on()
{
    let config = load(&[(LOG_DATE, "no"), (LOG_COLOR, "off"), (LOG_FUNC, "true"), (LOG_UTC, "1")]).unwrap();
    assert!(config.use_date);
    assert!(config.use_color);
    assert!(config.use_caller_location);
    assert!(config.use_utc);
}

#[test]
fn test_panic_mode()
{
    assert_eq!(load(&[(LOG_PANIC, "exit")]).unwrap().panic_mode, PanicMode::Exit);
    assert_eq!(load(&[(LOG_PANIC, "Unwind")]).unwrap().panic_mode, PanicMode::Unwind);

    let err = load(&[(LOG_PANIC, "explode")]).unwrap_err();
    assert!(err.to_string().contains(LOG_PANIC));
}
