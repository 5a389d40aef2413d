//! Tests for the level table

use std::str::FromStr;

use tinct_core::{Color, Level};

#[test]
fn test_rank_table()
{
    let table = [
        (Level::Panic, 0, Color::DarkMagenta, 35),
        (Level::Fatal, 1, Color::Magenta, 95),
        (Level::Error, 2, Color::Red, 91),
        (Level::Warn, 3, Color::Yellow, 93),
        (Level::Info, 4, Color::Blue, 94),
        (Level::Trace, 5, Color::Cyan, 96),
        (Level::Debug, 6, Color::Gray, 90),
    ];
    for (level, rank, color, code) in table {
        assert_eq!(level.rank(), rank);
        assert_eq!(level.color(), color);
        assert_eq!(level.color().code(), code);
    }
}

#[test]
fn test_labels()
{
    let labels: Vec<&str> = Level::ALL.iter().map(|level| level.label()).collect();
    assert_eq!(labels, ["PANIC", "FATAL", "ERROR", "WARN", "INFO", "TRACE", "DEBUG"]);
    assert_eq!(Level::Warn.to_string(), "WARN");
}

#[test]
fn test_from_str_any_case()
{
    let cases = [
        ("debug", Level::Debug),
        ("DEBUG", Level::Debug),
        ("Debug", Level::Debug),
        ("trace", Level::Trace),
        ("TRACE", Level::Trace),
        ("info", Level::Info),
        ("Info", Level::Info),
        ("warn", Level::Warn),
        ("WARNING", Level::Warn),
        ("error", Level::Error),
        ("Err", Level::Error),
        ("fatal", Level::Fatal),
        ("FATAL", Level::Fatal),
        ("panic", Level::Panic),
        ("Panic", Level::Panic),
        (" info ", Level::Info),
    ];
    for (input, expected) in cases {
        assert_eq!(Level::from_str(input).unwrap(), expected, "parsing {input:?}");
    }
}

#[test]
fn test_from_str_rejects_unknown()
{
    assert!(Level::from_str("").is_err());
    assert!(Level::from_str("verbose").is_err());
    assert!(Level::from_str("4").is_err());
}

#[test]
fn test_display_parses_back()
{
    for level in Level::ALL {
        assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
    }
}
