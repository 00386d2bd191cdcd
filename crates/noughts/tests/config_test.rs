//! Tests for loading session configuration from TOML.

use noughts::{Controller, Mark, Seat, SessionConfig, TurnOutcome};
use std::io::Write;

#[test]
fn test_from_file_full_document() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
starting_seat = "second"

[first]
name = "Ada"
mark = "A"

[second]
name = "Grace"
mark = "G"
"#
    )
    .unwrap();

    let config = SessionConfig::from_file(file.path()).expect("valid config file");
    assert_eq!(config.first().name(), "Ada");
    assert_eq!(config.first().mark(), Mark::new('A'));
    assert_eq!(config.second().mark(), Mark::new('G'));
    assert_eq!(config.starting_seat(), Seat::Second);

    let mut controller = Controller::new(config).expect("validated config");
    assert_eq!(controller.active_player().name(), "Grace");
    assert_eq!(controller.play_turn(1, 1), TurnOutcome::Continue);
    assert_eq!(controller.grid().count_of(Mark::new('G')), 1);
}

#[test]
fn test_partial_document_takes_defaults() {
    let config = SessionConfig::from_toml_str(
        r#"
[second]
name = "Grace"
mark = "O"
"#,
    )
    .expect("valid config");

    assert_eq!(config.first().name(), "Player 1");
    assert_eq!(config.first().mark(), Mark::X);
    assert_eq!(config.second().name(), "Grace");
    assert_eq!(config.starting_seat(), Seat::First);
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = SessionConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_toml_is_reported() {
    let err = SessionConfig::from_toml_str("starting_seat = \"third\"").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_multi_character_mark_is_rejected() {
    let err = SessionConfig::from_toml_str(
        r#"
[first]
name = "Ada"
mark = "XX"
"#,
    )
    .unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_duplicate_marks_fail_validation() {
    let err = SessionConfig::from_toml_str(
        r#"
[first]
name = "Ada"
mark = "O"
"#,
    )
    .unwrap_err();
    assert!(err.message.contains("Both players cannot use mark 'O'"));
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = SessionConfig::default().with_starting_seat(Seat::Second);
    let text = toml::to_string(&config).unwrap();
    assert_eq!(SessionConfig::from_toml_str(&text).unwrap(), config);
}
