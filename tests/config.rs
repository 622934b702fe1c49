//! Integration tests for environment-driven configuration.

use padel_display_web::{BracketConfig, BracketError, ServerConfig, TieBreak, WinnerLabels};
use std::collections::HashMap;

fn from_pairs(pairs: &[(&str, &str)]) -> Result<ServerConfig, BracketError> {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn empty_environment_gives_defaults() {
    let cfg = from_pairs(&[]).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bracket, BracketConfig::default());
    assert_eq!(cfg.seed, None);
}

#[test]
fn overrides_are_applied() {
    let cfg = from_pairs(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "9000"),
        ("FIELD_SIZE", "16"),
        ("PLAYED_ROUNDS", "3"),
        ("BRACKET_SEED", "77"),
        ("TIE_BREAK", "redraw"),
        ("WINNER_LABELS", "Propagate"),
    ])
    .unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.seed, Some(77));
    assert_eq!(
        cfg.bracket,
        BracketConfig {
            field_size: 16,
            played_rounds: 3,
            tie_break: TieBreak::Redraw,
            winner_labels: WinnerLabels::Propagate,
        }
    );
}

#[test]
fn unparsable_port_falls_back_to_default() {
    let cfg = from_pairs(&[("PORT", "http")]).unwrap();
    assert_eq!(cfg.port, 8080);
}

#[test]
fn non_power_of_two_field_size_is_a_config_error() {
    assert_eq!(
        from_pairs(&[("FIELD_SIZE", "48")]),
        Err(BracketError::InvalidFieldSize(48))
    );
}

#[test]
fn unparsable_bracket_settings_are_rejected() {
    assert_eq!(
        from_pairs(&[("FIELD_SIZE", "sixty-four")]),
        Err(BracketError::InvalidSetting {
            key: "FIELD_SIZE",
            value: "sixty-four".to_string(),
        })
    );
    assert!(matches!(
        from_pairs(&[("TIE_BREAK", "coin_flip")]),
        Err(BracketError::InvalidSetting { key: "TIE_BREAK", .. })
    ));
}

#[test]
fn played_rounds_must_fit_field_size() {
    assert_eq!(
        from_pairs(&[("FIELD_SIZE", "8"), ("PLAYED_ROUNDS", "4")]),
        Err(BracketError::PlayedRoundsOutOfRange { played: 4, rounds: 3 })
    );
}

#[test]
fn errors_have_readable_messages() {
    assert_eq!(
        BracketError::InvalidFieldSize(48).to_string(),
        "Field size must be a power of two from 2 to 1024 (got 48)"
    );
}

#[test]
fn oversized_field_is_a_config_error() {
    assert_eq!(
        from_pairs(&[("FIELD_SIZE", "2147483648")]),
        Err(BracketError::InvalidFieldSize(2147483648))
    );
    assert_eq!(
        from_pairs(&[("FIELD_SIZE", "2048")]),
        Err(BracketError::InvalidFieldSize(2048))
    );
    assert_eq!(from_pairs(&[("FIELD_SIZE", "1024")]).unwrap().bracket.field_size, 1024);
}
