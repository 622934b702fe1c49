//! Server configuration from environment variables.
//!
//! HOST, PORT: bind address (lenient, bad values fall back to defaults).
//! FIELD_SIZE, PLAYED_ROUNDS, BRACKET_SEED, TIE_BREAK, WINNER_LABELS: bracket
//! settings (strict, bad values are an error).

use crate::logic::{BracketConfig, TieBreak, WinnerLabels};
use crate::models::BracketError;
use std::str::FromStr;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub bracket: BracketConfig,
    /// Fixed seed for reproducible results; random when unset.
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            bracket: BracketConfig::default(),
            seed: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, BracketError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. The bracket settings are validated before returning.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BracketError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(default_host);
        let port: u16 = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or_else(default_port);

        let defaults = BracketConfig::default();
        let bracket = BracketConfig {
            field_size: parse_number(&lookup, "FIELD_SIZE")?.unwrap_or(defaults.field_size),
            played_rounds: parse_number(&lookup, "PLAYED_ROUNDS")?
                .unwrap_or(defaults.played_rounds),
            tie_break: parse_with(&lookup, "TIE_BREAK", TieBreak::parse)?
                .unwrap_or(defaults.tie_break),
            winner_labels: parse_with(&lookup, "WINNER_LABELS", WinnerLabels::parse)?
                .unwrap_or(defaults.winner_labels),
        };
        bracket.validate()?;

        Ok(Self {
            host,
            port,
            bracket,
            seed: parse_number(&lookup, "BRACKET_SEED")?,
        })
    }
}

fn parse_number<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, BracketError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    parse_with(lookup, key, |v| v.trim().parse().ok())
}

fn parse_with<F, T>(
    lookup: &F,
    key: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, BracketError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => parse(&value)
            .map(Some)
            .ok_or(BracketError::InvalidSetting { key, value }),
    }
}
