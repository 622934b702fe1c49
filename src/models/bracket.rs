//! Round, Bracket and BracketError.

use crate::logic::MAX_FIELD_SIZE;
use crate::models::game::Match;
use serde::{Deserialize, Serialize};

/// Errors that can occur while configuring or generating a bracket.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BracketError {
    /// Field size is not a power of two between 2 and `MAX_FIELD_SIZE`.
    InvalidFieldSize(u32),
    /// More played rounds requested than the bracket has.
    PlayedRoundsOutOfRange { played: usize, rounds: usize },
    /// A configuration value could not be parsed.
    InvalidSetting { key: &'static str, value: String },
}

impl std::fmt::Display for BracketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketError::InvalidFieldSize(size) => {
                write!(
                    f,
                    "Field size must be a power of two from 2 to {} (got {})",
                    MAX_FIELD_SIZE, size
                )
            }
            BracketError::PlayedRoundsOutOfRange { played, rounds } => {
                write!(f, "Cannot mark {} rounds as played in a {}-round bracket", played, rounds)
            }
            BracketError::InvalidSetting { key, value } => {
                write!(f, "Invalid value for {}: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for BracketError {}

/// Display title for a round, counted back from the final.
pub fn round_title(round_index: usize, round_count: usize) -> String {
    match round_count.saturating_sub(round_index + 1) {
        0 => "FINAL".to_string(),
        1 => "SEMI FINAL".to_string(),
        2 => "QUARTER FINAL".to_string(),
        _ => format!("Round {}", round_index + 1),
    }
}

/// All matches played at the same elimination depth.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub index: usize,
    pub title: String,
    pub matches: Vec<Match>,
}

impl Round {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Full single-elimination draw: round 0 first, the final last.
///
/// Generated once and never mutated afterwards.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub field_size: u32,
    /// Number of leading rounds that carry results.
    pub played_rounds: usize,
    pub rounds: Vec<Round>,
}

impl Bracket {
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn round(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    /// Every match, round by round.
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.rounds.iter().flat_map(|r| r.matches.iter())
    }

    pub fn find_match(&self, id: &str) -> Option<&Match> {
        self.matches().find(|m| m.id == id)
    }

    pub fn final_match(&self) -> Option<&Match> {
        self.rounds.last().and_then(|r| r.matches.first())
    }

    /// Winner label of the final, once it has been played.
    pub fn champion(&self) -> Option<&str> {
        self.final_match().and_then(|m| m.winner_label())
    }
}
