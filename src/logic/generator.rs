//! Bracket generation: the single-elimination skeleton with results for the played rounds.

use crate::models::{round_title, Bracket, BracketError, Match, Round, Side, TBD};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FIELD_SIZE: u32 = 64;
pub const DEFAULT_PLAYED_ROUNDS: usize = 2;
/// Largest accepted field (10 rounds).
pub const MAX_FIELD_SIZE: u32 = 1024;
/// Scores are drawn from `0..=MAX_GAME_SCORE`.
pub const MAX_GAME_SCORE: u8 = 6;

/// How a drawn tie is settled.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Equal scores go to participant 1.
    #[default]
    FirstSide,
    /// Draw again until the scores differ.
    Redraw,
}

impl TieBreak {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "first_side" => Some(TieBreak::FirstSide),
            "redraw" => Some(TieBreak::Redraw),
            _ => None,
        }
    }
}

/// How participants of rounds after the first are labelled.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinnerLabels {
    /// "Winner {n}" inside the played rounds, "TBD" after them.
    #[default]
    Placeholder,
    /// Carry the actual winner of each feeding match forward.
    Propagate,
}

impl WinnerLabels {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "placeholder" => Some(WinnerLabels::Placeholder),
            "propagate" => Some(WinnerLabels::Propagate),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketConfig {
    /// Number of participants in round 0. Must be a power of two, at most `MAX_FIELD_SIZE`.
    pub field_size: u32,
    /// Leading rounds that get results.
    pub played_rounds: usize,
    pub tie_break: TieBreak,
    pub winner_labels: WinnerLabels,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            field_size: DEFAULT_FIELD_SIZE,
            played_rounds: DEFAULT_PLAYED_ROUNDS,
            tie_break: TieBreak::default(),
            winner_labels: WinnerLabels::default(),
        }
    }
}

impl BracketConfig {
    /// Check the settings and return the number of rounds they produce.
    pub fn validate(&self) -> Result<usize, BracketError> {
        if self.field_size < 2
            || self.field_size > MAX_FIELD_SIZE
            || !self.field_size.is_power_of_two()
        {
            return Err(BracketError::InvalidFieldSize(self.field_size));
        }
        let rounds = self.field_size.trailing_zeros() as usize;
        if self.played_rounds > rounds {
            return Err(BracketError::PlayedRoundsOutOfRange {
                played: self.played_rounds,
                rounds,
            });
        }
        Ok(rounds)
    }
}

/// Participants per round by successive halving, down to the 2 finalists.
/// Empty for a field smaller than 2.
pub fn participant_counts(field_size: u32) -> Vec<u32> {
    std::iter::successors(Some(field_size).filter(|&n| n >= 2), |&n| {
        (n > 2).then_some(n / 2)
    })
    .collect()
}

/// Generate the full bracket.
///
/// 1. Validate the config (power-of-two field up to `MAX_FIELD_SIZE`, played prefix within range).
/// 2. For each round, create `participants / 2` matches.
/// 3. Matches in the played prefix get two scores from `0..=MAX_GAME_SCORE` and a winner;
///    the rest are scheduled with no scores.
/// 4. Round 0 is labelled "Team {2i+1}" / "Team {2i+2}"; later rounds follow `winner_labels`.
pub fn generate_bracket<R: Rng>(
    config: &BracketConfig,
    rng: &mut R,
) -> Result<Bracket, BracketError> {
    let round_count = config.validate()?;
    let mut rounds: Vec<Round> = Vec::with_capacity(round_count);

    for (round_index, participants) in participant_counts(config.field_size).into_iter().enumerate() {
        let match_count = (participants / 2) as usize;
        let played = round_index < config.played_rounds;
        let previous = rounds.last();

        let matches: Vec<Match> = (0..match_count)
            .map(|i| {
                let (p1, p2) =
                    participant_labels(config.winner_labels, round_index, i, played, previous);
                if played {
                    let (scores, winner) = draw_result(&mut *rng, config.tie_break);
                    Match::finished(round_index, i, p1, p2, scores, winner)
                } else {
                    Match::scheduled(round_index, i, p1, p2)
                }
            })
            .collect();

        log::debug!(
            "round {}: {} participants, {} matches, played={}",
            round_index,
            participants,
            matches.len(),
            played
        );

        rounds.push(Round {
            index: round_index,
            title: round_title(round_index, round_count),
            matches,
        });
    }

    Ok(Bracket {
        field_size: config.field_size,
        played_rounds: config.played_rounds,
        rounds,
    })
}

fn participant_labels(
    policy: WinnerLabels,
    round_index: usize,
    match_index: usize,
    played: bool,
    previous: Option<&Round>,
) -> (String, String) {
    let (first, second) = (2 * match_index + 1, 2 * match_index + 2);
    if round_index == 0 {
        return (format!("Team {}", first), format!("Team {}", second));
    }
    match policy {
        WinnerLabels::Placeholder if played => {
            (format!("Winner {}", first), format!("Winner {}", second))
        }
        WinnerLabels::Placeholder => (TBD.to_string(), TBD.to_string()),
        WinnerLabels::Propagate => {
            let feeder = |j: usize| {
                previous
                    .and_then(|r| r.matches.get(j))
                    .and_then(|m| m.winner_label())
                    .unwrap_or(TBD)
                    .to_string()
            };
            (feeder(2 * match_index), feeder(2 * match_index + 1))
        }
    }
}

fn draw_result<R: Rng>(rng: &mut R, tie_break: TieBreak) -> ((u8, u8), Side) {
    loop {
        let score_1 = rng.gen_range(0..=MAX_GAME_SCORE);
        let score_2 = rng.gen_range(0..=MAX_GAME_SCORE);
        match (score_1.cmp(&score_2), tie_break) {
            (std::cmp::Ordering::Less, _) => return ((score_1, score_2), Side::Two),
            (std::cmp::Ordering::Greater, _) | (std::cmp::Ordering::Equal, TieBreak::FirstSide) => {
                return ((score_1, score_2), Side::One)
            }
            (std::cmp::Ordering::Equal, TieBreak::Redraw) => continue,
        }
    }
}
