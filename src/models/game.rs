//! Match, Side and MatchStatus for one bracket slot.

use serde::{Deserialize, Serialize};

/// Stable identifier for a match: `r{round}-m{index}`.
pub type MatchId = String;

/// Label used for a slot whose participant is not known yet.
pub const TBD: &str = "TBD";

/// Which participant of a match (first or second line on the card).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    One,
    Two,
}

/// Whether the match has a result yet.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Finished,
    Scheduled,
}

/// One contest between two participants in one round.
///
/// Build through [`Match::finished`] or [`Match::scheduled`] so that
/// `winner` is set exactly when `status` is `Finished`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    /// 0 = first round.
    pub round_index: usize,
    pub match_index: usize,
    pub participant_1: String,
    pub participant_2: String,
    /// None while scheduled (rendered as "-").
    pub score_1: Option<u8>,
    pub score_2: Option<u8>,
    /// None while scheduled.
    pub winner: Option<Side>,
    pub status: MatchStatus,
}

impl Match {
    pub fn id_for(round_index: usize, match_index: usize) -> MatchId {
        format!("r{}-m{}", round_index, match_index)
    }

    /// A played match. The winner is decided by the caller's tie-break policy.
    pub fn finished(
        round_index: usize,
        match_index: usize,
        participant_1: impl Into<String>,
        participant_2: impl Into<String>,
        scores: (u8, u8),
        winner: Side,
    ) -> Self {
        Self {
            id: Self::id_for(round_index, match_index),
            round_index,
            match_index,
            participant_1: participant_1.into(),
            participant_2: participant_2.into(),
            score_1: Some(scores.0),
            score_2: Some(scores.1),
            winner: Some(winner),
            status: MatchStatus::Finished,
        }
    }

    /// A match without result: no scores, no winner.
    pub fn scheduled(
        round_index: usize,
        match_index: usize,
        participant_1: impl Into<String>,
        participant_2: impl Into<String>,
    ) -> Self {
        Self {
            id: Self::id_for(round_index, match_index),
            round_index,
            match_index,
            participant_1: participant_1.into(),
            participant_2: participant_2.into(),
            score_1: None,
            score_2: None,
            winner: None,
            status: MatchStatus::Scheduled,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    pub fn participant(&self, side: Side) -> &str {
        match side {
            Side::One => &self.participant_1,
            Side::Two => &self.participant_2,
        }
    }

    /// Label of the winning participant, if the match has been played.
    pub fn winner_label(&self) -> Option<&str> {
        self.winner.map(|side| self.participant(side))
    }
}
