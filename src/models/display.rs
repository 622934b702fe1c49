//! TV scoreboard data: live court snapshot and sponsor ticker entries.

use crate::models::game::Side;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SponsorTier {
    Gold,
    Silver,
    Bronze,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Sponsor {
    pub name: String,
    pub tier: SponsorTier,
}

impl Sponsor {
    pub fn new(name: impl Into<String>, tier: SponsorTier) -> Self {
        Self {
            name: name.into(),
            tier,
        }
    }
}

/// One pair on court.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LiveTeam {
    /// Both player names, e.g. "Lebrón / Galán".
    pub names: String,
    /// Games won in each completed set.
    pub sets: Vec<u8>,
    /// Games in the set being played.
    pub current_games: u8,
    /// Point score in the current game ("15", "30", "40", "AD").
    pub points: String,
}

/// Snapshot of the match currently shown on the TV scoreboard.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LiveMatch {
    pub court: String,
    pub phase: String,
    pub team_1: LiveTeam,
    pub team_2: LiveTeam,
    pub server: Side,
}

impl LiveMatch {
    pub fn team(&self, side: Side) -> &LiveTeam {
        match side {
            Side::One => &self.team_1,
            Side::Two => &self.team_2,
        }
    }

    /// Completed sets won by each side.
    pub fn sets_won(&self) -> (usize, usize) {
        self.team_1
            .sets
            .iter()
            .zip(self.team_2.sets.iter())
            .fold((0, 0), |(a, b), (g1, g2)| match g1.cmp(g2) {
                std::cmp::Ordering::Greater => (a + 1, b),
                std::cmp::Ordering::Less => (a, b + 1),
                std::cmp::Ordering::Equal => (a, b),
            })
    }
}
