//! Data structures for the padel display: matches, rounds, the bracket, scoreboard data.

mod bracket;
mod display;
mod game;

pub use bracket::{round_title, Bracket, BracketError, Round};
pub use display::{LiveMatch, LiveTeam, Sponsor, SponsorTier};
pub use game::{Match, MatchId, MatchStatus, Side, TBD};
