//! Padel tournament display: library with the bracket models, generation/layout logic and HTTP handlers.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;

pub use config::ServerConfig;
pub use logic::{
    compute_layout, demo_live_match, demo_sponsors, generate_bracket, participant_counts,
    round_margin, sponsor_ticker, BracketConfig, BracketLayout, LayoutConstants, TieBreak,
    WinnerLabels,
};
pub use models::{
    Bracket, BracketError, LiveMatch, LiveTeam, Match, MatchId, MatchStatus, Round, Side,
    Sponsor, SponsorTier,
};
