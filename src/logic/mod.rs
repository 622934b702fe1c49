//! Display logic: bracket generation, bracket layout, scoreboard demo data.

mod generator;
mod layout;
mod showcase;

pub use generator::{
    generate_bracket, participant_counts, BracketConfig, TieBreak, WinnerLabels,
    DEFAULT_FIELD_SIZE, DEFAULT_PLAYED_ROUNDS, MAX_FIELD_SIZE, MAX_GAME_SCORE,
};
pub use layout::{
    compute_layout, container_height, round_margin, BracketLayout, Connector, Edge,
    LayoutConstants, MatchLayout, Point, RoundLayout,
};
pub use showcase::{demo_live_match, demo_sponsors, sponsor_ticker, TICKER_REPEATS};
