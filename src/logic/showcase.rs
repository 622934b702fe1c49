//! Demo data for the TV scoreboard. Built once by the server at startup.

use crate::models::{LiveMatch, LiveTeam, Side, Sponsor, SponsorTier};

/// Number of times the sponsor list is repeated so the marquee loops without a gap.
pub const TICKER_REPEATS: usize = 3;

pub fn demo_sponsors() -> Vec<Sponsor> {
    vec![
        Sponsor::new("NOX", SponsorTier::Gold),
        Sponsor::new("BULLPADEL", SponsorTier::Gold),
        Sponsor::new("ADIDAS", SponsorTier::Silver),
        Sponsor::new("HEAD", SponsorTier::Silver),
        Sponsor::new("WILSON", SponsorTier::Bronze),
        Sponsor::new("BABOLAT", SponsorTier::Bronze),
    ]
}

pub fn demo_live_match() -> LiveMatch {
    LiveMatch {
        court: "Center Court".to_string(),
        phase: "Quarter Finals".to_string(),
        team_1: LiveTeam {
            names: "Lebrón / Galán".to_string(),
            sets: vec![6, 4],
            current_games: 4,
            points: "40".to_string(),
        },
        team_2: LiveTeam {
            names: "Coello / Tapia".to_string(),
            sets: vec![4, 6],
            current_games: 5,
            points: "30".to_string(),
        },
        server: Side::One,
    }
}

/// Sponsor names repeated `repeats` times, in order.
pub fn sponsor_ticker(sponsors: &[Sponsor], repeats: usize) -> Vec<String> {
    std::iter::repeat(sponsors)
        .take(repeats)
        .flatten()
        .map(|s| s.name.clone())
        .collect()
}
