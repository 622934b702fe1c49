//! Bracket layout: vertical margins that nest each round between the two matches feeding it.

use crate::models::{Bracket, MatchId};
use serde::{Deserialize, Serialize};

/// Fixed card and gap sizes, in layout units (px on the page).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConstants {
    pub card_width: f64,
    pub card_height: f64,
    /// Horizontal gap between round columns.
    pub gap_x: f64,
    /// Vertical gap between cards in round 0.
    pub row_gap: f64,
    /// Container height multiplier, leaves room for the margins of later rounds.
    pub height_overscale: f64,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            card_width: 200.0,
            card_height: 80.0,
            gap_x: 100.0,
            row_gap: 20.0,
            height_overscale: 1.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Fixed stub drawn to the right of a card. Not routed to the real parent slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    /// Anchor relative to the card's top-left corner.
    pub origin: Point,
    /// SVG path relative to `origin`.
    pub path: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchLayout {
    pub match_id: MatchId,
    pub round_index: usize,
    pub match_index: usize,
    pub margin_top: f64,
    pub margin_bottom: f64,
    /// Offset of the card's top edge inside its round column.
    pub top: f64,
    pub center_y: f64,
    /// None for the final.
    pub connector: Option<Connector>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundLayout {
    pub index: usize,
    pub title: String,
    /// Offset of the column's left edge.
    pub left: f64,
    pub matches: Vec<MatchLayout>,
}

/// Exact line from a match to the slot it feeds in the next round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: MatchId,
    pub to: MatchId,
    pub start: Point,
    pub end: Point,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BracketLayout {
    pub constants: LayoutConstants,
    pub container_height: f64,
    pub container_width: f64,
    pub rounds: Vec<RoundLayout>,
}

/// Symmetric top/bottom margin of every card in a round:
/// `(2^r - 1) * (card_height / 2 + row_gap / 2)`, zero for round 0.
pub fn round_margin(round_index: usize, constants: &LayoutConstants) -> f64 {
    if round_index == 0 {
        return 0.0;
    }
    (2f64.powi(round_index as i32) - 1.0) * (constants.card_height / 2.0 + constants.row_gap / 2.0)
}

pub fn container_height(first_round_matches: usize, constants: &LayoutConstants) -> f64 {
    constants.height_overscale
        * first_round_matches as f64
        * (constants.card_height + constants.row_gap)
}

fn stub_connector(constants: &LayoutConstants) -> Connector {
    let half = constants.gap_x / 2.0;
    Connector {
        origin: Point {
            x: constants.card_width,
            y: constants.card_height / 2.0,
        },
        path: format!(
            "M 0 0 C {} 0, {} 0, {} 0",
            half, half, constants.gap_x
        ),
    }
}

/// Compute positions for every match. Pure: the bracket is only read.
pub fn compute_layout(bracket: &Bracket, constants: &LayoutConstants) -> BracketLayout {
    let last_round = bracket.round_count().saturating_sub(1);
    let pitch = constants.card_height + constants.row_gap;

    let rounds: Vec<RoundLayout> = bracket
        .rounds
        .iter()
        .map(|round| {
            let margin = round_margin(round.index, constants);
            let slot = 2f64.powi(round.index as i32) * pitch;
            let matches = round
                .matches
                .iter()
                .map(|m| {
                    let top = m.match_index as f64 * slot + margin;
                    MatchLayout {
                        match_id: m.id.clone(),
                        round_index: round.index,
                        match_index: m.match_index,
                        margin_top: margin,
                        margin_bottom: margin,
                        top,
                        center_y: top + constants.card_height / 2.0,
                        connector: (round.index < last_round).then(|| stub_connector(constants)),
                    }
                })
                .collect();
            RoundLayout {
                index: round.index,
                title: round.title.clone(),
                left: round.index as f64 * (constants.card_width + constants.gap_x),
                matches,
            }
        })
        .collect();

    let columns = rounds.len() as f64;
    BracketLayout {
        constants: *constants,
        container_height: container_height(bracket.round(0).map_or(0, |r| r.len()), constants),
        container_width: (columns * constants.card_width
            + (columns - 1.0).max(0.0) * constants.gap_x)
            .max(0.0),
        rounds,
    }
}

impl BracketLayout {
    pub fn match_layout(&self, round_index: usize, match_index: usize) -> Option<&MatchLayout> {
        self.rounds
            .get(round_index)
            .and_then(|r| r.matches.get(match_index))
    }

    /// Child-to-parent lines: right middle of each card to the left middle of the
    /// card it feeds.
    pub fn edges(&self) -> Vec<Edge> {
        let width = self.constants.card_width;
        self.rounds
            .windows(2)
            .flat_map(|pair| {
                let (children, parents) = (&pair[0], &pair[1]);
                children.matches.iter().filter_map(move |child| {
                    let parent = parents.matches.get(child.match_index / 2)?;
                    Some(Edge {
                        from: child.match_id.clone(),
                        to: parent.match_id.clone(),
                        start: Point {
                            x: children.left + width,
                            y: child.center_y,
                        },
                        end: Point {
                            x: parents.left,
                            y: parent.center_y,
                        },
                    })
                })
            })
            .collect()
    }
}
