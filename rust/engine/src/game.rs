use serde::{Deserialize, Serialize};

use crate::board::Side;
use crate::tile::Tile;

/// Where the controller is in the round/turn cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// No round has been dealt yet (or dealing failed)
    NotStarted,
    /// Waiting for the player at this seat index to act
    AwaitingAction(usize),
    /// Round scored, next round not yet started
    RoundEnded,
    /// A player reached the target score; terminal
    GameEnded,
}

impl Phase {
    pub fn is_round_active(self) -> bool {
        matches!(self, Phase::AwaitingAction(_))
    }
}

/// How a round finished.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundEnd {
    /// A player emptied their hand
    Domino { winner: usize },
    /// Every player passed in succession
    Blocked,
}

/// Scored result of a finished round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// 1-based round number
    pub round: u32,
    pub end: RoundEnd,
    /// Seat that scored, `None` for a blocked round tied on pips
    pub winner: Option<usize>,
    /// Points added to the winner's score
    pub points: u32,
    /// Pip total of each hand at round end, by seat
    pub pip_totals: Vec<u32>,
    /// Hands at round end, by seat
    pub final_hands: Vec<Vec<Tile>>,
    /// Cumulative scores after this round, by seat
    pub scores: Vec<u32>,
}

/// What a player did on their turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnAction {
    Placed { player: usize, tile: Tile, side: Side },
    Passed { player: usize },
}

impl TurnAction {
    pub fn player(&self) -> usize {
        match *self {
            TurnAction::Placed { player, .. } | TurnAction::Passed { player } => player,
        }
    }
}

/// Result of one committed action, plus any round/game resolution it caused.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TurnRecord {
    pub action: TurnAction,
    pub round_end: Option<RoundSummary>,
    pub game_winner: Option<usize>,
}

/// Seat after `index`, wrapping around the table.
pub fn next_seat(index: usize, player_count: usize) -> usize {
    (index + 1) % player_count
}
