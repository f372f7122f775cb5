use serde::{Deserialize, Serialize};

use crate::board::{Board, Side};
use crate::errors::GameError;
use crate::tile::{pip_total, Tile};

/// Number of tiles each player is dealt at round start.
pub const HAND_SIZE: usize = 7;

/// A tile choice from the current player's hand: which tile (by position in
/// the hand) and which end of the board it goes on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Zero-based position in the hand
    pub tile_index: usize,
    /// End of the board to play on
    pub side: Side,
}

impl Move {
    pub fn new(tile_index: usize, side: Side) -> Self {
        Self { tile_index, side }
    }
}

/// A seat at the table: stable id, display name, running score and hand.
#[derive(Debug, Clone)]
pub struct Player {
    /// Seat index, stable for the whole game
    id: usize,
    name: String,
    /// Cumulative score across rounds, never decreases
    score: u32,
    /// Tiles in insertion order; positions are what the UI shows
    hand: Vec<Tile>,
}

impl Player {
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            hand: Vec::with_capacity(HAND_SIZE),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn hand(&self) -> &[Tile] {
        &self.hand
    }

    pub fn give_tile(&mut self, t: Tile) {
        self.hand.push(t);
    }

    /// Removes the tile at `index`, keeping the order of the rest.
    pub fn take_tile(&mut self, index: usize) -> Result<Tile, GameError> {
        if index >= self.hand.len() {
            return Err(GameError::TileIndexOutOfRange {
                index,
                hand_size: self.hand.len(),
            });
        }
        Ok(self.hand.remove(index))
    }

    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn pip_total(&self) -> u32 {
        pip_total(&self.hand)
    }

    pub fn has_empty_hand(&self) -> bool {
        self.hand.is_empty()
    }

    /// True if at least one tile in hand fits the board.
    pub fn can_play_on(&self, board: &Board) -> bool {
        self.hand.iter().any(|t| board.can_place(t))
    }
}
