use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

use crate::errors::GameError;
use crate::tile::{full_set, Tile};

/// The draw pile. Built fresh from a full set and reshuffled every round.
#[derive(Debug, Clone, Default)]
pub struct Boneyard {
    tiles: VecDeque<Tile>,
}

impl Boneyard {
    /// A full, unshuffled set.
    pub fn new() -> Self {
        Self {
            tiles: Self::generate_full_set().into(),
        }
    }

    pub fn generate_full_set() -> Vec<Tile> {
        full_set()
    }

    /// Rebuilds the pile from a full set, then permutes it uniformly.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut tiles = Self::generate_full_set();
        tiles.shuffle(rng);
        self.tiles = tiles.into();
    }

    /// Removes and returns the front tile.
    ///
    /// # Errors
    ///
    /// [`GameError::EmptyPile`] when nothing is left; the pile is untouched.
    pub fn draw(&mut self) -> Result<Tile, GameError> {
        self.tiles.pop_front().ok_or(GameError::EmptyPile)
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}
