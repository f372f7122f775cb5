use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use crate::errors::GameError;
use crate::tile::{Pip, Tile};

/// One of the two open ends of the line of play.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    pub fn both() -> [Side; 2] {
        [Side::Left, Side::Right]
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single, non-branching line of play.
///
/// Each stored tile faces so that its `low` half points left and its `high`
/// half points right. Neighbours always touch on equal pips, so the left open
/// end is the first tile's `low` and the right open end is the last tile's
/// `high`.
#[derive(Debug, Clone, Default)]
pub struct Board {
    tiles: VecDeque<Tile>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
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

    /// # Errors
    ///
    /// [`GameError::EmptyBoard`] before the first tile is placed.
    pub fn left_end(&self) -> Result<Pip, GameError> {
        self.tiles
            .front()
            .map(Tile::low)
            .ok_or(GameError::EmptyBoard)
    }

    /// # Errors
    ///
    /// [`GameError::EmptyBoard`] before the first tile is placed.
    pub fn right_end(&self) -> Result<Pip, GameError> {
        self.tiles
            .back()
            .map(Tile::high)
            .ok_or(GameError::EmptyBoard)
    }

    pub fn end(&self, side: Side) -> Result<Pip, GameError> {
        match side {
            Side::Left => self.left_end(),
            Side::Right => self.right_end(),
        }
    }

    /// True if the tile fits either open end (or the board is empty).
    pub fn can_place(&self, tile: &Tile) -> bool {
        Side::both().into_iter().any(|s| self.can_place_on(tile, s))
    }

    /// True if the tile fits the given end (or the board is empty).
    pub fn can_place_on(&self, tile: &Tile, side: Side) -> bool {
        match self.end(side) {
            Ok(open) => tile.has(open),
            Err(_) => true,
        }
    }

    /// Sides the tile can legally go on. An empty board reports both.
    pub fn legal_sides(&self, tile: &Tile) -> Vec<Side> {
        Side::both()
            .into_iter()
            .filter(|&s| self.can_place_on(tile, s))
            .collect()
    }

    /// Places a tile at one end, turning it around if needed so the matching
    /// half touches the open end.
    ///
    /// # Errors
    ///
    /// [`GameError::IllegalPlacement`] if the tile does not fit that end. The
    /// board is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use domino_engine::board::{Board, Side};
    /// use domino_engine::tile::Tile;
    ///
    /// let mut board = Board::new();
    /// board.place(Tile::new(3, 5).unwrap(), Side::Left).unwrap();
    /// board.place(Tile::new(5, 6).unwrap(), Side::Right).unwrap();
    /// board.place(Tile::new(3, 1).unwrap(), Side::Left).unwrap();
    /// assert_eq!(board.left_end().unwrap(), 1);
    /// assert_eq!(board.right_end().unwrap(), 6);
    /// assert!(board.place(Tile::new(2, 2).unwrap(), Side::Right).is_err());
    /// ```
    pub fn place(&mut self, tile: Tile, side: Side) -> Result<(), GameError> {
        if !self.can_place_on(&tile, side) {
            return Err(GameError::IllegalPlacement { tile, side });
        }
        let (left, right) = match (self.left_end(), self.right_end()) {
            (Ok(l), Ok(r)) => (l, r),
            _ => {
                self.tiles.push_back(tile);
                return Ok(());
            }
        };
        match side {
            Side::Left => {
                let t = if tile.high() == left { tile } else { tile.flip() };
                self.tiles.push_front(t);
            }
            Side::Right => {
                let t = if tile.low() == right { tile } else { tile.flip() };
                self.tiles.push_back(t);
            }
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.tiles.clear();
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tiles.is_empty() {
            return f.write_str("(empty)");
        }
        for (i, t) in self.tiles.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", t)?;
        }
        Ok(())
    }
}
