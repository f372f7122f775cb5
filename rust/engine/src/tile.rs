use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::GameError;

/// Pip count on one half of a tile.
pub type Pip = u8;

/// Highest pip value in a double-six set.
pub const MAX_PIP: Pip = 6;

/// Number of tiles in a double-six set.
pub const FULL_SET_SIZE: usize = 28;

/// How a tile is laid on the table. Purely cosmetic; never affects legality.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Laid along the line of play
    Horizontal,
    /// Laid crosswise (the traditional way to show a double)
    Vertical,
}

/// A single domino: two pip values plus a cosmetic orientation.
///
/// `low` and `high` are the two halves in the order the tile currently faces.
/// Tiles from [`full_set`] have `low <= high`; [`Tile::flip`] swaps them, so a
/// tile sitting on the board may have `low > high`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Tile {
    low: Pip,
    high: Pip,
    orientation: Orientation,
}

impl Tile {
    /// Creates a horizontal tile.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPip`] if either value exceeds [`MAX_PIP`].
    ///
    /// # Examples
    ///
    /// ```
    /// use domino_engine::tile::Tile;
    ///
    /// let t = Tile::new(3, 5).unwrap();
    /// assert_eq!(t.pip_total(), 8);
    /// assert!(Tile::new(3, 7).is_err());
    /// ```
    pub fn new(low: Pip, high: Pip) -> Result<Self, GameError> {
        Self::with_orientation(low, high, Orientation::Horizontal)
    }

    pub fn with_orientation(
        low: Pip,
        high: Pip,
        orientation: Orientation,
    ) -> Result<Self, GameError> {
        for pip in [low, high] {
            if pip > MAX_PIP {
                return Err(GameError::InvalidPip(pip));
            }
        }
        Ok(Self {
            low,
            high,
            orientation,
        })
    }

    pub fn low(&self) -> Pip {
        self.low
    }
    pub fn high(&self) -> Pip {
        self.high
    }
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_double(&self) -> bool {
        self.low == self.high
    }

    pub fn pip_total(&self) -> u32 {
        u32::from(self.low) + u32::from(self.high)
    }

    pub fn has(&self, pip: Pip) -> bool {
        self.low == pip || self.high == pip
    }

    /// True iff any half of `self` matches any half of `other`.
    pub fn can_connect(&self, other: &Tile) -> bool {
        other.has(self.low) || other.has(self.high)
    }

    /// Returns the same tile turned end for end. Orientation is kept.
    ///
    /// ```
    /// use domino_engine::tile::Tile;
    ///
    /// let t = Tile::new(2, 4).unwrap().flip();
    /// assert_eq!((t.low(), t.high()), (4, 2));
    /// ```
    #[must_use]
    pub fn flip(&self) -> Tile {
        Tile {
            low: self.high,
            high: self.low,
            orientation: self.orientation,
        }
    }

    /// Same unordered pip pair, regardless of facing.
    pub fn same_pips(&self, other: &Tile) -> bool {
        (self.low == other.low && self.high == other.high)
            || (self.low == other.high && self.high == other.low)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.low, self.high)
    }
}

/// Every unordered pair `(i, j)` with `0 <= i <= j <= 6`, once, in
/// deterministic order. Doubles are laid crosswise.
pub fn full_set() -> Vec<Tile> {
    let mut v = Vec::with_capacity(FULL_SET_SIZE);
    for low in 0..=MAX_PIP {
        for high in low..=MAX_PIP {
            let orientation = if low == high {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            v.push(Tile {
                low,
                high,
                orientation,
            });
        }
    }
    v
}

/// Sum of pip totals over a slice of tiles.
pub fn pip_total(tiles: &[Tile]) -> u32 {
    tiles.iter().map(Tile::pip_total).sum()
}
