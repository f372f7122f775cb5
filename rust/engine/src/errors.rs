use thiserror::Error;

use crate::board::Side;
use crate::tile::Tile;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid pip value: {0} (must be 0-6)")]
    InvalidPip(u8),
    #[error("Draw attempted on an empty boneyard")]
    EmptyPile,
    #[error("Board is empty, it has no open ends")]
    EmptyBoard,
    #[error("Tile {tile} cannot be placed on the {side} end")]
    IllegalPlacement { tile: Tile, side: Side },
    #[error("Tile index {index} out of range (hand holds {hand_size} tiles)")]
    TileIndexOutOfRange { index: usize, hand_size: usize },
    #[error("No round in progress")]
    RoundNotInProgress,
    #[error("Round already in progress")]
    RoundInProgress,
    #[error("Game already ended")]
    GameAlreadyEnded,
    #[error("Player {player} holds a playable tile and cannot pass")]
    PassNotAllowed { player: usize },
    #[error("Move selection was aborted")]
    SelectionAborted,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
