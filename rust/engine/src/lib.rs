//! # domino-engine: Dominoes Rules Engine
//!
//! A deterministic engine for block dominoes (double-six set) for two or more
//! players. Provides the tile and board model, the boneyard, the round/turn
//! state machine, placement validation and scoring, with seeded RNG for
//! reproducible games.
//!
//! ## Core Modules
//!
//! - [`tile`] - Tiles, pips and full-set generation
//! - [`boneyard`] - The draw pile, rebuilt and shuffled every round
//! - [`board`] - The line of play with flip-to-fit placement
//! - [`player`] - Player identity, hand, score and the [`player::Move`] type
//! - [`rules`] - Legal moves, placement validation and scoring
//! - [`game`] - Phase, round outcome and turn record types
//! - [`engine`] - The game controller
//! - [`events`] - Notifications for UI layers
//! - [`logger`] - JSONL round records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use domino_engine::engine::{Engine, EngineConfig};
//! use domino_engine::game::Phase;
//!
//! let config = EngineConfig { target_score: 50, seed: Some(42), ..EngineConfig::default() };
//! let mut engine = Engine::new(["North", "South", "East"], config).unwrap();
//!
//! while engine.phase() != Phase::GameEnded {
//!     engine.start_round().unwrap();
//!     while let Phase::AwaitingAction(_) = engine.phase() {
//!         match engine.legal_moves().first() {
//!             Some(&mv) => engine.play(mv).unwrap(),
//!             None => engine.pass().unwrap(),
//!         };
//!     }
//! }
//! let winner = engine.winner().unwrap();
//! assert!(engine.players()[winner].score() >= 50);
//! ```
//!
//! ## Placement
//!
//! Callers pick a tile and an end; the board turns the tile around as needed:
//!
//! ```rust
//! use domino_engine::board::{Board, Side};
//! use domino_engine::errors::GameError;
//! use domino_engine::tile::Tile;
//!
//! let mut board = Board::new();
//! board.place(Tile::new(6, 6).unwrap(), Side::Right).unwrap();
//! board.place(Tile::new(6, 2).unwrap(), Side::Left).unwrap();
//! assert_eq!(board.to_string(), "[2|6] [6|6]");
//!
//! let err = board.place(Tile::new(1, 3).unwrap(), Side::Left).unwrap_err();
//! assert!(matches!(err, GameError::IllegalPlacement { .. }));
//! ```

pub mod board;
pub mod boneyard;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod logger;
pub mod player;
pub mod rules;
pub mod tile;
