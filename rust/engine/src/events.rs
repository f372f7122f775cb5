use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

use crate::board::Side;
use crate::game::RoundSummary;
use crate::tile::{Pip, Tile};

/// Notification emitted by the engine as the game progresses.
/// Purely informational: nothing an observer does feeds back into the rules.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// Hands dealt, leader chosen
    RoundStarted { round: u32, leader: usize },
    /// A player is about to act
    TurnStarted { round: u32, player: usize },
    /// A tile was committed to the board
    TilePlaced {
        round: u32,
        player: usize,
        tile: Tile,
        side: Side,
        left_end: Pip,
        right_end: Pip,
    },
    /// A player had no legal placement
    PlayerPassed {
        round: u32,
        player: usize,
        consecutive_passes: usize,
    },
    /// Round resolved and scored
    RoundEnded(RoundSummary),
    /// A player reached the target score
    GameEnded { winner: usize, scores: Vec<u32> },
}

/// Receives [`GameEvent`]s from the engine.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Observer that keeps every event in memory. Clones share the same buffer,
/// so one handle can be given to the engine and another kept for reading.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
