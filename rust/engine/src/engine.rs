use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::fmt;

use crate::board::Board;
use crate::boneyard::Boneyard;
use crate::errors::GameError;
use crate::events::{GameEvent, GameObserver};
use crate::game::{next_seat, Phase, RoundEnd, RoundSummary, TurnAction, TurnRecord};
use crate::player::{Move, Player, HAND_SIZE};
use crate::rules;
use crate::tile::{Tile, FULL_SET_SIZE};

/// Score that ends the game unless configured otherwise.
pub const DEFAULT_TARGET_SCORE: u32 = 100;

const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Game-level settings fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub target_score: u32,
    pub hand_size: usize,
    /// Seed for shuffling and the first leader draw
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            hand_size: HAND_SIZE,
            seed: None,
        }
    }
}

/// Read-only snapshot handed to a [`MoveSelector`].
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub round: u32,
    pub player: &'a Player,
    pub board: &'a Board,
    /// Every legal move for `player`; never empty
    pub legal_moves: &'a [Move],
}

/// The UI side of a turn: picks a tile and a side for the current player.
pub trait MoveSelector {
    /// Returns the chosen move, or `None` to abandon the turn.
    fn select_move(&mut self, view: &TurnView<'_>) -> Option<Move>;

    /// Called when the engine refuses a proposed move. The engine will ask
    /// again right after.
    fn placement_rejected(&mut self, _mv: Move, _error: &GameError) {}
}

/// Game controller: owns the board, the boneyard and the players, and runs
/// the round/turn state machine.
///
/// # Examples
///
/// ```
/// use domino_engine::engine::{Engine, EngineConfig};
/// use domino_engine::game::Phase;
///
/// let config = EngineConfig { seed: Some(7), ..EngineConfig::default() };
/// let mut engine = Engine::new(["Ana", "Ben"], config).unwrap();
/// engine.start_round().unwrap();
/// assert!(matches!(engine.phase(), Phase::AwaitingAction(_)));
/// assert!(engine.players().iter().all(|p| p.hand().len() == 7));
/// assert_eq!(engine.tiles_in_play(), 28);
///
/// // The round leader always has a legal opening move.
/// let first = engine.legal_moves()[0];
/// let record = engine.play(first).unwrap();
/// assert_eq!(engine.board().len(), 1);
/// assert!(record.round_end.is_none());
/// ```
pub struct Engine {
    config: EngineConfig,
    seed: u64,
    rng: ChaCha20Rng,
    board: Board,
    boneyard: Boneyard,
    players: Vec<Player>,
    phase: Phase,
    /// Seat whose turn it is (meaningful while a round is active)
    current: usize,
    /// Seat that led the latest round; `None` before the first deal
    leader: Option<usize>,
    consecutive_passes: usize,
    /// `TurnStarted` already sent for the seat on turn
    turn_announced: bool,
    round: u32,
    winner: Option<usize>,
    last_round: Option<RoundSummary>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Engine {
    /// Creates a game for the given roster. Seats follow the order of `names`.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidConfig`] for fewer than two players, a zero target
    /// score or a zero hand size.
    pub fn new<I, S>(names: I, config: EngineConfig) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<Player> = names
            .into_iter()
            .enumerate()
            .map(|(id, name)| Player::new(id, name))
            .collect();
        if players.len() < 2 {
            return Err(GameError::InvalidConfig(format!(
                "at least 2 players required, got {}",
                players.len()
            )));
        }
        if config.target_score == 0 {
            return Err(GameError::InvalidConfig(
                "target score must be > 0".to_string(),
            ));
        }
        if config.hand_size == 0 {
            return Err(GameError::InvalidConfig(
                "hand size must be > 0".to_string(),
            ));
        }
        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        Ok(Self {
            config,
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
            board: Board::new(),
            boneyard: Boneyard::new(),
            players,
            phase: Phase::NotStarted,
            current: 0,
            leader: None,
            consecutive_passes: 0,
            turn_announced: false,
            round: 0,
            winner: None,
            last_round: None,
            observers: Vec::new(),
        })
    }

    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn boneyard(&self) -> &Boneyard {
        &self.boneyard
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn round_number(&self) -> u32 {
        self.round
    }
    pub fn round_leader(&self) -> Option<usize> {
        self.leader
    }
    pub fn consecutive_passes(&self) -> usize {
        self.consecutive_passes
    }
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }
    pub fn last_round(&self) -> Option<&RoundSummary> {
        self.last_round.as_ref()
    }
    pub fn target_score(&self) -> u32 {
        self.config.target_score
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_player_index(&self) -> usize {
        self.current
    }
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Tiles across the boneyard, the board and every hand.
    pub fn tiles_in_play(&self) -> usize {
        self.boneyard.len()
            + self.board.len()
            + self.players.iter().map(|p| p.hand().len()).sum::<usize>()
    }

    /// Whether the player at `index` holds at least one tile that fits.
    pub fn can_play(&self, index: usize) -> bool {
        self.players
            .get(index)
            .is_some_and(|p| p.can_play_on(&self.board))
    }

    /// Legal moves for the player to act; empty outside an active round.
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.phase {
            Phase::AwaitingAction(seat) => {
                rules::legal_moves(self.players[seat].hand(), &self.board)
            }
            _ => Vec::new(),
        }
    }

    /// Resets the table and deals a new round.
    ///
    /// The first round's leader is drawn at random; later rounds pass the
    /// lead one seat on.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameAlreadyEnded`] - the game is over
    /// - [`GameError::RoundInProgress`] - the current round has not ended
    /// - [`GameError::EmptyPile`] - hand size times players exceeds the set;
    ///   nothing is dealt and the engine is unchanged
    pub fn start_round(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::GameEnded => return Err(GameError::GameAlreadyEnded),
            Phase::AwaitingAction(_) => return Err(GameError::RoundInProgress),
            Phase::NotStarted | Phase::RoundEnded => {}
        }
        let n = self.players.len();

        // Deal from copies so a failed deal leaves the table as it was.
        let mut rng = self.rng.clone();
        let mut pile = Boneyard::new();
        pile.shuffle(&mut rng);
        let leader = match self.leader {
            None => rng.random_range(0..n),
            Some(prev) => next_seat(prev, n),
        };
        let mut hands: Vec<Vec<Tile>> = vec![Vec::with_capacity(self.config.hand_size); n];
        for _ in 0..self.config.hand_size {
            for hand in &mut hands {
                hand.push(pile.draw()?);
            }
        }

        self.rng = rng;
        self.boneyard = pile;
        self.board.reset();
        self.consecutive_passes = 0;
        self.turn_announced = false;
        for (p, hand) in self.players.iter_mut().zip(hands) {
            p.clear_hand();
            for t in hand {
                p.give_tile(t);
            }
        }
        self.leader = Some(leader);
        self.current = leader;
        self.round += 1;
        debug_assert_eq!(self.tiles_in_play(), FULL_SET_SIZE);

        self.phase = Phase::AwaitingAction(leader);
        tracing::info!(round = self.round, leader, "round started");
        self.emit(GameEvent::RoundStarted {
            round: self.round,
            leader,
        });
        Ok(())
    }

    /// Runs one turn for the current player: announces it, then either asks
    /// `selector` for a move (re-asking after every rejected move) or records
    /// a pass when nothing fits.
    ///
    /// Returns `Ok(None)` without doing anything when no round is active.
    ///
    /// # Errors
    ///
    /// [`GameError::SelectionAborted`] if the selector returns `None`; the
    /// turn is left open. Calling again resumes it without a second
    /// [`GameEvent::TurnStarted`].
    pub fn player_action(
        &mut self,
        selector: &mut dyn MoveSelector,
    ) -> Result<Option<TurnRecord>, GameError> {
        let Phase::AwaitingAction(seat) = self.phase else {
            return Ok(None);
        };
        if !self.turn_announced {
            self.turn_announced = true;
            self.emit(GameEvent::TurnStarted {
                round: self.round,
                player: seat,
            });
        }
        if !self.can_play(seat) {
            return self.pass().map(Some);
        }
        let moves = self.legal_moves();
        loop {
            let view = TurnView {
                round: self.round,
                player: &self.players[seat],
                board: &self.board,
                legal_moves: &moves,
            };
            let Some(mv) = selector.select_move(&view) else {
                return Err(GameError::SelectionAborted);
            };
            match self.play(mv) {
                Ok(record) => return Ok(Some(record)),
                Err(
                    e @ (GameError::IllegalPlacement { .. }
                    | GameError::TileIndexOutOfRange { .. }),
                ) => {
                    tracing::debug!(player = seat, error = %e, "move rejected");
                    selector.placement_rejected(mv, &e);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Validates and commits a move for the current player.
    ///
    /// # Errors
    ///
    /// - [`GameError::RoundNotInProgress`] / [`GameError::GameAlreadyEnded`]
    /// - [`GameError::TileIndexOutOfRange`] - no such tile in hand
    /// - [`GameError::IllegalPlacement`] - tile does not fit that end
    ///
    /// Nothing changes when an error is returned.
    pub fn play(&mut self, mv: Move) -> Result<TurnRecord, GameError> {
        let seat = self.active_seat()?;
        let tile = rules::validate_placement(self.players[seat].hand(), &self.board, mv)?;
        self.board.place(tile, mv.side)?;
        self.players[seat].take_tile(mv.tile_index)?;
        self.consecutive_passes = 0;

        let (left_end, right_end) = (self.board.left_end()?, self.board.right_end()?);
        tracing::debug!(
            round = self.round,
            player = seat,
            tile = %tile,
            side = %mv.side,
            left_end,
            right_end,
            "tile placed"
        );
        self.emit(GameEvent::TilePlaced {
            round: self.round,
            player: seat,
            tile,
            side: mv.side,
            left_end,
            right_end,
        });
        Ok(self.finish_action(TurnAction::Placed {
            player: seat,
            tile,
            side: mv.side,
        }))
    }

    /// Records a pass for the current player.
    ///
    /// # Errors
    ///
    /// [`GameError::PassNotAllowed`] if the player holds a tile that fits, or
    /// the inactive-round errors of [`Engine::play`].
    pub fn pass(&mut self) -> Result<TurnRecord, GameError> {
        let seat = self.active_seat()?;
        if self.can_play(seat) {
            return Err(GameError::PassNotAllowed { player: seat });
        }
        self.consecutive_passes += 1;
        tracing::debug!(
            round = self.round,
            player = seat,
            consecutive_passes = self.consecutive_passes,
            "player passed"
        );
        self.emit(GameEvent::PlayerPassed {
            round: self.round,
            player: seat,
            consecutive_passes: self.consecutive_passes,
        });
        Ok(self.finish_action(TurnAction::Passed { player: seat }))
    }

    fn active_seat(&self) -> Result<usize, GameError> {
        match self.phase {
            Phase::AwaitingAction(seat) => Ok(seat),
            Phase::GameEnded => Err(GameError::GameAlreadyEnded),
            Phase::NotStarted | Phase::RoundEnded => Err(GameError::RoundNotInProgress),
        }
    }

    fn finish_action(&mut self, action: TurnAction) -> TurnRecord {
        let n = self.players.len();
        self.turn_announced = false;
        let end = if let Some(winner) = self.players.iter().position(Player::has_empty_hand) {
            Some(RoundEnd::Domino { winner })
        } else if self.consecutive_passes >= n {
            Some(RoundEnd::Blocked)
        } else {
            None
        };

        let Some(end) = end else {
            self.current = next_seat(self.current, n);
            self.phase = Phase::AwaitingAction(self.current);
            return TurnRecord {
                action,
                round_end: None,
                game_winner: None,
            };
        };

        let summary = rules::score_round(&mut self.players, end, self.round);
        self.phase = Phase::RoundEnded;
        tracing::info!(
            round = summary.round,
            outcome = ?summary.end,
            winner = ?summary.winner,
            points = summary.points,
            "round ended"
        );
        self.emit(GameEvent::RoundEnded(summary.clone()));

        let game_winner = rules::game_winner(&self.players, self.config.target_score);
        if let Some(winner) = game_winner {
            self.winner = Some(winner);
            self.phase = Phase::GameEnded;
            let scores: Vec<u32> = self.players.iter().map(Player::score).collect();
            tracing::info!(winner, ?scores, "game ended");
            self.emit(GameEvent::GameEnded { winner, scores });
        }
        self.last_round = Some(summary.clone());
        TurnRecord {
            action,
            round_end: Some(summary),
            game_winner,
        }
    }

    fn emit(&mut self, event: GameEvent) {
        for o in &mut self.observers {
            o.on_event(&event);
        }
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("seed", &self.seed)
            .field("phase", &self.phase)
            .field("round", &self.round)
            .field("board", &self.board)
            .field("players", &self.players)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
