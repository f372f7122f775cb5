//! # Play Command
//!
//! Hotseat block dominoes: every seat is played from this terminal.
//!
//! Each turn shows the line of play and the current player's hand. The
//! player types a tile number and, when the tile fits both ends, a side.
//! Players who cannot play pass automatically. `q`, `quit` or end of input
//! stops the session after the current turn.
//!
//! Input the engine refuses (a tile that does not fit) is reported on the
//! error stream and the same player is asked again.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{
    format_action, format_board, format_hand, format_round_summary, format_scores,
};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_side, parse_tile_choice};
use domino_engine::board::Side;
use domino_engine::engine::{Engine, EngineConfig, MoveSelector, TurnView};
use domino_engine::errors::GameError;
use domino_engine::game::Phase;
use domino_engine::logger::RoundLogger;
use domino_engine::player::Move;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Handle the play command.
///
/// Flags override the resolved configuration: an empty `players` list keeps
/// the configured roster, and the seed falls back to the configuration and
/// then to a random one. With `log`, every finished round is appended to
/// that file as one JSON line.
///
/// # Errors
///
/// - `CliError::Engine` for an unplayable setup (too few or too many seats)
/// - `CliError::Io` when the log file cannot be created or a stream fails
#[allow(clippy::too_many_arguments)]
pub fn handle_play_command(
    config: &Config,
    players: Vec<String>,
    target: Option<u32>,
    seed: Option<u64>,
    log: Option<PathBuf>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let names = if players.is_empty() {
        config.players.clone()
    } else {
        players
    };
    let target = target.unwrap_or(config.target_score);
    if target == 0 {
        ui::write_error(err, "target must be >= 1")?;
        return Err(CliError::InvalidInput("target must be >= 1".to_string()));
    }
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);

    let mut eng = Engine::new(
        names,
        EngineConfig {
            target_score: target,
            hand_size: config.hand_size,
            seed: Some(seed),
        },
    )?;
    if let Some(path) = log {
        let logger = RoundLogger::create(&path, Some(seed))?;
        eng.add_observer(Box::new(logger));
    }

    let roster: Vec<&str> = eng.players().iter().map(|p| p.name()).collect();
    writeln!(
        out,
        "play: players={} target={} seed={}",
        roster.join(","),
        target,
        seed
    )?;

    let mut rounds_played = 0u32;
    let mut quit = false;

    'game: while eng.phase() != Phase::GameEnded {
        eng.start_round()?;
        if let Some(leader) = eng.round_leader() {
            writeln!(
                out,
                "Round {}: {} leads",
                eng.round_number(),
                eng.players()[leader].name()
            )?;
        }

        while let Phase::AwaitingAction(seat) = eng.phase() {
            writeln!(out, "Board: {}", format_board(eng.board()))?;
            let player = &eng.players()[seat];
            writeln!(out, "{} to play: {}", player.name(), format_hand(player.hand()))?;

            let (result, io_error) = {
                let mut selector = TerminalSelector::new(&mut *stdin, &mut *out, &mut *err);
                let result = eng.player_action(&mut selector);
                (result, selector.io_error)
            };

            let record = match result {
                Ok(Some(record)) => record,
                Ok(None) => break,
                Err(GameError::SelectionAborted) => {
                    if let Some(e) = io_error {
                        return Err(e.into());
                    }
                    quit = true;
                    break 'game;
                }
                Err(e) => return Err(e.into()),
            };

            writeln!(out, "{}", format_action(&record.action, eng.players()))?;
            if let Some(summary) = &record.round_end {
                rounds_played += 1;
                writeln!(out, "{}", format_round_summary(summary, eng.players()))?;
                writeln!(out, "Scores: {}", format_scores(eng.players()))?;
            }
            if let Some(winner) = record.game_winner {
                writeln!(
                    out,
                    "{} wins the game with {} points",
                    eng.players()[winner].name(),
                    eng.players()[winner].score()
                )?;
            }
        }
    }

    writeln!(
        out,
        "Rounds played: {} ({})",
        rounds_played,
        if quit { "quit" } else { "completed" }
    )?;
    Ok(())
}

/// Reads moves for whoever is on turn from the terminal.
///
/// Returning `None` from [`MoveSelector::select_move`] ends the session; a
/// stream failure is kept in `io_error` so the caller can tell it apart from
/// a deliberate quit.
struct TerminalSelector<'a> {
    stdin: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    io_error: Option<std::io::Error>,
}

impl<'a> TerminalSelector<'a> {
    fn new(stdin: &'a mut dyn BufRead, out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self {
            stdin,
            out,
            err,
            io_error: None,
        }
    }

    fn ask(&mut self, text: &str) -> Option<String> {
        let line = ui::prompt(self.out, text).and_then(|()| read_stdin_line(self.stdin));
        match line {
            Ok(line) => line,
            Err(e) => {
                self.io_error = Some(e);
                None
            }
        }
    }

    fn report(&mut self, msg: &str) -> Option<()> {
        match ui::write_error(self.err, msg) {
            Ok(()) => Some(()),
            Err(e) => {
                self.io_error = Some(e);
                None
            }
        }
    }

    fn choose_tile(&mut self, hand_size: usize) -> Option<usize> {
        loop {
            let line = self.ask(&format!("Tile (1-{}, q to quit): ", hand_size))?;
            match parse_tile_choice(&line, hand_size) {
                ParseResult::Value(index) => return Some(index),
                ParseResult::Quit => return None,
                ParseResult::Invalid(msg) => self.report(&msg)?,
            }
        }
    }

    fn choose_side(&mut self) -> Option<Side> {
        loop {
            let line = self.ask("Side (l/r): ")?;
            match parse_side(&line) {
                ParseResult::Value(side) => return Some(side),
                ParseResult::Quit => return None,
                ParseResult::Invalid(msg) => self.report(&msg)?,
            }
        }
    }
}

impl MoveSelector for TerminalSelector<'_> {
    fn select_move(&mut self, view: &TurnView<'_>) -> Option<Move> {
        let hand = view.player.hand();
        let index = self.choose_tile(hand.len())?;
        let tile = hand.get(index)?;
        let side = if view.board.is_empty() {
            Side::Right
        } else {
            match view.board.legal_sides(tile).as_slice() {
                [only] => *only,
                [] => Side::Right,
                _ => self.choose_side()?,
            }
        };
        Some(Move::new(index, side))
    }

    fn placement_rejected(&mut self, _mv: Move, error: &GameError) {
        let _ = self.report(&error.to_string());
    }
}
