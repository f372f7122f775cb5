use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::board::Board;
use crate::events::{GameEvent, GameObserver};
use crate::game::{RoundEnd, TurnAction};
use crate::tile::Tile;

/// Complete record of one round: every action in order, the final line of
/// play and the scoring. Serialized as one JSONL line per round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// RNG seed of the game (enables deterministic replay)
    pub seed: Option<u64>,
    /// 1-based round number within the game
    pub round: u32,
    /// Seat that led the round
    pub leader: usize,
    /// Placements and passes in the order they happened
    pub actions: Vec<TurnAction>,
    /// Final line of play, left to right
    pub board: Vec<Tile>,
    pub outcome: RoundEnd,
    /// Seat that scored, if any
    pub winner: Option<usize>,
    pub points: u32,
    /// Cumulative scores after the round
    pub scores: Vec<u32>,
    /// Timestamp when the round ended (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

#[derive(Debug, Default)]
struct Draft {
    round: u32,
    leader: usize,
    actions: Vec<TurnAction>,
    board: Board,
}

/// Observer that turns the event stream into [`RoundRecord`]s and appends
/// them to a JSONL file.
///
/// Write failures are logged and otherwise ignored: an observer must never
/// change the course of the game.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
    seed: Option<u64>,
    draft: Option<Draft>,
    records: Vec<RoundRecord>,
}

impl RoundLogger {
    /// Opens `path` for appending, creating it and its parent directories
    /// as needed. Records from earlier sessions are kept.
    pub fn create<P: AsRef<Path>>(path: P, seed: Option<u64>) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
            seed,
            draft: None,
            records: Vec::new(),
        })
    }

    /// Logger that only keeps records in memory, with a fixed date.
    pub fn in_memory(date: &str, seed: Option<u64>) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
            seed,
            draft: None,
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        self.records.push(rec);
        Ok(())
    }

    fn record_action(&mut self, action: TurnAction) {
        let Some(draft) = self.draft.as_mut() else {
            return;
        };
        if let TurnAction::Placed { tile, side, .. } = action {
            if let Err(e) = draft.board.place(tile, side) {
                tracing::warn!(error = %e, "round log diverged from the engine board");
            }
        }
        draft.actions.push(action);
    }
}

impl GameObserver for RoundLogger {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RoundStarted { round, leader } => {
                self.draft = Some(Draft {
                    round: *round,
                    leader: *leader,
                    ..Draft::default()
                });
            }
            GameEvent::TilePlaced {
                player, tile, side, ..
            } => self.record_action(TurnAction::Placed {
                player: *player,
                tile: *tile,
                side: *side,
            }),
            GameEvent::PlayerPassed { player, .. } => {
                self.record_action(TurnAction::Passed { player: *player })
            }
            GameEvent::RoundEnded(summary) => {
                let Some(draft) = self.draft.take() else {
                    return;
                };
                let record = RoundRecord {
                    round_id: self.next_id(),
                    seed: self.seed,
                    round: draft.round,
                    leader: draft.leader,
                    actions: draft.actions,
                    board: draft.board.tiles().copied().collect(),
                    outcome: summary.end,
                    winner: summary.winner,
                    points: summary.points,
                    scores: summary.scores.clone(),
                    ts: None,
                };
                if let Err(e) = self.write(&record) {
                    tracing::warn!(
                        error = %e,
                        round = record.round,
                        "failed to write round record"
                    );
                }
            }
            GameEvent::TurnStarted { .. } | GameEvent::GameEnded { .. } => {}
        }
    }
}
