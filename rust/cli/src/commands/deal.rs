//! Deal command handler: deals one round and shows every hand.
//!
//! Useful for checking that a seed reproduces the same deal, and for
//! inspecting who leads.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_hand;
use domino_engine::engine::{Engine, EngineConfig};
use std::io::Write;

/// Deals a single round.
///
/// `players` replaces the configured roster with that many generic seats.
/// The seed comes from the flag, then the configuration, then the OS.
pub fn handle_deal_command(
    config: &Config,
    players: Option<u8>,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let names: Vec<String> = match players {
        Some(n) => (1..=n).map(|i| format!("Player {}", i)).collect(),
        None => config.players.clone(),
    };
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    let mut eng = Engine::new(
        names,
        EngineConfig {
            target_score: config.target_score,
            hand_size: config.hand_size,
            seed: Some(seed),
        },
    )?;
    eng.start_round()?;

    writeln!(out, "Seed: {}", eng.seed())?;
    if let Some(leader) = eng.round_leader() {
        writeln!(out, "Leader: {}", eng.players()[leader].name())?;
    }
    for p in eng.players() {
        writeln!(out, "{}: {}", p.name(), format_hand(p.hand()))?;
    }
    writeln!(out, "Boneyard: {} tiles", eng.boneyard().len())?;
    Ok(())
}
