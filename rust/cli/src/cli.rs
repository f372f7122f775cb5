//! Command-line argument definitions for the `domino` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "domino",
    version,
    about = "Block dominoes on the terminal (double-six set)"
)]
pub struct DominoCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Hotseat game: every seat plays from this terminal
    Play {
        /// Comma-separated player names, in seat order
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        players: Vec<String>,
        /// Score that ends the game
        #[arg(long)]
        target: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Append one JSON line per finished round to this file
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Deal a single round and show every hand
    Deal {
        /// Number of seats
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..))]
        players: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        DominoCli::command().debug_assert();
    }

    #[test]
    fn play_accepts_comma_separated_players() {
        let cli = DominoCli::try_parse_from([
            "domino", "play", "--players", "Ana,Ben,Cy", "--target", "50",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Play {
                players, target, ..
            } => {
                assert_eq!(players, vec!["Ana", "Ben", "Cy"]);
                assert_eq!(target, Some(50));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn deal_rejects_a_single_player() {
        assert!(DominoCli::try_parse_from(["domino", "deal", "--players", "1"]).is_err());
    }
}
