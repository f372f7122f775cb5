//! # domino CLI Library
//!
//! Command-line front end for the `domino-engine` rules engine: hotseat play
//! on the terminal, deal inspection and configuration display.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `play`: Hotseat game for two to four players
//! - `deal`: Deal a single round for inspection
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, DominoCli};
use commands::{handle_cfg_command, handle_deal_command, handle_play_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses `args` (program name first) and dispatches to the subcommand
/// handler. Game output goes to `out`, diagnostics to `err`.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors. Ending a `play` session with
/// `q` or end of input counts as success.
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["domino", "deal", "--seed", "42"];
/// let code = domino_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`], reading interactive input from `input` instead of stdin.
///
/// ```
/// use std::io::Cursor;
/// let mut input = Cursor::new(b"q\n".to_vec());
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = domino_cli::run_with_input(
///     ["domino", "play", "--players", "Ana,Ben", "--seed", "3"],
///     &mut input,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("(quit)"));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "deal", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match DominoCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Dominoes CLI");
            write_or_exit!(err, "Usage: domino <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: domino --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Play {
            players,
            target,
            seed,
            log,
        } => match config::load() {
            Ok(cfg) => handle_play_command(&cfg, players, target, seed, log, out, err, input),
            Err(e) => Err(e.into()),
        },
        Commands::Deal { players, seed } => match config::load() {
            Ok(cfg) => handle_deal_command(&cfg, players, seed, out),
            Err(e) => Err(e.into()),
        },
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
