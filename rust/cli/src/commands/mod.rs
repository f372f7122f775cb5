//! Command handlers for the `domino` CLI.
//!
//! Each command lives in its own module and follows the same shape:
//!
//! - Public handler: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) are
//!   passed in, so tests can drive handlers with in-memory buffers
//! - Errors propagate through [`crate::error::CliError`]

mod cfg;
mod deal;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
