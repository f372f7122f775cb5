//! Process exit codes returned by `domino`.
//!
//! Ending a `play` session early (`q` or end of input) is a normal exit.

pub const SUCCESS: i32 = 0;

/// Usage, configuration, engine and I/O failures alike.
pub const ERROR: i32 = 2;
