//! Input parsing and validation for interactive commands.
//!
//! This module turns what a player types during `play` into typed choices:
//! - Tile selection by 1-based position in the hand
//! - Side selection (left/right)
//! - Quit commands
//!
//! Parsing only checks the shape of the input. Whether a tile actually fits
//! the board is decided by the engine.

use domino_engine::board::Side;

/// Result of parsing one line of player input.
#[derive(Debug, PartialEq)]
pub enum ParseResult<T> {
    /// Well-formed choice
    Value(T),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

fn is_quit(input: &str) -> bool {
    matches!(input, "q" | "quit")
}

/// Parse a tile choice. Players count from 1; the returned index is 0-based.
///
/// # Example
///
/// ```rust
/// # use domino_cli::validation::{parse_tile_choice, ParseResult};
/// assert_eq!(parse_tile_choice("2", 7), ParseResult::Value(1));
/// assert_eq!(parse_tile_choice("Q", 7), ParseResult::Quit);
/// assert!(matches!(parse_tile_choice("8", 7), ParseResult::Invalid(_)));
/// ```
pub fn parse_tile_choice(input: &str, hand_size: usize) -> ParseResult<usize> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if is_quit(&input) {
        return ParseResult::Quit;
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=hand_size).contains(&n) => ParseResult::Value(n - 1),
        Ok(n) => ParseResult::Invalid(format!(
            "Tile number {} out of range (1-{})",
            n, hand_size
        )),
        Err(_) => ParseResult::Invalid(format!("Unrecognized tile number: {}", input)),
    }
}

/// Parse a side: `l`/`left` or `r`/`right`, case-insensitive.
///
/// ```rust
/// # use domino_cli::validation::{parse_side, ParseResult};
/// use domino_engine::board::Side;
/// assert_eq!(parse_side("L"), ParseResult::Value(Side::Left));
/// assert_eq!(parse_side("right"), ParseResult::Value(Side::Right));
/// ```
pub fn parse_side(input: &str) -> ParseResult<Side> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => ParseResult::Invalid("Empty input".to_string()),
        "l" | "left" => ParseResult::Value(Side::Left),
        "r" | "right" => ParseResult::Value(Side::Right),
        s if is_quit(s) => ParseResult::Quit,
        other => ParseResult::Invalid(format!("Unrecognized side: {} (use l or r)", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_choice_bounds() {
        assert_eq!(parse_tile_choice("1", 3), ParseResult::Value(0));
        assert_eq!(parse_tile_choice(" 3 ", 3), ParseResult::Value(2));
        assert!(matches!(parse_tile_choice("0", 3), ParseResult::Invalid(_)));
        assert!(matches!(parse_tile_choice("4", 3), ParseResult::Invalid(_)));
        assert!(matches!(parse_tile_choice("-1", 3), ParseResult::Invalid(_)));
    }

    #[test]
    fn tile_choice_rejects_garbage() {
        match parse_tile_choice("six", 7) {
            ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
            other => panic!("Expected Invalid, got {:?}", other),
        }
        assert!(matches!(parse_tile_choice("", 7), ParseResult::Invalid(_)));
    }

    #[test]
    fn quit_is_accepted_everywhere() {
        assert_eq!(parse_tile_choice("quit", 7), ParseResult::Quit);
        assert_eq!(parse_side("q"), ParseResult::Quit);
    }

    #[test]
    fn side_parsing() {
        assert_eq!(parse_side("LEFT"), ParseResult::Value(Side::Left));
        assert_eq!(parse_side("r"), ParseResult::Value(Side::Right));
        assert!(matches!(parse_side("up"), ParseResult::Invalid(_)));
    }
}
