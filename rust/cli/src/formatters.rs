//! Tile, board and action formatters for terminal display.
//!
//! Pure functions turning engine values into the lines the `play` and `deal`
//! commands print. Hands are shown with 1-based positions, which is also what
//! the player types to pick a tile.
//!
//! ## Example
//!
//! ```rust
//! use domino_engine::tile::Tile;
//! use domino_cli::formatters::{format_hand, format_tile};
//!
//! let hand = [Tile::new(0, 3).unwrap(), Tile::new(5, 6).unwrap()];
//! assert_eq!(format_tile(&hand[1]), "[5|6]");
//! assert_eq!(format_hand(&hand), "1:[0|3] 2:[5|6]");
//! ```

use domino_engine::board::Board;
use domino_engine::game::{RoundEnd, RoundSummary, TurnAction};
use domino_engine::player::Player;
use domino_engine::tile::Tile;

pub fn format_tile(tile: &Tile) -> String {
    tile.to_string()
}

/// Hand with 1-based positions: `1:[0|3] 2:[5|6]`.
pub fn format_hand(hand: &[Tile]) -> String {
    if hand.is_empty() {
        return "(no tiles)".to_string();
    }
    hand.iter()
        .enumerate()
        .map(|(i, t)| format!("{}:{}", i + 1, format_tile(t)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Line of play plus its open ends.
pub fn format_board(board: &Board) -> String {
    match (board.left_end(), board.right_end()) {
        (Ok(l), Ok(r)) => format!("{}  (ends: {} | {})", board, l, r),
        _ => board.to_string(),
    }
}

fn name_of(players: &[Player], seat: usize) -> &str {
    players.get(seat).map_or("?", Player::name)
}

pub fn format_action(action: &TurnAction, players: &[Player]) -> String {
    match action {
        TurnAction::Placed { player, tile, side } => format!(
            "{} plays {} on the {}",
            name_of(players, *player),
            format_tile(tile),
            side
        ),
        TurnAction::Passed { player } => {
            format!("{} cannot play and passes", name_of(players, *player))
        }
    }
}

pub fn format_round_summary(summary: &RoundSummary, players: &[Player]) -> String {
    match (summary.end, summary.winner) {
        (RoundEnd::Domino { winner }, _) => format!(
            "Round {}: {} is out (+{})",
            summary.round,
            name_of(players, winner),
            summary.points
        ),
        (RoundEnd::Blocked, Some(winner)) => format!(
            "Round {} blocked: {} has the lightest hand (+{})",
            summary.round,
            name_of(players, winner),
            summary.points
        ),
        (RoundEnd::Blocked, None) => format!(
            "Round {} blocked: tie for the lightest hand, no points",
            summary.round
        ),
    }
}

/// `Ana 12, Ben 0`
pub fn format_scores(players: &[Player]) -> String {
    players
        .iter()
        .map(|p| format!("{} {}", p.name(), p.score()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use domino_engine::board::Side;

    fn t(a: u8, b: u8) -> Tile {
        Tile::new(a, b).unwrap()
    }

    fn roster() -> Vec<Player> {
        vec![Player::new(0, "Ana"), Player::new(1, "Ben")]
    }

    #[test]
    fn board_shows_open_ends() {
        let mut board = Board::new();
        assert_eq!(format_board(&board), "(empty)");
        board.place(t(2, 5), Side::Right).unwrap();
        board.place(t(5, 5), Side::Right).unwrap();
        assert_eq!(format_board(&board), "[2|5] [5|5]  (ends: 2 | 5)");
    }

    #[test]
    fn empty_hand() {
        assert_eq!(format_hand(&[]), "(no tiles)");
    }

    #[test]
    fn actions_use_player_names() {
        let players = roster();
        let placed = TurnAction::Placed {
            player: 1,
            tile: t(3, 4),
            side: Side::Left,
        };
        assert_eq!(format_action(&placed, &players), "Ben plays [3|4] on the left");
        let passed = TurnAction::Passed { player: 0 };
        assert_eq!(format_action(&passed, &players), "Ana cannot play and passes");
    }

    #[test]
    fn round_summaries() {
        let players = roster();
        let mut s = RoundSummary {
            round: 2,
            end: RoundEnd::Blocked,
            winner: None,
            points: 0,
            pip_totals: vec![5, 5],
            final_hands: vec![vec![t(1, 4)], vec![t(2, 3)]],
            scores: vec![0, 0],
        };
        assert!(format_round_summary(&s, &players).contains("tie"));
        s.winner = Some(0);
        s.points = 3;
        assert!(format_round_summary(&s, &players).contains("Ana has the lightest hand (+3)"));
        s.end = RoundEnd::Domino { winner: 1 };
        s.winner = Some(1);
        assert_eq!(format_round_summary(&s, &players), "Round 2: Ben is out (+3)");
        assert_eq!(format_scores(&players), "Ana 0, Ben 0");
    }
}
