use crate::board::{Board, Side};
use crate::errors::GameError;
use crate::game::{RoundEnd, RoundSummary};
use crate::player::{Move, Player};
use crate::tile::Tile;

/// Enumerates every legal move for a hand against the board.
///
/// On an empty board any tile may open the line and both ends are the same
/// place, so each tile is listed once, on [`Side::Right`].
///
/// # Examples
///
/// ```
/// use domino_engine::board::{Board, Side};
/// use domino_engine::player::Move;
/// use domino_engine::rules::legal_moves;
/// use domino_engine::tile::Tile;
///
/// let mut board = Board::new();
/// board.place(Tile::new(2, 5).unwrap(), Side::Right).unwrap();
/// let hand = [Tile::new(0, 0).unwrap(), Tile::new(5, 1).unwrap()];
/// assert_eq!(legal_moves(&hand, &board), vec![Move::new(1, Side::Right)]);
/// ```
pub fn legal_moves(hand: &[Tile], board: &Board) -> Vec<Move> {
    if board.is_empty() {
        return (0..hand.len())
            .map(|i| Move::new(i, Side::Right))
            .collect();
    }
    hand.iter()
        .enumerate()
        .flat_map(|(i, t)| {
            board
                .legal_sides(t)
                .into_iter()
                .map(move |side| Move::new(i, side))
        })
        .collect()
}

/// Checks a proposed move and returns the tile it would play.
///
/// # Errors
///
/// - [`GameError::TileIndexOutOfRange`] - no tile at that position
/// - [`GameError::IllegalPlacement`] - the tile does not fit that end
pub fn validate_placement(hand: &[Tile], board: &Board, mv: Move) -> Result<Tile, GameError> {
    let tile = *hand
        .get(mv.tile_index)
        .ok_or(GameError::TileIndexOutOfRange {
            index: mv.tile_index,
            hand_size: hand.len(),
        })?;
    if !board.can_place_on(&tile, mv.side) {
        return Err(GameError::IllegalPlacement {
            tile,
            side: mv.side,
        });
    }
    Ok(tile)
}

/// Points for emptying a hand: every other seat's pip total.
pub fn domino_points(pip_totals: &[u32], winner: usize) -> u32 {
    pip_totals
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != winner)
        .map(|(_, &t)| t)
        .sum()
}

/// Resolves a blocked round from each seat's pip total.
///
/// Returns the unique lowest seat and its bonus, or `None` when the lowest
/// total is shared. The bonus is the other seats' totals minus the winner's
/// own total.
///
/// # Examples
///
/// ```
/// use domino_engine::rules::blocked_outcome;
///
/// assert_eq!(blocked_outcome(&[12, 0]), Some((1, 12)));
/// assert_eq!(blocked_outcome(&[9, 2, 4]), Some((1, 11)));
/// assert_eq!(blocked_outcome(&[5, 5]), None);
/// ```
pub fn blocked_outcome(pip_totals: &[u32]) -> Option<(usize, u32)> {
    let min = *pip_totals.iter().min()?;
    let mut lowest = pip_totals
        .iter()
        .enumerate()
        .filter(|&(_, &t)| t == min)
        .map(|(i, _)| i);
    let winner = lowest.next()?;
    if lowest.next().is_some() {
        return None;
    }
    let others = domino_points(pip_totals, winner);
    Some((winner, others.saturating_sub(min)))
}

/// Scores a finished round, crediting the winner (if any) in place.
pub fn score_round(players: &mut [Player], end: RoundEnd, round: u32) -> RoundSummary {
    let pip_totals: Vec<u32> = players.iter().map(Player::pip_total).collect();
    let result = match end {
        RoundEnd::Domino { winner } => Some((winner, domino_points(&pip_totals, winner))),
        RoundEnd::Blocked => blocked_outcome(&pip_totals),
    };
    if let Some((winner, points)) = result {
        if let Some(p) = players.get_mut(winner) {
            p.add_score(points);
        }
    }
    RoundSummary {
        round,
        end,
        winner: result.map(|(w, _)| w),
        points: result.map_or(0, |(_, p)| p),
        pip_totals,
        final_hands: players.iter().map(|p| p.hand().to_vec()).collect(),
        scores: players.iter().map(Player::score).collect(),
    }
}

/// First seat, in seat order, at or above the target score.
pub fn game_winner(players: &[Player], target_score: u32) -> Option<usize> {
    players.iter().position(|p| p.score() >= target_score)
}
