//! Legal-move enumeration for knight-move isolation.
//!
//! Enumeration order is deterministic: a placed player's moves follow
//! `KNIGHT_OFFSETS` order, an unplaced player's opening moves are row-major
//! over the blank cells. Search tie-breaks rely on this order.

use crate::board::Board;
use crate::types::{Move, Player};

/// Knight move offsets as (row delta, col delta).
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Appends the legal moves for `player` to `out` without clearing it.
///
/// A player that has not been placed yet may open on any blank cell.
pub fn legal_moves_into(board: &Board, player: Player, out: &mut Vec<Move>) {
    match board.player_location(player) {
        Some((row, col)) => {
            for (dr, dc) in KNIGHT_OFFSETS {
                let (nr, nc) = (row + dr, col + dc);
                if board.in_bounds(nr, nc) && !board.is_blocked(nr, nc) {
                    out.push(Move::new(nr, nc));
                }
            }
        }
        None => {
            for row in 0..board.height() as i8 {
                for col in 0..board.width() as i8 {
                    if !board.is_blocked(row, col) {
                        out.push(Move::new(row, col));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
