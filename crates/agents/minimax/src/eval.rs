//! Heuristic evaluation of non-terminal positions.
//!
//! Every strategy shares one contract: `score(board, player)` returns +inf
//! for a position `player` has already won, -inf for one it has lost, and a
//! finite heuristic otherwise. Scores are deterministic in (board, player)
//! and never look at search depth or the clock.

use isolation_core::{Board, Player, KNIGHT_OFFSETS};
use serde::{Deserialize, Serialize};

/// Opponent-mobility weight for the plain mobility differential. Values
/// above 1 favor restricting the opponent over growing our own mobility;
/// 2.2 came out ahead in self-play tuning.
const AGGR_RATIO: f64 = 2.2;

/// Phase-aware weights: calm while the board is open, aggressive once fewer
/// than a third of the cells remain blank.
const AGGRESSIVE_START: f64 = 1.5;
const AGGRESSIVE_END: f64 = 3.2;
const ENDGAME_BLANK_FRACTION: f64 = 1.0 / 3.0;

/// Center-biased mobility: weight and positional bonuses.
const CENTER_AGGR_RATIO: f64 = 2.0;
const CENTER_BONUS: f64 = 1.5;
const NEAR_CENTER_BONUS: f64 = 0.5;

/// Bonuses for the phase-aware + center-biased combination.
const PHASE_CENTER_BONUS: f64 = 2.0;
const PHASE_NEAR_CENTER_BONUS: f64 = 0.1;

/// Selectable evaluation strategies. Peers over one contract; picked once at
/// agent construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// `my_moves - 2.2 * opp_moves`.
    MobilityDiff,
    /// Mobility differential whose weight hardens as the board fills.
    PhaseAware,
    /// Mobility differential plus a bonus for holding the center.
    #[default]
    CenterBias,
    /// Phase-aware weight and center bonus combined.
    PhaseCenter,
    /// Manhattan distance from the opponent.
    OpponentDistance,
}

impl Strategy {
    /// Scores `board` for `player`: +inf if won, -inf if lost, otherwise the
    /// strategy's finite heuristic.
    pub fn score(self, board: &Board, player: Player) -> f64 {
        if board.is_loser(player) {
            return f64::NEG_INFINITY;
        }
        if board.is_winner(player) {
            return f64::INFINITY;
        }
        match self {
            Strategy::MobilityDiff => mobility_diff(board, player),
            Strategy::PhaseAware => phase_aware(board, player),
            Strategy::CenterBias => center_bias(board, player),
            Strategy::PhaseCenter => phase_center(board, player),
            Strategy::OpponentDistance => opponent_distance(board, player),
        }
    }
}

fn mobility_counts(board: &Board, player: Player) -> (f64, f64) {
    let my_moves = board.legal_moves(player).len() as f64;
    let opp_moves = board.legal_moves(player.opponent()).len() as f64;
    (my_moves, opp_moves)
}

fn mobility_diff(board: &Board, player: Player) -> f64 {
    let (my_moves, opp_moves) = mobility_counts(board, player);
    my_moves - AGGR_RATIO * opp_moves
}

/// True while more than a third of the cells are still blank.
fn is_early_game(board: &Board) -> bool {
    let total = (board.width() as f64) * (board.height() as f64);
    board.blank_spaces() as f64 > total * ENDGAME_BLANK_FRACTION
}

fn phase_aware(board: &Board, player: Player) -> f64 {
    let (my_moves, opp_moves) = mobility_counts(board, player);
    let ratio = if is_early_game(board) {
        AGGRESSIVE_START
    } else {
        AGGRESSIVE_END
    };
    my_moves - ratio * opp_moves
}

/// Positional bonus for sitting on the center cell, or a smaller one for the
/// cells a single knight move away from it.
fn center_bonus(board: &Board, player: Player, on_center: f64, near_center: f64) -> f64 {
    let center = ((board.height() / 2) as i8, (board.width() / 2) as i8);
    match board.player_location(player) {
        Some(loc) if loc == center => on_center,
        Some((row, col)) => {
            let near = KNIGHT_OFFSETS
                .iter()
                .any(|&(dr, dc)| (center.0 + dr, center.1 + dc) == (row, col));
            if near {
                near_center
            } else {
                0.0
            }
        }
        None => 0.0,
    }
}

fn center_bias(board: &Board, player: Player) -> f64 {
    let (my_moves, opp_moves) = mobility_counts(board, player);
    my_moves - CENTER_AGGR_RATIO * opp_moves
        + center_bonus(board, player, CENTER_BONUS, NEAR_CENTER_BONUS)
}

fn phase_center(board: &Board, player: Player) -> f64 {
    phase_aware(board, player)
        + center_bonus(board, player, PHASE_CENTER_BONUS, PHASE_NEAR_CENTER_BONUS)
}

/// Distance heuristic: run from the adversary and keep open space around.
fn opponent_distance(board: &Board, player: Player) -> f64 {
    match (
        board.player_location(player),
        board.player_location(player.opponent()),
    ) {
        (Some((my_row, my_col)), Some((opp_row, opp_col))) => {
            ((my_row - opp_row).abs() + (my_col - opp_col).abs()) as f64
        }
        _ => 0.0,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
