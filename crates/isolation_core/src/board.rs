//! Board state for knight-move isolation.
//!
//! The board is a small grid where every cell a player has ever occupied
//! stays blocked for the rest of the game. A player who has no legal move on
//! their turn loses. The state is a plain value: `forecast_move` returns a
//! fresh `Board` and never touches the original, so search branches can hold
//! sibling states without aliasing.

use crate::movegen::legal_moves_into;
use crate::types::{Move, Player};

/// Maximum number of cells supported by the blocked-cell bitmask.
const MAX_CELLS: u32 = 128;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// One bit per cell (row-major); set bits are blocked.
    blocked: u128,
    /// Current cell of each player, `None` until the opening placement.
    locations: [Option<u8>; 2],
    to_move: Player,
}

impl Board {
    /// Creates an empty board with player one to move.
    ///
    /// # Panics
    /// Panics if `width * height` exceeds the 128-cell bitmask.
    pub fn new(width: u8, height: u8) -> Self {
        assert!(
            (width as u32) * (height as u32) <= MAX_CELLS,
            "board of {}x{} exceeds {} cells",
            width,
            height,
            MAX_CELLS
        );
        Self {
            width,
            height,
            blocked: 0,
            locations: [None, None],
            to_move: Player::One,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn active_player(&self) -> Player {
        self.to_move
    }

    /// Current (row, col) of `player`, `None` before the opening placement.
    pub fn player_location(&self, player: Player) -> Option<(i8, i8)> {
        self.locations[player.idx()].map(|cell| {
            let row = (cell / self.width) as i8;
            let col = (cell % self.width) as i8;
            (row, col)
        })
    }

    /// Number of cells never occupied by either player.
    pub fn blank_spaces(&self) -> u32 {
        let total = (self.width as u32) * (self.height as u32);
        total - self.blocked.count_ones()
    }

    pub fn in_bounds(&self, row: i8, col: i8) -> bool {
        row >= 0 && col >= 0 && (row as u8) < self.height && (col as u8) < self.width
    }

    pub fn is_blocked(&self, row: i8, col: i8) -> bool {
        self.blocked & self.cell_bit(row, col) != 0
    }

    /// Legal moves for `player` in enumeration (tie-break) order.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        let mut moves = Vec::with_capacity(8);
        legal_moves_into(self, player, &mut moves);
        moves
    }

    /// Legal moves for the player whose turn it is.
    pub fn active_legal_moves(&self) -> Vec<Move> {
        self.legal_moves(self.to_move)
    }

    /// Applies `mv` for the active player on a copy of this board and returns
    /// the copy. The landing cell becomes blocked and the turn passes.
    ///
    /// # Panics
    /// Panics if `mv` lies outside the board.
    pub fn forecast_move(&self, mv: Move) -> Board {
        let mut next = *self;
        next.blocked |= next.cell_bit(mv.row, mv.col);
        next.locations[next.to_move.idx()] = Some(next.cell_index(mv.row, mv.col));
        next.to_move = next.to_move.opponent();
        next
    }

    /// True if `player` is to move and has no legal move left.
    pub fn is_loser(&self, player: Player) -> bool {
        player == self.to_move && self.legal_moves(player).is_empty()
    }

    /// True if `player`'s opponent is to move and has no legal move left.
    pub fn is_winner(&self, player: Player) -> bool {
        let opponent = player.opponent();
        opponent == self.to_move && self.legal_moves(opponent).is_empty()
    }

    // ---- Position setup (the counterpart of a FEN loader) ----

    /// Puts `player` on (row, col) and blocks that cell. Does not pass the
    /// turn; combine with `set_to_move` when building a scenario.
    pub fn place_player(&mut self, player: Player, row: i8, col: i8) {
        self.blocked |= self.cell_bit(row, col);
        self.locations[player.idx()] = Some(self.cell_index(row, col));
    }

    /// Marks a cell as already visited.
    pub fn block(&mut self, row: i8, col: i8) {
        self.blocked |= self.cell_bit(row, col);
    }

    pub fn set_to_move(&mut self, player: Player) {
        self.to_move = player;
    }

    fn cell_index(&self, row: i8, col: i8) -> u8 {
        assert!(
            self.in_bounds(row, col),
            "cell ({}, {}) outside {}x{} board",
            row,
            col,
            self.width,
            self.height
        );
        (row as u8) * self.width + (col as u8)
    }

    fn cell_bit(&self, row: i8, col: i8) -> u128 {
        1u128 << self.cell_index(row, col)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
