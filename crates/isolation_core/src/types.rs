#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// A move to board coordinates (row, col).
///
/// The sentinel `Move::NONE` = (-1, -1) means "no legal move available" and
/// is what an agent returns when it has nothing to play (forfeit by the
/// game-loop's rules).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub row: i8,
    pub col: i8,
}

impl Move {
    /// Sentinel for "no move chosen".
    pub const NONE: Move = Move { row: -1, col: -1 };

    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// True if this is the (-1, -1) sentinel.
    pub const fn is_none(self) -> bool {
        self.row < 0 || self.col < 0
    }
}
