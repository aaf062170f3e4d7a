pub mod board;
pub mod movegen;
pub mod time_control;
pub mod types;

// Re-export core game logic (not agent-specific)
pub use board::*;
pub use movegen::*;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Agent trait — implemented by all isolation agents (search, random, etc.)
// =============================================================================

/// Result of a single search call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Value of the position from the searching agent's perspective.
    pub value: f64,
    /// The best move found; `None` at depth-exhausted or terminal leaves.
    pub best_move: Option<Move>,
}

/// Trait that all isolation agents must implement.
///
/// An agent is queried once per turn with the current board, the legal moves
/// it may play (in tie-break order), and the time budget for this turn. It
/// must return before the budget runs out; `Move::NONE` means it found no
/// move and forfeits.
pub trait Agent: Send {
    /// Picks a move within the given time budget.
    fn choose_move(&mut self, board: &Board, legal_moves: &[Move], budget: &TimeBudget) -> Move;

    /// Agent name for match reporting.
    fn name(&self) -> &str;

    /// Reset internal state for a new game (counters, caches, etc.)
    fn new_game(&mut self) {}
}
