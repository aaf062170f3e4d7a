//! Minimax Search Agent for Isolation
//!
//! A time-budgeted, depth-limited game-tree search agent. The driver wraps
//! plain minimax or alpha-beta in an iterative-deepening loop and always
//! has a legal answer ready when the clock runs out: each fully completed
//! depth overwrites the best move, and the depth interrupted by the timeout
//! is discarded whole.

mod config;
mod eval;
mod search;

use isolation_core::{Agent, Board, Move, SearchResult, TimeBudget};
use tracing::debug;

pub use config::{ConfigError, SearchConfig, SearchMethod};
pub use eval::Strategy;
pub use search::Timeout;

use search::{alphabeta, minimax, SearchContext};

/// Game-playing agent choosing moves with depth-limited minimax or
/// alpha-beta under a per-turn time budget.
///
/// With iterative deepening on, depths are searched strictly in order
/// starting at 1; the move returned is always the one found by the last
/// depth that finished before the budget expired. An interrupted depth may
/// have explored only a biased subset of the root's children, so its
/// partial result is never trusted. If even depth 1 is interrupted, the
/// agent returns `Move::NONE` and forfeits.
#[derive(Debug, Clone, Default)]
pub struct SearchAgent {
    config: SearchConfig,
    /// Nodes visited by the most recent `choose_move`, for statistics.
    nodes: u64,
}

impl SearchAgent {
    /// Builds an agent, rejecting invalid configuration up front.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, nodes: 0 })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Nodes visited during the last move request.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Runs the configured search method once at a fixed depth, maximizing
    /// for the board's active player. Returns `Err(Timeout)` if the budget
    /// expired before the search completed; no partial result survives.
    pub fn search(
        &mut self,
        board: &Board,
        depth: u32,
        budget: &TimeBudget,
    ) -> Result<SearchResult, Timeout> {
        let mut ctx = SearchContext::new(board.active_player(), self.config.strategy, budget);
        let outcome = match self.config.method {
            SearchMethod::Minimax => minimax(&mut ctx, board, depth, true),
            SearchMethod::Alphabeta => {
                alphabeta(&mut ctx, board, depth, f64::NEG_INFINITY, f64::INFINITY, true)
            }
        };
        self.nodes += ctx.nodes;
        outcome
    }
}

impl Agent for SearchAgent {
    fn choose_move(&mut self, board: &Board, legal_moves: &[Move], budget: &TimeBudget) -> Move {
        self.nodes = 0;
        if legal_moves.is_empty() {
            return Move::NONE;
        }

        let mut best = Move::NONE;

        // Deeper than the remaining blank cells the game tree cannot go, so
        // deepening stops there even if the clock never fires.
        let max_depth = board.blank_spaces().max(1);
        let mut depth = if self.config.iterative {
            1
        } else {
            self.config.search_depth
        };

        loop {
            match self.search(board, depth, budget) {
                Ok(result) => {
                    best = result.best_move.unwrap_or(Move::NONE);
                    debug!(depth, value = result.value, "depth completed");
                    if !self.config.iterative || depth >= max_depth {
                        break;
                    }
                    depth += 1;
                }
                Err(Timeout) => {
                    debug!(depth, "budget expired, keeping last completed depth");
                    break;
                }
            }
        }

        best
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
