//! Random Move Isolation Agent
//!
//! Picks uniformly among the legal moves it is handed. Useful for:
//! - Exercising the game loop and agent plumbing
//! - Baseline comparisons (any search agent should easily beat this)

use isolation_core::{Agent, Board, Move, TimeBudget};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// An agent that plays random legal moves.
///
/// It never consults the board or the clock; with no legal moves it returns
/// the sentinel like every other agent.
#[derive(Debug, Clone, Default)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for RandomAgent {
    fn choose_move(&mut self, _board: &Board, legal_moves: &[Move], _budget: &TimeBudget) -> Move {
        legal_moves
            .choose(&mut thread_rng())
            .copied()
            .unwrap_or(Move::NONE)
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
