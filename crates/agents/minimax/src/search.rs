//! Depth-limited minimax and alpha-beta search.
//!
//! Both searches keep the evaluation perspective fixed on the searching
//! agent: maximizing layers pick the highest child value, minimizing layers
//! the lowest, and the heuristic is always asked "how good is this for the
//! agent". The time budget is checked at the top of every call; once it
//! expires the whole call stack unwinds through the `Timeout` error without
//! committing any partial value. Only the driver in `lib.rs` catches it.

use isolation_core::{Board, Player, SearchResult, TimeBudget};

use crate::eval::Strategy;

/// Cooperative cancellation signal raised when the time budget expires
/// mid-search. Not a user-facing error; it only travels up to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout;

/// Parameters shared by every frame of one search: the fixed evaluation
/// perspective, the strategy, the clock, and a node counter for statistics.
pub(crate) struct SearchContext<'a, 'b> {
    pub agent: Player,
    pub strategy: Strategy,
    pub budget: &'a TimeBudget<'b>,
    pub nodes: u64,
}

impl<'a, 'b> SearchContext<'a, 'b> {
    pub fn new(agent: Player, strategy: Strategy, budget: &'a TimeBudget<'b>) -> Self {
        Self {
            agent,
            strategy,
            budget,
            nodes: 0,
        }
    }

    fn check_clock(&mut self) -> Result<(), Timeout> {
        if self.budget.expired() {
            return Err(Timeout);
        }
        self.nodes += 1;
        Ok(())
    }
}

/// Plain depth-limited minimax.
///
/// Ties are broken by enumeration order: the first move reaching the best
/// value is kept. `best_move` is `None` only at depth-exhausted or terminal
/// leaves.
pub(crate) fn minimax(
    ctx: &mut SearchContext,
    board: &Board,
    depth: u32,
    maximizing: bool,
) -> Result<SearchResult, Timeout> {
    ctx.check_clock()?;

    let moves = board.active_legal_moves();
    if depth == 0 || moves.is_empty() {
        return Ok(SearchResult {
            value: ctx.strategy.score(board, ctx.agent),
            best_move: None,
        });
    }

    let mut best_move = None;
    let mut value = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for mv in moves {
        let next = board.forecast_move(mv);
        let child = minimax(ctx, &next, depth - 1, !maximizing)?;
        let improved = if maximizing {
            child.value > value
        } else {
            child.value < value
        };
        // The first child always becomes the candidate, so a node with legal
        // moves returns one even when every child is a proven loss and the
        // strict comparison never beats the infinite seed.
        if best_move.is_none() || improved {
            value = child.value;
            best_move = Some(mv);
        }
    }

    Ok(SearchResult { value, best_move })
}

/// Minimax with alpha-beta pruning.
///
/// Returns the same value as `minimax` for any completed call, but may
/// return a different equally-valued move: a pruned sibling is never
/// examined, so it can never become the recorded best. That divergence is
/// accepted, not a defect.
pub(crate) fn alphabeta(
    ctx: &mut SearchContext,
    board: &Board,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
) -> Result<SearchResult, Timeout> {
    ctx.check_clock()?;

    let moves = board.active_legal_moves();
    if depth == 0 || moves.is_empty() {
        return Ok(SearchResult {
            value: ctx.strategy.score(board, ctx.agent),
            best_move: None,
        });
    }

    let mut best_move = None;

    if maximizing {
        let mut value = f64::NEG_INFINITY;
        for mv in moves {
            let next = board.forecast_move(mv);
            let child = alphabeta(ctx, &next, depth - 1, alpha, beta, false)?;
            if best_move.is_none() || child.value > value {
                value = child.value;
                best_move = Some(mv);
            }
            alpha = alpha.max(child.value);
            if alpha >= beta {
                break;
            }
        }
        Ok(SearchResult { value, best_move })
    } else {
        let mut value = f64::INFINITY;
        for mv in moves {
            let next = board.forecast_move(mv);
            let child = alphabeta(ctx, &next, depth - 1, alpha, beta, true)?;
            if best_move.is_none() || child.value < value {
                value = child.value;
                best_move = Some(mv);
            }
            beta = beta.min(child.value);
            if alpha >= beta {
                break;
            }
        }
        Ok(SearchResult { value, best_move })
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
