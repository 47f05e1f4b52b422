//! Minimax with alpha-beta pruning.
//!
//! `max_value` and `min_value` are mutually recursive. `alpha` is the best
//! value the maximizer can already guarantee on the current path, `beta`
//! the best the minimizer can. A branch is abandoned once its value can no
//! longer affect the choice made by an ancestor.
//!
//! Actions are tried in row-major order, and the root only replaces its
//! current choice on a strictly better value, so equal-valued actions
//! resolve to the first one in that order.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{Action, Board, Player};
use crate::error::{Error, Result};
use crate::rules::{actions, player, result, terminal, utility};

use super::stats::SearchStats;

/// Bound larger than any utility. `-INFINITY` is the matching lower bound.
pub const INFINITY: i32 = i32::MAX;

/// The action chosen by a search together with its value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Optimal action for the player to move.
    pub action: Action,

    /// Minimax value of the board, from X's perspective.
    pub value: i32,

    /// Counters collected during the search.
    pub stats: SearchStats,
}

/// The value-optimal action for the player to move.
///
/// Fails with `InvalidState` on a terminal board.
///
/// ```
/// use tictactoe_ab::core::{Action, Board};
/// use tictactoe_ab::search::minimax_ab;
///
/// let board: Board = "XX./OO./...".parse().unwrap();
/// assert_eq!(minimax_ab(&board).unwrap(), Action::new(0, 2));
/// ```
pub fn minimax_ab(board: &Board) -> Result<Action> {
    minimax_ab_with_stats(board).map(|outcome| outcome.action)
}

/// Run the pruned search and return the action, its value and statistics.
#[instrument(level = "debug", skip(board), fields(to_move = %player(board)))]
pub fn minimax_ab_with_stats(board: &Board) -> Result<SearchOutcome> {
    if terminal(board) {
        return Err(Error::invalid_state("cannot choose an action on a terminal board"));
    }

    let start = Instant::now();
    let mut stats = SearchStats::new();
    stats.visit(ply_of(board), false);

    let to_move = player(board);
    let mut alpha = -INFINITY;
    let mut beta = INFINITY;
    let mut best: Option<(Action, i32)> = None;

    for action in actions(board) {
        let child = result(board, action)?;
        let value = match to_move {
            Player::X => min_value(&child, alpha, beta, &mut stats)?,
            Player::O => max_value(&child, alpha, beta, &mut stats)?,
        };

        let improves = match best {
            None => true,
            Some((_, current)) if to_move.is_maximizing() => value > current,
            Some((_, current)) => value < current,
        };
        if improves {
            best = Some((action, value));
        }

        if to_move.is_maximizing() {
            alpha = alpha.max(value);
        } else {
            beta = beta.min(value);
        }
    }

    let (action, value) =
        best.ok_or_else(|| Error::invalid_state("no legal actions on a non-terminal board"))?;
    stats.time_us = start.elapsed().as_micros() as u64;

    debug!(%action, value, %stats, "search complete");

    Ok(SearchOutcome {
        action,
        value,
        stats,
    })
}

/// Value of `board` when X (the maximizer) is to move.
pub fn max_value(board: &Board, mut alpha: i32, beta: i32, stats: &mut SearchStats) -> Result<i32> {
    let is_terminal = terminal(board);
    stats.visit(ply_of(board), is_terminal);
    if is_terminal {
        return Ok(utility(board));
    }

    let mut best = -INFINITY;
    for action in actions(board) {
        let value = min_value(&result(board, action)?, alpha, beta, stats)?;
        best = best.max(value);
        alpha = alpha.max(best);
        if best >= beta {
            stats.cutoffs += 1;
            break;
        }
    }
    Ok(best)
}

/// Value of `board` when O (the minimizer) is to move.
pub fn min_value(board: &Board, alpha: i32, mut beta: i32, stats: &mut SearchStats) -> Result<i32> {
    let is_terminal = terminal(board);
    stats.visit(ply_of(board), is_terminal);
    if is_terminal {
        return Ok(utility(board));
    }

    let mut best = INFINITY;
    for action in actions(board) {
        let value = max_value(&result(board, action)?, alpha, beta, stats)?;
        best = best.min(value);
        beta = beta.min(best);
        if best <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }
    Ok(best)
}

fn ply_of(board: &Board) -> usize {
    board.count(Player::X) + board.count(Player::O)
}
