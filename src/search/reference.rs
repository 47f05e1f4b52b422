//! Plain minimax without pruning.
//!
//! Explores the whole game tree below a board. Used to check that the pruned
//! search returns the same values, and as the baseline in benchmarks.

use crate::core::{Action, Board, CELL_COUNT};
use crate::error::{Error, Result};
use crate::rules::{actions, player, result, terminal, utility};

use super::stats::SearchStats;

/// Minimax value of `board` from X's perspective, with no pruning.
pub fn minimax_value(board: &Board) -> Result<i32> {
    let mut stats = SearchStats::new();
    value(board, &mut stats)
}

/// Same as `minimax_value`, also returning how many nodes were visited.
pub fn minimax_value_with_stats(board: &Board) -> Result<(i32, SearchStats)> {
    let mut stats = SearchStats::new();
    let v = value(board, &mut stats)?;
    Ok((v, stats))
}

/// Every action whose unpruned value equals the board's minimax value.
///
/// Fails with `InvalidState` on a terminal board.
pub fn best_actions(board: &Board) -> Result<Vec<Action>> {
    if terminal(board) {
        return Err(Error::invalid_state("cannot rank actions on a terminal board"));
    }

    let target = minimax_value(board)?;
    let mut best = Vec::new();
    for action in actions(board) {
        if minimax_value(&result(board, action)?)? == target {
            best.push(action);
        }
    }
    Ok(best)
}

fn value(board: &Board, stats: &mut SearchStats) -> Result<i32> {
    let is_terminal = terminal(board);
    stats.visit(CELL_COUNT - board.empty_count(), is_terminal);
    if is_terminal {
        return Ok(utility(board));
    }

    let maximizing = player(board).is_maximizing();
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for action in actions(board) {
        let v = value(&result(board, action)?, stats)?;
        best = if maximizing { best.max(v) } else { best.min(v) };
    }
    Ok(best)
}
