//! Transition and scoring functions over `Board` values.
//!
//! These are the only functions the search and the UI need:
//! - Whose turn it is and which cells are legal
//! - How an action produces the next board
//! - Win/draw detection and terminal utility

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Action, Board, Player, CELL_COUNT, WINNING_LINES};
use crate::error::{Error, Result};

/// Legal actions of a board, in row-major order.
pub type Actions = SmallVec<[Action; CELL_COUNT]>;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One player completed a line.
    Winner(Player),
    /// Board filled with no line.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Utility from X's perspective.
    #[must_use]
    pub fn utility(&self) -> i32 {
        match self {
            GameResult::Winner(p) => p.win_utility(),
            GameResult::Draw => 0,
        }
    }
}

/// The starting position.
#[must_use]
pub fn initial_state() -> Board {
    Board::empty()
}

/// The player to move: X when the mark counts are equal, O otherwise.
///
/// Well-defined for any board satisfying the count invariant, terminal or not.
#[must_use]
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Coordinates of every empty cell, in row-major order.
///
/// A won board that still has empty cells lists them; use `terminal` to
/// decide whether play continues.
#[must_use]
pub fn actions(board: &Board) -> Actions {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .filter_map(|(i, _)| Action::from_index(i))
        .collect()
}

/// The board after the player to move marks `action`.
///
/// Fails with `InvalidAction` when the cell is occupied or off the board.
/// The input board is never altered.
pub fn result(board: &Board, action: Action) -> Result<Board> {
    match action.index() {
        Some(index) if board.cells()[index].is_empty() => {
            Ok(board.with_mark(index, player(board)))
        }
        _ => {
            debug!(%action, "rejected action on occupied or out-of-range cell");
            Err(Error::InvalidAction { action })
        }
    }
}

/// The player owning a complete line, if any.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let owner = cells[a].player()?;
        (cells[b] == cells[a] && cells[c] == cells[a]).then_some(owner)
    })
}

/// True iff someone has won or no empty cell remains.
#[must_use]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// +1 if X has won, -1 if O has won, 0 otherwise.
///
/// Only meaningful on a terminal board; callers check `terminal` first.
#[must_use]
pub fn utility(board: &Board) -> i32 {
    winner(board).map_or(0, Player::win_utility)
}

/// The outcome of a finished game, or `None` if play continues.
#[must_use]
pub fn game_result(board: &Board) -> Option<GameResult> {
    match winner(board) {
        Some(p) => Some(GameResult::Winner(p)),
        None if board.is_full() => Some(GameResult::Draw),
        None => None,
    }
}
