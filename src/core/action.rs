//! Move representation: a (row, column) coordinate plus a history record.
//!
//! Coordinates are plain `u8`s so an out-of-range action can still be
//! built and handed to `rules::result`, which rejects it.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Side length of the board.
pub const BOARD_SIDE: u8 = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A cell to mark, addressed by row and column in `[0, 2]`.
///
/// Ordering is row-major, which is the enumeration order used by
/// `rules::actions` and therefore the search's tie-break order.
///
/// ```
/// use tictactoe_ab::core::Action;
///
/// let center = Action::new(1, 1);
/// assert_eq!(center.index(), Some(4));
/// assert_eq!(Action::from_index(4), Some(center));
///
/// // Out-of-range actions are representable but have no index.
/// assert_eq!(Action::new(3, 0).index(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// Row, 0 at the top.
    pub row: u8,
    /// Column, 0 at the left.
    pub col: u8,
}

impl Action {
    /// Create an action. Coordinates are not checked here.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Build the action for a row-major cell index.
    ///
    /// Returns `None` for indices past the last cell.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self {
                row: (index / BOARD_SIDE as usize) as u8,
                col: (index % BOARD_SIDE as usize) as u8,
            })
        } else {
            None
        }
    }

    /// True if both coordinates lie on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIDE && self.col < BOARD_SIDE
    }

    /// Row-major cell index, or `None` when out of bounds.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.in_bounds() {
            Some(self.row as usize * BOARD_SIDE as usize + self.col as usize)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u8, u8)> for Action {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}

/// A move that was applied during a game.
///
/// The ordered list of these is all a UI needs to replay a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Ply number, starting at 0 for X's first move.
    pub ply: u32,

    /// The player who made the move.
    pub player: Player,

    /// The cell that was marked.
    pub action: Action,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(ply: u32, player: Player, action: Action) -> Self {
        Self {
            ply,
            player,
            action,
        }
    }
}
