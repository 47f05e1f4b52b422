//! The two sides of a game.
//!
//! A `Player` is never stored on a board. Whose turn it is gets derived from
//! the mark counts (see `rules::player`).

use serde::{Deserialize, Serialize};

/// One of the two players. X always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Moves first and maximizes utility.
    X,
    /// Moves second and minimizes utility.
    O,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Utility of a win for this player, from X's perspective.
    ///
    /// ```
    /// use tictactoe_ab::core::Player;
    ///
    /// assert_eq!(Player::X.win_utility(), 1);
    /// assert_eq!(Player::O.win_utility(), -1);
    /// ```
    #[must_use]
    pub const fn win_utility(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }

    /// True if this player maximizes utility.
    #[must_use]
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Player::X)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}
