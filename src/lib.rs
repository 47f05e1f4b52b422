//! # tictactoe-ab
//!
//! Tic-Tac-Toe with a computer opponent in three difficulty tiers, the top
//! tier being game-theoretically optimal via minimax with alpha-beta pruning.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: A `Board` is a `Copy` value. Applying an action
//!    returns a new board; no board is ever mutated in place.
//!
//! 2. **Derived Turn**: Whose turn it is comes from the mark counts, never
//!    from stored state.
//!
//! 3. **Deterministic Search**: Actions are enumerated row-major and ties go
//!    to the first optimal action, so the same board always gets the same move.
//!
//! ## Modules
//!
//! - `core`: Players, cells, boards, actions, RNG
//! - `rules`: Transition, terminal and utility functions
//! - `search`: Alpha-beta minimax and the unpruned reference
//! - `policy`: Difficulty tiers and computer move selection
//! - `play`: Computer-vs-computer games and series
//!
//! ## Example
//!
//! ```
//! use tictactoe_ab::{ai_move, initial_state, result, terminal, Difficulty, GameRng};
//!
//! let mut rng = GameRng::new(7);
//! let mut board = initial_state();
//! while !terminal(&board) {
//!     let action = ai_move(&board, Difficulty::Hard, &mut rng).unwrap();
//!     board = result(&board, action).unwrap();
//! }
//! assert_eq!(tictactoe_ab::utility(&board), 0);
//! ```

pub mod core;
pub mod error;
pub mod play;
pub mod policy;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Action, Board, Cell, GameRng, GameRngState, MoveRecord, Player};

pub use crate::error::{Error, Result};

pub use crate::rules::{
    actions, game_result, initial_state, player, result, terminal, utility, winner, Actions,
    GameResult,
};

pub use crate::search::{minimax_ab, minimax_ab_with_stats, minimax_value, SearchOutcome, SearchStats};

pub use crate::policy::{ai_move, AiPlayer, Difficulty, PolicyConfig};

pub use crate::play::{play_game, play_series, GameRecord, Outcome, SeriesSummary};
