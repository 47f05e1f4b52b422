//! Adversarial search over the game tree.
//!
//! ## Overview
//!
//! - `minimax`: minimax with alpha-beta pruning, the engine behind the Hard tier
//! - `reference`: unpruned minimax, the ground truth the pruned search must agree with
//! - `stats`: node, cutoff and timing counters
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe_ab::rules::initial_state;
//! use tictactoe_ab::search::{minimax_ab_with_stats, minimax_value};
//!
//! let board = initial_state();
//! let outcome = minimax_ab_with_stats(&board).unwrap();
//!
//! // Perfect play from the empty board is a draw.
//! assert_eq!(outcome.value, 0);
//! assert_eq!(outcome.value, minimax_value(&board).unwrap());
//! ```

pub mod minimax;
pub mod reference;
pub mod stats;

pub use minimax::{max_value, min_value, minimax_ab, minimax_ab_with_stats, SearchOutcome, INFINITY};
pub use reference::{best_actions, minimax_value, minimax_value_with_stats};
pub use stats::SearchStats;
