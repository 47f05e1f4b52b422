//! Game rules over immutable boards.
//!
//! The search engine and the policy layer only ever see boards through
//! these functions:
//! - Legal actions and whose turn it is
//! - How an action produces a new board
//! - Win/draw detection and utility

pub mod engine;

pub use engine::{
    actions, game_result, initial_state, player, result, terminal, utility, winner, Actions,
    GameResult,
};
