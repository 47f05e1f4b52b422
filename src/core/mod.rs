//! Core value types: players, cells, boards, actions, RNG.
//!
//! Everything here is plain data. Game rules live in `rules`.

pub mod action;
pub mod board;
pub mod player;
pub mod rng;

pub use action::{Action, MoveRecord, BOARD_SIDE, CELL_COUNT};
pub use board::{Board, Cell, WINNING_LINES};
pub use player::Player;
pub use rng::{GameRng, GameRngState};
