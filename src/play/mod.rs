//! Computer-vs-computer play.
//!
//! - `self_play`: one game with a per-side difficulty, recorded move by move
//! - `series`: many games with outcome tallies

pub mod self_play;
pub mod series;

pub use self_play::{play_game, play_game_with, GameRecord};
pub use series::{play_series, Outcome, SeriesSummary};
