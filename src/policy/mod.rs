//! Computer move selection by difficulty tier.
//!
//! - `difficulty`: the `Difficulty` enum (Easy, Medium, Hard)
//! - `config`: seed and Medium-tier probability
//! - `ai`: `ai_move` and the stateful `AiPlayer`

pub mod ai;
pub mod config;
pub mod difficulty;

pub use ai::{ai_move, AiPlayer};
pub use config::{PolicyConfig, DEFAULT_MEDIUM_RANDOM_PROBABILITY};
pub use difficulty::Difficulty;
