//! Difficulty-tiered move selection.
//!
//! One function, one branch per tier:
//! - `Easy`: uniform choice among legal actions
//! - `Medium`: an independent coin flip picks Easy or Hard for this move
//! - `Hard`: the alpha-beta minimax action

use tracing::{debug, instrument, trace};

use crate::core::{Action, Board, GameRng, GameRngState};
use crate::error::{Error, Result};
use crate::rules::{actions, terminal};
use crate::search::minimax_ab;

use super::config::{PolicyConfig, DEFAULT_MEDIUM_RANDOM_PROBABILITY};
use super::difficulty::Difficulty;

/// Choose a move for the player to move at `difficulty`.
///
/// Randomness for Easy and Medium comes from `rng`. Fails with
/// `InvalidState` on a terminal board. The board is not modified.
///
/// ```
/// use tictactoe_ab::core::{Action, Board, GameRng};
/// use tictactoe_ab::policy::{ai_move, Difficulty};
///
/// let board: Board = "XX./OO./...".parse().unwrap();
/// let mut rng = GameRng::new(42);
/// assert_eq!(ai_move(&board, Difficulty::Hard, &mut rng).unwrap(), Action::new(0, 2));
/// ```
pub fn ai_move(board: &Board, difficulty: Difficulty, rng: &mut GameRng) -> Result<Action> {
    select_move(board, difficulty, DEFAULT_MEDIUM_RANDOM_PROBABILITY, rng)
}

#[instrument(level = "debug", skip(board, rng))]
fn select_move(
    board: &Board,
    difficulty: Difficulty,
    medium_random_probability: f64,
    rng: &mut GameRng,
) -> Result<Action> {
    if terminal(board) {
        return Err(Error::invalid_state("no move possible on a terminal board"));
    }
    let legal = actions(board);
    if legal.is_empty() {
        return Err(Error::invalid_state("no legal actions"));
    }

    let action = match difficulty {
        Difficulty::Easy => random_action(&legal, rng)?,
        Difficulty::Medium => {
            let random = rng.gen_bool(medium_random_probability);
            trace!(random, "medium tier coin flip");
            if random {
                random_action(&legal, rng)?
            } else {
                minimax_ab(board)?
            }
        }
        Difficulty::Hard => minimax_ab(board)?,
    };

    debug!(%action, %difficulty, "ai move chosen");
    Ok(action)
}

fn random_action(legal: &[Action], rng: &mut GameRng) -> Result<Action> {
    rng.choose(legal)
        .copied()
        .ok_or_else(|| Error::invalid_state("no legal actions"))
}

/// A computer player that owns its RNG and configuration.
///
/// Two `AiPlayer`s built from the same config make identical choices.
#[derive(Clone, Debug)]
pub struct AiPlayer {
    config: PolicyConfig,
    rng: GameRng,
}

impl AiPlayer {
    /// Create a player seeded from `config.seed`.
    pub fn new(config: PolicyConfig) -> Result<Self> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }

    /// Create a player that draws from an existing RNG stream.
    pub fn with_rng(config: PolicyConfig, rng: GameRng) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Choose a move using the configured Medium-tier probability.
    pub fn choose(&mut self, board: &Board, difficulty: Difficulty) -> Result<Action> {
        select_move(
            board,
            difficulty,
            self.config.medium_random_probability,
            &mut self.rng,
        )
    }

    /// Get the configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Snapshot of the RNG, for resuming a player later.
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
