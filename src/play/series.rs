//! Repeated computer-vs-computer games with outcome tallies.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::core::{GameRng, Player};
use crate::error::Result;
use crate::policy::{AiPlayer, Difficulty, PolicyConfig};
use crate::rules::GameResult;

use super::self_play::play_game_with;

/// Outcome of one game, used as a tally key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
}

impl From<GameResult> for Outcome {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::Winner(Player::X) => Outcome::XWins,
            GameResult::Winner(Player::O) => Outcome::OWins,
            GameResult::Draw => Outcome::Draw,
        }
    }
}

/// Tallies from a series of games between two fixed difficulties.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Difficulty X played at.
    pub x_difficulty: Difficulty,

    /// Difficulty O played at.
    pub o_difficulty: Difficulty,

    /// Games played.
    pub games: u32,

    tallies: FxHashMap<Outcome, u32>,
}

impl SeriesSummary {
    fn new(x_difficulty: Difficulty, o_difficulty: Difficulty) -> Self {
        Self {
            x_difficulty,
            o_difficulty,
            games: 0,
            tallies: FxHashMap::default(),
        }
    }

    fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        *self.tallies.entry(outcome).or_insert(0) += 1;
    }

    /// Number of games that ended with `outcome`.
    #[must_use]
    pub fn count(&self, outcome: Outcome) -> u32 {
        self.tallies.get(&outcome).copied().unwrap_or(0)
    }

    /// Fraction of games won by `side`; 0 for an empty series.
    #[must_use]
    pub fn win_rate(&self, side: Player) -> f64 {
        let outcome = match side {
            Player::X => Outcome::XWins,
            Player::O => Outcome::OWins,
        };
        self.rate(outcome)
    }

    /// Fraction of games drawn; 0 for an empty series.
    #[must_use]
    pub fn draw_rate(&self) -> f64 {
        self.rate(Outcome::Draw)
    }

    fn rate(&self, outcome: Outcome) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.count(outcome) as f64 / self.games as f64
        }
    }
}

/// Play `games` games between X at `x` and O at `o`.
///
/// Each game gets its own RNG stream forked from a root seeded with
/// `config.seed`, so the whole series is reproducible.
#[instrument(level = "debug", skip(config), fields(seed = config.seed))]
pub fn play_series(
    x: Difficulty,
    o: Difficulty,
    games: u32,
    config: &PolicyConfig,
) -> Result<SeriesSummary> {
    config.validate()?;

    let mut root = GameRng::new(config.seed);
    let mut summary = SeriesSummary::new(x, o);

    for _ in 0..games {
        let mut ai = AiPlayer::with_rng(config.clone(), root.fork())?;
        let record = play_game_with(x, o, &mut ai)?;
        summary.record(record.result.into());
    }

    info!(
        %x,
        %o,
        games = summary.games,
        x_wins = summary.count(Outcome::XWins),
        o_wins = summary.count(Outcome::OWins),
        draws = summary.count(Outcome::Draw),
        "series complete"
    );

    Ok(summary)
}
