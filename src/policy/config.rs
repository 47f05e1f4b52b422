//! Move-selection policy configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Probability that a Medium move is chosen at random instead of by search.
pub const DEFAULT_MEDIUM_RANDOM_PROBABILITY: f64 = 0.5;

/// Policy configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Random seed for the Easy and Medium tiers.
    /// Same seed produces the same sequence of choices.
    pub seed: u64,

    /// Chance, in `[0, 1]`, that a Medium move is uniformly random.
    pub medium_random_probability: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            medium_random_probability: DEFAULT_MEDIUM_RANDOM_PROBABILITY,
        }
    }
}

impl PolicyConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom Medium-tier random probability.
    pub fn with_medium_random_probability(mut self, probability: f64) -> Self {
        self.medium_random_probability = probability;
        self
    }

    /// Check that every parameter is in range.
    pub fn validate(&self) -> Result<()> {
        let p = self.medium_random_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidConfig {
                message: format!("medium_random_probability must be in [0, 1], got {p}"),
            });
        }
        Ok(())
    }
}
