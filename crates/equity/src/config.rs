// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation configuration and players known cards.
use serde::{Deserialize, Serialize};

use crate::{Card, EquityError};

/// How to handle a player with a single known hole card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingleCardPolicy {
    /// A single hole card is a configuration error.
    #[default]
    Reject,
    /// Keep the known card and deal the other one at random on each trial.
    DealRemaining,
}

/// Simulation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// The number of players including the hero.
    pub num_players: usize,
    /// The number of deals to simulate.
    pub trials: usize,
    /// The number of parallel tasks sharing the trials.
    pub tasks: usize,
    /// Seed for reproducible runs, each task uses `seed + task_id`.
    pub seed: Option<u64>,
    /// How to handle a player with one known hole card.
    pub single_card: SingleCardPolicy,
}

impl SimulationConfig {
    /// The default number of trials.
    pub const DEFAULT_TRIALS: usize = 5_000;
    /// Minimum number of players at a table.
    pub const MIN_PLAYERS: usize = 2;
    /// Maximum number of players at a table.
    pub const MAX_PLAYERS: usize = 9;

    /// Configuration for the hero playing against `opponents` players.
    pub fn with_opponents(opponents: usize) -> Self {
        Self {
            num_players: opponents + 1,
            ..Self::default()
        }
    }

    /// Sets the number of trials.
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the number of parallel tasks.
    pub fn tasks(mut self, tasks: usize) -> Self {
        self.tasks = tasks;
        self
    }

    /// Sets the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the single hole card policy.
    pub fn single_card(mut self, policy: SingleCardPolicy) -> Self {
        self.single_card = policy;
        self
    }

    /// Checks players, trials, and tasks are in range.
    pub fn validate(&self) -> Result<(), EquityError> {
        if !(Self::MIN_PLAYERS..=Self::MAX_PLAYERS).contains(&self.num_players) {
            return Err(EquityError::InvalidConfiguration(format!(
                "number of players {} must be between {} and {}",
                self.num_players,
                Self::MIN_PLAYERS,
                Self::MAX_PLAYERS
            )));
        }

        if self.trials == 0 {
            return Err(EquityError::InvalidConfiguration(
                "number of trials must be positive".to_string(),
            ));
        }

        if self.tasks == 0 {
            return Err(EquityError::InvalidConfiguration(
                "number of tasks must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_players: Self::MIN_PLAYERS,
            trials: Self::DEFAULT_TRIALS,
            tasks: 1,
            seed: None,
            single_card: SingleCardPolicy::default(),
        }
    }
}

/// The known hole cards of a player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoleCards {
    /// Both cards are unknown.
    #[default]
    None,
    /// One card is known.
    One(Card),
    /// Both cards are known.
    Two(Card, Card),
}

impl HoleCards {
    /// Parses hole cards from text tokens, empty tokens are unselected cards.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, EquityError> {
        let tokens = tokens
            .iter()
            .map(|t| t.as_ref().trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>();

        let cards = Card::parse_list(&tokens)?;
        match cards[..] {
            [] => Ok(HoleCards::None),
            [c] => Ok(HoleCards::One(c)),
            [c1, c2] => Ok(HoleCards::Two(c1, c2)),
            _ => Err(EquityError::InvalidConfiguration(format!(
                "a player has {} hole cards, expected at most 2",
                cards.len()
            ))),
        }
    }

    /// The number of known cards.
    pub fn len(&self) -> usize {
        match self {
            HoleCards::None => 0,
            HoleCards::One(_) => 1,
            HoleCards::Two(..) => 2,
        }
    }

    /// Checks if no card is known.
    pub fn is_empty(&self) -> bool {
        matches!(self, HoleCards::None)
    }

    /// The known cards.
    pub fn cards(&self) -> impl Iterator<Item = Card> {
        let (c1, c2) = match *self {
            HoleCards::None => (None, None),
            HoleCards::One(c) => (Some(c), None),
            HoleCards::Two(c1, c2) => (Some(c1), Some(c2)),
        };

        [c1, c2].into_iter().flatten()
    }
}

impl From<(Card, Card)> for HoleCards {
    fn from((c1, c2): (Card, Card)) -> Self {
        HoleCards::Two(c1, c2)
    }
}
