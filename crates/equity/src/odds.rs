// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Winning and tie percentages.
use serde::{Deserialize, Serialize};

use crate::PlayerCounts;

/// A player winning and tie percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Odds {
    /// Percentage of trials won outright.
    pub wins: f64,
    /// Percentage of trials that ended in a split pot including this player.
    pub ties: f64,
}

impl Odds {
    /// Computes the percentages for a player over the given number of trials.
    pub fn new(counts: PlayerCounts, trials: usize) -> Self {
        if trials == 0 {
            return Self::default();
        }

        let trials = trials as f64;
        Self {
            wins: counts.wins as f64 / trials * 100.0,
            ties: counts.ties as f64 / trials * 100.0,
        }
    }

    /// Computes the percentages for all players.
    pub fn from_counts(counts: &[PlayerCounts], trials: usize) -> Vec<Odds> {
        counts.iter().map(|&c| Odds::new(c, trials)).collect()
    }
}
