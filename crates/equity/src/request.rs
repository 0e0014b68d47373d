// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Text based equity requests.
use serde::{Deserialize, Serialize};

use crate::{Card, EquityError, HoleCards, Odds, SimulationConfig};

/// An equity request with cards as text tokens.
///
/// Empty tokens are unselected cards, so a hero with cards `["As", ""]` has
/// a single known card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquityRequest {
    /// The known hole cards for each player, the hero is the first player.
    #[serde(default)]
    pub players: Vec<Vec<String>>,
    /// The known board cards.
    #[serde(default)]
    pub board: Vec<String>,
    /// The simulation parameters.
    #[serde(flatten)]
    pub config: SimulationConfig,
}

impl EquityRequest {
    /// Parses the request cards.
    pub fn parse(&self) -> Result<(Vec<HoleCards>, Vec<Card>), EquityError> {
        let holes = self
            .players
            .iter()
            .map(|tokens| HoleCards::parse(tokens.as_slice()))
            .collect::<Result<Vec<_>, _>>()?;

        let board = self
            .board
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>();
        let board = Card::parse_list(&board)?;

        Ok((holes, board))
    }

    /// Runs the simulation and returns the odds for each player.
    pub fn run(&self) -> Result<Vec<Odds>, EquityError> {
        let (holes, board) = self.parse()?;
        crate::equity(&self.config, &holes, &board)
    }
}
