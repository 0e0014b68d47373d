// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Text reports.
use std::fmt;

use showdown_equity::{Card, HoleCards, Odds};

/// Formats cards separated by spaces.
pub fn cards_text(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn hole_text(hole: Option<&HoleCards>) -> String {
    let mut text = hole
        .map(|h| h.cards().map(|c| c.to_string()).collect::<Vec<_>>())
        .unwrap_or_default();
    text.resize(2, "??".to_string());
    text.join(" ")
}

/// A table with one row per player.
pub struct OddsTable<'a> {
    holes: &'a [HoleCards],
    odds: &'a [Odds],
}

/// Creates a table for the players odds, `holes` may be shorter than `odds`.
pub fn odds_table<'a>(holes: &'a [HoleCards], odds: &'a [Odds]) -> OddsTable<'a> {
    OddsTable { holes, odds }
}

impl fmt::Display for OddsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<8} {:<6} {:>8} {:>8}", "Player", "Cards", "Win %", "Tie %")?;

        for (idx, o) in self.odds.iter().enumerate() {
            let name = if idx == 0 {
                "Hero".to_string()
            } else {
                format!("Player {idx}")
            };

            writeln!(
                f,
                "{:<8} {:<6} {:>8.2} {:>8.2}",
                name,
                hole_text(self.holes.get(idx)),
                o.wins,
                o.ties
            )?;
        }

        Ok(())
    }
}
