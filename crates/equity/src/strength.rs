// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A player current hand strength.
use crate::{Card, EquityError, HandRank, HandValue};

/// The best hand a player can make with the known board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandStrength {
    /// The hand value.
    pub value: HandValue,
    /// The best five cards sorted from the highest rank.
    pub cards: [Card; 5],
}

impl HandStrength {
    /// The hand rank.
    pub fn rank(&self) -> HandRank {
        self.value.rank()
    }
}

/// Evaluates the hole cards with a board of 3 to 5 cards.
pub fn hand_strength(hole: [Card; 2], board: &[Card]) -> Result<HandStrength, EquityError> {
    if !(3..=5).contains(&board.len()) {
        return Err(EquityError::InvalidConfiguration(format!(
            "hand strength needs 3 to 5 board cards, got {}",
            board.len()
        )));
    }

    let mut cards = Vec::with_capacity(hole.len() + board.len());
    cards.extend_from_slice(&hole);
    cards.extend_from_slice(board);

    let (value, mut best) = HandValue::eval_with_best_hand(&cards)?;
    best.sort_by(|a, b| b.cmp(a));

    Ok(HandStrength { value, cards: best })
}
