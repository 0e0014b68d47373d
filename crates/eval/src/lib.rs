// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. A five cards hand is
//! classified from its rank counts, rank bits and suit bits, larger hands are
//! evaluated by picking the best of their five cards subsets.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank, stronger hands have greater values:
//!
//! ```
//! # use showdown_eval::*;
//! // 2c, 3c, .., Jc
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]);
//! let v2 = HandValue::eval(&cards[5..]);
//! assert!(v2 > v1);
//! assert_eq!(v2.rank(), HandRank::StraightFlush);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use thiserror::Error;

pub mod eval;
pub use eval::{HandRank, HandValue};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};

/// Hand evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand doesn't have 5, 6, or 7 cards.
    #[error("invalid hand size {0}, a hand must have 5 to 7 cards")]
    InvalidHandSize(usize),
    /// The same card appears twice in the hand.
    #[error("duplicate card {0} in hand")]
    DuplicateCardInHand(Card),
}
