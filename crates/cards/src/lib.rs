// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = "Kd".parse::<Card>().unwrap();
//! assert_eq!(ah.to_string(), "Ah");
//! assert!(kd < ah);
//! ```
//!
//! and a [Deck] type for excluding known cards, shuffling, and dealing:
//!
//! ```
//! # use showdown_cards::{Card, Deck};
//! let known = Card::parse_list(&["As", "Ad"]).unwrap();
//! let mut deck = Deck::excluding(&known).unwrap();
//! deck.shuffle(&mut rand::rng());
//!
//! let board = deck.draw(5).unwrap();
//! assert!(board.iter().all(|c| !known.contains(c)));
//! assert_eq!(deck.count(), 45);
//! ```
//!
//! To iterate through all the k-cards hands left in a deck:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(7, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 133_784_560);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use thiserror::Error;

mod cards;
pub use cards::{Card, Rank, Suit};

mod deck;
pub use deck::{Deck, for_each_subset};

/// Cards and deck errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The text is not a rank character followed by a suit character.
    #[error("invalid card format {0:?}, expected a rank (2-9, T, J, Q, K, A) and a suit (s, h, d, c)")]
    InvalidCardFormat(String),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// More cards requested than there are left in the deck.
    #[error("deck exhausted, requested {requested} cards with {remaining} left")]
    DeckExhausted {
        /// The number of cards requested.
        requested: usize,
        /// The number of cards left in the deck.
        remaining: usize,
    },
}
