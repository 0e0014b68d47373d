// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker equity calculator.
//!
//! Estimates the probability of winning or tying a Texas Hold'em hand by
//! dealing the unknown hole cards and community cards at random many times
//! and evaluating a showdown for each deal:
//!
//! ```
//! # use showdown_equity::*;
//! let hero = HoleCards::parse(&["Ac", "Ad"]).unwrap();
//! let config = SimulationConfig::with_opponents(1).trials(1_000).seed(7);
//!
//! let odds = equity(&config, &[hero], &[]).unwrap();
//! assert_eq!(odds.len(), 2);
//! assert!(odds[0].wins > odds[1].wins);
//! ```
//!
//! Callers that deal with card text, like a UI, can use an [EquityRequest]:
//!
//! ```
//! # use showdown_equity::*;
//! let request = EquityRequest {
//!     players: vec![vec!["As".into(), "Ah".into()], vec!["Ks".into(), "Kh".into()]],
//!     board: vec!["2c".into(), "7d".into(), "9h".into()],
//!     config: SimulationConfig::default().trials(500),
//! };
//!
//! let odds = request.run().unwrap();
//! assert!(odds[0].wins + odds[0].ties <= 100.0);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use thiserror::Error;

pub mod config;
pub use config::{HoleCards, SimulationConfig, SingleCardPolicy};

pub mod odds;
pub use odds::Odds;

pub mod request;
pub use request::EquityRequest;

pub mod simulate;
pub use simulate::{PlayerCounts, simulate, simulate_with_cancel};

pub mod strength;
pub use strength::{HandStrength, hand_strength};

// Reexport cards and evaluator types.
pub use showdown_cards::{Card, CardError, Deck, Rank, Suit};
pub use showdown_eval::{EvalError, HandRank, HandValue};

/// Equity calculation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquityError {
    /// Card parsing or dealing error.
    #[error(transparent)]
    Card(#[from] CardError),
    /// Hand evaluation error.
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// The same card is assigned more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// Players, board, or trials outside the allowed values.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The simulation was cancelled before completion.
    #[error("simulation cancelled")]
    Cancelled,
}

/// Runs a simulation and returns the winning and tie percentages for each player.
pub fn equity(
    config: &SimulationConfig,
    hole_cards: &[HoleCards],
    board: &[Card],
) -> Result<Vec<Odds>, EquityError> {
    let counts = simulate(config, hole_cards, board)?;
    Ok(Odds::from_counts(&counts, config.trials))
}
