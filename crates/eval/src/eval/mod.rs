// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! It provides a [HandValue::eval] method that computes a hand value without
//! keeping track of the best hand out of a 7 cards hand, useful for computing
//! odds and other stats, and a slightly slower [HandValue::eval_with_best_hand]
//! that computes the hand value and returns the five best cards, useful for
//! UIs to show a winning hand.
//!
//! A hand value packs the hand category and the ranks that break ties within
//! the category, two hands with the same value split the pot:
//!
//! ```text
//!   +--------+--------+--------+--------+
//!   |xxxxxxxx|cccc1111|22223333|44445555|
//!   +--------+--------+--------+--------+
//!   c = hand rank (high card=0,...,straight flush=8)
//!   1..5 = tie breaking card ranks, most significant first
//! ```

mod rank;
pub use rank::HandRank;

mod value;
pub use value::HandValue;
