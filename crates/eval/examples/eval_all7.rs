// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Counts the categories of all 7 cards hands:
//
// ```bash
// $ cargo r --release -p showdown-eval --example eval_all7
// ```
use std::time::Instant;

use showdown_eval::{Deck, HandRank, HandValue};

fn main() {
    let now = Instant::now();
    let mut counts = [0usize; HandRank::COUNT];

    Deck::full().for_each(7, |hand| {
        counts[HandValue::eval(hand).rank() as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        println!("{:<16} {}", format!("{rank}:"), counts[rank as usize]);
    }
}
