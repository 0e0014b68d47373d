// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Prints the preflop winning chart for all starting hands:
//
// ```bash
// $ cargo r --release -p showdown-equity --example chart -- --opponents 2
// ```
use clap::{Parser, value_parser};
use std::time::Instant;

use showdown_equity::{Card, HoleCards, Rank, SimulationConfig, Suit, equity};

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("-----|");
    }
    println!();
}

#[derive(Debug, Parser)]
struct Cli {
    /// The number of opposing players.
    #[clap(long, short, default_value_t = 1, value_parser = value_parser!(u8).range(1..=8))]
    opponents: u8,
    /// Trials for each starting hand.
    #[clap(long, short, default_value_t = 20_000)]
    trials: usize,
    /// Number of parallel tasks.
    #[clap(long, default_value_t = 4)]
    tasks: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = SimulationConfig::with_opponents(cli.opponents as usize)
        .trials(cli.trials)
        .tasks(cli.tasks);

    separator();

    let now = Instant::now();

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut probs = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            // Suited above the diagonal, offsuit and pairs below.
            let (c1, c2) = if r1 <= r2 {
                (Card::new(r2, Suit::Hearts), Card::new(r1, Suit::Spades))
            } else {
                (Card::new(r1, Suit::Hearts), Card::new(r2, Suit::Hearts))
            };

            let label = match (c1.rank() == c2.rank(), c1.suit() == c2.suit()) {
                (true, _) => format!("{}{} ", c1.rank(), c2.rank()),
                (false, true) => format!("{}{}s", c1.rank(), c2.rank()),
                (false, false) => format!("{}{}o", c1.rank(), c2.rank()),
            };
            labels.push(label);

            let odds = equity(&config, &[HoleCards::Two(c1, c2)], &[])?;
            probs.push(odds[0].wins + odds[0].ties);
        }

        print!("|");
        for label in labels {
            print!(" {label} |");
        }
        println!();

        print!("|");
        for prob in &probs {
            print!(" {:2.0}% |", prob.round().min(99.0));
        }
        println!();

        separator();
    }

    println!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());
    Ok(())
}
