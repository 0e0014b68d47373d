// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown equity calculator CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::error;

use showdown_equity::{
    EquityRequest, HoleCards, SimulationConfig, SingleCardPolicy, equity, hand_strength,
};

mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// The hero hole cards, e.g. `As,Kd`, dealt at random when not given.
    #[clap(long, value_delimiter = ',')]
    hero: Vec<String>,
    /// An opponent hole cards, e.g. `Qs,Qh`, repeat for more opponents.
    #[clap(long)]
    villain: Vec<String>,
    /// The board cards, e.g. `Ah,7d,2c`.
    #[clap(long, short, value_delimiter = ',')]
    board: Vec<String>,
    /// Number of opponents.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=8))]
    opponents: u8,
    /// Number of simulated deals.
    #[clap(long, short, default_value_t = SimulationConfig::DEFAULT_TRIALS)]
    trials: usize,
    /// Number of parallel tasks.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=256))]
    tasks: u16,
    /// Random seed for reproducible results.
    #[clap(long)]
    seed: Option<u64>,
    /// Keep a single hero card and deal the other one at random.
    #[clap(long)]
    allow_single_card: bool,
    /// Print the odds as JSON.
    #[clap(long)]
    json: bool,
    /// Enable debug logs.
    #[clap(long, short)]
    verbose: bool,
}

impl Cli {
    fn request(&self) -> EquityRequest {
        let mut players = vec![self.hero.clone()];
        players.extend(
            self.villain
                .iter()
                .map(|v| v.split(',').map(str::to_string).collect()),
        );

        let policy = if self.allow_single_card {
            SingleCardPolicy::DealRemaining
        } else {
            SingleCardPolicy::Reject
        };

        // Every villain takes a seat.
        let opponents = (self.opponents as usize).max(self.villain.len());
        let mut config = SimulationConfig::with_opponents(opponents)
            .trials(self.trials)
            .tasks(self.tasks as usize)
            .single_card(policy);
        config.seed = self.seed;

        EquityRequest {
            players,
            board: self.board.clone(),
            config,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let request = cli.request();
    let (holes, board) = request.parse().context("Invalid cards")?;
    let odds = equity(&request.config, &holes, &board).context("Simulation failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&odds)?);
        return Ok(());
    }

    print!("{}", report::odds_table(&holes, &odds));

    if let (Some(HoleCards::Two(c1, c2)), 3..) = (holes.first(), board.len()) {
        let strength = hand_strength([*c1, *c2], &board)?;
        println!(
            "\nHero hand: {} ({})",
            strength.rank(),
            report::cards_text(&strength.cards)
        );
    }

    Ok(())
}
