// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo showdown simulation.
//!
//! Each trial shuffles a deck without the known cards, completes the players
//! hole cards in player order, completes the board, and evaluates a showdown.
//! With more than one task the trials are split across scoped threads, each
//! task has its own random generator and counters that are summed at the end.
use ahash::AHashSet;
use log::{debug, error, info};
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{
    ops, panic,
    sync::atomic::{AtomicBool, Ordering},
    thread,
    time::Instant,
};

use crate::{
    Card, Deck, EquityError, HandValue, HoleCards, Rank, SimulationConfig, SingleCardPolicy, Suit,
};

const HOLE_SIZE: usize = 2;
const BOARD_SIZE: usize = 5;
const HAND_SIZE: usize = HOLE_SIZE + BOARD_SIZE;

/// A player wins and ties counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCounts {
    /// Trials won by this player alone.
    pub wins: u64,
    /// Trials where this player split the pot.
    pub ties: u64,
}

impl ops::AddAssign for PlayerCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.wins += rhs.wins;
        self.ties += rhs.ties;
    }
}

/// Simulates `config.trials` showdowns and returns the counters for each player.
///
/// The `hole_cards` list may be shorter than the number of players, players
/// without an entry have unknown hole cards. All inputs are validated before
/// running any trial.
pub fn simulate(
    config: &SimulationConfig,
    hole_cards: &[HoleCards],
    board: &[Card],
) -> Result<Vec<PlayerCounts>, EquityError> {
    simulate_with_cancel(config, hole_cards, board, &AtomicBool::new(false))
}

/// Like [simulate] but stops with [EquityError::Cancelled] when `cancel` is
/// set, the flag is checked between trials.
pub fn simulate_with_cancel(
    config: &SimulationConfig,
    hole_cards: &[HoleCards],
    board: &[Card],
    cancel: &AtomicBool,
) -> Result<Vec<PlayerCounts>, EquityError> {
    let sim = Simulation::new(config, hole_cards, board)?;
    let tasks = config.tasks.min(config.trials);

    debug!(
        "Simulating {} trials for {} players, {} known cards, {} board cards, {tasks} tasks",
        config.trials,
        config.num_players,
        Deck::SIZE - sim.deck.count(),
        board.len(),
    );

    let now = Instant::now();

    let counts = if tasks == 1 {
        sim.run(0, config.trials, cancel)?
    } else {
        let results = thread::scope(|s| {
            let handles = (0..tasks)
                .map(|task_id| {
                    let trials = task_trials(config.trials, tasks, task_id);
                    let sim = &sim;
                    s.spawn(move || sim.run(task_id, trials, cancel))
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .collect::<Vec<_>>()
        });

        // Sum the per task counters.
        let mut total = vec![PlayerCounts::default(); config.num_players];
        for task_counts in results {
            for (t, c) in total.iter_mut().zip(task_counts?) {
                *t += c;
            }
        }

        total
    };

    info!(
        "Simulated {} trials for {} players in {:.3}s",
        config.trials,
        config.num_players,
        now.elapsed().as_secs_f64()
    );

    Ok(counts)
}

/// The number of trials for a task, the first tasks take the remainder.
fn task_trials(trials: usize, tasks: usize, task_id: usize) -> usize {
    trials / tasks + usize::from(task_id < trials % tasks)
}

/// Validated simulation state shared by all tasks.
#[derive(Debug)]
struct Simulation {
    /// The known hole cards for each player.
    holes: Vec<HoleCards>,
    /// The known board cards.
    board: Vec<Card>,
    /// The deck without the known cards.
    deck: Deck,
    seed: Option<u64>,
}

impl Simulation {
    fn new(
        config: &SimulationConfig,
        hole_cards: &[HoleCards],
        board: &[Card],
    ) -> Result<Self, EquityError> {
        config.validate()?;

        if hole_cards.len() > config.num_players {
            return Err(EquityError::InvalidConfiguration(format!(
                "hole cards given for {} players with {} players at the table",
                hole_cards.len(),
                config.num_players
            )));
        }

        if !matches!(board.len(), 0 | 3 | 4 | 5) {
            return Err(EquityError::InvalidConfiguration(format!(
                "board has {} cards, expected 0, 3, 4, or 5",
                board.len()
            )));
        }

        let single = hole_cards.iter().position(|h| h.len() == 1);
        if let (SingleCardPolicy::Reject, Some(player)) = (config.single_card, single) {
            return Err(EquityError::InvalidConfiguration(format!(
                "player {player} has a single hole card, expected 0 or 2"
            )));
        }

        let mut known = AHashSet::with_capacity(HOLE_SIZE * hole_cards.len() + board.len());
        let mut known_cards = Vec::with_capacity(known.capacity());
        for card in hole_cards
            .iter()
            .flat_map(|h| h.cards())
            .chain(board.iter().copied())
        {
            if !known.insert(card) {
                return Err(EquityError::DuplicateCard(card));
            }

            known_cards.push(card);
        }

        let deck = Deck::excluding(&known_cards)?;

        let mut holes = hole_cards.to_vec();
        holes.resize(config.num_players, HoleCards::None);

        Ok(Self {
            holes,
            board: board.to_vec(),
            deck,
            seed: config.seed,
        })
    }

    /// Runs `trials` showdowns and returns this task counters.
    fn run(
        &self,
        task_id: usize,
        trials: usize,
        cancel: &AtomicBool,
    ) -> Result<Vec<PlayerCounts>, EquityError> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64)),
            None => SmallRng::from_os_rng(),
        };

        let mut counts = vec![PlayerCounts::default(); self.holes.len()];
        let mut hands = vec![[Card::new(Rank::Ace, Suit::Hearts); HAND_SIZE]; self.holes.len()];
        let mut values = Vec::with_capacity(self.holes.len());

        for _ in 0..trials {
            if cancel.load(Ordering::Relaxed) {
                debug!("Task {task_id} cancelled");
                return Err(EquityError::Cancelled);
            }

            let mut deck = self.deck.clone();
            deck.shuffle(&mut rng);

            self.deal(&mut deck, &mut hands)
                .inspect_err(|e| error!("Task {task_id} failed to deal a trial: {e}"))?;

            values.clear();
            values.extend(hands.iter().map(|hand| HandValue::eval(hand)));
            award(&values, &mut counts);
        }

        debug!("Task {task_id} completed {trials} trials");

        Ok(counts)
    }

    /// Completes the players hole cards in player order then the board.
    fn deal(&self, deck: &mut Deck, hands: &mut [[Card; HAND_SIZE]]) -> Result<(), EquityError> {
        for (hand, hole) in hands.iter_mut().zip(&self.holes) {
            let mut pos = 0;
            for card in hole.cards() {
                hand[pos] = card;
                pos += 1;
            }

            for slot in &mut hand[pos..HOLE_SIZE] {
                *slot = deck.deal()?;
            }
        }

        let mut board = [Card::new(Rank::Ace, Suit::Hearts); BOARD_SIZE];
        board[..self.board.len()].copy_from_slice(&self.board);
        for slot in &mut board[self.board.len()..] {
            *slot = deck.deal()?;
        }

        for hand in hands.iter_mut() {
            hand[HOLE_SIZE..].copy_from_slice(&board);
        }

        Ok(())
    }
}

/// Awards a win to the only best hand or a tie to each of the best hands.
fn award(values: &[HandValue], counts: &mut [PlayerCounts]) {
    let Some(&best) = values.iter().max() else {
        return;
    };

    let winners = values.iter().filter(|&&v| v == best).count();
    for (count, &value) in counts.iter_mut().zip(values) {
        if value == best {
            if winners == 1 {
                count.wins += 1;
            } else {
                count.ties += 1;
            }
        }
    }
}
