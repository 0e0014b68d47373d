// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck.
use ahash::AHashSet;
use rand::prelude::*;

use crate::{Card, CardError, Rank, Suit};

/// A cards Deck.
///
/// The deck keeps its cards in order and deals from the front, cards that have
/// been dealt are never returned again.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    /// Position of the next card to deal.
    top: usize,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a deck with all 52 cards in canonical order.
    pub fn full() -> Self {
        Self::default()
    }

    /// Creates a deck with all the cards that are not in `cards`, the
    /// remaining cards keep the canonical order.
    pub fn excluding(cards: &[Card]) -> Result<Self, CardError> {
        let mut excluded = AHashSet::with_capacity(cards.len());
        for &card in cards {
            if !excluded.insert(card) {
                return Err(CardError::DuplicateCard(card));
            }
        }

        let mut deck = Self::default();
        deck.cards.retain(|c| !excluded.contains(c));
        Ok(deck)
    }

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards[self.top..].shuffle(rng);
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Result<Card, CardError> {
        let card = self
            .cards
            .get(self.top)
            .copied()
            .ok_or(CardError::DeckExhausted {
                requested: 1,
                remaining: 0,
            })?;

        self.top += 1;
        Ok(card)
    }

    /// Deals `n` cards from the deck.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, CardError> {
        let remaining = self.count();
        if n > remaining {
            return Err(CardError::DeckExhausted {
                requested: n,
                remaining,
            });
        }

        let cards = self.cards[self.top..self.top + n].to_vec();
        self.top += n;
        Ok(cards)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len() - self.top
    }

    /// Checks if a card is still in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards[self.top..].contains(&card)
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");
        for_each_subset(&self.cards[self.top..], k, f);
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards, top: 0 }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::iter::Skip<std::vec::IntoIter<Card>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter().skip(self.top)
    }
}

/// Calls the `f` closure for each k-subset of `cards` in lexicographic order
/// of the card positions.
///
/// Panics if k > 7.
pub fn for_each_subset<F>(cards: &[Card], k: usize, mut f: F)
where
    F: FnMut(&[Card]),
{
    assert!(k <= 7, "k={k} must be 0 <= k <= 7");

    let n = cards.len();
    if k == 0 || k > n {
        return;
    }

    let mut pos = [0usize; 7];
    for (i, p) in pos.iter_mut().enumerate().take(k) {
        *p = i;
    }

    let mut hand = [cards[0]; 7];
    loop {
        for (slot, &p) in pos[..k].iter().enumerate() {
            hand[slot] = cards[p];
        }

        f(&hand[..k]);

        // Find the rightmost position that can move forward.
        let mut i = k;
        while i > 0 && pos[i - 1] == n - k + i - 1 {
            i -= 1;
        }

        if i == 0 {
            break;
        }

        pos[i - 1] += 1;
        for j in i..k {
            pos[j] = pos[j - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn deck_canonical_order() {
        let cards = Deck::full().into_iter().collect::<Vec<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
        assert_eq!(cards[0], card("2c"));
        assert_eq!(cards[12], card("Ac"));
        assert_eq!(cards[13], card("2d"));
        assert_eq!(cards[51], card("As"));

        let unique = cards.iter().copied().collect::<HashSet<_>>();
        assert_eq!(unique.len(), Deck::SIZE);
    }

    #[test]
    fn deck_excluding() {
        let excluded = [card("As"), card("Kd"), card("2c")];
        let mut deck = Deck::excluding(&excluded).unwrap();
        assert_eq!(deck.count(), Deck::SIZE - excluded.len());

        // Relative order is preserved.
        let cards = deck.clone().into_iter().collect::<Vec<_>>();
        let expected = Deck::full()
            .into_iter()
            .filter(|c| !excluded.contains(c))
            .collect::<Vec<_>>();
        assert_eq!(cards, expected);

        deck.shuffle(&mut rand::rng());
        let drawn = deck.draw(deck.count()).unwrap();
        assert!(drawn.iter().all(|c| !excluded.contains(c)));
    }

    #[test]
    fn deck_excluding_never_deals_excluded() {
        let mut rng = SmallRng::seed_from_u64(17);
        let all = Deck::full().into_iter().collect::<Vec<_>>();

        for size in 0..=Deck::SIZE {
            let excluded = all.choose_multiple(&mut rng, size).copied().collect::<Vec<_>>();
            let mut deck = Deck::excluding(&excluded).unwrap();
            deck.shuffle(&mut rng);

            assert_eq!(deck.count(), Deck::SIZE - size);
            let drawn = deck.draw(deck.count()).unwrap();
            assert!(drawn.iter().all(|c| !excluded.contains(c)));
            assert!(deck.is_empty());
        }
    }

    #[test]
    fn deck_excluding_duplicate() {
        let err = Deck::excluding(&[card("As"), card("Kd"), card("as")]).unwrap_err();
        assert_eq!(err, CardError::DuplicateCard(card("As")));
    }

    #[test]
    fn deck_draw_from_front() {
        let mut deck = Deck::full();
        assert_eq!(deck.deal().unwrap(), card("2c"));
        assert_eq!(deck.draw(2).unwrap(), vec![card("3c"), card("4c")]);
        assert_eq!(deck.count(), Deck::SIZE - 3);
        assert!(!deck.contains(card("3c")));
        assert!(deck.contains(card("5c")));
    }

    #[test]
    fn deck_exhausted() {
        let mut deck = Deck::full();
        deck.draw(50).unwrap();

        let err = deck.draw(3).unwrap_err();
        assert_eq!(
            err,
            CardError::DeckExhausted {
                requested: 3,
                remaining: 2
            }
        );

        // A failed draw leaves the deck untouched.
        assert_eq!(deck.count(), 2);
        deck.draw(2).unwrap();
        assert!(matches!(
            deck.deal(),
            Err(CardError::DeckExhausted { remaining: 0, .. })
        ));
    }

    #[test]
    fn deck_shuffle_keeps_cards() {
        let mut deck = Deck::full();
        deck.draw(10).unwrap();
        deck.shuffle(&mut SmallRng::seed_from_u64(3));

        let mut cards = deck.into_iter().collect::<Vec<_>>();
        cards.sort();

        let mut expected = Deck::full().into_iter().skip(10).collect::<Vec<_>>();
        expected.sort();
        assert_eq!(cards, expected);
    }

    #[test]
    fn deck_shuffle_is_uniform() {
        // Each card of a 4 cards deck lands on top about 1/4 of the times.
        const SAMPLES: usize = 40_000;
        let mut rng = SmallRng::seed_from_u64(11);
        let mut counts = [0usize; 4];
        let cards = Deck::full().draw(4).unwrap();
        let base = Deck::excluding(&Deck::full().into_iter().skip(4).collect::<Vec<_>>()).unwrap();

        for _ in 0..SAMPLES {
            let mut deck = base.clone();
            deck.shuffle(&mut rng);
            let top = deck.deal().unwrap();
            let pos = cards.iter().position(|&c| c == top).unwrap();
            counts[pos] += 1;
        }

        for count in counts {
            let freq = count as f64 / SAMPLES as f64;
            assert!((freq - 0.25).abs() < 0.02, "freq={freq}");
        }
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_after_draw() {
        let mut deck = Deck::default();
        deck.draw(2).unwrap();

        let mut count = 0;
        deck.for_each(5, |_| count += 1);
        assert_eq!(count, 2_118_760);
    }

    #[test]
    fn subsets_of_seven() {
        let cards = Deck::full().draw(7).unwrap();

        let mut subsets = Vec::new();
        for_each_subset(&cards, 5, |s| subsets.push(s.to_vec()));
        assert_eq!(subsets.len(), 21);
        assert_eq!(subsets[0], cards[..5].to_vec());
        assert_eq!(subsets[20], cards[2..].to_vec());

        let unique = subsets.into_iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), 21);

        let mut count = 0;
        for_each_subset(&cards[..4], 5, |_| count += 1);
        assert_eq!(count, 0);
    }
}
