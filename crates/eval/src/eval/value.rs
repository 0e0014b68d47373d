// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand value computation.
use showdown_cards::{Card, Rank, for_each_subset};

use super::HandRank;
use crate::EvalError;

/// Rank bits for the A-2-3-4-5 straight.
const WHEEL: u16 = 0b1_0000_0000_1111;

/// The value of a 5, 6, or 7 cards hand.
///
/// Values are totally ordered, a stronger hand has a greater value and two
/// hands with the same value are of equal strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u32);

impl HandValue {
    /// Evaluates a hand with 5 to 7 cards.
    ///
    /// Panics if the hand size is invalid or the hand has duplicate cards, use
    /// [HandValue::try_eval] for unchecked input.
    pub fn eval(cards: &[Card]) -> HandValue {
        match Self::try_eval(cards) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }

    /// Evaluates a hand with 5 to 7 cards.
    pub fn try_eval(cards: &[Card]) -> Result<HandValue, EvalError> {
        check_hand(cards)?;

        if cards.len() == 5 {
            return Ok(eval5(cards));
        }

        let mut best = HandValue(0);
        for_each_subset(cards, 5, |hand| best = best.max(eval5(hand)));
        Ok(best)
    }

    /// Evaluates a hand with 5 to 7 cards and returns the best five cards.
    pub fn eval_with_best_hand(cards: &[Card]) -> Result<(HandValue, [Card; 5]), EvalError> {
        check_hand(cards)?;

        let mut best: Option<(HandValue, [Card; 5])> = None;
        for_each_subset(cards, 5, |hand| {
            let value = eval5(hand);
            if best.is_none_or(|(v, _)| value > v) {
                let mut five = [hand[0]; 5];
                five.copy_from_slice(hand);
                best = Some((value, five));
            }
        });

        best.ok_or(EvalError::InvalidHandSize(cards.len()))
    }

    /// The rank of this hand.
    pub fn rank(&self) -> HandRank {
        HandRank::from_bits(self.0 >> 20)
    }

    /// The raw packed value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

fn check_hand(cards: &[Card]) -> Result<(), EvalError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::InvalidHandSize(cards.len()));
    }

    for (idx, card) in cards.iter().enumerate() {
        if cards[idx + 1..].contains(card) {
            return Err(EvalError::DuplicateCardInHand(*card));
        }
    }

    Ok(())
}

/// Evaluates a five cards hand.
fn eval5(cards: &[Card]) -> HandValue {
    debug_assert_eq!(cards.len(), 5);

    let mut counts = [0u8; 13];
    let mut rank_bits = 0u16;
    let mut suit_bits = 0xfu8;

    for card in cards {
        counts[card.rank_bits() as usize] += 1;
        rank_bits |= card.rank_mask();
        suit_bits &= card.suit_bits();
    }

    let is_flush = suit_bits != 0;
    let straight = straight_top(rank_bits);

    // Largest groups first, higher ranks first within groups of the same size.
    let mut groups = [(0u8, 0u8); 5];
    let mut len = 0;
    for rank in (0..13u8).rev() {
        let count = counts[rank as usize];
        if count > 0 {
            groups[len] = (count, rank);
            len += 1;
        }
    }

    groups[..len].sort_by(|a, b| b.cmp(a));

    let hand_rank = match (straight, is_flush, groups[0].0, groups[1].0) {
        (Some(_), true, _, _) => HandRank::StraightFlush,
        (_, _, 4, _) => HandRank::FourOfAKind,
        (_, _, 3, 2) => HandRank::FullHouse,
        (_, true, _, _) => HandRank::Flush,
        (Some(_), _, _, _) => HandRank::Straight,
        (_, _, 3, _) => HandRank::ThreeOfAKind,
        (_, _, 2, 2) => HandRank::TwoPair,
        (_, _, 2, _) => HandRank::OnePair,
        _ => HandRank::HighCard,
    };

    match (hand_rank, straight) {
        (HandRank::StraightFlush | HandRank::Straight, Some(top)) => pack(hand_rank, [top]),
        _ => pack(hand_rank, groups[..len].iter().map(|&(_, rank)| rank)),
    }
}

/// Returns the top rank of a straight, a wheel tops at five.
fn straight_top(rank_bits: u16) -> Option<u8> {
    if rank_bits == WHEEL {
        return Some(Rank::Five as u8);
    }

    let low = rank_bits.trailing_zeros();
    (rank_bits >> low == 0b11111).then_some((low + 4) as u8)
}

fn pack(hand_rank: HandRank, ranks: impl IntoIterator<Item = u8>) -> HandValue {
    let mut value = (hand_rank as u32) << 20;
    for (idx, rank) in ranks.into_iter().take(5).enumerate() {
        value |= (rank as u32) << (16 - 4 * idx);
    }

    HandValue(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::prelude::*;
    use showdown_cards::Deck;

    fn hand(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn value(s: &str) -> HandValue {
        HandValue::eval(&hand(s))
    }

    #[test]
    fn hand_ranks() {
        let cases = [
            ("As Ks Qs Js Ts", HandRank::StraightFlush),
            ("9c 9d 9h 9s 2d", HandRank::FourOfAKind),
            ("4h 4d 4c 9s 9h", HandRank::FullHouse),
            ("2h 7h 9h Jh Kh", HandRank::Flush),
            ("6d 7h 8c 9s Td", HandRank::Straight),
            ("Qc Qd Qs 2h 7d", HandRank::ThreeOfAKind),
            ("Jc Jd 3s 3h Ad", HandRank::TwoPair),
            ("Tc Td 2s 5h 8d", HandRank::OnePair),
            ("2h 7d 9c Jh Ks", HandRank::HighCard),
        ];

        for (cards, rank) in cases {
            assert_eq!(value(cards).rank(), rank, "{cards}");
        }

        // Each category beats the one below.
        for pair in cases.windows(2) {
            assert!(value(pair[0].0) > value(pair[1].0));
        }
    }

    #[test]
    fn wheel_straight() {
        let wheel = value("Ah 2d 3c 4s 5h");
        assert_eq!(wheel.rank(), HandRank::Straight);
        assert!(wheel < value("2h 3d 4c 5s 6h"));
        assert!(wheel > value("Ah Kd Qc Js 9h"));
        assert!(wheel > value("Qh Qd Qc 2s 3h"));

        let steel_wheel = value("Ah 2h 3h 4h 5h");
        assert_eq!(steel_wheel.rank(), HandRank::StraightFlush);
        assert!(steel_wheel < value("2d 3d 4d 5d 6d"));
        assert!(steel_wheel > value("Ac Ad Ah As Kd"));

        // Broadway is the top straight, no wrap around.
        assert_eq!(value("Ah Kd Qc Js Th").rank(), HandRank::Straight);
        assert_eq!(value("Qh Kd Ac 2s 3h").rank(), HandRank::HighCard);
    }

    #[test]
    fn tie_breaks() {
        // Four of a kind kicker.
        assert!(value("9c 9d 9h 9s Ad") > value("9c 9d 9h 9s Kd"));
        assert!(value("Tc Td Th Ts 2d") > value("9c 9d 9h 9s Ad"));

        // Full house trips then pair.
        assert!(value("3c 3d 3h Ks Kd") > value("2c 2d 2h As Ad"));
        assert!(value("3c 3d 3h As Ad") > value("3c 3d 3s Ks Kd"));

        // Flush compares all ranks.
        assert!(value("Ah Jh 9h 6h 3h") > value("Ad Td 9d 6d 3d"));
        assert!(value("Ah Jh 9h 6h 4h") > value("Ad Jd 9d 6d 3d"));

        // Straight by top card.
        assert!(value("7d 8h 9c Ts Jd") > value("6d 7h 8c 9s Td"));

        // Trips kickers.
        assert!(value("Qc Qd Qs Ah 2d") > value("Qc Qd Qs Kh Jd"));
        assert!(value("Qc Qd Qs Ah 3d") > value("Qc Qd Qs Ah 2d"));

        // Two pair high pair, low pair, kicker.
        assert!(value("Kc Kd 2s 2h 3d") > value("Qc Qd Js Jh Ad"));
        assert!(value("Kc Kd 3s 3h 2d") > value("Kc Kd 2s 2h Ad"));
        assert!(value("Kc Kd 3s 3h 5d") > value("Kc Kd 3s 3h 4d"));

        // Pair kickers.
        assert!(value("Tc Td As 5h 4d") > value("Tc Td Ks Qh Jd"));
        assert!(value("Tc Td As 5h 4d") > value("Tc Td As 5h 3d"));

        // High card down to the last card.
        assert!(value("Ah Jd 9c 7h 3s") > value("Ah Jd 9c 7h 2s"));
    }

    #[test]
    fn equal_hands_split() {
        assert_eq!(value("Ah Kd Qc Js 9h"), value("As Kc Qd Jh 9s"));
        assert_eq!(value("7d 8h 9c Ts Jd"), value("7c 8s 9d Th Jc"));
        assert_eq!(value("Kc Kd 3s 3h 5d"), value("Kh Ks 3c 3d 5h"));
        assert_ne!(value("Kc Kd 3s 3h 5d"), value("Kh Ks 3c 3d 6h"));
    }

    #[test]
    fn seven_cards_best_hand() {
        // Flush on the board beats the player pair.
        let cards = hand("Ad Ac 2h 7h 9h Jh Kh");
        let v = HandValue::eval(&cards);
        assert_eq!(v.rank(), HandRank::Flush);

        let (best_value, best) = HandValue::eval_with_best_hand(&cards).unwrap();
        assert_eq!(best_value, v);
        let mut best = best.to_vec();
        best.sort();
        assert_eq!(best, hand("2h 7h 9h Jh Kh"));

        // Two trips make a full house with the higher trips.
        let v = value("8c 8d 8h 5s 5d 5h 2c");
        assert_eq!(v, value("8c 8d 8h 5s 5d"));

        // Six high straight beats the wheel in the same hand.
        let v = value("Ah 2d 3c 4s 5h 6d Kc");
        assert_eq!(v, value("2d 3c 4s 5h 6d"));
    }

    #[test]
    fn six_cards() {
        let v = value("Ah Kh Qh Jh 9h Th");
        assert_eq!(v, value("Ah Kh Qh Jh Th"));
        assert_eq!(v.rank(), HandRank::StraightFlush);
    }

    #[test]
    fn seven_cards_match_subsets() {
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..2_000 {
            let cards = Deck::new_and_shuffled(&mut rng).draw(7).unwrap();

            // Brute force over the 21 hands by leaving out two cards.
            let mut best = None;
            for i in 0..7 {
                for j in (i + 1)..7 {
                    let five = (0..7)
                        .filter(|&k| k != i && k != j)
                        .map(|k| cards[k])
                        .collect::<Vec<_>>();
                    let v = HandValue::eval(&five);
                    best = best.max(Some(v));
                }
            }

            assert_eq!(Some(HandValue::eval(&cards)), best);

            let (v, five) = HandValue::eval_with_best_hand(&cards).unwrap();
            assert_eq!(Some(v), best);
            assert_eq!(HandValue::eval(&five), v);
            assert!(five.iter().all(|c| cards.contains(c)));
        }
    }

    #[test]
    fn invalid_hands() {
        assert_eq!(
            HandValue::try_eval(&hand("As Ks Qs Js")),
            Err(EvalError::InvalidHandSize(4))
        );
        assert_eq!(
            HandValue::try_eval(&hand("As Ks Qs Js Ts 9s 8s 7s")),
            Err(EvalError::InvalidHandSize(8))
        );
        assert_eq!(
            HandValue::try_eval(&hand("As Ks Qs Js As")),
            Err(EvalError::DuplicateCardInHand("As".parse().unwrap()))
        );
        assert_eq!(
            HandValue::eval_with_best_hand(&hand("2c 3c 4c 5c 6c 2c")),
            Err(EvalError::DuplicateCardInHand("2c".parse().unwrap()))
        );
    }

    #[test]
    #[should_panic(expected = "invalid hand size 3")]
    fn eval_panics_on_invalid_hand() {
        value("As Ks Qs");
    }

    #[test]
    fn all_five_cards_hands() {
        let mut counts = [0usize; HandRank::COUNT];
        let mut values = HashSet::default();

        Deck::default().for_each(5, |cards| {
            let v = HandValue::eval(cards);
            counts[v.rank() as usize] += 1;
            values.insert(v);
        });

        assert_eq!(
            counts,
            [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 40]
        );

        // Distinct hand values, one per class of equivalent hands.
        assert_eq!(values.len(), 7_462);
    }

    // This takes a while to run in debug mode as it goes through 133M hands.
    #[test]
    #[ignore]
    fn all_seven_cards_hands() {
        let mut counts = [0usize; HandRank::COUNT];

        Deck::default().for_each(7, |cards| {
            counts[HandValue::eval(cards).rank() as usize] += 1;
        });

        assert_eq!(
            counts,
            [
                23_294_460, 58_627_800, 31_433_400, 6_461_620, 6_180_020, 4_047_644, 3_473_184,
                224_848, 41_584
            ]
        );
    }
}
