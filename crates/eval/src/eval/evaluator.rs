// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand evaluation for 5, 6, and 7 cards.
use riverboat_cards::{Card, Rank};

use super::{EvalError, EvaluatedHand, HandCategory};

/// A set of ranks stored as bits, bit `v` is set for a rank with value `v`.
///
/// An ace also sets bit 1 so that the wheel A-2-3-4-5 is found by the same
/// window scan as any other straight.
#[derive(Debug, Default, Clone, Copy)]
struct RankSet(u16);

impl RankSet {
    const ACE_LOW: u16 = 1 << 1;
    const WINDOW: u16 = 0b11111;

    fn insert(&mut self, rank: Rank) {
        self.0 |= 1 << rank.value();
        if rank == Rank::Ace {
            self.0 |= Self::ACE_LOW;
        }
    }

    /// Number of distinct ranks.
    fn len(self) -> u32 {
        (self.0 & !Self::ACE_LOW).count_ones()
    }

    /// The top card of the highest straight in the set.
    fn straight_high(self) -> Option<Rank> {
        (Rank::Five.value()..=Rank::Ace.value())
            .rev()
            .find(|&high| {
                let window = Self::WINDOW << (high - 4);
                self.0 & window == window
            })
            .and_then(Rank::from_value)
    }

    /// Ranks in descending order.
    fn descending(self) -> impl Iterator<Item = Rank> {
        Rank::ranks()
            .rev()
            .filter(move |r| self.0 & (1 << r.value()) != 0)
    }
}

/// Evaluates the best five cards hand out of 5 to 7 cards.
///
/// All five cards combinations are considered by counting ranks and suits
/// rather than enumerating them.
///
/// ```
/// # use riverboat_eval::*;
/// let cards = ["AS", "2S", "3S", "4S", "5S", "KD", "QD"]
///     .iter()
///     .map(|c| c.parse::<Card>().unwrap())
///     .collect::<Vec<_>>();
///
/// let hand = evaluate(&cards).unwrap();
/// assert_eq!(hand.category(), HandCategory::StraightFlush);
/// assert_eq!(hand.tiebreak(), &[Rank::Five]);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::InvalidHand(cards.len()));
    }

    let mut counts = [0u8; 15];
    let mut suits = [RankSet::default(); 4];
    let mut ranks = RankSet::default();

    for card in cards {
        counts[card.rank().value() as usize] += 1;
        suits[card.suit().index()].insert(card.rank());
        ranks.insert(card.rank());
    }

    // With at most 7 cards only one suit can hold five of them.
    let flush = suits.iter().copied().find(|s| s.len() >= 5);

    if let Some(high) = flush.and_then(RankSet::straight_high) {
        let category = if high == Rank::Ace {
            HandCategory::RoyalFlush
        } else {
            HandCategory::StraightFlush
        };

        return Ok(EvaluatedHand::new(category, vec![high]));
    }

    // Rank groups by size and then by rank, both descending.
    let mut groups = ranks
        .descending()
        .map(|r| (counts[r.value() as usize], r))
        .collect::<Vec<_>>();
    groups.sort_by(|a, b| b.0.cmp(&a.0));

    let kickers = |exclude: &[Rank], n: usize| {
        ranks
            .descending()
            .filter(|r| !exclude.contains(r))
            .take(n)
            .collect::<Vec<_>>()
    };

    let (top_count, top) = groups[0];
    let second = groups.get(1).copied();

    if top_count == 4 {
        let mut tiebreak = vec![top];
        tiebreak.extend(kickers(&[top], 1));
        return Ok(EvaluatedHand::new(HandCategory::FourOfAKind, tiebreak));
    }

    if let (3, Some((second_count, pair))) = (top_count, second) {
        if second_count >= 2 {
            return Ok(EvaluatedHand::new(HandCategory::FullHouse, vec![top, pair]));
        }
    }

    if let Some(flush) = flush {
        let tiebreak = flush.descending().take(5).collect();
        return Ok(EvaluatedHand::new(HandCategory::Flush, tiebreak));
    }

    if let Some(high) = ranks.straight_high() {
        return Ok(EvaluatedHand::new(HandCategory::Straight, vec![high]));
    }

    let hand = match (top_count, second) {
        (3, _) => {
            let mut tiebreak = vec![top];
            tiebreak.extend(kickers(&[top], 2));
            EvaluatedHand::new(HandCategory::ThreeOfAKind, tiebreak)
        }
        (2, Some((2, low))) => {
            let mut tiebreak = vec![top, low];
            tiebreak.extend(kickers(&[top, low], 1));
            EvaluatedHand::new(HandCategory::TwoPair, tiebreak)
        }
        (2, _) => {
            let mut tiebreak = vec![top];
            tiebreak.extend(kickers(&[top], 3));
            EvaluatedHand::new(HandCategory::OnePair, tiebreak)
        }
        _ => EvaluatedHand::new(HandCategory::HighCard, kickers(&[], 5)),
    };

    Ok(hand)
}
