// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck and shuffling.
use rand::{
    rngs::{StdRng, ThreadRng},
    seq::SliceRandom,
};

use crate::{Card, Rank, Suit};

/// A source of randomness for shuffling cards.
///
/// The deck only needs a permutation of its cards, implement this trait to
/// stack a deck in tests or to plug a different generator.
pub trait RandomSource {
    /// Shuffles the cards in place.
    fn shuffle(&mut self, cards: &mut [Card]);
}

impl RandomSource for StdRng {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(self);
    }
}

impl RandomSource for ThreadRng {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(self);
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Deals a card from the top of the deck, `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Calls the `f` closure for each k-cards hand in the deck.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        // Indices of the current combination in lexicographic order.
        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = idx.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        loop {
            f(&hand);

            // The rightmost index that has room to move.
            let Some(pos) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
                break;
            };

            idx[pos] += 1;
            for i in pos + 1..k {
                idx[i] = idx[i - 1] + 1;
            }

            for i in pos..k {
                hand[i] = self.cards[idx[i]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::SeedableRng;

    #[test]
    fn deal_all_cards() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        while let Some(card) = deck.deal() {
            assert!((2..=14).contains(&card.rank().value()));
            cards.insert(card);
        }

        // Check uniqueness.
        assert_eq!(cards.len(), Deck::SIZE);
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
    }

    #[test]
    fn seeded_shuffle_is_deterministic() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(13));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(13));
        let d3 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(14));

        let d1 = d1.into_iter().collect::<Vec<_>>();
        assert_eq!(d1, d2.into_iter().collect::<Vec<_>>());
        assert_ne!(d1, d3.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn stacked_source() {
        struct Reverse;

        impl RandomSource for Reverse {
            fn shuffle(&mut self, cards: &mut [Card]) {
                cards.reverse();
            }
        }

        // The default deck starts with the deuce of clubs, reversed it
        // becomes the top card.
        let mut deck = Deck::new_and_shuffled(&mut Reverse);
        assert_eq!(deck.deal(), Some(Card::new(Rank::Deuce, Suit::Clubs)));
        assert_eq!(deck.deal(), Some(Card::new(Rank::Trey, Suit::Clubs)));
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
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

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }
}
