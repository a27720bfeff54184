// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and evaluated hands.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use riverboat_cards::Rank;

/// A poker hand category.
///
/// The discriminant is the category rank, 1 for the best category. The [Ord]
/// implementation orders better categories as greater so that hands compare
/// naturally, `RoyalFlush > HighCard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// Ace high straight flush.
    RoyalFlush = 1,
    /// Five cards in sequence of the same suit.
    StraightFlush,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Three of a kind and a pair.
    FullHouse,
    /// Five cards of the same suit.
    Flush,
    /// Five cards in sequence.
    Straight,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Two pairs.
    TwoPair,
    /// Two cards of the same rank.
    OnePair,
    /// None of the above.
    HighCard,
}

impl HandCategory {
    /// Returns all categories from best to worst.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            RoyalFlush,
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            OnePair,
            HighCard,
        ]
        .into_iter()
    }

    /// The category rank, 1 for a royal flush down to 10 for a high card.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// The category name.
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::RoyalFlush => "Royal Flush",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::OnePair => "One Pair",
            HandCategory::HighCard => "High Card",
        }
    }
}

impl PartialOrd for HandCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        other.rank().cmp(&self.rank())
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The value of the best five cards hand.
///
/// Hands compare by category and then by the tiebreak ranks, so that two
/// hands with equal value split the pot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EvaluatedHand {
    category: HandCategory,
    tiebreak: Vec<Rank>,
}

impl EvaluatedHand {
    pub(crate) fn new(category: HandCategory, tiebreak: Vec<Rank>) -> Self {
        Self { category, tiebreak }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The ranks that order hands of the same category, most significant
    /// first.
    ///
    /// A straight is ordered by its top card only, the wheel has a top card
    /// of [Rank::Five].
    pub fn tiebreak(&self) -> &[Rank] {
        &self.tiebreak
    }

    /// A human readable description of the hand.
    pub fn description(&self) -> String {
        let first = self.tiebreak.first().copied().unwrap_or(Rank::Ace);
        let second = self.tiebreak.get(1).copied().unwrap_or(Rank::Deuce);

        match self.category {
            HandCategory::RoyalFlush => "Royal Flush".to_string(),
            HandCategory::StraightFlush => format!("Straight Flush, {} high", first.name()),
            HandCategory::FourOfAKind => format!("Four of a Kind, {}", first.plural()),
            HandCategory::FullHouse => {
                format!("Full House, {} over {}", first.plural(), second.plural())
            }
            HandCategory::Flush => format!("Flush, {} high", first.name()),
            HandCategory::Straight => format!("Straight, {} high", first.name()),
            HandCategory::ThreeOfAKind => format!("Three of a Kind, {}", first.plural()),
            HandCategory::TwoPair => {
                format!("Two Pair, {} and {}", first.plural(), second.plural())
            }
            HandCategory::OnePair => format!("Pair of {}", first.plural()),
            HandCategory::HighCard => format!("High Card, {}", first.name()),
        }
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
