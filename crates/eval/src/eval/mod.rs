// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator classifies the best five cards out of 5, 6, or 7 cards into a
//! [HandCategory] and a list of tiebreak ranks, the pair forms an
//! [EvaluatedHand] that is totally ordered so that hands can be compared at
//! showdown.
//!
//! Straights are found by scanning every five ranks window with the ace
//! counting both high and low, a straight flush is the same scan restricted
//! to the cards of the flush suit.
use thiserror::Error;

mod evaluator;
pub use evaluator::evaluate;

mod hand;
pub use hand::{EvaluatedHand, HandCategory};

/// Evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The number of cards is not in 5..=7.
    #[error("invalid hand: expected 5 to 7 cards, got {0}")]
    InvalidHand(usize),
}
