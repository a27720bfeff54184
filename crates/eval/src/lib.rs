// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Riverboat Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator counts ranks
//! and suits to find the best five cards hand without enumerating all the
//! five cards combinations, and returns its category with the tiebreak ranks
//! used to compare hands of the same category.
//!
//! To use the evaluator create a hand and use [evaluate] to get its value:
//!
//! ```
//! # use riverboat_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = evaluate(&cards[0..5]).unwrap();
//! let v2 = evaluate(&cards[5..]).unwrap();
//! assert!(v2 > v1);
//! assert_eq!(v2.category(), HandCategory::StraightFlush);
//! ```
//!
//! and [resolve] to find the winners of a showdown.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, EvaluatedHand, HandCategory, evaluate};

mod showdown;
pub use showdown::resolve;

// Reexport cards types.
pub use riverboat_cards::{Card, Deck, ParseCardError, RandomSource, Rank, Suit};
