// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Riverboat Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use riverboat_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah > kd);
//! assert_eq!(ah.rank().value(), 14);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//! A deck is shuffled by a [RandomSource], implemented for the `rand` crate
//! generators:
//!
//! ```
//! # use riverboat_cards::{Deck};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let mut dealt = 0;
//! while deck.deal().is_some() {
//!     dealt += 1;
//! }
//! assert_eq!(dealt, Deck::SIZE);
//! ```
//!
//! To iterate through all 5 cards hands:
//!
//! ```no_run
//! # use riverboat_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, ParseCardError, Rank, Suit};

mod deck;
pub use deck::{Deck, RandomSource};
