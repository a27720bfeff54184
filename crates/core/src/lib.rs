// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Riverboat Poker betting rounds and game orchestration.
//!
//! A [Game] runs hands of Texas Hold'em, a [BettingRound] enforces the
//! betting rules of a single street, players decisions come from an
//! [ActionProvider] and game events go to an [EventSink].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod action;
pub use action::{Action, ActionKind, ActionProvider, ActionRequest};

pub mod betting;
pub use betting::{AppliedAction, BettingRound, RoundState};

pub mod error;
pub use error::{Error, Result};

pub mod events;
pub use events::{Blind, EventSink, GameEvent, Recipient, ShowdownHand};

pub mod game;
pub use game::{Config, Game, HandSummary, PostflopOrder, split_pot};

pub mod player;
pub use player::Player;

pub mod poker;
