// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game events.
use serde::{Deserialize, Serialize};

use crate::{
    action::Action,
    poker::{Card, Chips, EvaluatedHand, Street},
};

/// A forced bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Blind {
    /// The small blind.
    Small,
    /// The big blind.
    Big,
}

/// Who receives a dealt card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recipient {
    /// A private card to the named player.
    Player(String),
    /// A shared card.
    Board,
}

/// A player hand shown at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownHand {
    /// The player name.
    pub player: String,
    /// The player private cards.
    pub hole_cards: Vec<Card>,
    /// The best hand from the hole cards and the board.
    pub hand: EvaluatedHand,
}

/// Events emitted while a hand is played, in the order they happen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new hand started.
    HandStarted {
        /// The hand number starting from 1.
        hand: usize,
        /// The dealer name.
        dealer: String,
    },
    /// A player posted a blind.
    BlindPosted {
        /// The player name.
        player: String,
        /// Which blind.
        blind: Blind,
        /// The chips posted, less than the blind for a short stack.
        amount: Chips,
    },
    /// A card was dealt.
    CardDealt {
        /// Who gets the card.
        recipient: Recipient,
        /// The card.
        card: Card,
    },
    /// A betting street started.
    StreetOpened {
        /// The street.
        street: Street,
        /// The board cards.
        board: Vec<Card>,
    },
    /// A player acted.
    ActionTaken {
        /// The player name.
        player: String,
        /// The action as applied.
        action: Action,
        /// The chips moved into the pot.
        amount: Chips,
        /// The player is all in after this action.
        all_in: bool,
    },
    /// Hands compared at the end of the hand.
    Showdown {
        /// The hands of the players still in.
        hands: Vec<ShowdownHand>,
        /// The names of the winning players.
        winners: Vec<String>,
    },
    /// A player won chips from the pot.
    PotAwarded {
        /// The player name.
        player: String,
        /// The chips won.
        amount: Chips,
    },
    /// The hand was aborted and bets returned.
    HandAborted {
        /// The error that aborted the hand.
        reason: String,
    },
    /// A player run out of chips and left the game.
    PlayerEliminated {
        /// The player name.
        player: String,
    },
}

/// Receives game events.
pub trait EventSink {
    /// Called for each event as it happens.
    fn event(&mut self, event: &GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}
