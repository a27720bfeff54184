// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player state.
use serde::{Deserialize, Serialize};

use crate::poker::{Card, Chips};

/// A player seated in the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// The player name, unique in a game.
    pub name: String,
    /// This player chips.
    pub chips: Chips,
    /// This player private cards.
    pub hole_cards: Vec<Card>,
    /// The player bet in the current street.
    pub bet: Chips,
    /// The chips this player put in the pot in the current hand.
    pub committed: Chips,
    /// The player has folded this hand.
    pub folded: bool,
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>, chips: Chips) -> Self {
        Self {
            name: name.into(),
            chips,
            hole_cards: Vec::with_capacity(2),
            bet: Chips::ZERO,
            committed: Chips::ZERO,
            folded: false,
        }
    }

    /// Moves up to `amount` chips from this player stack into its bet.
    ///
    /// A player that doesn't have enough chips goes all in, returns the chips
    /// actually moved.
    pub fn place_bet(&mut self, amount: Chips) -> Chips {
        let amount = amount.min(self.chips);
        self.chips -= amount;
        self.bet += amount;
        self.committed += amount;
        amount
    }

    /// Sets this player in fold state.
    pub fn fold(&mut self) {
        self.folded = true;
    }

    /// The player is still in the hand.
    pub fn is_active(&self) -> bool {
        !self.folded
    }

    /// The player is in the hand and has chips to bet.
    pub fn can_act(&self) -> bool {
        !self.folded && self.chips > Chips::ZERO
    }

    /// The player is in the hand with all its chips in the pot.
    pub fn is_all_in(&self) -> bool {
        !self.folded && self.chips == Chips::ZERO && self.committed > Chips::ZERO
    }

    /// Reset state for a new hand.
    pub(crate) fn start_hand(&mut self) {
        self.hole_cards.clear();
        self.bet = Chips::ZERO;
        self.committed = Chips::ZERO;
        self.folded = false;
    }

    /// Reset state for a new street.
    pub(crate) fn start_street(&mut self) {
        self.bet = Chips::ZERO;
    }

    /// Returns the chips committed in an aborted hand.
    pub(crate) fn refund(&mut self) {
        self.chips += self.committed;
        self.bet = Chips::ZERO;
        self.committed = Chips::ZERO;
    }
}
