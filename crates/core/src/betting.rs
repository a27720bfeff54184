// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Betting round state machine.
//!
//! A [BettingRound] governs the betting of one street. Players act in seat
//! order starting from the first seat, skipping players that have folded or
//! have no chips left. A raise makes the raising seat the reference seat, the
//! round closes when action gets back to it with every player that can still
//! bet matching the current bet, or when nobody is left to bet against.
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    action::{Action, ActionKind},
    error::{Error, Result},
    player::Player,
    poker::Chips,
};

/// The state of a betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Accepting actions.
    Open,
    /// The round is settled.
    Closed,
}

/// An action applied to a betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedAction {
    /// The seat that acted.
    pub seat: usize,
    /// The action as applied, a raise below the minimum becomes a call.
    pub action: Action,
    /// The chips moved into the pot.
    pub amount: Chips,
    /// The player has no chips left after this action.
    pub all_in: bool,
}

/// The betting for one street.
#[derive(Debug, Clone)]
pub struct BettingRound {
    seats: usize,
    current_bet: Chips,
    min_bet: Chips,
    pot: Chips,
    turn: usize,
    /// The seat that closes the round when action gets back to it.
    reference: usize,
    opener: usize,
    last_aggressor: Option<usize>,
    state: RoundState,
}

impl BettingRound {
    /// Starts a betting round.
    ///
    /// The `current_bet` is the bet players have to match (the big blind
    /// preflop), `min_bet` is the smallest amount a raise can be made to, the
    /// first player to act is the first one at or after `first_seat` that can
    /// bet. The `pot` accumulates the chips bet in this round.
    pub fn new(
        players: &[Player],
        current_bet: Chips,
        min_bet: Chips,
        first_seat: usize,
        pot: Chips,
    ) -> Self {
        let seats = players.len();
        let first_seat = first_seat % seats.max(1);

        let mut round = Self {
            seats,
            current_bet,
            min_bet,
            pot,
            turn: first_seat,
            reference: first_seat,
            opener: first_seat,
            last_aggressor: None,
            state: RoundState::Open,
        };

        if round.should_close(players) {
            round.close();
            return round;
        }

        // There must be a player that can act or the round would be closed.
        if let Some(seat) = (0..seats)
            .map(|k| (first_seat + k) % seats)
            .find(|&seat| players[seat].can_act())
        {
            round.turn = seat;
            round.reference = seat;
            round.opener = seat;
        }

        round
    }

    /// The round state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Checks if the round is closed.
    pub fn is_closed(&self) -> bool {
        self.state == RoundState::Closed
    }

    /// The seat to act, `None` if the round is closed.
    pub fn turn(&self) -> Option<usize> {
        match self.state {
            RoundState::Open => Some(self.turn),
            RoundState::Closed => None,
        }
    }

    /// The bet to match to stay in the hand.
    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }

    /// The pot including all the bets made in this round.
    pub fn pot(&self) -> Chips {
        self.pot
    }

    /// The minimum total bet for a raise.
    ///
    /// A raise must at least double the current bet and cannot be smaller
    /// than the minimum bet.
    pub fn min_raise_to(&self) -> Chips {
        (self.current_bet * 2).max(self.min_bet)
    }

    /// The chips a player needs to call, limited by the player chips.
    pub fn call_amount(&self, player: &Player) -> Chips {
        (self.current_bet - player.bet).min(player.chips)
    }

    /// The legal actions for a player.
    pub fn legal_actions(&self, player: &Player) -> Vec<ActionKind> {
        if self.is_closed() || !player.can_act() {
            return Vec::new();
        }

        let mut actions = vec![ActionKind::Fold];

        if player.bet >= self.current_bet {
            actions.push(ActionKind::Check);
        } else {
            actions.push(ActionKind::Call);
        }

        actions.push(ActionKind::Raise);
        actions
    }

    /// The seat that should act first in the next street, the seat after the
    /// last player who raised or the seat that opened this round if nobody
    /// raised.
    pub fn next_street_seat(&self) -> usize {
        match self.last_aggressor {
            Some(seat) => (seat + 1) % self.seats.max(1),
            None => self.opener,
        }
    }

    /// Applies an action for the player to act and moves to the next player.
    ///
    /// Returns [Error::IllegalAction] and leaves the round unchanged if the
    /// round is closed, if the player checks facing a bet, or calls with
    /// nothing to call.
    pub fn act(&mut self, players: &mut [Player], action: Action) -> Result<AppliedAction> {
        let Some(seat) = self.turn() else {
            return Err(Error::IllegalAction("the betting round is closed".to_string()));
        };

        let min_raise = self.min_raise_to();
        let player = &mut players[seat];
        let owed = self.current_bet - player.bet;

        let applied = match action {
            Action::Check if owed > Chips::ZERO => {
                return Err(Error::IllegalAction(format!(
                    "{} cannot check facing a bet of {}",
                    player.name, self.current_bet
                )));
            }
            Action::Call if owed == Chips::ZERO => {
                return Err(Error::IllegalAction(format!(
                    "{} has nothing to call",
                    player.name
                )));
            }
            Action::Check => Action::Check,
            Action::Call => {
                let amount = player.place_bet(owed);
                self.pot += amount;
                return Ok(self.applied(players, seat, Action::Call, amount));
            }
            Action::Raise(amount) if amount < min_raise => {
                warn!(
                    "{} raise to {amount} is below the minimum {min_raise}, treated as a call",
                    player.name
                );

                let amount = player.place_bet(owed);
                self.pot += amount;

                let action = if owed == Chips::ZERO {
                    Action::Check
                } else {
                    Action::Call
                };
                return Ok(self.applied(players, seat, action, amount));
            }
            Action::Raise(amount) => {
                let moved = player.place_bet(amount - player.bet);
                self.pot += moved;

                // A short all-in may not even match the current bet.
                if player.bet > self.current_bet {
                    self.current_bet = player.bet;
                    self.reference = seat;
                    self.last_aggressor = Some(seat);
                }

                let raise_to = player.bet;
                return Ok(self.applied(players, seat, Action::Raise(raise_to), moved));
            }
            Action::Fold => {
                player.fold();
                Action::Fold
            }
        };

        Ok(self.applied(players, seat, applied, Chips::ZERO))
    }

    fn applied(
        &mut self,
        players: &[Player],
        seat: usize,
        action: Action,
        amount: Chips,
    ) -> AppliedAction {
        let player = &players[seat];
        debug!("Seat {seat} {} {action} ({amount})", player.name);

        let applied = AppliedAction {
            seat,
            action,
            amount,
            all_in: player.is_all_in(),
        };

        self.advance(players);
        applied
    }

    /// Moves the turn to the next player that can act or closes the round.
    fn advance(&mut self, players: &[Player]) {
        if self.should_close(players) {
            self.close();
            return;
        }

        // Stops within a loop around the table as there are players to act.
        loop {
            self.turn = (self.turn + 1) % self.seats;

            if self.turn == self.reference && self.all_matched(players) {
                self.close();
                return;
            }

            if players[self.turn].can_act() {
                return;
            }
        }
    }

    /// Checks if there is nobody left to bet against.
    fn should_close(&self, players: &[Player]) -> bool {
        if players.iter().filter(|p| p.is_active()).count() < 2 {
            return true;
        }

        let mut actors = players.iter().filter(|p| p.can_act());
        match (actors.next(), actors.next()) {
            (None, _) => true,
            (Some(p), None) => p.bet >= self.current_bet,
            _ => false,
        }
    }

    /// Checks if all players who can still bet have matched the current bet.
    fn all_matched(&self, players: &[Player]) -> bool {
        players
            .iter()
            .filter(|p| p.can_act())
            .all(|p| p.bet >= self.current_bet)
    }

    fn close(&mut self) {
        self.state = RoundState::Closed;
    }
}
