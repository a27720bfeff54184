// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player actions and the action provider interface.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{
    error::{Error, Result},
    poker::{Card, Chips, Street},
};

/// A Player action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Player checks.
    Check,
    /// Player calls the current bet.
    Call,
    /// Player raises the street bet to the given total amount.
    Raise(Chips),
    /// Player folds.
    Fold,
}

impl Action {
    /// The action kind.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Check => ActionKind::Check,
            Action::Call => ActionKind::Call,
            Action::Raise(_) => ActionKind::Raise,
            Action::Fold => ActionKind::Fold,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Raise(amount) => write!(f, "raise to {amount}"),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

impl FromStr for Action {
    type Err = Error;

    /// Parses `check` (`k`, `x`), `call` (`c`), `raise <amount>` (`r <amount>`)
    /// and `fold` (`f`), case insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim().to_ascii_lowercase();
        let mut words = input.split_whitespace();

        let action = match (words.next(), words.next(), words.next()) {
            (Some("check" | "k" | "x"), None, _) => Action::Check,
            (Some("call" | "c"), None, _) => Action::Call,
            (Some("fold" | "f"), None, _) => Action::Fold,
            (Some("raise" | "r"), Some(amount), None) => {
                let amount = amount.trim_start_matches('$').parse::<u32>().map_err(|_| {
                    Error::IllegalAction(format!("invalid raise amount {amount:?}"))
                })?;
                Action::Raise(Chips::new(amount))
            }
            (Some("raise" | "r"), None, _) => {
                return Err(Error::IllegalAction("raise needs an amount".to_string()));
            }
            _ => return Err(Error::IllegalAction(format!("unknown action {:?}", s.trim()))),
        };

        Ok(action)
    }
}

/// The kind of an action without its amount.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Check.
    Check,
    /// Call.
    Call,
    /// Raise.
    Raise,
    /// Fold.
    Fold,
}

impl ActionKind {
    /// The action label.
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Raise => "raise",
            ActionKind::Fold => "fold",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A request for an action sent to the player to act.
#[derive(Debug)]
pub struct ActionRequest<'a> {
    /// The seat of the player.
    pub seat: usize,
    /// The player name.
    pub player: &'a str,
    /// The betting street.
    pub street: Street,
    /// The bet to match to stay in the hand.
    pub current_bet: Chips,
    /// The pot including bets of this street.
    pub pot: Chips,
    /// How much the player has to add to call.
    pub call_amount: Chips,
    /// The minimum total amount for a raise.
    pub min_raise: Chips,
    /// The player chips behind.
    pub chips: Chips,
    /// The player bet in this street.
    pub bet: Chips,
    /// The legal actions.
    pub actions: Vec<ActionKind>,
    /// The player hole cards.
    pub hole_cards: &'a [Card],
    /// The board cards.
    pub board: &'a [Card],
    /// Why the previous action was rejected, if this request is a retry.
    pub rejected: Option<String>,
}

impl ActionRequest<'_> {
    /// Check if a call action is in the request.
    pub fn can_call(&self) -> bool {
        self.actions.contains(&ActionKind::Call)
    }

    /// Check if a check action is in the request.
    pub fn can_check(&self) -> bool {
        self.actions.contains(&ActionKind::Check)
    }
}

/// The source of players decisions.
///
/// The game blocks on [ActionProvider::request_action] until the player to
/// act returns an action. An action that is not legal for the player is
/// rejected and requested again with the [ActionRequest::rejected] reason,
/// any other error aborts the hand.
pub trait ActionProvider {
    /// Requests an action from the player described by `request`.
    fn request_action(&mut self, request: &ActionRequest<'_>) -> Result<Action>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_actions() {
        assert_eq!("check".parse::<Action>().unwrap(), Action::Check);
        assert_eq!(" X ".parse::<Action>().unwrap(), Action::Check);
        assert_eq!("c".parse::<Action>().unwrap(), Action::Call);
        assert_eq!("Fold".parse::<Action>().unwrap(), Action::Fold);
        assert_eq!(
            "raise 40".parse::<Action>().unwrap(),
            Action::Raise(Chips::new(40))
        );
        assert_eq!(
            "r $120".parse::<Action>().unwrap(),
            Action::Raise(Chips::new(120))
        );
    }

    #[test]
    fn parse_illegal_actions() {
        for input in ["", "bet", "raise", "r ten", "r -5", "call 10", "check now", "r 10 20"] {
            let res = input.parse::<Action>();
            assert!(
                matches!(res, Err(Error::IllegalAction(_))),
                "{input:?} should be illegal"
            );
        }
    }

    #[test]
    fn action_display() {
        assert_eq!(Action::Raise(Chips::new(1_500)).to_string(), "raise to $1,500");
        assert_eq!(Action::Fold.to_string(), "fold");
    }
}
