// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game errors.
use std::io;
use thiserror::Error;

use crate::poker::EvalError;

/// Errors returned by betting rounds and by the game.
#[derive(Debug, Error)]
pub enum Error {
    /// A hand could not be evaluated.
    #[error(transparent)]
    InvalidHand(#[from] EvalError),
    /// The action is not legal for the player to act, the caller should ask
    /// again.
    #[error("illegal action: {0}")]
    IllegalAction(String),
    /// A card was requested from an empty deck.
    #[error("the deck has no cards left")]
    DeckExhausted,
    /// Invalid game configuration or players.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// The action provider failed to produce an action.
    #[error("action source error: {0}")]
    ActionSource(#[from] io::Error),
}

impl Error {
    /// Checks if the caller can recover by asking for another action.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::IllegalAction(_))
    }
}

/// A result type for game operations.
pub type Result<T> = std::result::Result<T, Error>;
