// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown winners resolution.
use crate::EvaluatedHand;

/// Finds the winners among players hands.
///
/// The best category wins, hands with the same category are narrowed one
/// tiebreak rank at a time keeping the highest. Players whose hands are
/// equal in category and in every tiebreak rank all win and split the pot.
///
/// The winners keep the input order, and the set of winners does not depend
/// on it. The result is empty only when `hands` is empty.
///
/// ```
/// # use riverboat_eval::*;
/// let hand = |s: &str| {
///     let cards = s.split_whitespace().map(|c| c.parse().unwrap()).collect::<Vec<Card>>();
///     evaluate(&cards).unwrap()
/// };
///
/// let hands = [
///     ("alice", hand("7C 7D 3C 3D 2S")),
///     ("bob", hand("7H 7S 3H 3S 2D")),
///     ("carol", hand("7H 7S 3H 3S 4D")),
/// ];
/// assert_eq!(resolve(&hands), vec!["carol"]);
/// assert_eq!(resolve(&hands[..2]), vec!["alice", "bob"]);
/// ```
pub fn resolve<I: Clone>(hands: &[(I, EvaluatedHand)]) -> Vec<I> {
    let Some(best) = hands.iter().map(|(_, h)| h.category()).max() else {
        return Vec::new();
    };

    let mut contenders = hands
        .iter()
        .filter(|(_, h)| h.category() == best)
        .collect::<Vec<_>>();

    let positions = contenders
        .iter()
        .map(|(_, h)| h.tiebreak().len())
        .max()
        .unwrap_or_default();

    for pos in 0..positions {
        if contenders.len() == 1 {
            break;
        }

        // A missing rank compares lower than any rank.
        let top = contenders
            .iter()
            .map(|(_, h)| h.tiebreak().get(pos).copied())
            .max()
            .flatten();

        contenders.retain(|(_, h)| h.tiebreak().get(pos).copied() == top);
    }

    contenders.into_iter().map(|(id, _)| id.clone()).collect()
}
