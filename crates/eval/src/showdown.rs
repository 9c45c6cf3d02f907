// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands comparison and winners selection.
use log::debug;
use std::cmp::Ordering;

use crate::{Evaluation, Hand};

/// Compares two evaluations.
///
/// The stronger category wins, with the same category the best cards ranks
/// are compared from the most significant card down to the least significant
/// one and the first different rank decides. Suits are never compared.
///
/// ```
/// # use showdown_eval::*;
/// # use std::cmp::Ordering;
/// let ace_kicker = evaluate(["Kc", "Kd", "Ah", "5s", "6d", "2s", "7d"]).unwrap();
/// let queen_kicker = evaluate(["Kc", "Kd", "Qh", "5s", "6d", "2s", "7d"]).unwrap();
/// assert_eq!(compare(&ace_kicker, &queen_kicker), Ordering::Greater);
/// ```
pub fn compare(a: &Evaluation, b: &Evaluation) -> Ordering {
    a.strength().cmp(&b.strength()).then_with(|| {
        a.best_hand()
            .iter()
            .rev()
            .zip(b.best_hand().iter().rev())
            .map(|(c1, c2)| c1.ordinal().cmp(&c2.ordinal()))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

/// Returns the indices of the winning hands, in input order.
///
/// Only hands with the strongest category can win, a hand with that category
/// wins if no other hand with the same category beats it, so all the hands
/// that tie at the top are winners. Every candidate is compared with all the
/// other candidates.
pub fn winners(hands: &[Hand]) -> Vec<usize> {
    let Some(top) = hands.iter().map(Hand::strength).max() else {
        return Vec::new();
    };

    let candidates = hands
        .iter()
        .enumerate()
        .filter(|(_, hand)| hand.strength() == top)
        .collect::<Vec<_>>();

    let winners = candidates
        .iter()
        .filter(|(_, hand)| !candidates.iter().any(|(_, other)| other.beats(hand)))
        .map(|&(idx, _)| idx)
        .collect::<Vec<_>>();

    debug!(
        "Picked {} winners out of {} hands, {} candidates with strength {top}",
        winners.len(),
        hands.len(),
        candidates.len(),
    );

    winners
}

/// Returns the winning hands, in input order.
///
/// ```
/// # use showdown_eval::*;
/// let hands = [
///     "Kc,Kd,Ah,5s,6d,2s,7d".parse::<Hand>().unwrap(),
///     "Kh,Ks,Ac,5d,6c,2h,7c".parse::<Hand>().unwrap(),
///     "Kc,Kd,Qh,5s,6d,2s,7d".parse::<Hand>().unwrap(),
/// ];
/// let winners = pick_winners(&hands);
/// assert_eq!(winners.len(), 2);
/// assert!(winners[0].ties(winners[1]));
/// ```
pub fn pick_winners(hands: &[Hand]) -> Vec<&Hand> {
    winners(hands).into_iter().map(|idx| &hands[idx]).collect()
}
