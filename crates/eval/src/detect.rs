// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories detectors.
//!
//! Each [Category] knows how to find its pattern in a 7 cards [Hand] and how
//! to extract the best five cards that make it. The five cards are ordered
//! from the least significant card to the most significant one: kickers come
//! first in ascending rank order followed by the cards that make the category,
//! lower groups before higher ones. For straights, flushes and high cards this
//! is the ascending rank order, for a wheel the ace is the first card.
//!
//! A [Detector] wraps a hand and a category and caches the detection result.
use log::trace;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::OnceLock};

use crate::{Card, Hand, Rank};

/// A Poker hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl Category {
    /// Returns all categories from the strongest to the weakest.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            OnePair,
            HighCard,
        ]
        .into_iter()
    }

    /// The category strength, 0 for a high card up to 8 for a straight flush.
    pub const fn strength(self) -> u8 {
        self as u8
    }

    /// The category name.
    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }

    /// Finds the best five cards for this category, `None` if the hand
    /// doesn't contain it.
    pub fn best_hand(self, hand: &Hand) -> Option<[Card; 5]> {
        match self {
            Category::StraightFlush => straight_flush(hand),
            Category::FourOfAKind => four_of_a_kind(hand),
            Category::FullHouse => full_house(hand),
            Category::Flush => flush(hand),
            Category::Straight => straight(hand.all_cards()),
            Category::ThreeOfAKind => three_of_a_kind(hand),
            Category::TwoPair => two_pair(hand),
            Category::OnePair => one_pair(hand),
            Category::HighCard => Some(high_card(hand)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A category detector for a hand.
///
/// The detection runs once on the first call to [Detector::is_possible] or
/// [Detector::best_hand], later calls return the cached result.
///
/// ```
/// # use showdown_eval::*;
/// let hand = "3c,9c,5c,6c,7c,Ah,As".parse::<Hand>().unwrap();
/// let flush = Detector::new(Category::Flush, hand.clone());
/// assert!(flush.is_possible());
/// assert_eq!(flush.best_hand().len(), 5);
///
/// let quads = Detector::new(Category::FourOfAKind, hand);
/// assert!(!quads.is_possible());
/// assert!(quads.best_hand().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Detector {
    category: Category,
    hand: Hand,
    detected: OnceLock<Option<[Card; 5]>>,
}

impl Detector {
    /// Creates a detector for the given category and hand.
    pub fn new(category: Category, hand: Hand) -> Self {
        Self {
            category,
            hand,
            detected: OnceLock::new(),
        }
    }

    /// The detected category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The hand this detector looks into.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Checks if the hand contains this detector category.
    pub fn is_possible(&self) -> bool {
        self.detect().is_some()
    }

    /// The best five cards for this category, empty if not possible.
    pub fn best_hand(&self) -> &[Card] {
        self.detect().as_ref().map_or(&[], |cards| cards.as_slice())
    }

    fn detect(&self) -> &Option<[Card; 5]> {
        self.detected.get_or_init(|| {
            let best = self.category.best_hand(&self.hand);
            if best.is_none() {
                trace!("No {} in {}", self.category, self.hand);
            }
            best
        })
    }
}

/// The five highest cards, always possible.
pub(crate) fn high_card(hand: &Hand) -> [Card; 5] {
    let c = hand.all_cards();
    [c[2], c[3], c[4], c[5], c[6]]
}

fn straight_flush(hand: &Hand) -> Option<[Card; 5]> {
    hand.suits()
        .values()
        .filter(|cards| cards.len() >= 5)
        .find_map(|cards| straight(cards))
}

fn four_of_a_kind(hand: &Hand) -> Option<[Card; 5]> {
    let quads = groups_of(hand, 4).next()?;
    with_kickers(hand, &[quads])
}

fn full_house(hand: &Hand) -> Option<[Card; 5]> {
    let trips = groups_of(hand, 3).next()?;
    let pair = groups_desc(hand)
        .filter(|g| g.len() >= 2 && g[0].rank() != trips[0].rank())
        .map(|g| &g[g.len() - 2..])
        .next()?;
    with_kickers(hand, &[trips, pair])
}

fn flush(hand: &Hand) -> Option<[Card; 5]> {
    hand.suits()
        .values()
        .find(|cards| cards.len() >= 5)
        .and_then(|cards| cards[cards.len() - 5..].try_into().ok())
}

/// Finds the highest straight in cards sorted by ascending rank.
///
/// The scan goes from the highest card down extending a run while the next
/// rank is one below the run last card, skipping cards with the same rank and
/// restarting the run on gaps. An ace is also scanned after the deuces with
/// ordinal -1 so that A-2-3-4-5 is found, there is no wrap around from king to
/// deuce.
fn straight(cards: &[Card]) -> Option<[Card; 5]> {
    let low_ace = cards
        .last()
        .filter(|c| c.rank() == Rank::Ace)
        .map(|&c| (-1, c));

    let scan = cards
        .iter()
        .rev()
        .map(|&c| (c.ordinal() as i8, c))
        .chain(low_ace);

    let mut run: Vec<(i8, Card)> = Vec::with_capacity(5);
    for (ordinal, card) in scan {
        match run.last() {
            Some(&(last, _)) if last == ordinal => continue,
            Some(&(last, _)) if last - ordinal == 1 => run.push((ordinal, card)),
            _ => {
                run.clear();
                run.push((ordinal, card));
            }
        }

        if run.len() == 5 {
            return run
                .iter()
                .rev()
                .map(|&(_, c)| c)
                .collect::<Vec<_>>()
                .try_into()
                .ok();
        }
    }

    None
}

fn three_of_a_kind(hand: &Hand) -> Option<[Card; 5]> {
    let trips = groups_of(hand, 3).next()?;
    with_kickers(hand, &[trips])
}

fn two_pair(hand: &Hand) -> Option<[Card; 5]> {
    let mut pairs = groups_of(hand, 2);
    let high = pairs.next()?;
    let low = pairs.next()?;
    with_kickers(hand, &[high, low])
}

fn one_pair(hand: &Hand) -> Option<[Card; 5]> {
    let pair = groups_of(hand, 2).next()?;
    with_kickers(hand, &[pair])
}

/// Cards grouped by rank from the highest rank to the lowest.
fn groups_desc(hand: &Hand) -> impl Iterator<Item = &[Card]> {
    Rank::ranks()
        .rev()
        .filter_map(move |rank| hand.values().get(&rank))
        .map(Vec::as_slice)
}

/// Groups with exactly `count` cards from the highest rank to the lowest.
fn groups_of(hand: &Hand, count: usize) -> impl Iterator<Item = &[Card]> {
    groups_desc(hand).filter(move |g| g.len() == count)
}

/// Completes made groups, given from the most significant, with the highest
/// cards of other ranks.
fn with_kickers(hand: &Hand, made: &[&[Card]]) -> Option<[Card; 5]> {
    let made_len = made.iter().map(|g| g.len()).sum::<usize>();
    let kickers = hand
        .all_cards()
        .iter()
        .rev()
        .filter(|c| made.iter().all(|g| g[0].rank() != c.rank()))
        .take(5usize.saturating_sub(made_len))
        .collect::<Vec<_>>();

    kickers
        .into_iter()
        .rev()
        .chain(made.iter().rev().flat_map(|g| g.iter()))
        .copied()
        .collect::<Vec<_>>()
        .try_into()
        .ok()
}
