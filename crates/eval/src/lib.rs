// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Seven cards poker hand evaluator that finds the best five cards hand, its
//! category, and compares hands with kickers to pick the winners of a
//! showdown.
//!
//! To use the evaluator create a [Hand] from 7 cards or card tokens and
//! evaluate it:
//!
//! ```
//! # use showdown_eval::*;
//! let hand = Hand::new(["Kc", "2d", "3s", "4h", "5s", "Ac", "5d"]).unwrap();
//! let eval = hand.evaluate();
//! assert_eq!(eval.category(), Category::Straight);
//! assert_eq!(eval.name(), "Straight");
//! assert_eq!(eval.strength(), 4);
//! assert_eq!(eval.to_string(), "Ac,2d,3s,4h,5d");
//! ```
//!
//! Hands can be compared and the winners picked, all the hands that tie at
//! the top are winners:
//!
//! ```
//! # use showdown_eval::*;
//! let board = ["Ts", "Jd", "Qs", "2h", "2c"];
//! let p1 = Hand::new(board.iter().chain(&["Ah", "Ks"])).unwrap();
//! let p2 = Hand::new(board.iter().chain(&["9h", "8s"])).unwrap();
//! let p3 = Hand::new(board.iter().chain(&["2s", "Td"])).unwrap();
//! assert!(p1.beats(&p2));
//! assert!(p3.beats(&p1));
//!
//! let hands = [p1, p2, p3];
//! assert_eq!(winners(&hands), vec![2]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod detect;
pub use detect::{Category, Detector};

mod hand;
pub use hand::{CardInput, Evaluation, Hand, IntoCard, evaluate};

pub mod showdown;
pub use showdown::{compare, pick_winners, winners};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, ParseCardError, Rank, Suit};

/// Hand construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A card token is not valid.
    #[error(transparent)]
    InvalidCard(#[from] ParseCardError),
    /// A hand doesn't have 7 cards.
    #[error("invalid hand size {0}, a hand has 7 cards")]
    InvalidHandSize(usize),
}

/// Evaluator result type.
pub type Result<T> = std::result::Result<T, Error>;
