// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "Td".parse::<Card>().unwrap();
//! assert_eq!(ah.to_string(), "Ah");
//! assert_eq!(td.rank(), Rank::Ten);
//! ```
//!
//! Cards are written as two characters tokens, the rank first (`2`-`9`, `T`,
//! `J`, `Q`, `K`, `A`) and the suit second (`s`, `h`, `d`, `c`), any other
//! token fails with a [ParseCardError]:
//!
//! ```
//! # use showdown_cards::Card;
//! assert!("10c".parse::<Card>().is_err());
//! assert!("AS".parse::<Card>().is_err());
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hand = (0..7).filter_map(|_| deck.deal()).collect::<Vec<_>>();
//! assert_eq!(hand.len(), 7);
//! assert_eq!(deck.count(), Deck::SIZE - 7);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, ParseCardError, Rank, Suit};

mod deck;
pub use deck::Deck;
