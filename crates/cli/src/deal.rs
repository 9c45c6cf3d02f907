// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Random showdown dealing.
use anyhow::{Result, anyhow, bail};
use log::debug;
use rand::Rng;

use showdown_eval::{Card, Deck, Hand, winners};

/// Number of board cards.
pub const BOARD_SIZE: usize = 5;

/// Maximum number of players a deck can deal to.
pub const MAX_PLAYERS: usize = (Deck::SIZE - BOARD_SIZE) / 2;

/// A dealt table at showdown.
#[derive(Debug)]
pub struct Table {
    board: Vec<Card>,
    players: Vec<[Card; 2]>,
    hands: Vec<Hand>,
}

impl Table {
    /// The board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The players hole cards.
    pub fn players(&self) -> &[[Card; 2]] {
        &self.players
    }

    /// Each player 7 cards hand.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// The winning players indices.
    pub fn winners(&self) -> Vec<usize> {
        winners(&self.hands)
    }
}

/// Deals two hole cards to each player and the board from a shuffled deck.
pub fn deal<R: Rng>(rng: &mut R, players: usize) -> Result<Table> {
    if !(2..=MAX_PLAYERS).contains(&players) {
        bail!("Invalid number of players {players}, must be 2 to {MAX_PLAYERS}");
    }

    let mut deck = Deck::new_and_shuffled(rng);
    let mut deal_card = || deck.deal().ok_or_else(|| anyhow!("Deck is empty"));

    let mut holes = Vec::with_capacity(players);
    for _ in 0..players {
        holes.push([deal_card()?, deal_card()?]);
    }

    let board = (0..BOARD_SIZE)
        .map(|_| deal_card())
        .collect::<Result<Vec<_>>>()?;

    let hands = holes
        .iter()
        .map(|hole| Hand::new(hole.iter().chain(&board)))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Dealt board {board:?} to {players} players");

    Ok(Table {
        board,
        players: holes,
        hands,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn deal_distinct_cards() {
        let mut rng = StdRng::seed_from_u64(1);
        let table = deal(&mut rng, MAX_PLAYERS).unwrap();

        assert_eq!(table.board().len(), BOARD_SIZE);
        assert_eq!(table.players().len(), MAX_PLAYERS);
        assert_eq!(table.hands().len(), MAX_PLAYERS);

        let cards = table
            .players()
            .iter()
            .flatten()
            .chain(table.board())
            .collect::<HashSet<_>>();
        assert_eq!(cards.len(), 2 * MAX_PLAYERS + BOARD_SIZE);

        for (hole, hand) in table.players().iter().zip(table.hands()) {
            assert!(hole.iter().all(|c| hand.all_cards().contains(c)));
            assert!(table.board().iter().all(|c| hand.all_cards().contains(c)));
        }

        assert!(!table.winners().is_empty());
    }

    #[test]
    fn deal_invalid_players() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(deal(&mut rng, 1).is_err());
        assert!(deal(&mut rng, MAX_PLAYERS + 1).is_err());
    }
}
