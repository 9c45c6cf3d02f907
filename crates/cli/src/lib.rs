// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI commands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::io::Write;

use showdown_eval::{Card, Evaluation, Hand, winners};

pub mod deal;

/// The CLI configuration.
#[derive(Debug)]
pub struct Config {
    /// The command to run.
    pub command: Command,
}

/// A CLI command.
#[derive(Debug)]
pub enum Command {
    /// Evaluates a 7 cards hand.
    Eval {
        /// The hand cards.
        cards: String,
    },
    /// Compares hands and picks the winners.
    Compare {
        /// The hands to compare.
        hands: Vec<String>,
    },
    /// Deals a random showdown.
    Deal {
        /// Number of players.
        players: usize,
        /// Optional seed for a repeatable deal.
        seed: Option<u64>,
    },
}

/// Runs a command writing its output to `out`.
pub fn run<W: Write>(config: Config, out: &mut W) -> Result<()> {
    match config.command {
        Command::Eval { cards } => {
            let hand = cards.parse::<Hand>()?;
            writeln!(out, "{}", describe(hand.evaluate()))?;
        }
        Command::Compare { hands } => {
            if hands.len() < 2 {
                bail!("Compare needs at least 2 hands, got {}", hands.len());
            }

            let hands = hands
                .iter()
                .map(|cards| cards.parse::<Hand>())
                .collect::<Result<Vec<_>, _>>()?;

            for (idx, hand) in hands.iter().enumerate() {
                writeln!(out, "Hand {}: {hand} {}", idx + 1, describe(hand.evaluate()))?;
            }

            write_winners(out, "Hand", &winners(&hands))?;
        }
        Command::Deal { players, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            let table = deal::deal(&mut rng, players)?;
            info!("Dealt {} players", table.players().len());

            writeln!(out, "Board: {}", join(table.board()))?;
            for (idx, (hole, hand)) in table.players().iter().zip(table.hands()).enumerate() {
                writeln!(
                    out,
                    "Player {}: {} {}",
                    idx + 1,
                    join(hole),
                    describe(hand.evaluate())
                )?;
            }

            write_winners(out, "Player", &table.winners())?;
        }
    }

    Ok(())
}

fn describe(eval: &Evaluation) -> String {
    format!("{} ({}): {eval}", eval.name(), eval.strength())
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn write_winners<W: Write>(out: &mut W, label: &str, winners: &[usize]) -> Result<()> {
    let names = winners
        .iter()
        .map(|idx| format!("{label} {}", idx + 1))
        .collect::<Vec<_>>()
        .join(", ");

    if winners.len() > 1 {
        writeln!(out, "Split pot: {names}")?;
    } else {
        writeln!(out, "Winner: {names}")?;
    }

    Ok(())
}
