// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_sample -- --hands 1000000
// ```
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of 7 cards hands to sample.
    #[clap(long, default_value_t = 100_000)]
    hands: usize,
    /// Seed for the random generator.
    #[clap(long, short)]
    seed: Option<u64>,
}

#[rustfmt::skip]
fn main() {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let now = Instant::now();
    let mut counts = [0usize; 9];

    for _ in 0..cli.hands {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let cards = (0..Hand::SIZE).filter_map(|_| deck.deal());
        let hand = Hand::new(cards).expect("deck has 52 cards");
        counts[hand.strength() as usize] += 1;
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[Category::HighCard as usize]);
    println!("One  Pair:       {}", counts[Category::OnePair as usize]);
    println!("Two Pairs:       {}", counts[Category::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[Category::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[Category::Straight as usize]);
    println!("Flush:           {}", counts[Category::Flush as usize]);
    println!("Full House:      {}", counts[Category::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[Category::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[Category::StraightFlush as usize]);
}
