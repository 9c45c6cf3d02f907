// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI.
use clap::{Parser, Subcommand};
use log::error;

use showdown_cli::{Command, Config, deal::MAX_PLAYERS};

#[derive(Debug, Parser)]
#[clap(about = "Seven cards poker hands evaluator")]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Evaluates a 7 cards hand, e.g. "Kc,2d,3s,4h,5s,Ac,5d".
    Eval {
        /// The hand cards separated by commas or spaces.
        cards: String,
    },
    /// Compares 7 cards hands and shows the winners.
    Compare {
        /// The hands, each with cards separated by commas.
        #[clap(required = true, num_args = 2..)]
        hands: Vec<String>,
    },
    /// Deals a random hand to each player and shows the winners.
    Deal {
        /// Number of players.
        #[clap(long, short, default_value_t = 2,
               value_parser = clap::value_parser!(u8).range(2..=MAX_PLAYERS as i64))]
        players: u8,
        /// Seed for a repeatable deal.
        #[clap(long, short)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let command = match cli.command {
        CliCommand::Eval { cards } => Command::Eval { cards },
        CliCommand::Compare { hands } => Command::Compare { hands },
        CliCommand::Deal { players, seed } => Command::Deal {
            players: players as usize,
            seed,
        },
    };

    if let Err(e) = showdown_cli::run(Config { command }, &mut std::io::stdout().lock()) {
        error!("{e}");
        std::process::exit(1);
    }
}
