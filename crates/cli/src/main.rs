// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Riverboat Poker terminal game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::io;

use riverboat_core::{Config, Error, Game, PostflopOrder, poker::Chips};

pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// The players names, from 2 to 8 players.
    #[clap(required = true, num_args = 2..=8)]
    names: Vec<String>,
    /// The chips each player starts with.
    #[clap(long, short, default_value_t = 500)]
    chips: u32,
    /// The small blind.
    #[clap(long, default_value_t = 5)]
    small_blind: u32,
    /// The big blind.
    #[clap(long, default_value_t = 10)]
    big_blind: u32,
    /// Seed for the cards shuffle, to replay the same deals.
    #[clap(long, short)]
    seed: Option<u64>,
    /// After the flop the player after the last raiser acts first.
    #[clap(long)]
    follow_aggressor: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = Config {
        small_blind: Chips::new(cli.small_blind),
        big_blind: Chips::new(cli.big_blind),
        starting_chips: Chips::new(cli.chips),
        postflop_order: if cli.follow_aggressor {
            PostflopOrder::AfterLastAggressor
        } else {
            PostflopOrder::AfterDealer
        },
    };

    let mut game = Game::new(config, &cli.names)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let stdin = io::stdin();
    let mut prompt = terminal::Prompt::new(stdin.lock(), io::stdout());
    let mut printer = terminal::EventPrinter::new(io::stdout());

    while !game.is_over() {
        // Stop if the input has been closed.
        if let Err(Error::ActionSource(_)) = game.play_hand(&mut rng, &mut prompt, &mut printer) {
            break;
        }

        if game.is_over() || !prompt.confirm("Play another round?")? {
            break;
        }
    }

    if let Some(winner) = game.winner() {
        info!("{} wins the game after {} hands", winner.name, game.hands_played());
    }

    printer.print_standings(&game.standings())?;

    Ok(())
}
