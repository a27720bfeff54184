// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example categories -- --cards 7
// ...
// Total hands      133784560
//
// Royal Flush:     4324
// Straight Flush:  37260
// Four of a Kind:  224848
// Full House:      3473184
// Flush:           4047644
// Straight:        6180020
// Three of a Kind: 6461620
// Two Pair:        31433400
// One Pair:        58627800
// High Card:       23294460
// ```
use anyhow::Result;
use clap::Parser;
use std::time::Instant;

use riverboat_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of cards in each hand.
    #[clap(long, short, default_value_t = 5, value_parser = clap::value_parser!(u8).range(5..=7))]
    cards: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let now = Instant::now();
    let mut counts = [0usize; 11];
    let mut res = Ok(());

    Deck::default().for_each(cli.cards as usize, |hand| match evaluate(hand) {
        Ok(value) => counts[value.category().rank() as usize] += 1,
        Err(e) => res = Err(e),
    });
    res?;

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories() {
        let label = format!("{}:", category.name());
        println!("{label:<17}{}", counts[category.rank() as usize]);
    }

    Ok(())
}
