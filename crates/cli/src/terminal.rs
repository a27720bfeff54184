// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use crossterm::{
    queue,
    style::{Print, PrintStyledContent, Stylize},
};
use log::error;
use std::io::{self, BufRead, Write};

use riverboat_core::{
    Action, ActionKind, ActionProvider, ActionRequest, EventSink, GameEvent, Player,
    Result as GameResult, poker::Card,
};

/// Reads players actions from a terminal.
///
/// All players share the same terminal, each player sees its hole cards
/// when asked for an action.
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Creates a prompt that reads from `reader` and writes to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Asks a yes or no question, a closed input is a no.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        loop {
            match self.read_line(&format!("{question} (y/n) "))? {
                None => return Ok(false),
                Some(answer) => match answer.trim().to_ascii_lowercase().as_str() {
                    "y" | "yes" => return Ok(true),
                    "n" | "no" => return Ok(false),
                    _ => {}
                },
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line))
    }

    fn read_action_line(&mut self, prompt: &str) -> io::Result<String> {
        self.read_line(prompt)?
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
    }

    fn print_request(&mut self, req: &ActionRequest<'_>) -> io::Result<()> {
        if let Some(reason) = &req.rejected {
            queue!(
                self.writer,
                PrintStyledContent(reason.as_str().red()),
                Print("\n")
            )?;
        }

        let turn = format!("{}, your turn ({})", req.player, req.street);
        queue!(self.writer, PrintStyledContent(turn.bold()), Print("\n"))?;

        let mut cards = format!("  cards: {}", cards_to_string(req.hole_cards));
        if !req.board.is_empty() {
            cards.push_str(&format!("  board: {}", cards_to_string(req.board)));
        }

        writeln!(self.writer, "{cards}")?;
        writeln!(
            self.writer,
            "  chips {}  bet {}  pot {}  to call {}",
            req.chips, req.bet, req.pot, req.call_amount
        )?;

        Ok(())
    }
}

impl<R: BufRead, W: Write> ActionProvider for Prompt<R, W> {
    fn request_action(&mut self, req: &ActionRequest<'_>) -> GameResult<Action> {
        self.print_request(req)?;

        let choices = req
            .actions
            .iter()
            .map(|kind| match kind {
                ActionKind::Call => format!("call {}", req.call_amount),
                ActionKind::Raise => format!("raise (min {})", req.min_raise),
                kind => kind.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", ");

        let line = self.read_action_line(&format!("  [{choices}] > "))?;
        let input = line.trim().to_ascii_lowercase();

        let action = match input.as_str() {
            "r" | "raise" => {
                let prompt = format!("  raise to (min {}): ", req.min_raise);
                let amount = self.read_action_line(&prompt)?;
                format!("raise {}", amount.trim()).parse::<Action>()?
            }
            _ => input.parse::<Action>()?,
        };

        // With nothing to call a call is a check.
        let action = match action {
            Action::Call if !req.can_call() && req.can_check() => Action::Check,
            action => action,
        };

        Ok(action)
    }
}

/// Prints game events to a terminal.
pub struct EventPrinter<W> {
    writer: W,
}

impl<W: Write> EventPrinter<W> {
    /// Creates a printer that writes to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Prints the players chips.
    pub fn print_standings(&mut self, players: &[&Player]) -> io::Result<()> {
        queue!(
            self.writer,
            PrintStyledContent("Chip counts".bold()),
            Print("\n")
        )?;

        for player in players {
            writeln!(self.writer, "  {:<12} {}", player.name, player.chips)?;
        }

        self.writer.flush()
    }

    fn print_event(&mut self, event: &GameEvent) -> io::Result<()> {
        let w = &mut self.writer;

        match event {
            GameEvent::HandStarted { hand, dealer } => {
                let line = format!("=== Hand {hand}, {dealer} deals ===");
                queue!(w, Print("\n"), PrintStyledContent(line.bold()), Print("\n"))?;
            }
            GameEvent::BlindPosted {
                player,
                blind,
                amount,
            } => {
                let blind = match blind {
                    riverboat_core::Blind::Small => "small",
                    riverboat_core::Blind::Big => "big",
                };
                writeln!(w, "{player} posts the {blind} blind {amount}")?;
            }
            // Hole cards are shown when a player acts, board cards when a
            // street opens.
            GameEvent::CardDealt { .. } => {}
            GameEvent::StreetOpened { street, board } => {
                let line = format!("--- {street} ---");
                queue!(w, PrintStyledContent(line.bold()), Print("\n"))?;
                if !board.is_empty() {
                    writeln!(w, "board: {}", cards_to_string(board))?;
                }
            }
            GameEvent::ActionTaken {
                player,
                action,
                amount,
                all_in,
            } => {
                let action = match action {
                    Action::Check => "checks".to_string(),
                    Action::Call => format!("calls {amount}"),
                    Action::Raise(to) => format!("raises to {to}"),
                    Action::Fold => "folds".to_string(),
                };
                let all_in = if *all_in { " and is all in" } else { "" };
                writeln!(w, "{player} {action}{all_in}")?;
            }
            GameEvent::Showdown { hands, .. } => {
                queue!(w, PrintStyledContent("Showdown".bold()), Print("\n"))?;
                for hand in hands {
                    writeln!(
                        w,
                        "  {:<12} {}  {}",
                        hand.player,
                        cards_to_string(&hand.hole_cards),
                        hand.hand.description()
                    )?;
                }
            }
            GameEvent::PotAwarded { player, amount } => {
                let line = format!("{player} wins {amount}");
                queue!(w, PrintStyledContent(line.green()), Print("\n"))?;
            }
            GameEvent::HandAborted { reason } => {
                let line = format!("Hand aborted: {reason}");
                queue!(w, PrintStyledContent(line.red()), Print("\n"))?;
            }
            GameEvent::PlayerEliminated { player } => {
                writeln!(w, "{player} is out of chips")?;
            }
        }

        w.flush()
    }
}

impl<W: Write> EventSink for EventPrinter<W> {
    fn event(&mut self, event: &GameEvent) {
        if let Err(e) = self.print_event(event) {
            error!("Terminal write error {e}");
        }
    }
}

fn cards_to_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| format!("{c:#}"))
        .collect::<Vec<_>>()
        .join(" ")
}
