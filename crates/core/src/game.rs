// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game orchestration.
//!
//! A [Game] plays hands of no limit Texas Hold'em between 2 to 8 players.
//! Each hand posts the blinds, deals the hole cards, runs the betting for
//! each street, and pays the pot to the best hands. Players decisions come
//! from an [ActionProvider] and the game reports what happens to an
//! [EventSink].
use ahash::AHashSet;
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    action::{ActionProvider, ActionRequest},
    betting::BettingRound,
    error::{Error, Result},
    events::{Blind, EventSink, GameEvent, Recipient, ShowdownHand},
    player::Player,
    poker::{Card, Chips, Deck, RandomSource, Street, evaluate, resolve},
};

/// Which seat opens the betting after the flop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostflopOrder {
    /// The first player after the dealer.
    #[default]
    AfterDealer,
    /// The first player after the last player who raised in the previous
    /// street.
    AfterLastAggressor,
}

/// Game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The small blind.
    pub small_blind: Chips,
    /// The big blind, also the minimum bet.
    pub big_blind: Chips,
    /// The chips each player starts with.
    pub starting_chips: Chips,
    /// Who acts first after the flop.
    pub postflop_order: PostflopOrder,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            small_blind: Chips::new(5),
            big_blind: Chips::new(10),
            starting_chips: Chips::new(500),
            postflop_order: PostflopOrder::default(),
        }
    }
}

impl Config {
    /// Checks the blinds and starting chips.
    pub fn validate(&self) -> Result<()> {
        if self.small_blind == Chips::ZERO {
            return Err(Error::InvalidConfig(
                "the small blind must be positive".to_string(),
            ));
        }

        if self.small_blind > self.big_blind {
            return Err(Error::InvalidConfig(format!(
                "the small blind {} is larger than the big blind {}",
                self.small_blind, self.big_blind
            )));
        }

        if self.starting_chips == Chips::ZERO {
            return Err(Error::InvalidConfig(
                "the starting chips must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// The result of a hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSummary {
    /// The hand number starting from 1.
    pub hand: usize,
    /// The board cards, less than 5 if the hand ended early.
    pub board: Vec<Card>,
    /// The total pot.
    pub pot: Chips,
    /// The chips won by each winner in payment order.
    pub payouts: Vec<(String, Chips)>,
    /// The hand went to showdown.
    pub showdown: bool,
}

/// Splits a pot among winners.
///
/// The odd chips go one each to the first winners, callers pass winners in
/// seat order starting left of the dealer.
pub fn split_pot(pot: Chips, winners: usize) -> Vec<Chips> {
    if winners == 0 {
        return Vec::new();
    }

    let count = winners as u32;
    let share = pot / count;
    let odd = (pot % count).amount() as usize;

    (0..winners)
        .map(|idx| if idx < odd { share + Chips::new(1) } else { share })
        .collect()
}

/// A poker game.
#[derive(Debug)]
pub struct Game {
    config: Config,
    players: Vec<Player>,
    dealer: usize,
    hands: usize,
}

impl Game {
    /// The minimum number of players.
    pub const MIN_PLAYERS: usize = 2;
    /// The maximum number of players.
    pub const MAX_PLAYERS: usize = 8;

    /// Creates a game with players that start with the config chips.
    pub fn new<S: AsRef<str>>(config: Config, names: &[S]) -> Result<Self> {
        let players = names
            .iter()
            .map(|name| Player::new(name.as_ref(), config.starting_chips))
            .collect();
        Self::with_players(config, players)
    }

    /// Creates a game with the given players, the first player is the dealer.
    pub fn with_players(config: Config, players: Vec<Player>) -> Result<Self> {
        config.validate()?;

        if !(Self::MIN_PLAYERS..=Self::MAX_PLAYERS).contains(&players.len()) {
            return Err(Error::InvalidConfig(format!(
                "a game needs {} to {} players, got {}",
                Self::MIN_PLAYERS,
                Self::MAX_PLAYERS,
                players.len()
            )));
        }

        let mut names = AHashSet::with_capacity(players.len());
        for player in &players {
            if player.name.trim().is_empty() {
                return Err(Error::InvalidConfig("empty player name".to_string()));
            }

            if !names.insert(player.name.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate player name {}",
                    player.name
                )));
            }

            if player.chips == Chips::ZERO {
                return Err(Error::InvalidConfig(format!(
                    "player {} has no chips",
                    player.name
                )));
            }
        }

        Ok(Self {
            config,
            players,
            dealer: 0,
            hands: 0,
        })
    }

    /// The game configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The players still in the game in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The dealer seat.
    pub fn dealer(&self) -> usize {
        self.dealer
    }

    /// The number of hands played.
    pub fn hands_played(&self) -> usize {
        self.hands
    }

    /// Checks if there are fewer than two players left.
    pub fn is_over(&self) -> bool {
        self.players.len() < Self::MIN_PLAYERS
    }

    /// The last player standing.
    pub fn winner(&self) -> Option<&Player> {
        if self.is_over() {
            self.players.first()
        } else {
            None
        }
    }

    /// The players sorted by chips, the player with most chips first.
    pub fn standings(&self) -> Vec<&Player> {
        let mut players = self.players.iter().collect::<Vec<_>>();
        players.sort_by(|p1, p2| p2.chips.cmp(&p1.chips));
        players
    }

    /// Plays a hand.
    ///
    /// If the hand cannot be completed the chips bet are returned to the
    /// players, the error is returned and the same dealer deals the next
    /// hand.
    pub fn play_hand<R, P, S>(
        &mut self,
        rng: &mut R,
        provider: &mut P,
        sink: &mut S,
    ) -> Result<HandSummary>
    where
        R: RandomSource + ?Sized,
        P: ActionProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        if self.is_over() {
            return Err(Error::InvalidConfig(
                "the game needs at least two players".to_string(),
            ));
        }

        self.hands += 1;
        for player in self.players.iter_mut() {
            player.start_hand();
        }

        let mut deck = Deck::new_and_shuffled(rng);
        let dealer = self.players[self.dealer].name.clone();
        info!("Hand {} started, dealer {dealer}", self.hands);

        sink.event(&GameEvent::HandStarted {
            hand: self.hands,
            dealer,
        });

        match self.run_hand(&mut deck, provider, sink) {
            Ok(summary) => {
                self.end_hand(sink);
                Ok(summary)
            }
            Err(err) => {
                error!("Hand {} aborted: {err}", self.hands);

                for player in self.players.iter_mut() {
                    player.refund();
                }

                sink.event(&GameEvent::HandAborted {
                    reason: err.to_string(),
                });

                Err(err)
            }
        }
    }

    fn run_hand<P, S>(
        &mut self,
        deck: &mut Deck,
        provider: &mut P,
        sink: &mut S,
    ) -> Result<HandSummary>
    where
        P: ActionProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        let seats = self.players.len();
        let dealer = self.dealer;

        self.post_blind(self.seat_after(1), Blind::Small, sink);
        self.post_blind(self.seat_after(2), Blind::Big, sink);

        // Two passes starting left of the dealer.
        for _ in 0..2 {
            for seat in (1..=seats).map(|k| (dealer + k) % seats) {
                let card = deck.deal().ok_or(Error::DeckExhausted)?;
                let player = &mut self.players[seat];
                player.hole_cards.push(card);

                sink.event(&GameEvent::CardDealt {
                    recipient: Recipient::Player(player.name.clone()),
                    card,
                });
            }
        }

        let mut board = Vec::with_capacity(5);
        let mut next_seat = self.seat_after(3);

        for street in Street::ALL {
            if self.active_count() < 2 {
                break;
            }

            let (current_bet, first_seat) = if street == Street::Preflop {
                (self.config.big_blind, self.seat_after(3))
            } else {
                for _ in 0..street.board_cards() {
                    let card = deck.deal().ok_or(Error::DeckExhausted)?;
                    board.push(card);
                    sink.event(&GameEvent::CardDealt {
                        recipient: Recipient::Board,
                        card,
                    });
                }

                for player in self.players.iter_mut() {
                    player.start_street();
                }

                let first_seat = match self.config.postflop_order {
                    PostflopOrder::AfterDealer => self.seat_after(1),
                    PostflopOrder::AfterLastAggressor => next_seat,
                };

                (Chips::ZERO, first_seat)
            };

            debug!("{street} board {}", cards_to_string(&board));
            sink.event(&GameEvent::StreetOpened {
                street,
                board: board.clone(),
            });

            let mut round = BettingRound::new(
                &self.players,
                current_bet,
                self.config.big_blind,
                first_seat,
                self.pot(),
            );

            self.run_betting(street, &mut round, &board, provider, sink)?;
            next_seat = round.next_street_seat();
        }

        self.pay_pot(board, sink)
    }

    fn post_blind<S>(&mut self, seat: usize, blind: Blind, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        let amount = match blind {
            Blind::Small => self.config.small_blind,
            Blind::Big => self.config.big_blind,
        };

        let player = &mut self.players[seat];
        let amount = player.place_bet(amount);
        debug!("{} posts {blind:?} blind {amount}", player.name);

        sink.event(&GameEvent::BlindPosted {
            player: player.name.clone(),
            blind,
            amount,
        });
    }

    /// Asks players for actions until the round closes.
    fn run_betting<P, S>(
        &mut self,
        street: Street,
        round: &mut BettingRound,
        board: &[Card],
        provider: &mut P,
        sink: &mut S,
    ) -> Result<()>
    where
        P: ActionProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        let mut rejected = None;

        while let Some(seat) = round.turn() {
            let player = &self.players[seat];
            let request = ActionRequest {
                seat,
                player: &player.name,
                street,
                current_bet: round.current_bet(),
                pot: round.pot(),
                call_amount: round.call_amount(player),
                min_raise: round.min_raise_to(),
                chips: player.chips,
                bet: player.bet,
                actions: round.legal_actions(player),
                hole_cards: &player.hole_cards,
                board,
                rejected: rejected.take(),
            };

            let action = provider.request_action(&request);
            match action.and_then(|action| round.act(&mut self.players, action)) {
                Ok(applied) => {
                    sink.event(&GameEvent::ActionTaken {
                        player: self.players[applied.seat].name.clone(),
                        action: applied.action,
                        amount: applied.amount,
                        all_in: applied.all_in,
                    });
                }
                Err(err) if err.is_recoverable() => {
                    warn!("Seat {seat} {err}");
                    rejected = Some(err.to_string());
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }

    /// Pays the pot to the last player standing or to the best hands.
    fn pay_pot<S>(&mut self, board: Vec<Card>, sink: &mut S) -> Result<HandSummary>
    where
        S: EventSink + ?Sized,
    {
        let pot = self.pot();

        // Winners in seat order starting left of the dealer.
        let live = (1..=self.players.len())
            .map(|k| self.seat_after(k))
            .filter(|&seat| self.players[seat].is_active())
            .collect::<Vec<_>>();

        let (winners, showdown) = if live.len() == 1 {
            (live, false)
        } else {
            let mut hands = Vec::with_capacity(live.len());
            for &seat in &live {
                let player = &self.players[seat];
                let mut cards = player.hole_cards.clone();
                cards.extend_from_slice(&board);
                hands.push((seat, evaluate(&cards)?));
            }

            let winners = resolve(&hands);

            sink.event(&GameEvent::Showdown {
                hands: hands
                    .iter()
                    .map(|(seat, hand)| ShowdownHand {
                        player: self.players[*seat].name.clone(),
                        hole_cards: self.players[*seat].hole_cards.clone(),
                        hand: hand.clone(),
                    })
                    .collect(),
                winners: winners
                    .iter()
                    .map(|&seat| self.players[seat].name.clone())
                    .collect(),
            });

            (winners, true)
        };

        let mut payouts = Vec::with_capacity(winners.len());
        for (seat, amount) in winners.iter().zip(split_pot(pot, winners.len())) {
            let player = &mut self.players[*seat];
            player.chips += amount;
            info!("{} wins {amount}", player.name);

            sink.event(&GameEvent::PotAwarded {
                player: player.name.clone(),
                amount,
            });

            payouts.push((player.name.clone(), amount));
        }

        Ok(HandSummary {
            hand: self.hands,
            board,
            pot,
            payouts,
            showdown,
        })
    }

    /// Removes players with no chips and moves the dealer to the next seat.
    fn end_hand<S>(&mut self, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        let next_dealer = (1..=self.players.len())
            .map(|k| self.seat_after(k))
            .find(|&seat| self.players[seat].chips > Chips::ZERO)
            .map(|seat| self.players[seat].name.clone());

        let (players, busted) = std::mem::take(&mut self.players)
            .into_iter()
            .partition::<Vec<_>, _>(|p| p.chips > Chips::ZERO);
        self.players = players;

        for player in busted {
            info!("{} has been eliminated", player.name);
            sink.event(&GameEvent::PlayerEliminated {
                player: player.name,
            });
        }

        self.dealer = next_dealer
            .and_then(|name| self.players.iter().position(|p| p.name == name))
            .unwrap_or_default();
    }

    /// The seat `offset` seats after the dealer.
    fn seat_after(&self, offset: usize) -> usize {
        (self.dealer + offset) % self.players.len()
    }

    fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    fn pot(&self) -> Chips {
        self.players.iter().map(|p| p.committed).sum()
    }
}

fn cards_to_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use std::{collections::VecDeque, io};

    use super::*;
    use crate::action::Action;

    /// Plays scripted actions for the named players, checks or calls when
    /// the next scripted action belongs to another player.
    #[derive(Default)]
    struct Script {
        actions: VecDeque<(&'static str, Action)>,
        requests: Vec<(String, Street, Option<String>)>,
    }

    impl Script {
        fn new(actions: &[(&'static str, Action)]) -> Self {
            Self {
                actions: actions.iter().copied().collect(),
                requests: Vec::new(),
            }
        }
    }

    impl ActionProvider for Script {
        fn request_action(&mut self, request: &ActionRequest<'_>) -> Result<Action> {
            self.requests.push((
                request.player.to_string(),
                request.street,
                request.rejected.clone(),
            ));

            match self.actions.front() {
                Some((name, _)) if *name == request.player => {
                    Ok(self.actions.pop_front().map(|(_, a)| a).unwrap())
                }
                _ if request.can_check() => Ok(Action::Check),
                _ => Ok(Action::Call),
            }
        }
    }

    /// Deals the given cards first.
    struct Stacked(Vec<Card>);

    impl Stacked {
        fn new(cards: &str) -> Self {
            Self(cards.split_whitespace().map(|c| c.parse().unwrap()).collect())
        }
    }

    impl RandomSource for Stacked {
        fn shuffle(&mut self, cards: &mut [Card]) {
            let mut stacked = cards
                .iter()
                .copied()
                .filter(|c| !self.0.contains(c))
                .collect::<Vec<_>>();

            // The deck deals from the end.
            stacked.extend(self.0.iter().rev());
            cards.copy_from_slice(&stacked);
        }
    }

    struct Failing;

    impl ActionProvider for Failing {
        fn request_action(&mut self, _request: &ActionRequest<'_>) -> Result<Action> {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into())
        }
    }

    fn chips_of(game: &Game, name: &str) -> Chips {
        game.players()
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.chips)
            .unwrap_or_default()
    }

    #[test]
    fn fold_to_big_blind() {
        let mut game = Game::new(Config::default(), &["alice", "bob", "carol"]).unwrap();
        let mut provider = Script::new(&[("alice", Action::Fold), ("bob", Action::Fold)]);
        let mut events = Vec::<GameEvent>::new();
        let mut rng = StdRng::seed_from_u64(7);

        let summary = game.play_hand(&mut rng, &mut provider, &mut events).unwrap();

        assert!(!summary.showdown);
        assert!(summary.board.is_empty());
        assert_eq!(summary.pot, Chips::new(15));
        assert_eq!(summary.payouts, vec![("carol".to_string(), Chips::new(15))]);

        assert_eq!(chips_of(&game, "alice"), Chips::new(500));
        assert_eq!(chips_of(&game, "bob"), Chips::new(495));
        assert_eq!(chips_of(&game, "carol"), Chips::new(505));

        assert!(matches!(events.first(), Some(GameEvent::HandStarted { hand: 1, .. })));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::Showdown { .. })));
        assert!(matches!(
            events.last(),
            Some(GameEvent::PotAwarded { player, .. }) if player == "carol"
        ));

        // Everybody gets two cards.
        let dealt = events
            .iter()
            .filter(|e| matches!(e, GameEvent::CardDealt { recipient: Recipient::Player(_), .. }))
            .count();
        assert_eq!(dealt, 6);
    }

    #[test]
    fn split_pot_on_identical_hands() {
        let mut game = Game::new(Config::default(), &["alice", "bob"]).unwrap();
        // Bob is left of the dealer and gets the first card.
        let mut rng = Stacked::new("2s 2h 4d 3h Ac Ad Kc Kd Qs");
        let mut provider = Script::default();
        let mut events = Vec::<GameEvent>::new();

        let summary = game.play_hand(&mut rng, &mut provider, &mut events).unwrap();

        assert!(summary.showdown);
        assert_eq!(summary.pot, Chips::new(20));
        assert_eq!(summary.board.len(), 5);
        assert_eq!(summary.payouts.len(), 2);

        assert_eq!(chips_of(&game, "alice"), Chips::new(500));
        assert_eq!(chips_of(&game, "bob"), Chips::new(500));

        let winners = events.iter().find_map(|e| match e {
            GameEvent::Showdown { winners, .. } => Some(winners.clone()),
            _ => None,
        });
        assert_eq!(winners, Some(vec!["bob".to_string(), "alice".to_string()]));
    }

    #[test]
    fn best_hand_wins_at_showdown() {
        let mut game = Game::new(Config::default(), &["alice", "bob"]).unwrap();
        let mut rng = Stacked::new("7c As 2d Ah Ks 9d 5c 3h Jd");
        let mut provider = Script::default();
        let mut events = Vec::<GameEvent>::new();

        let summary = game.play_hand(&mut rng, &mut provider, &mut events).unwrap();

        assert!(summary.showdown);
        assert_eq!(summary.payouts, vec![("alice".to_string(), Chips::new(20))]);
        assert_eq!(chips_of(&game, "alice"), Chips::new(510));
        assert_eq!(chips_of(&game, "bob"), Chips::new(490));

        let streets = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::StreetOpened { street, .. } => Some(*street),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(streets, Street::ALL.to_vec());

        let hand = events.iter().find_map(|e| match e {
            GameEvent::Showdown { hands, .. } => hands
                .iter()
                .find(|h| h.player == "alice")
                .map(|h| h.hand.description()),
            _ => None,
        });
        assert_eq!(hand.as_deref(), Some("Pair of Aces"));
    }

    #[test]
    fn dealer_advances_once_per_hand() {
        let mut game = Game::new(Config::default(), &["alice", "bob", "carol"]).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let mut provider = Script::default();
        let mut events = Vec::<GameEvent>::new();

        assert_eq!(game.dealer(), 0);

        for dealer in [1, 2, 0] {
            game.play_hand(&mut rng, &mut provider, &mut events).unwrap();
            assert_eq!(game.dealer(), dealer);
        }

        let dealers = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::HandStarted { dealer, .. } => Some(dealer.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(dealers, vec!["alice", "bob", "carol"]);
        assert_eq!(game.hands_played(), 3);

        // No chips created or lost.
        let total = game.players().iter().map(|p| p.chips).sum::<Chips>();
        assert_eq!(total, Chips::new(1_500));
    }

    #[test]
    fn busted_player_is_eliminated() {
        let players = vec![
            Player::new("alice", Chips::new(500)),
            Player::new("bob", Chips::new(10)),
        ];
        let mut game = Game::with_players(Config::default(), players).unwrap();
        let mut rng = Stacked::new("7c As 2d Ah Ks 9d 5c 3h Jd");
        let mut provider = Script::new(&[("bob", Action::Raise(Chips::new(100)))]);
        let mut events = Vec::<GameEvent>::new();

        let summary = game.play_hand(&mut rng, &mut provider, &mut events).unwrap();

        // Nobody can bet against the all in player, the board is run out.
        assert_eq!(summary.board.len(), 5);
        assert_eq!(provider.requests.len(), 1);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::ActionTaken { player, all_in: true, .. } if player == "bob"
        )));

        assert!(matches!(
            events.last(),
            Some(GameEvent::PlayerEliminated { player }) if player == "bob"
        ));

        assert!(game.is_over());
        assert_eq!(game.dealer(), 0);

        let winner = game.winner().unwrap();
        assert_eq!(winner.name, "alice");
        assert_eq!(winner.chips, Chips::new(510));

        assert!(matches!(
            game.play_hand(&mut rng, &mut provider, &mut events),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn illegal_action_is_requested_again() {
        let mut game = Game::new(Config::default(), &["alice", "bob"]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        // Bob is the small blind and cannot check.
        let mut provider = Script::new(&[("bob", Action::Check)]);
        let mut events = Vec::<GameEvent>::new();

        game.play_hand(&mut rng, &mut provider, &mut events).unwrap();

        let (first, street, rejected) = &provider.requests[0];
        assert_eq!(first, "bob");
        assert_eq!(*street, Street::Preflop);
        assert!(rejected.is_none());

        let (second, _, rejected) = &provider.requests[1];
        assert_eq!(second, "bob");
        assert!(rejected.as_deref().is_some_and(|r| r.contains("cannot check")));

        let total = game.players().iter().map(|p| p.chips).sum::<Chips>();
        assert_eq!(total, Chips::new(1_000));
    }

    #[test]
    fn odd_chip_goes_left_of_dealer() {
        let mut game = Game::new(Config::default(), &["alice", "bob", "carol"]).unwrap();
        // Dealing starts from bob, then carol and alice.
        let mut rng = Stacked::new("9c 2h 2s 8c 3h 4d Ac Ad Kc Kd Qs");
        let mut provider = Script::new(&[("bob", Action::Fold)]);
        let mut events = Vec::<GameEvent>::new();

        let summary = game.play_hand(&mut rng, &mut provider, &mut events).unwrap();

        assert_eq!(summary.pot, Chips::new(25));
        assert_eq!(
            summary.payouts,
            vec![
                ("carol".to_string(), Chips::new(13)),
                ("alice".to_string(), Chips::new(12)),
            ]
        );

        assert_eq!(chips_of(&game, "alice"), Chips::new(502));
        assert_eq!(chips_of(&game, "bob"), Chips::new(495));
        assert_eq!(chips_of(&game, "carol"), Chips::new(503));
    }

    #[test]
    fn postflop_order_after_aggressor() {
        let first_flop_player = |postflop_order| {
            let config = Config {
                postflop_order,
                ..Config::default()
            };

            let mut game = Game::new(config, &["alice", "bob", "carol"]).unwrap();
            let mut rng = StdRng::seed_from_u64(5);
            let mut provider = Script::new(&[("carol", Action::Raise(Chips::new(30)))]);
            let mut events = Vec::<GameEvent>::new();
            game.play_hand(&mut rng, &mut provider, &mut events).unwrap();

            provider
                .requests
                .iter()
                .find(|(_, street, _)| *street == Street::Flop)
                .map(|(name, _, _)| name.clone())
        };

        assert_eq!(
            first_flop_player(PostflopOrder::AfterDealer).as_deref(),
            Some("bob")
        );
        assert_eq!(
            first_flop_player(PostflopOrder::AfterLastAggressor).as_deref(),
            Some("alice")
        );
    }

    #[test]
    fn aborted_hand_refunds_bets() {
        let mut game = Game::new(Config::default(), &["alice", "bob", "carol"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut events = Vec::<GameEvent>::new();

        let res = game.play_hand(&mut rng, &mut Failing, &mut events);
        assert!(matches!(res, Err(Error::ActionSource(_))));
        assert!(matches!(events.last(), Some(GameEvent::HandAborted { .. })));

        assert!(game.players().iter().all(|p| p.chips == Chips::new(500)));
        assert_eq!(game.dealer(), 0);

        // The game can continue.
        let mut provider = Script::default();
        game.play_hand(&mut rng, &mut provider, &mut events).unwrap();
        assert_eq!(game.dealer(), 1);
    }

    #[test]
    fn invalid_games() {
        let config = Config::default();

        let res = Game::new(config, &["alice"]);
        assert!(matches!(res, Err(Error::InvalidConfig(_))));

        let names = (0..9).map(|n| format!("p{n}")).collect::<Vec<_>>();
        let res = Game::new(config, &names);
        assert!(matches!(res, Err(Error::InvalidConfig(_))));

        let res = Game::new(config, &["alice", "alice"]);
        assert!(matches!(res, Err(Error::InvalidConfig(_))));

        let res = Game::new(config, &["alice", " "]);
        assert!(matches!(res, Err(Error::InvalidConfig(_))));

        let bad_blinds = Config {
            small_blind: Chips::new(20),
            ..config
        };
        assert!(matches!(bad_blinds.validate(), Err(Error::InvalidConfig(_))));

        let no_chips = Config {
            starting_chips: Chips::ZERO,
            ..config
        };
        assert!(matches!(
            Game::new(no_chips, &["alice", "bob"]),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn standings_by_chips() {
        let players = vec![
            Player::new("alice", Chips::new(100)),
            Player::new("bob", Chips::new(300)),
            Player::new("carol", Chips::new(200)),
        ];
        let game = Game::with_players(Config::default(), players).unwrap();

        let names = game
            .standings()
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["bob", "carol", "alice"]);
        assert!(game.winner().is_none());
    }

    #[test]
    fn pot_split_keeps_all_chips() {
        assert_eq!(
            split_pot(Chips::new(25), 2),
            vec![Chips::new(13), Chips::new(12)]
        );
        assert_eq!(
            split_pot(Chips::new(10), 3),
            vec![Chips::new(4), Chips::new(3), Chips::new(3)]
        );
        assert_eq!(split_pot(Chips::new(30), 1), vec![Chips::new(30)]);
        assert!(split_pot(Chips::new(30), 0).is_empty());
    }
}
