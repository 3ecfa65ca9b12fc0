//! The game aggregate and the resolve loop.
//!
//! ## Game
//!
//! Complete match state: the four player records, the board (topology and
//! per-board payload), the round counter, whose character turn it is, the
//! configuration, and two pending-event slots.
//!
//! ## Pending events
//!
//! - `extra_event`: a side chain opened by a landing effect (Bowser, Chance
//!   Time, a board hazard). Takes precedence.
//! - `next_event`: the main line (dice, branch choices, turn hand-off,
//!   minigames).
//!
//! Exactly one event is pending until the match ends; then both are empty.
//! A driver reads `pending()`, picks one of `legal_responses()` and calls
//! `resolve`. Cloning a `Game` gives an independent snapshot for
//! exploring alternatives.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::GameConfig;
use super::error::EngineError;
use super::player::{Character, Player, PlayerId, PlayerMap};
use crate::board::Board;
use crate::events::{Controller, Event, Response};
use crate::rules::{standings, GameResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub players: PlayerMap<Player>,
    pub board: Board,
    /// Completed rounds. Starts at 0.
    pub turn: u8,
    /// Whose character turn is in progress.
    pub current_player: PlayerId,
    config: GameConfig,
    pub(crate) next_event: Option<Event>,
    pub(crate) extra_event: Option<Event>,
}

impl Game {
    /// Start a match on `board` with the default lineup. Player 0's dice
    /// event is pending.
    #[must_use]
    pub fn new(board: Board, config: GameConfig) -> Self {
        Self::with_characters(board, config, Character::DEFAULT_LINEUP)
    }

    /// Start a match with a chosen lineup, seat order as given.
    #[must_use]
    pub fn with_characters(board: Board, config: GameConfig, characters: [Character; 4]) -> Self {
        let start = board.start();
        let mut game = Self {
            players: PlayerMap::new(|p| Player::new(characters[p.index()], start)),
            board,
            turn: 0,
            current_player: PlayerId::new(0),
            config,
            next_event: None,
            extra_event: None,
        };
        game.start_character_turn(PlayerId::new(0));
        game
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    // === Pending Events ===

    /// The event awaiting a response: the side chain first, then the main line.
    #[must_use]
    pub fn pending(&self) -> Option<&Event> {
        self.extra_event.as_ref().or(self.next_event.as_ref())
    }

    #[must_use]
    pub fn next_event(&self) -> Option<&Event> {
        self.next_event.as_ref()
    }

    #[must_use]
    pub fn extra_event(&self) -> Option<&Event> {
        self.extra_event.as_ref()
    }

    /// Whether the match has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.pending().is_none()
    }

    /// Responses accepted by the pending event, in a stable order.
    #[must_use]
    pub fn legal_responses(&self) -> Vec<Response> {
        self.pending()
            .map(|event| event.responses(self))
            .unwrap_or_default()
    }

    /// Who answers the pending event.
    #[must_use]
    pub fn controller(&self) -> Option<Controller> {
        self.pending().map(|event| event.controller(self))
    }

    /// Replace the main-line event. Used to set up scenarios.
    pub fn set_next_event(&mut self, event: impl Into<Event>) {
        self.next_event = Some(event.into());
    }

    /// Replace the side-chain event. Used to set up scenarios.
    pub fn set_extra_event(&mut self, event: impl Into<Event>) {
        self.extra_event = Some(event.into());
    }

    /// Answer the pending event.
    ///
    /// The response must be a member of `legal_responses()`; otherwise the
    /// call fails and the game is unchanged. On success the event is
    /// removed from its slot and its handler runs to completion, leaving
    /// the next event pending (or none when the match is over).
    pub fn resolve(&mut self, response: Response) -> Result<(), EngineError> {
        let event = self.pending().ok_or(EngineError::NoPendingEvent)?;
        if !event.responses(self).contains(&response) {
            return Err(EngineError::IllegalResponse {
                event: event.name(),
                response: format!("{response:?}"),
            });
        }
        debug!(event = event.name(), ?response, "resolving event");

        let event = match self.extra_event.take() {
            Some(event) => event,
            None => self.next_event.take().ok_or(EngineError::NoPendingEvent)?,
        };
        event.apply(response, self);
        Ok(())
    }

    // === Coins and Stars ===

    /// Add `amount` coins.
    pub fn gain_coins(&mut self, player: PlayerId, amount: u32, from_minigame: bool) {
        let p = &mut self.players[player];
        p.coins += amount;
        p.max_coins = p.max_coins.max(p.coins);
        if from_minigame {
            p.minigame_coins += amount;
        }
    }

    /// Remove up to `amount` coins; returns how many were removed.
    pub fn lose_coins(&mut self, player: PlayerId, amount: u32) -> u32 {
        let p = &mut self.players[player];
        let lost = amount.min(p.coins);
        p.coins -= lost;
        lost
    }

    /// Apply a signed coin change, clamping the balance at zero.
    pub fn award_coins(&mut self, player: PlayerId, delta: i32, from_minigame: bool) {
        if delta >= 0 {
            self.gain_coins(player, delta.unsigned_abs(), from_minigame);
        } else {
            self.lose_coins(player, delta.unsigned_abs());
        }
    }

    /// Move up to `amount` coins from one player to another; returns how
    /// many moved. The coin total is unchanged.
    pub fn give_coins(&mut self, from: PlayerId, to: PlayerId, amount: u32, from_minigame: bool) -> u32 {
        let moved = self.lose_coins(from, amount);
        self.gain_coins(to, moved, from_minigame);
        moved
    }

    /// Remove one star if the player has any.
    pub fn take_star(&mut self, player: PlayerId) -> bool {
        let p = &mut self.players[player];
        if p.stars == 0 {
            return false;
        }
        p.stars -= 1;
        true
    }

    /// Move one star between players if `from` has any.
    pub fn give_star(&mut self, from: PlayerId, to: PlayerId) -> bool {
        let moved = self.take_star(from);
        if moved {
            self.players[to].stars += 1;
        }
        moved
    }

    #[must_use]
    pub fn total_coins(&self) -> u32 {
        self.players.values().map(|p| p.coins).sum()
    }

    #[must_use]
    pub fn total_stars(&self) -> u32 {
        self.players.values().map(|p| p.stars).sum()
    }

    // === Outcome ===

    /// Seats ordered by stars, then coins, then seat order.
    #[must_use]
    pub fn standings(&self) -> Vec<PlayerId> {
        standings(self)
    }

    /// The winner(s) once the match is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }
        Some(GameResult::from_standings(self))
    }
}
