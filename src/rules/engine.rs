//! Board rules and match outcome.
//!
//! Boards implement `BoardRules` to attach behavior to their hook spaces:
//! - `Junction(n)` passing spaces (warps, seed forks, star vendors)
//! - `Happening` landings
//! - `Hazard(n)` landings
//!
//! Hooks run inside `resolve` and must be deterministic: anything uncertain
//! becomes an event.

use crate::core::{Game, PlayerId};
use crate::events::Event;

/// Result of a completed match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Tied on stars and coins.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }

    pub(crate) fn from_standings(game: &Game) -> Self {
        let order = standings(game);
        let score = |p: PlayerId| (game.player(p).stars, game.player(p).coins);
        let best = score(order[0]);
        let winners: Vec<PlayerId> = order.into_iter().filter(|p| score(*p) == best).collect();
        match winners.as_slice() {
            [single] => GameResult::Winner(*single),
            _ => GameResult::Winners(winners),
        }
    }
}

/// Seats ordered by stars, then coins (both descending), then seat.
#[must_use]
pub fn standings(game: &Game) -> Vec<PlayerId> {
    let mut order: Vec<PlayerId> = PlayerId::all().collect();
    order.sort_by_key(|p| {
        let player = game.player(*p);
        (std::cmp::Reverse(player.stars), std::cmp::Reverse(player.coins), *p)
    });
    order
}

/// Whether movement goes on after a passing hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Passage {
    /// Keep walking with the same move count.
    Continue,
    /// The hook raised an event that will resume movement.
    Paused,
}

/// Board-specific hooks.
///
/// ## Implementation Notes
///
/// - `pass_junction`: may move the token (warps) and return `Continue`,
///   or set `next_event` to a decision carrying `moves` and return `Paused`
/// - `happening` / `hazard`: apply immediate effects and return a side-chain
///   event, or `None` to end the character turn
pub trait BoardRules: Sync {
    fn name(&self) -> &'static str;

    /// A token with `moves` left passes `Junction(hook)`.
    fn pass_junction(&self, _game: &mut Game, _player: PlayerId, _hook: u8, _moves: u8) -> Passage {
        Passage::Continue
    }

    /// A token stopped on a `Happening` space.
    fn happening(&self, _game: &mut Game, _player: PlayerId) -> Option<Event> {
        None
    }

    /// A token stopped on `Hazard(hook)`.
    fn hazard(&self, _game: &mut Game, _player: PlayerId, _hook: u8) -> Option<Event> {
        None
    }
}

/// Rules for boards without hooks.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainRules;

impl BoardRules for PlainRules {
    fn name(&self) -> &'static str {
        "plain"
    }
}
