//! # party-sim
//!
//! A deterministic rules engine for a four-player board-party game, driven
//! by an event/response protocol.
//!
//! ## Design Principles
//!
//! 1. **No hidden randomness**: every uncertain outcome (dice, minigame
//!    results, Bowser's whims, player choices) is an `Event` whose legal
//!    `Response`s are enumerated. A driver picks one; the engine applies it.
//!
//! 2. **Closed unions**: `Event` and `Response` are enums with one variant
//!    per event kind, so a response can only be offered to the event kind
//!    it was made for.
//!
//! 3. **Cheap snapshots**: cloning a `Game` shares the immutable board
//!    topology (`im-rs`) and copies the rest, so drivers can explore every
//!    response from a position.
//!
//! ## Architecture
//!
//! - A `Game` holds at most two pending events: a side chain opened by a
//!   landing effect, and the main line (dice, forks, turn hand-offs,
//!   minigames). The side chain is answered first.
//!
//! - Boards are a graph of chains plus a `BoardKind` whose `BoardRules`
//!   attach board-specific behavior to `Junction` and `Hazard` spaces.
//!
//! ## Modules
//!
//! - `core`: players, game state, configuration, errors, RNG
//! - `board`: board graph, space kinds, per-board state
//! - `rules`: board hooks, turn discipline, outcome
//! - `movement`: token walking and landing effects
//! - `events`: the `Decision` trait and the event catalog
//! - `minigames`: team partition and minigame rewards
//! - `boards`: Eternal Star and Peach's Birthday Cake
//! - `driver`: response policies and playout helpers
//!
//! ## Example
//!
//! ```
//! use party_sim::{Board, Game, GameConfig, Response};
//!
//! let mut game = Game::new(Board::eternal_star(), GameConfig::default());
//! assert_eq!(game.legal_responses().len(), 10);
//! game.resolve(Response::Roll(4)).unwrap();
//! ```

pub mod board;
pub mod boards;
pub mod core;
pub mod driver;
pub mod events;
pub mod minigames;
pub mod movement;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Character, EngineError, Game, GameConfig, GameRng, GameRngState, Player, PlayerId,
    PlayerMap,
};

pub use crate::board::{Board, BoardBuilder, BoardGraph, BoardKind, ChainSpace, SpaceKind, Team};

pub use crate::events::{Controller, Decision, Event, Response};

pub use crate::rules::{BoardRules, GameResult, Passage};

pub use crate::driver::{
    explore, play_out, settle, step, Checkpoint, FirstResponse, ResponsePolicy, UniformRandom,
};
