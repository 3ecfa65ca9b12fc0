//! Core engine types: players, game state, configuration, errors, RNG.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use error::EngineError;
pub use player::{Character, Player, PlayerId, PlayerMap, PLAYER_COUNT, STARTING_COINS};
pub use rng::{GameRng, GameRngState};
pub use state::Game;
