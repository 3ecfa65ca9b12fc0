//! Match rules: board hooks, turn discipline, outcome.

pub mod engine;
mod turn;

pub use engine::{standings, BoardRules, GameResult, Passage, PlainRules};
