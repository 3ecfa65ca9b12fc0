//! Response policies: how a driver answers pending events.
//!
//! A policy sees the game and the legal responses to the pending event and
//! picks one. Policies are trait-based so drivers can mix them:
//! - `UniformRandom`: uniform over the legal responses, seeded
//! - `FirstResponse`: always the first legal response

use crate::core::{Game, GameRng, GameRngState};
use crate::events::Response;

/// Picks a response for the pending event.
pub trait ResponsePolicy {
    /// Choose one of `responses` (never empty). Returns `None` only if
    /// `responses` is empty.
    fn choose(&mut self, game: &Game, responses: &[Response]) -> Option<Response>;
}

/// Uniform random choice over the legal responses.
#[derive(Clone, Debug)]
pub struct UniformRandom {
    rng: GameRng,
}

impl UniformRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// An independent policy for a parallel playout.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            rng: self.rng.fork(),
        }
    }

    /// Where the sampler is, for checkpointing a playout.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }
}

impl ResponsePolicy for UniformRandom {
    fn choose(&mut self, _game: &Game, responses: &[Response]) -> Option<Response> {
        if responses.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range_usize(0..responses.len());
        responses.get(idx).cloned()
    }
}

/// Always the first legal response.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstResponse;

impl ResponsePolicy for FirstResponse {
    fn choose(&mut self, _game: &Game, responses: &[Response]) -> Option<Response> {
        responses.first().cloned()
    }
}
