//! Driver helpers.
//!
//! The engine only answers "what is pending" and "apply this response".
//! These helpers build the usual loops on top of that:
//!
//! - `step`: answer one event with a policy
//! - `play_out`: answer events until the match ends or a step limit
//! - `settle`: answer every event that has exactly one legal response
//! - `explore`: one independent snapshot per legal response
//! - `Checkpoint`: a serializable game plus sampler position, so a random
//!   playout can be stopped and resumed exactly
//!
//! ```
//! use party_sim::board::Board;
//! use party_sim::core::{Game, GameConfig};
//! use party_sim::driver::{play_out, UniformRandom};
//!
//! let mut game = Game::new(Board::peach_cake(), GameConfig::default().with_max_turns(2));
//! let playout = play_out(&mut game, &mut UniformRandom::new(7), 10_000).unwrap();
//! assert!(playout.result.is_some());
//! ```

mod policy;

pub use policy::{FirstResponse, ResponsePolicy, UniformRandom};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{EngineError, Game, GameRngState};
use crate::events::Response;
use crate::rules::GameResult;

/// Answer the pending event with `policy`. Returns `false` if the match was
/// already over.
pub fn step(game: &mut Game, policy: &mut impl ResponsePolicy) -> Result<bool, EngineError> {
    if game.is_over() {
        return Ok(false);
    }
    let responses = game.legal_responses();
    let response = policy
        .choose(game, &responses)
        .ok_or(EngineError::NoPendingEvent)?;
    game.resolve(response)?;
    Ok(true)
}

/// Outcome of `play_out`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playout {
    /// Events answered.
    pub steps: usize,
    /// `None` if the step limit was hit first.
    pub result: Option<GameResult>,
}

/// Answer events with `policy` until the match ends or `max_steps` events
/// have been answered.
pub fn play_out(
    game: &mut Game,
    policy: &mut impl ResponsePolicy,
    max_steps: usize,
) -> Result<Playout, EngineError> {
    let mut steps = 0;
    while steps < max_steps && step(game, policy)? {
        steps += 1;
    }
    debug!(steps, over = game.is_over(), "playout stopped");
    Ok(Playout {
        steps,
        result: game.result(),
    })
}

/// Resolve pending events while each has a single legal response (turn
/// hand-offs and other forced continuations). Returns how many were
/// resolved.
pub fn settle(game: &mut Game) -> Result<usize, EngineError> {
    let mut resolved = 0;
    loop {
        let mut responses = game.legal_responses();
        if responses.len() != 1 {
            return Ok(resolved);
        }
        if let Some(response) = responses.pop() {
            game.resolve(response)?;
            resolved += 1;
        }
    }
}

/// One snapshot per legal response, each with that response applied.
pub fn explore(game: &Game) -> Result<Vec<(Response, Game)>, EngineError> {
    game.legal_responses()
        .into_iter()
        .map(|response| {
            let mut branch = game.clone();
            branch.resolve(response.clone())?;
            Ok((response, branch))
        })
        .collect()
}

// =============================================================================
// Checkpoints
// =============================================================================

/// A paused random playout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub game: Game,
    pub rng: GameRngState,
}

impl Checkpoint {
    #[must_use]
    pub fn new(game: &Game, policy: &UniformRandom) -> Self {
        Self {
            game: game.clone(),
            rng: policy.state(),
        }
    }

    /// The game and a policy that continues exactly where it stopped.
    #[must_use]
    pub fn resume(self) -> (Game, UniformRandom) {
        let policy = UniformRandom::from_state(&self.rng);
        debug!(turn = self.game.turn, "resuming playout");
        (self.game, policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::{GameConfig, PlayerId};
    use crate::events::TurnEnd;

    fn short_config() -> GameConfig {
        GameConfig::default().with_max_turns(3)
    }

    #[test]
    fn test_play_out_finishes() {
        for board in [Board::eternal_star(), Board::peach_cake()] {
            let mut game = Game::new(board, short_config());
            let playout = play_out(&mut game, &mut UniformRandom::new(42), 100_000).unwrap();
            assert!(game.is_over());
            assert_eq!(game.turn, 3);
            assert!(playout.steps > 0);
            assert!(playout.result.is_some());
        }
    }

    #[test]
    fn test_play_out_respects_step_limit() {
        let mut game = Game::new(Board::peach_cake(), short_config());
        let playout = play_out(&mut game, &mut FirstResponse, 3).unwrap();
        assert_eq!(playout.steps, 3);
        assert!(playout.result.is_none() || game.is_over());
    }

    #[test]
    fn test_step_after_match_end() {
        let mut game = Game::new(Board::peach_cake(), short_config());
        play_out(&mut game, &mut FirstResponse, 100_000).unwrap();
        assert_eq!(step(&mut game, &mut FirstResponse), Ok(false));
    }

    #[test]
    fn test_settle_resolves_turn_end() {
        let mut game = Game::new(Board::peach_cake(), short_config());
        game.set_next_event(TurnEnd { player: PlayerId::new(0) });
        assert_eq!(settle(&mut game), Ok(1));
        assert_eq!(game.current_player, PlayerId::new(1));
        assert_eq!(settle(&mut game), Ok(0));
    }

    #[test]
    fn test_explore_branches_are_independent() {
        let game = Game::new(Board::eternal_star(), short_config());
        let branches = explore(&game).unwrap();
        assert_eq!(branches.len(), game.legal_responses().len());
        for (response, branch) in &branches {
            let mut replay = game.clone();
            replay.resolve(response.clone()).unwrap();
            assert_eq!(&replay, branch);
        }
        assert_eq!(game.current_player, PlayerId::new(0));
    }

    #[test]
    fn test_checkpoint_resumes_same_playout() {
        let mut game = Game::new(Board::eternal_star(), short_config());
        let mut policy = UniformRandom::new(9);
        play_out(&mut game, &mut policy, 25).unwrap();

        let json = serde_json::to_string(&Checkpoint::new(&game, &policy)).unwrap();
        let checkpoint: Checkpoint = serde_json::from_str(&json).unwrap();
        let (mut resumed, mut resumed_policy) = checkpoint.resume();
        assert_eq!(resumed, game);

        let expected = play_out(&mut game, &mut policy, 100_000).unwrap();
        let actual = play_out(&mut resumed, &mut resumed_policy, 100_000).unwrap();
        assert_eq!(actual, expected);
        assert_eq!(resumed, game);
    }
}
