//! Single-player minigames from minigame spaces.
//!
//! These run in the lander's side chain and never end the round; the turn
//! hand-off waiting in the main line follows the reward.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rewards;
use crate::core::{Game, PlayerId};
use crate::events::{Controller, Decision};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SinglePlayerGame {
    MemoryMatch,
    SlotMachine,
    ShellGame,
    GhostGuess,
    PedalPower,
    WhackaPlant,
    GroundPound,
    TeeteringTowers,
    KnockBlockTower,
    LimboDance,
}

impl SinglePlayerGame {
    pub const ALL: [SinglePlayerGame; 10] = [
        SinglePlayerGame::MemoryMatch,
        SinglePlayerGame::SlotMachine,
        SinglePlayerGame::ShellGame,
        SinglePlayerGame::GhostGuess,
        SinglePlayerGame::PedalPower,
        SinglePlayerGame::WhackaPlant,
        SinglePlayerGame::GroundPound,
        SinglePlayerGame::TeeteringTowers,
        SinglePlayerGame::KnockBlockTower,
        SinglePlayerGame::LimboDance,
    ];
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinglePlayerSelector {
    pub player: PlayerId,
}

impl Decision for SinglePlayerSelector {
    type Response = SinglePlayerGame;

    fn responses(&self, _game: &Game) -> Vec<SinglePlayerGame> {
        SinglePlayerGame::ALL.to_vec()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, minigame: SinglePlayerGame, game: &mut Game) {
        debug!(player = %self.player, ?minigame, "single-player minigame");
        game.set_extra_event(SinglePlayerReward {
            player: self.player,
            minigame,
        });
    }
}

/// Coins won (or lost) in a single-player minigame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinglePlayerReward {
    pub player: PlayerId,
    pub minigame: SinglePlayerGame,
}

impl Decision for SinglePlayerReward {
    type Response = i32;

    fn responses(&self, _game: &Game) -> Vec<i32> {
        rewards::single_player(self.minigame).shape.to_vec()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, coins: i32, game: &mut Game) {
        game.award_coins(self.player, coins, true);
    }
}
