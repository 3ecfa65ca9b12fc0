//! Free-for-all minigames.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rewards::{self, CoinRange, FfaShape};
use crate::core::{Game, PlayerId};
use crate::events::{Controller, Decision, Event};

/// Coins for winning a free-for-all.
pub const FFA_WIN_COINS: u32 = 10;

/// Coins the one loser pays each other player.
pub const ONE_LOSER_PAYMENT: u32 = 5;

/// Coins everyone gets when nobody loses a one-loser minigame.
pub const ONE_LOSER_SURVIVAL_COINS: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FfaGame {
    BurriedTreasure,
    TreasureDivers,
    HotBobomb,
    MusicalMushroom,
    CrazyCutter,
    FaceLift,
    BalloonBurst,
    CoinBlockBlitz,
    SkateboardScamper,
    BoxMountainMayhem,
    PlatformPeril,
    MushroomMixup,
    GrabBag,
    BumperBalls,
    TipsyTourney,
    BombsAway,
    MarioBandstand,
    ShyGuySays,
    CastAways,
    KeypaWay,
    RunningOfTheBulb,
    HotRopeJump,
    HammerDrop,
    SlotCarDerby,
}

impl FfaGame {
    pub const ALL: [FfaGame; 24] = [
        FfaGame::BurriedTreasure,
        FfaGame::TreasureDivers,
        FfaGame::HotBobomb,
        FfaGame::MusicalMushroom,
        FfaGame::CrazyCutter,
        FfaGame::FaceLift,
        FfaGame::BalloonBurst,
        FfaGame::CoinBlockBlitz,
        FfaGame::SkateboardScamper,
        FfaGame::BoxMountainMayhem,
        FfaGame::PlatformPeril,
        FfaGame::MushroomMixup,
        FfaGame::GrabBag,
        FfaGame::BumperBalls,
        FfaGame::TipsyTourney,
        FfaGame::BombsAway,
        FfaGame::MarioBandstand,
        FfaGame::ShyGuySays,
        FfaGame::CastAways,
        FfaGame::KeypaWay,
        FfaGame::RunningOfTheBulb,
        FfaGame::HotRopeJump,
        FfaGame::HammerDrop,
        FfaGame::SlotCarDerby,
    ];
}

/// Which free-for-all was picked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FfaSelector;

impl Decision for FfaSelector {
    type Response = FfaGame;

    fn responses(&self, _game: &Game) -> Vec<FfaGame> {
        FfaGame::ALL.to_vec()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, minigame: FfaGame, game: &mut Game) {
        let reward = rewards::ffa(minigame);
        debug!(?minigame, certainty = ?reward.certainty, "free-for-all");
        let next: Event = match reward.shape {
            FfaShape::Winner { drawable, coins } => FfaReward { drawable, coins }.into(),
            FfaShape::Coins(range) => FfaCoinReward::first(range).into(),
            FfaShape::MultiWin { win, lose, if_none } => FfaMultiWin { win, lose, if_none }.into(),
            FfaShape::OneLoser => FfaOneLoser.into(),
            FfaShape::Coop => FfaCoop.into(),
            FfaShape::GrabBag(range) => GrabBag {
                range,
                player: PlayerId::new(0),
                acc: 0,
            }
            .into(),
        };
        game.set_next_event(next);
    }
}

/// Who won. `None` is offered only for drawable minigames. A coin race may
/// follow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FfaReward {
    pub drawable: bool,
    pub coins: Option<CoinRange>,
}

impl Decision for FfaReward {
    type Response = Option<PlayerId>;

    fn responses(&self, _game: &Game) -> Vec<Option<PlayerId>> {
        let mut out: Vec<Option<PlayerId>> = PlayerId::all().map(Some).collect();
        if self.drawable {
            out.push(None);
        }
        out
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, winner: Option<PlayerId>, game: &mut Game) {
        if let Some(winner) = winner {
            game.gain_coins(winner, FFA_WIN_COINS, true);
        }
        match self.coins {
            Some(range) => game.set_next_event(FfaCoinReward::first(range)),
            None => game.end_game_turn(),
        }
    }
}

/// Coins one player collected in a coin race. Asked for every seat in
/// order; the round ends after the last.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FfaCoinReward {
    pub range: CoinRange,
    pub player: PlayerId,
}

impl FfaCoinReward {
    #[must_use]
    pub fn first(range: CoinRange) -> Self {
        Self {
            range,
            player: PlayerId::new(0),
        }
    }
}

impl Decision for FfaCoinReward {
    type Response = i32;

    fn responses(&self, _game: &Game) -> Vec<i32> {
        self.range.values().collect()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, coins: i32, game: &mut Game) {
        game.award_coins(self.player, coins, true);
        match self.player.next() {
            Some(player) => game.set_next_event(FfaCoinReward {
                range: self.range,
                player,
            }),
            None => game.end_game_turn(),
        }
    }
}

/// Several winners at once. The response is a bitmask with bit `n` for
/// seat `n`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FfaMultiWin {
    pub win: i32,
    pub lose: i32,
    pub if_none: i32,
}

impl Decision for FfaMultiWin {
    type Response = u8;

    fn responses(&self, _game: &Game) -> Vec<u8> {
        (0..=15).collect()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, winners: u8, game: &mut Game) {
        for player in PlayerId::all() {
            let delta = if winners == 0 {
                self.if_none
            } else if winners & (1 << player.0) != 0 {
                self.win
            } else {
                self.lose
            };
            game.award_coins(player, delta, true);
        }
        game.end_game_turn();
    }
}

/// Who lost, if anyone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FfaOneLoser;

impl Decision for FfaOneLoser {
    type Response = Option<PlayerId>;

    fn responses(&self, _game: &Game) -> Vec<Option<PlayerId>> {
        PlayerId::all().map(Some).chain(std::iter::once(None)).collect()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, loser: Option<PlayerId>, game: &mut Game) {
        match loser {
            Some(loser) => {
                for other in loser.others() {
                    game.give_coins(loser, other, ONE_LOSER_PAYMENT, true);
                }
            }
            None => {
                for player in PlayerId::all() {
                    game.gain_coins(player, ONE_LOSER_SURVIVAL_COINS, true);
                }
            }
        }
        game.end_game_turn();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoopResult {
    Win,
    Loss,
}

/// Everyone plays together.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FfaCoop;

impl Decision for FfaCoop {
    type Response = CoopResult;

    fn responses(&self, _game: &Game) -> Vec<CoopResult> {
        vec![CoopResult::Win, CoopResult::Loss]
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, result: CoopResult, game: &mut Game) {
        let delta = match result {
            CoopResult::Win => 10,
            CoopResult::Loss => -5,
        };
        for player in PlayerId::all() {
            game.award_coins(player, delta, true);
        }
        game.end_game_turn();
    }
}

/// Grab Bag: seats 0 to 2 report their net gain, which is settled against
/// seat 3 at once. A grab moves no more than the paying side holds, so the
/// coin total never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrabBag {
    pub range: CoinRange,
    pub player: PlayerId,
    /// Net coins seat 3 has paid out so far.
    pub acc: i32,
}

impl Decision for GrabBag {
    type Response = i32;

    fn responses(&self, _game: &Game) -> Vec<i32> {
        self.range.values().collect()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, coins: i32, game: &mut Game) {
        let last = PlayerId::new(3);
        let moved = if coins >= 0 {
            game.give_coins(last, self.player, coins.unsigned_abs(), true) as i32
        } else {
            -(game.give_coins(self.player, last, coins.unsigned_abs(), true) as i32)
        };
        let acc = self.acc + moved;
        debug!(player = %self.player, requested = coins, moved, "grab bag");
        match self.player.next() {
            Some(player) if player != last => game.set_next_event(GrabBag {
                range: self.range,
                player,
                acc,
            }),
            _ => game.end_game_turn(),
        }
    }
}
