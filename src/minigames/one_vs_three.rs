//! One-against-three minigames.
//!
//! `solo` is the player alone on their team. Most rewards move coins
//! between the solo player and the other three; Coin Block Bash and Coin
//! Shower Flower reuse the free-for-all coin race.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rewards::{self, OneVsThreeShape};
use super::FfaCoinReward;
use crate::core::{Game, PlayerId};
use crate::events::bowser::{bash_coins_lost, bash_max_hits};
use crate::events::{Controller, Decision, Event};

/// Coins each of the three pays (or receives) on a 1v3 result.
pub const SOLO_STAKE: u32 = 5;

/// Coins for winning Pipe Maze.
pub const PIPE_MAZE_COINS: u32 = 10;

/// Coins a knocked-over character pin pays the bowler.
pub const BOWL_OVER_PIN_COINS: u32 = 3;

/// Coin prizes in Crane Game. Zero means the claw went for a player.
pub const CRANE_GAME_PRIZES: [u32; 4] = [0, 1, 5, 10];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OneVsThreeGame {
    PipeMaze,
    BashnCash,
    BowlOver,
    CoinBlockBash,
    TightropeTreachery,
    CraneGame,
    PiranhaPursuit,
    TugOWar,
    PaddleBattle,
    CoinShowerFlower,
}

impl OneVsThreeGame {
    pub const ALL: [OneVsThreeGame; 10] = [
        OneVsThreeGame::PipeMaze,
        OneVsThreeGame::BashnCash,
        OneVsThreeGame::BowlOver,
        OneVsThreeGame::CoinBlockBash,
        OneVsThreeGame::TightropeTreachery,
        OneVsThreeGame::CraneGame,
        OneVsThreeGame::PiranhaPursuit,
        OneVsThreeGame::TugOWar,
        OneVsThreeGame::PaddleBattle,
        OneVsThreeGame::CoinShowerFlower,
    ];
}

/// Bash 'n' Cash is never picked against a solo player without coins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneVsThreeSelector {
    pub solo: PlayerId,
}

impl Decision for OneVsThreeSelector {
    type Response = OneVsThreeGame;

    fn responses(&self, game: &Game) -> Vec<OneVsThreeGame> {
        let broke = game.player(self.solo).coins == 0;
        OneVsThreeGame::ALL
            .into_iter()
            .filter(|g| !(broke && *g == OneVsThreeGame::BashnCash))
            .collect()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, minigame: OneVsThreeGame, game: &mut Game) {
        let reward = rewards::one_vs_three(minigame);
        let solo = self.solo;
        debug!(?minigame, solo = %solo, certainty = ?reward.certainty, "one vs three");
        let next: Event = match reward.shape {
            OneVsThreeShape::Winner { drawable } => OneVsThreeReward { solo, drawable }.into(),
            OneVsThreeShape::PipeMaze => PipeMaze { solo }.into(),
            OneVsThreeShape::BashnCash => BashnCash {
                solo,
                coins: game.player(solo).coins,
            }
            .into(),
            OneVsThreeShape::BowlOver => BowlOver { solo }.into(),
            OneVsThreeShape::Coins(range) => FfaCoinReward::first(range).into(),
            OneVsThreeShape::CraneGame => CraneGameCoins { solo }.into(),
            OneVsThreeShape::PaddleBattle => PaddleBattle { solo }.into(),
            OneVsThreeShape::Throwable(range) => ThrowableMinigame {
                solo,
                minigame: Box::new(FfaCoinReward::first(range).into()),
            }
            .into(),
        };
        game.set_next_event(next);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoloResult {
    SoloWin,
    TeamWin,
    Draw,
}

/// Win or lose against the three. Each of the three pays the solo player
/// five coins, or is paid five.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneVsThreeReward {
    pub solo: PlayerId,
    pub drawable: bool,
}

impl Decision for OneVsThreeReward {
    type Response = SoloResult;

    fn responses(&self, _game: &Game) -> Vec<SoloResult> {
        let mut out = vec![SoloResult::SoloWin, SoloResult::TeamWin];
        if self.drawable {
            out.push(SoloResult::Draw);
        }
        out
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, result: SoloResult, game: &mut Game) {
        for other in self.solo.others() {
            match result {
                SoloResult::SoloWin => {
                    game.give_coins(other, self.solo, SOLO_STAKE, true);
                }
                SoloResult::TeamWin => {
                    game.give_coins(self.solo, other, SOLO_STAKE, true);
                }
                SoloResult::Draw => {}
            }
        }
        game.end_game_turn();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThrowChoice {
    /// Lose on purpose; nobody gets anything.
    Throw,
    Play,
}

/// A minigame the solo player may throw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowableMinigame {
    pub solo: PlayerId,
    pub minigame: Box<Event>,
}

impl Decision for ThrowableMinigame {
    type Response = ThrowChoice;

    fn responses(&self, _game: &Game) -> Vec<ThrowChoice> {
        vec![ThrowChoice::Throw, ThrowChoice::Play]
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Player(self.solo)
    }

    fn handle(&self, choice: ThrowChoice, game: &mut Game) {
        match choice {
            ThrowChoice::Throw => game.end_game_turn(),
            ThrowChoice::Play => game.set_next_event((*self.minigame).clone()),
        }
    }
}

/// The solo player reports who reached the end of the maze.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipeMaze {
    pub solo: PlayerId,
}

impl Decision for PipeMaze {
    type Response = PlayerId;

    fn responses(&self, _game: &Game) -> Vec<PlayerId> {
        PlayerId::all().collect()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Player(self.solo)
    }

    fn handle(&self, winner: PlayerId, game: &mut Game) {
        game.gain_coins(winner, PIPE_MAZE_COINS, true);
        game.end_game_turn();
    }
}

/// Bash 'n' Cash: the three hit the solo player, whose coins scatter.
/// Zero hits ends the minigame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BashnCash {
    pub solo: PlayerId,
    /// Coins the solo player held when the minigame started.
    pub coins: u32,
}

impl Decision for BashnCash {
    type Response = u32;

    fn responses(&self, _game: &Game) -> Vec<u32> {
        (0..=bash_max_hits(self.coins)).collect()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, hits: u32, game: &mut Game) {
        if hits == 0 {
            game.end_game_turn();
            return;
        }
        let pool = game.lose_coins(self.solo, bash_coins_lost(self.coins, hits));
        debug!(solo = %self.solo, hits, pool, "Bash 'n' Cash");
        match BashnCashAwards::first(self.solo, pool) {
            Some(awards) => game.set_next_event(awards),
            None => game.end_game_turn(),
        }
    }
}

/// The scattered coins, handed out to the three one at a time. The last
/// collector takes whatever is left.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BashnCashAwards {
    pub solo: PlayerId,
    pub player: PlayerId,
    /// Coins not yet collected.
    pub pool: u32,
}

impl BashnCashAwards {
    fn first(solo: PlayerId, pool: u32) -> Option<Self> {
        solo.others().next().map(|player| Self { solo, player, pool })
    }

    fn next_collector(&self) -> Option<PlayerId> {
        self.solo.others().find(|p| *p > self.player)
    }
}

impl Decision for BashnCashAwards {
    type Response = u32;

    fn responses(&self, _game: &Game) -> Vec<u32> {
        if self.next_collector().is_none() {
            vec![self.pool]
        } else {
            (0..=self.pool).collect()
        }
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, coins: u32, game: &mut Game) {
        game.gain_coins(self.player, coins, true);
        match self.next_collector() {
            Some(player) => game.set_next_event(BashnCashAwards {
                solo: self.solo,
                player,
                pool: self.pool - coins,
            }),
            None => game.end_game_turn(),
        }
    }
}

/// Bowl Over result: `pins` regular pins (0..=2) and a mask of the other
/// three players' character pins, bit `i` for the `i`-th other seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BowlOverResult {
    pub pins: u8,
    pub players: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlOver {
    pub solo: PlayerId,
}

impl Decision for BowlOver {
    type Response = BowlOverResult;

    fn responses(&self, _game: &Game) -> Vec<BowlOverResult> {
        (0..8u8)
            .flat_map(|players| (0..=2u8).map(move |pins| BowlOverResult { pins, players }))
            .collect()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, result: BowlOverResult, game: &mut Game) {
        game.gain_coins(self.solo, u32::from(result.pins), true);
        for (i, other) in self.solo.others().enumerate() {
            if result.players & (1 << i) != 0 {
                game.give_coins(other, self.solo, BOWL_OVER_PIN_COINS, true);
            }
        }
        game.end_game_turn();
    }
}

/// What the crane picked up. Zero coins means it went for a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraneGameCoins {
    pub solo: PlayerId,
}

impl Decision for CraneGameCoins {
    type Response = u32;

    fn responses(&self, _game: &Game) -> Vec<u32> {
        CRANE_GAME_PRIZES.to_vec()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Player(self.solo)
    }

    fn handle(&self, coins: u32, game: &mut Game) {
        if coins == 0 {
            game.set_next_event(CraneGamePlayers { solo: self.solo });
            return;
        }
        game.gain_coins(self.solo, coins, true);
        game.end_game_turn();
    }
}

/// Which player the crane caught, if any. The solo player takes a third
/// of that player's coins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraneGamePlayers {
    pub solo: PlayerId,
}

impl Decision for CraneGamePlayers {
    type Response = Option<PlayerId>;

    fn responses(&self, _game: &Game) -> Vec<Option<PlayerId>> {
        self.solo.others().map(Some).chain(std::iter::once(None)).collect()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, caught: Option<PlayerId>, game: &mut Game) {
        if let Some(victim) = caught {
            let coins = game.player(victim).coins / 3;
            game.give_coins(victim, self.solo, coins, true);
        }
        game.end_game_turn();
    }
}

/// Paddle Battle. Positive: the solo player pays each of the three that
/// many coins. Negative: each of the three pays the solo player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleBattle {
    pub solo: PlayerId,
}

impl Decision for PaddleBattle {
    type Response = i32;

    fn responses(&self, _game: &Game) -> Vec<i32> {
        (-10..=10).collect()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, hits: i32, game: &mut Game) {
        let coins = hits.unsigned_abs();
        for other in self.solo.others() {
            if hits > 0 {
                game.give_coins(self.solo, other, coins, true);
            } else {
                game.give_coins(other, self.solo, coins, true);
            }
        }
        game.end_game_turn();
    }
}
