//! Two-on-two minigames.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rewards::{self, CoinRange, TwoVsTwoShape};
use crate::board::Team;
use crate::core::{Game, PlayerId};
use crate::events::{Controller, Decision};

/// Coins each loser pays their counterpart.
pub const TEAM_WIN_COINS: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TwoVsTwoGame {
    BobsledRun,
    DesertDash,
    Bombsketball,
    HandcarHavoc,
    DeepSeaDivers,
}

impl TwoVsTwoGame {
    pub const ALL: [TwoVsTwoGame; 5] = [
        TwoVsTwoGame::BobsledRun,
        TwoVsTwoGame::DesertDash,
        TwoVsTwoGame::Bombsketball,
        TwoVsTwoGame::HandcarHavoc,
        TwoVsTwoGame::DeepSeaDivers,
    ];
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoVsTwoSelector {
    pub blue: [PlayerId; 2],
    pub red: [PlayerId; 2],
}

impl Decision for TwoVsTwoSelector {
    type Response = TwoVsTwoGame;

    fn responses(&self, _game: &Game) -> Vec<TwoVsTwoGame> {
        TwoVsTwoGame::ALL.to_vec()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, minigame: TwoVsTwoGame, game: &mut Game) {
        let reward = rewards::two_vs_two(minigame);
        debug!(?minigame, certainty = ?reward.certainty, "two vs two");
        let (blue, red) = (self.blue, self.red);
        match reward.shape {
            TwoVsTwoShape::Winner { drawable } => game.set_next_event(TwoVsTwoReward {
                blue,
                red,
                drawable,
            }),
            TwoVsTwoShape::Coins(range) => game.set_next_event(TwoVsTwoCoinReward {
                range,
                blue,
                red,
                team: Team::Blue,
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamResult {
    BlueWin,
    RedWin,
    Draw,
}

/// Which team won. Losers pay their counterpart by position, so the coin
/// total is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoVsTwoReward {
    pub blue: [PlayerId; 2],
    pub red: [PlayerId; 2],
    pub drawable: bool,
}

impl Decision for TwoVsTwoReward {
    type Response = TeamResult;

    fn responses(&self, _game: &Game) -> Vec<TeamResult> {
        let mut out = vec![TeamResult::BlueWin, TeamResult::RedWin];
        if self.drawable {
            out.push(TeamResult::Draw);
        }
        out
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, result: TeamResult, game: &mut Game) {
        let pairs = match result {
            TeamResult::BlueWin => Some((self.blue, self.red)),
            TeamResult::RedWin => Some((self.red, self.blue)),
            TeamResult::Draw => None,
        };
        if let Some((winners, losers)) = pairs {
            for (winner, loser) in winners.into_iter().zip(losers) {
                game.give_coins(loser, winner, TEAM_WIN_COINS, true);
            }
        }
        game.end_game_turn();
    }
}

/// Coins a team collected; both members receive them. Blue answers first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoVsTwoCoinReward {
    pub range: CoinRange,
    pub blue: [PlayerId; 2],
    pub red: [PlayerId; 2],
    pub team: Team,
}

impl Decision for TwoVsTwoCoinReward {
    type Response = i32;

    fn responses(&self, _game: &Game) -> Vec<i32> {
        self.range.values().collect()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, coins: i32, game: &mut Game) {
        let members = if self.team == Team::Blue { self.blue } else { self.red };
        for player in members {
            game.award_coins(player, coins, true);
        }
        if self.team == Team::Blue {
            game.set_next_event(TwoVsTwoCoinReward {
                team: Team::Red,
                ..self.clone()
            });
        } else {
            game.end_game_turn();
        }
    }
}
