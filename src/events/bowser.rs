//! Bowser spaces and Bowser's minigames.
//!
//! Landing on Bowser with coins raises `BowserEvent`, which either settles
//! at once or queues one of his minigames in the side slot. Minigame
//! losses scale with the round through `bowser_loss`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Controller, Decision, Event};
use crate::core::{Game, PlayerId};

/// Coins given to a broke player who has no star to trade.
pub const BROKE_PITY_COINS: u32 = 20;

/// Coins given to a broke player in exchange for one star.
pub const STAR_TRADE_COINS: u32 = 10;

/// Coins each player loses when Balloon Burst is a draw.
pub const BALLOON_DRAW_LOSS: u32 = 20;

/// Coins the lander pays when everyone matches Bowser's face.
pub const FACE_LIFT_SWEEP_LOSS: u32 = 50;

/// Coins each player loses when Tug o' War is a draw.
pub const TUG_DRAW_LOSS: u32 = 30;

/// Coins the lander loses when the team wins Tug o' War.
pub const TUG_TEAM_WIN_LOSS: u32 = 10;

/// Coins Bowser's Chance Time can take.
pub const BOWSER_CHANCE_COINS: [u32; 3] = [10, 20, 30];

/// Coins lost to a Bowser minigame in round `turn` (0-based).
#[must_use]
pub fn bowser_loss(turn: u8) -> u32 {
    match turn {
        0..=9 => 10,
        10..=19 => 20,
        20..=29 => 30,
        _ => 40,
    }
}

/// Bowser's space without coins: trade a star for a few coins, or get
/// some for free. With coins, Bowser appears.
pub(crate) fn pre_bowser_check(game: &mut Game, player: PlayerId) -> Option<Event> {
    if game.player(player).coins > 0 {
        return Some(BowserEvent { player }.into());
    }
    if game.take_star(player) {
        debug!(player = %player, "Bowser traded a star for coins");
        game.gain_coins(player, STAR_TRADE_COINS, false);
    } else {
        game.gain_coins(player, BROKE_PITY_COINS, false);
    }
    None
}

fn lose_to_bowser<I>(game: &mut Game, losers: I)
where
    I: IntoIterator<Item = PlayerId>,
{
    let loss = bowser_loss(game.turn);
    for player in losers {
        game.lose_coins(player, loss);
    }
}

// =============================================================================
// Bowser's Space
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BowserOutcome {
    CoinsForBowser,
    BalloonBurst,
    FaceLift,
    TugOWar,
    BashnCash,
    /// Everyone's coins are pooled and split evenly.
    Revolution,
    ChanceTime,
    StarPresent,
}

impl BowserOutcome {
    pub const ALL: [BowserOutcome; 8] = [
        BowserOutcome::CoinsForBowser,
        BowserOutcome::BalloonBurst,
        BowserOutcome::FaceLift,
        BowserOutcome::TugOWar,
        BowserOutcome::BashnCash,
        BowserOutcome::Revolution,
        BowserOutcome::ChanceTime,
        BowserOutcome::StarPresent,
    ];
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowserEvent {
    pub player: PlayerId,
}

impl Decision for BowserEvent {
    type Response = BowserOutcome;

    fn responses(&self, _game: &Game) -> Vec<BowserOutcome> {
        BowserOutcome::ALL.to_vec()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, outcome: BowserOutcome, game: &mut Game) {
        let player = self.player;
        debug!(player = %player, ?outcome, "Bowser");
        match outcome {
            BowserOutcome::CoinsForBowser => lose_to_bowser(game, [player]),
            BowserOutcome::BalloonBurst => game.set_extra_event(BalloonBurst { player }),
            BowserOutcome::FaceLift => game.set_extra_event(FaceLift { player }),
            BowserOutcome::TugOWar => game.set_extra_event(TugOWar { player }),
            BowserOutcome::BashnCash => {
                let coins = game.player(player).coins;
                game.set_extra_event(BowserBashnCash { player, coins });
            }
            BowserOutcome::Revolution => {
                let share = game.total_coins() / 4;
                for p in PlayerId::all() {
                    let record = &mut game.players[p];
                    record.coins = share;
                    record.max_coins = record.max_coins.max(share);
                }
            }
            BowserOutcome::ChanceTime => game.set_extra_event(BowserChanceTime { player }),
            BowserOutcome::StarPresent => {
                game.take_star(player);
            }
        }
    }
}

// =============================================================================
// Bowser's Minigames
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BalloonResult {
    Draw,
    Winner(PlayerId),
}

/// Bowser's Balloon Burst. Everyone but the winner pays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalloonBurst {
    pub player: PlayerId,
}

impl Decision for BalloonBurst {
    type Response = BalloonResult;

    fn responses(&self, _game: &Game) -> Vec<BalloonResult> {
        std::iter::once(BalloonResult::Draw)
            .chain(PlayerId::all().map(BalloonResult::Winner))
            .collect()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, result: BalloonResult, game: &mut Game) {
        match result {
            BalloonResult::Draw => {
                for p in PlayerId::all() {
                    game.lose_coins(p, BALLOON_DRAW_LOSS);
                }
            }
            BalloonResult::Winner(winner) => lose_to_bowser(game, winner.others()),
        }
    }
}

/// Bowser's Face Lift. The response is a bitmask of winners, bit `n` for
/// seat `n`; at least one player always wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceLift {
    pub player: PlayerId,
}

impl Decision for FaceLift {
    type Response = u8;

    fn responses(&self, _game: &Game) -> Vec<u8> {
        (1..=15).collect()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, winners: u8, game: &mut Game) {
        if winners == 0b1111 {
            game.lose_coins(self.player, FACE_LIFT_SWEEP_LOSS);
            return;
        }
        let losers: Vec<PlayerId> = PlayerId::all()
            .filter(|p| winners & (1 << p.0) == 0)
            .collect();
        lose_to_bowser(game, losers);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TugResult {
    Draw,
    /// The lander beat the other three.
    SoloWin,
    /// The other three beat the lander.
    TeamWin,
}

/// Bowser's Tug o' War: the lander against everyone else.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TugOWar {
    pub player: PlayerId,
}

impl Decision for TugOWar {
    type Response = TugResult;

    fn responses(&self, _game: &Game) -> Vec<TugResult> {
        vec![TugResult::Draw, TugResult::SoloWin, TugResult::TeamWin]
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, result: TugResult, game: &mut Game) {
        match result {
            TugResult::Draw => {
                for p in PlayerId::all() {
                    game.lose_coins(p, TUG_DRAW_LOSS);
                }
            }
            TugResult::SoloWin => lose_to_bowser(game, self.player.others()),
            TugResult::TeamWin => {
                game.lose_coins(self.player, TUG_TEAM_WIN_LOSS);
            }
        }
    }
}

/// Bowser's Bash 'n' Cash. Each hit drops five coins while the player has
/// five to drop, then one coin per hit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowserBashnCash {
    pub player: PlayerId,
    /// Coins held when the minigame started.
    pub coins: u32,
}

/// Most hits a purse of `coins` can take: one per five-coin drop, then one
/// per remaining coin.
#[must_use]
pub fn bash_max_hits(coins: u32) -> u32 {
    coins / 5 + coins % 5
}

/// Coins knocked out of a purse of `coins` by `hits` hits.
#[must_use]
pub fn bash_coins_lost(coins: u32, hits: u32) -> u32 {
    let fives = coins / 5;
    if hits > fives {
        (coins - coins % 5) + (hits - fives)
    } else {
        hits * 5
    }
}

impl Decision for BowserBashnCash {
    type Response = u32;

    fn responses(&self, _game: &Game) -> Vec<u32> {
        (1..=bash_max_hits(self.coins).max(1)).collect()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, hits: u32, game: &mut Game) {
        game.lose_coins(self.player, bash_coins_lost(self.coins, hits));
    }
}

/// Who Bowser's Chance Time robs, and how much.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BowserChanceDraw {
    pub victim: PlayerId,
    pub coins: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowserChanceTime {
    pub player: PlayerId,
}

impl Decision for BowserChanceTime {
    type Response = BowserChanceDraw;

    fn responses(&self, _game: &Game) -> Vec<BowserChanceDraw> {
        PlayerId::all()
            .flat_map(|victim| {
                BOWSER_CHANCE_COINS
                    .iter()
                    .map(move |&coins| BowserChanceDraw { victim, coins })
            })
            .collect()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, draw: BowserChanceDraw, game: &mut Game) {
        game.lose_coins(draw.victim, draw.coins);
    }
}
