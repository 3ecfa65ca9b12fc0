//! Mushrooms, Boo, the star shop and Chance Time.

use serde::{Deserialize, Serialize};

use super::{Controller, Decision, NormalDiceBlock};
use crate::core::{Game, PlayerId};
use crate::movement;
use crate::rules::Passage;

/// Coins Boo charges to steal a star.
pub const BOO_STAR_PRICE: u32 = 50;

/// Most coins Boo can steal in one visit.
pub const BOO_COIN_CAP: u32 = 15;

/// Price of a star at the star shop.
pub const STAR_PRICE: u32 = 20;

/// Coin amounts Chance Time can hand over.
pub const CHANCE_TIME_COINS: [u32; 3] = [10, 20, 30];

// =============================================================================
// Mushroom
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MushroomCap {
    /// Roll again.
    Red,
    /// Lose the next character turn.
    Poison,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MushroomEvent {
    pub player: PlayerId,
}

impl Decision for MushroomEvent {
    type Response = MushroomCap;

    fn responses(&self, _game: &Game) -> Vec<MushroomCap> {
        vec![MushroomCap::Red, MushroomCap::Poison]
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, cap: MushroomCap, game: &mut Game) {
        match cap {
            MushroomCap::Red => game.set_extra_event(NormalDiceBlock { player: self.player }),
            MushroomCap::Poison => game.players[self.player].skip_turn = true,
        }
    }
}

// =============================================================================
// Boo
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StealTarget {
    Star,
    Coins,
}

/// Whom to rob, and what.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BooSteal {
    pub from: PlayerId,
    pub target: StealTarget,
}

/// A token passing Boo may rob a rival. Movement resumes afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooEvent {
    pub player: PlayerId,
    pub moves: u8,
}

impl Decision for BooEvent {
    type Response = BooSteal;

    fn responses(&self, game: &Game) -> Vec<BooSteal> {
        let can_buy_star = game.player(self.player).coins >= BOO_STAR_PRICE;
        let mut out = Vec::new();
        for from in self.player.others() {
            let rival = game.player(from);
            if can_buy_star && rival.stars > 0 {
                out.push(BooSteal { from, target: StealTarget::Star });
            }
            if rival.coins > 0 {
                out.push(BooSteal { from, target: StealTarget::Coins });
            }
        }
        out
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Player(self.player)
    }

    fn handle(&self, steal: BooSteal, game: &mut Game) {
        match steal.target {
            StealTarget::Star => {
                game.lose_coins(self.player, BOO_STAR_PRICE);
                game.give_star(steal.from, self.player);
                movement::move_player(game, self.player, self.moves);
            }
            StealTarget::Coins => game.set_next_event(BooCoinsEvent {
                thief: self.player,
                victim: steal.from,
                moves: self.moves,
            }),
        }
    }
}

/// How many coins Boo got away with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooCoinsEvent {
    pub thief: PlayerId,
    pub victim: PlayerId,
    pub moves: u8,
}

impl Decision for BooCoinsEvent {
    type Response = u32;

    fn responses(&self, game: &Game) -> Vec<u32> {
        let cap = game.player(self.victim).coins.min(BOO_COIN_CAP).max(1);
        (1..=cap).collect()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, coins: u32, game: &mut Game) {
        game.give_coins(self.victim, self.thief, coins, false);
        movement::move_player(game, self.thief, self.moves);
    }
}

/// Passing hook for Boo spaces. Nothing happens when Boo is disabled or
/// nobody can be robbed.
pub(crate) fn offer_boo(game: &mut Game, player: PlayerId, moves: u8) -> Passage {
    if game.config().no_boo {
        return Passage::Continue;
    }
    let event = BooEvent { player, moves };
    if event.responses(game).is_empty() {
        return Passage::Continue;
    }
    game.set_next_event(event);
    Passage::Paused
}

// =============================================================================
// Star Shop
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarPurchase {
    Buy,
    Pass,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarShopEvent {
    pub player: PlayerId,
    pub moves: u8,
}

impl Decision for StarShopEvent {
    type Response = StarPurchase;

    fn responses(&self, _game: &Game) -> Vec<StarPurchase> {
        vec![StarPurchase::Buy, StarPurchase::Pass]
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Player(self.player)
    }

    fn handle(&self, purchase: StarPurchase, game: &mut Game) {
        if purchase == StarPurchase::Buy {
            game.lose_coins(self.player, STAR_PRICE);
            game.players[self.player].stars += 1;
        }
        movement::move_player(game, self.player, self.moves);
    }
}

/// Passing hook for star shops. Only players who can pay are asked.
pub(crate) fn offer_star(game: &mut Game, player: PlayerId, moves: u8) -> Passage {
    if game.player(player).coins < STAR_PRICE {
        return Passage::Continue;
    }
    game.set_next_event(StarShopEvent { player, moves });
    Passage::Paused
}

// =============================================================================
// Chance Time
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChanceOutcome {
    GiveCoins(u32),
    GiveStar,
    SwapCoins,
    SwapStars,
}

/// `from` and `to` as picked by the first two blocks, `outcome` by the
/// middle block. Swaps list each pair once with `from < to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChanceTimeDraw {
    pub from: PlayerId,
    pub to: PlayerId,
    pub outcome: ChanceOutcome,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChanceTimeEvent {
    pub player: PlayerId,
}

impl Decision for ChanceTimeEvent {
    type Response = ChanceTimeDraw;

    fn responses(&self, _game: &Game) -> Vec<ChanceTimeDraw> {
        let mut out = Vec::new();
        for from in PlayerId::all() {
            for to in from.others() {
                let transfers = CHANCE_TIME_COINS
                    .iter()
                    .map(|&coins| ChanceOutcome::GiveCoins(coins))
                    .chain(std::iter::once(ChanceOutcome::GiveStar));
                for outcome in transfers {
                    out.push(ChanceTimeDraw { from, to, outcome });
                }
                if from < to {
                    out.push(ChanceTimeDraw { from, to, outcome: ChanceOutcome::SwapCoins });
                    out.push(ChanceTimeDraw { from, to, outcome: ChanceOutcome::SwapStars });
                }
            }
        }
        out
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, draw: ChanceTimeDraw, game: &mut Game) {
        let (from, to) = (draw.from, draw.to);
        match draw.outcome {
            ChanceOutcome::GiveCoins(coins) => {
                game.give_coins(from, to, coins, false);
            }
            ChanceOutcome::GiveStar => {
                game.give_star(from, to);
            }
            ChanceOutcome::SwapCoins => {
                let a = game.player(from).coins;
                let b = game.player(to).coins;
                game.lose_coins(from, a);
                game.lose_coins(to, b);
                game.gain_coins(from, b, false);
                game.gain_coins(to, a, false);
            }
            ChanceOutcome::SwapStars => {
                let a = game.player(from).stars;
                game.players[from].stars = game.player(to).stars;
                game.players[to].stars = a;
            }
        }
    }
}
