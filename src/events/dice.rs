//! Dice blocks and hidden blocks.

use serde::{Deserialize, Serialize};

use super::{Controller, Decision};
use crate::core::{Game, PlayerId};
use crate::movement;

/// Faces of the normal dice block.
pub const NORMAL_DICE_FACES: std::ops::RangeInclusive<u8> = 1..=10;

/// Highest movement face of the event dice block.
pub const EVENT_DICE_MAX_MOVE: u8 = 6;

/// Coins from the event dice block's coin face.
pub const EVENT_DICE_COINS: u32 = 10;

/// Coins inside a hidden coin block.
pub const HIDDEN_BLOCK_COINS: u32 = 20;

/// The normal 1-10 roll. The result moves the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalDiceBlock {
    pub player: PlayerId,
}

impl Decision for NormalDiceBlock {
    type Response = u8;

    fn responses(&self, _game: &Game) -> Vec<u8> {
        NORMAL_DICE_FACES.collect()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, roll: u8, game: &mut Game) {
        movement::move_player(game, self.player, roll);
    }
}

/// Which block to hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceBlock {
    Normal,
    Event,
}

/// Start of a character turn with dice assist: the player picks a block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickDiceBlock {
    pub player: PlayerId,
}

impl Decision for PickDiceBlock {
    type Response = DiceBlock;

    fn responses(&self, _game: &Game) -> Vec<DiceBlock> {
        vec![DiceBlock::Normal, DiceBlock::Event]
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Player(self.player)
    }

    fn handle(&self, block: DiceBlock, game: &mut Game) {
        match block {
            DiceBlock::Normal => game.set_next_event(NormalDiceBlock { player: self.player }),
            DiceBlock::Event => game.set_next_event(EventDiceBlock { player: self.player }),
        }
    }
}

/// A face of the event dice block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventFace {
    Move(u8),
    /// Collect coins instead of moving.
    Coins,
}

/// The event dice block: a short move or a coin payout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDiceBlock {
    pub player: PlayerId,
}

impl Decision for EventDiceBlock {
    type Response = EventFace;

    fn responses(&self, _game: &Game) -> Vec<EventFace> {
        (1..=EVENT_DICE_MAX_MOVE)
            .map(EventFace::Move)
            .chain(std::iter::once(EventFace::Coins))
            .collect()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, face: EventFace, game: &mut Game) {
        match face {
            EventFace::Move(moves) => movement::move_player(game, self.player, moves),
            EventFace::Coins => {
                game.gain_coins(self.player, EVENT_DICE_COINS, false);
                game.end_character_turn();
            }
        }
    }
}

/// What a hidden block held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HiddenPrize {
    Nothing,
    Coins,
    Star,
}

/// Raised on landing when hidden blocks are enabled. The space's own
/// effect runs after the prize.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenBlock {
    pub player: PlayerId,
}

impl Decision for HiddenBlock {
    type Response = HiddenPrize;

    fn responses(&self, _game: &Game) -> Vec<HiddenPrize> {
        vec![HiddenPrize::Nothing, HiddenPrize::Coins, HiddenPrize::Star]
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, prize: HiddenPrize, game: &mut Game) {
        match prize {
            HiddenPrize::Nothing => {}
            HiddenPrize::Coins => game.gain_coins(self.player, HIDDEN_BLOCK_COINS, false),
            HiddenPrize::Star => game.players[self.player].stars += 1,
        }
        movement::activate_space(game, self.player);
    }
}
