//! Fork choices and the turn hand-off.

use serde::{Deserialize, Serialize};

use super::{Controller, Decision};
use crate::board::{ChainSpace, Successors};
use crate::core::{Game, PlayerId};
use crate::movement;

/// The token reached a fork. `moves` is what remains after stepping onto
/// the chosen destination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchEvent {
    pub player: PlayerId,
    pub moves: u8,
    pub options: Successors,
}

impl Decision for BranchEvent {
    type Response = ChainSpace;

    fn responses(&self, _game: &Game) -> Vec<ChainSpace> {
        self.options.to_vec()
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Player(self.player)
    }

    fn handle(&self, to: ChainSpace, game: &mut Game) {
        movement::take_branch(game, self.player, to, self.moves);
    }
}

/// Continuation that ends `player`'s character turn once a landing side
/// chain has run out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEnd {
    pub player: PlayerId,
}

impl Decision for TurnEnd {
    type Response = ();

    fn responses(&self, _game: &Game) -> Vec<()> {
        vec![()]
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, _response: (), game: &mut Game) {
        game.end_character_turn();
    }
}
