//! Landing effects.
//!
//! Simple spaces settle immediately and end the character turn. Spaces
//! with an uncertain outcome open a side chain: the first event goes in
//! the side slot and the turn hand-off waits in the main line.

use tracing::debug;

use crate::board::SpaceKind;
use crate::core::{Game, PlayerId};
use crate::events::{bowser, ChanceTimeEvent, Event, HiddenBlock, MushroomEvent};
use crate::minigames::SinglePlayerSelector;

/// Coins for stopping on the start space.
pub const START_BONUS: u32 = 10;

/// Coins gained on a blue space.
pub const BLUE_SPACE_COINS: u32 = 3;

/// Coins lost on a red space.
pub const RED_SPACE_COINS: u32 = 3;

/// The token has stopped. With hidden blocks enabled the block check comes
/// first and the space effect follows it. The block pays its prize
/// directly (`HiddenPrize`) instead of rolling an event dice block, and the
/// space's own effect then runs as usual.
pub(crate) fn land(game: &mut Game, player: PlayerId) {
    debug!(
        player = %player,
        at = %game.players[player].current_space,
        "landed"
    );
    if game.config().hidden_blocks {
        game.set_next_event(HiddenBlock { player });
        return;
    }
    activate_space(game, player);
}

/// Run the effect of the space under `player`.
pub(crate) fn activate_space(game: &mut Game, player: PlayerId) {
    let at = game.players[player].current_space;
    let kind = game.board.space(at).kind;
    game.players[player].last_space = kind;

    let side_chain: Option<Event> = match kind {
        SpaceKind::Start => {
            game.gain_coins(player, START_BONUS, false);
            None
        }
        SpaceKind::Blue => {
            game.gain_coins(player, BLUE_SPACE_COINS, false);
            None
        }
        SpaceKind::Red => {
            game.lose_coins(player, RED_SPACE_COINS);
            None
        }
        SpaceKind::Mushroom => Some(MushroomEvent { player }.into()),
        SpaceKind::Happening => {
            game.players[player].happening_count += 1;
            let rules = game.board.kind().rules();
            rules.happening(game, player)
        }
        SpaceKind::Bowser => bowser::pre_bowser_check(game, player),
        SpaceKind::Minigame => Some(SinglePlayerSelector { player }.into()),
        SpaceKind::ChanceTime => Some(ChanceTimeEvent { player }.into()),
        SpaceKind::Hazard(hook) => {
            let rules = game.board.kind().rules();
            rules.hazard(game, player, hook)
        }
        SpaceKind::Invisible | SpaceKind::Boo | SpaceKind::Star | SpaceKind::Junction(_) => None,
    };

    match side_chain {
        Some(event) => {
            debug!(player = %player, event = event.name(), "side chain opened");
            game.open_side_chain(player, event);
        }
        None => game.end_character_turn(),
    }
}
