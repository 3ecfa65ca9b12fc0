//! Token movement over the board graph.
//!
//! A move walks the token one successor at a time:
//!
//! - entering a visible space costs one move
//! - entering a passing space is free and runs its hook, which may move the
//!   token (warps) or pause the walk on a decision that later resumes it
//! - a space with several successors pauses the walk on a `BranchEvent`
//!
//! With no moves left the token lands and the space's effect runs
//! (see `landing`). Nothing here samples: the walk is a pure function of
//! the position, the move count and the board state.

mod landing;

pub use landing::{BLUE_SPACE_COINS, RED_SPACE_COINS, START_BONUS};
pub(crate) use landing::{activate_space, land};

use tracing::{debug, trace};

use crate::board::{ChainSpace, SpaceKind};
use crate::core::{Game, PlayerId};
use crate::events::{happening, BranchEvent};
use crate::rules::Passage;

/// Walk `player` forward `moves` spaces.
pub(crate) fn move_player(game: &mut Game, player: PlayerId, moves: u8) {
    let mut remaining = moves;
    while remaining > 0 {
        let here = game.players[player].current_space;
        let options = game.board.graph().successors(here);
        if let [to] = options.as_slice() {
            match enter(game, player, *to, remaining) {
                Some(left) => remaining = left,
                None => return,
            }
        } else {
            debug!(player = %player, at = %here, choices = options.len(), "fork");
            game.set_next_event(BranchEvent {
                player,
                moves: remaining - 1,
                options,
            });
            return;
        }
    }
    land(game, player);
}

/// Continue a walk from a fork. `moves` is what is left after the step
/// onto `to`; a passing destination gives that step back.
pub(crate) fn take_branch(game: &mut Game, player: PlayerId, to: ChainSpace, moves: u8) {
    if let Some(left) = enter(game, player, to, moves.saturating_add(1)) {
        move_player(game, player, left);
    }
}

/// Put the token on `to`. Returns the moves left, or `None` if a passing
/// hook paused the walk.
fn enter(game: &mut Game, player: PlayerId, to: ChainSpace, remaining: u8) -> Option<u8> {
    trace!(
        player = %player,
        from = %game.players[player].current_space,
        to = %to,
        remaining,
        "step"
    );
    game.players[player].current_space = to;
    let kind = game.board.space(to).kind;
    if !kind.is_passing() {
        return Some(remaining - 1);
    }
    match pass(game, player, kind, remaining) {
        Passage::Continue => Some(remaining),
        Passage::Paused => None,
    }
}

fn pass(game: &mut Game, player: PlayerId, kind: SpaceKind, remaining: u8) -> Passage {
    match kind {
        SpaceKind::Boo => happening::offer_boo(game, player, remaining),
        SpaceKind::Star => happening::offer_star(game, player, remaining),
        SpaceKind::Junction(hook) => {
            let rules = game.board.kind().rules();
            rules.pass_junction(game, player, hook, remaining)
        }
        _ => Passage::Continue,
    }
}
