//! Shared helpers for integration tests.

#![allow(dead_code)]

use party_sim::board::{Board, BoardBuilder, ChainSpace, SpaceKind};
use party_sim::core::{Game, GameConfig, PlayerId};
use party_sim::events::Response;

pub const P0: PlayerId = PlayerId::new(0);
pub const P1: PlayerId = PlayerId::new(1);
pub const P2: PlayerId = PlayerId::new(2);
pub const P3: PlayerId = PlayerId::new(3);

/// A single looping chain starting at `(0, 0)`.
pub fn loop_board(kinds: &[SpaceKind]) -> Board {
    let graph = BoardBuilder::new().chain(kinds.iter().copied()).build();
    Board::plain(graph, ChainSpace::new(0, 0))
}

pub fn loop_game(kinds: &[SpaceKind], config: GameConfig) -> Game {
    Game::new(loop_board(kinds), config)
}

/// A plain loop of blue spaces after the start.
pub fn blue_game(config: GameConfig) -> Game {
    let mut kinds = vec![SpaceKind::Start];
    kinds.extend(std::iter::repeat(SpaceKind::Blue).take(11));
    loop_game(&kinds, config)
}

/// Resolve each response in order, panicking on the first rejection.
pub fn resolve_all(game: &mut Game, responses: impl IntoIterator<Item = Response>) {
    for response in responses {
        let name = game.pending().map(|e| e.name());
        game.resolve(response.clone())
            .unwrap_or_else(|err| panic!("{response:?} rejected by {name:?}: {err}"));
    }
}

/// Set every player's last landed space, which decides their minigame team.
pub fn set_teams(game: &mut Game, kinds: [SpaceKind; 4]) {
    for (player, kind) in PlayerId::all().zip(kinds) {
        game.players[player].last_space = kind;
    }
}

/// Play the four character turns of a round with the same roll, leaving
/// the minigame phase pending.
pub fn roll_round(game: &mut Game, roll: u8) {
    for _ in 0..4 {
        resolve_all(game, [Response::Roll(roll)]);
    }
}

/// Skip straight to the minigame for the current teams.
pub fn start_minigame(game: &mut Game) {
    let selector = party_sim::minigames::selector(game);
    game.set_next_event(selector);
}
