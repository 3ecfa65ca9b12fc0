//! Board rule tests.
//!
//! These tests play the bundled boards through the public API:
//! - Eternal Star gates, warps, and Bowser's gate
//! - Peach's Birthday Cake seeds and piranhas

mod common;

use common::*;
use party_sim::board::{Board, ChainSpace, Extension};
use party_sim::boards::eternal_star::{
    EternalStarEvent, EternalStarResponse, BOWSER_ROAD, ENTRANCE, ROAD_WARP_GATE_ONE,
};
use party_sim::boards::peach_cake::{PeachCakeEvent, PeachCakeResponse, BOWSER_PATH};
use party_sim::core::{Game, GameConfig};
use party_sim::events::{Controller, NormalDiceBlock, TurnEnd};
use party_sim::Response;

fn gate(game: &Game) -> Option<u8> {
    match game.board.extension() {
        Extension::EternalStar(state) => state.gate(),
        other => panic!("not an Eternal Star board: {other:?}"),
    }
}

fn piranha(game: &Game, plot: u8) -> Option<party_sim::PlayerId> {
    match game.board.extension() {
        Extension::PeachCake(state) => state.piranha(plot),
        other => panic!("not a Peach's Birthday Cake board: {other:?}"),
    }
}

// =============================================================================
// Eternal Star
// =============================================================================

/// The first warp asks for the gate; later warps use it without asking.
#[test]
fn test_gate_is_fixed_by_first_warp() {
    let mut game = Game::new(Board::eternal_star(), GameConfig::default());
    assert_eq!(gate(&game), None);
    game.players[P0].current_space = ChainSpace::new(0, 5);
    game.players[P1].current_space = ChainSpace::new(0, 5);

    resolve_all(&mut game, [Response::Roll(2)]);
    assert_eq!(
        game.pending(),
        Some(&EternalStarEvent::WarpDest { player: P0, moves: 2, from: 0 }.into())
    );
    assert_eq!(game.controller(), Some(Controller::Cpu));
    assert_eq!(
        game.legal_responses(),
        (1..=3)
            .map(|g| Response::EternalStar(EternalStarResponse::Gate(g)))
            .collect::<Vec<_>>()
    );

    resolve_all(&mut game, [Response::EternalStar(EternalStarResponse::Gate(3))]);
    assert_eq!(gate(&game), Some(3));
    assert_eq!(game.player(P0).current_space, ChainSpace::new(3, 3));

    resolve_all(&mut game, [Response::Roll(2)]);
    assert_eq!(gate(&game), Some(3));
    assert_eq!(game.player(P1).current_space, ChainSpace::new(3, 3));
    assert_eq!(game.pending(), Some(&NormalDiceBlock { player: P2 }.into()));
}

/// Passing Bowser's gate costs a star, changes the gate, and returns the
/// player to the entrance.
#[test]
fn test_bowser_gate_round_trip() {
    let mut game = Game::new(Board::eternal_star(), GameConfig::default());
    resolve_all(&mut game, [Response::Roll(3)]);
    game.players[P1].current_space = ChainSpace::new(0, 5);
    resolve_all(
        &mut game,
        [
            Response::Roll(1),
            Response::EternalStar(EternalStarResponse::Gate(1)),
        ],
    );

    game.players[P2].stars = 2;
    game.players[P2].current_space = ChainSpace::new(4, 6);
    resolve_all(&mut game, [Response::Roll(3)]);
    assert_eq!(game.player(P2).stars, 1);
    assert_eq!(
        game.legal_responses(),
        vec![
            Response::EternalStar(EternalStarResponse::Gate(2)),
            Response::EternalStar(EternalStarResponse::Gate(3)),
        ]
    );

    resolve_all(&mut game, [Response::EternalStar(EternalStarResponse::Gate(2))]);
    assert_eq!(gate(&game), Some(2));
    assert_eq!(game.player(P2).current_space, ChainSpace::new(0, 3));
}

/// The road warp only separates gate 1 from the rest: landing on the
/// entrance leaves gates 2 and 3, and landing by the entrance warp fixes
/// gate 1.
#[test]
fn test_road_warp_narrows_gate() {
    let road = ChainSpace::new(u16::from(BOWSER_ROAD), 2);
    let mut game = Game::new(Board::eternal_star(), GameConfig::default());
    game.players[P0].current_space = road;
    resolve_all(&mut game, [Response::Roll(1), Response::EternalStar(EternalStarResponse::Warp)]);
    assert_eq!(
        game.pending(),
        Some(&EternalStarEvent::RoadWarpDest { player: P0, moves: 1 }.into())
    );

    let mut gate_one = game.clone();
    resolve_all(
        &mut gate_one,
        [Response::EternalStar(EternalStarResponse::Destination(ROAD_WARP_GATE_ONE))],
    );
    assert_eq!(gate(&gate_one), Some(1));

    resolve_all(&mut game, [Response::EternalStar(EternalStarResponse::Destination(ENTRANCE))]);
    assert_eq!(gate(&game), None);
    assert_eq!(game.player(P0).current_space, ChainSpace::new(0, 1));

    // A later road warp needs no answer; the entrance warp asks between two.
    game.players[P1].current_space = road;
    resolve_all(&mut game, [Response::Roll(1), Response::EternalStar(EternalStarResponse::Warp)]);
    assert_eq!(game.player(P1).current_space, ChainSpace::new(0, 1));

    game.players[P2].current_space = ChainSpace::new(0, 5);
    resolve_all(&mut game, [Response::Roll(1)]);
    assert_eq!(
        game.legal_responses(),
        vec![
            Response::EternalStar(EternalStarResponse::Gate(2)),
            Response::EternalStar(EternalStarResponse::Gate(3)),
        ]
    );
    resolve_all(&mut game, [Response::EternalStar(EternalStarResponse::Gate(3))]);
    assert_eq!(gate(&game), Some(3));
    assert_eq!(game.player(P2).current_space, ChainSpace::new(3, 1));
}

/// The happening space sends everyone on it back to the entrance.
#[test]
fn test_eternal_star_happening() {
    let mut game = Game::new(Board::eternal_star(), GameConfig::default());
    game.players[P2].current_space = ChainSpace::new(0, 4);
    resolve_all(&mut game, [Response::Roll(4)]);

    assert_eq!(game.player(P0).current_space, ENTRANCE);
    assert_eq!(game.player(P2).current_space, ENTRANCE);
    assert_eq!(game.player(P0).happening_count, 1);
    assert_eq!(game.player(P2).happening_count, 0);
}

// =============================================================================
// Peach's Birthday Cake
// =============================================================================

/// A planted piranha later takes a star from a rival who stops on it.
#[test]
fn test_piranha_lifecycle() {
    let mut game = Game::new(Board::peach_cake(), GameConfig::default());
    game.players[P0].coins = 45;
    game.players[P0].current_space = ChainSpace::new(0, 4);

    resolve_all(
        &mut game,
        [
            Response::Roll(3),
            Response::PeachCake(PeachCakeResponse::BowserSeed),
        ],
    );
    assert_eq!(game.player(P0).current_space, ChainSpace::new(2, 2));
    assert_eq!(
        game.pending(),
        Some(&PeachCakeEvent::PlantPiranha { player: P0, plot: 2 }.into())
    );
    assert_eq!(game.controller(), Some(Controller::Player(P0)));

    resolve_all(&mut game, [Response::PeachCake(PeachCakeResponse::Plant)]);
    assert_eq!(game.player(P0).coins, 15);
    assert_eq!(piranha(&game, 2), Some(P0));
    assert_eq!(game.pending(), Some(&TurnEnd { player: P0 }.into()));
    resolve_all(&mut game, [Response::TurnEnd(())]);

    game.players[P1].stars = 1;
    game.players[P1].current_space = ChainSpace::new(2, 1);
    resolve_all(&mut game, [Response::Roll(1)]);
    assert_eq!(game.player(P1).stars, 0);
    assert_eq!(game.player(P0).stars, 1);
    assert_eq!(piranha(&game, 2), None);
}

/// A Bowser seed makes the happening space wither every piranha.
#[test]
fn test_bowser_seed_withers_piranhas() {
    let mut game = Game::new(Board::peach_cake(), GameConfig::default());
    game.players[P0].coins = 40;
    game.players[P0].current_space = ChainSpace::new(1, 2);
    resolve_all(
        &mut game,
        [
            Response::Roll(1),
            Response::PeachCake(PeachCakeResponse::Plant),
            Response::TurnEnd(()),
        ],
    );
    assert_eq!(piranha(&game, 0), Some(P0));

    game.players[P1].current_space = ChainSpace::new(0, 4);
    resolve_all(
        &mut game,
        [
            Response::Roll(1),
            Response::PeachCake(PeachCakeResponse::BowserSeed),
        ],
    );
    assert_eq!(game.player(P1).current_space, BOWSER_PATH);

    game.players[P2].current_space = ChainSpace::new(2, 3);
    resolve_all(&mut game, [Response::Roll(1)]);
    assert_eq!(piranha(&game, 0), None);
}
