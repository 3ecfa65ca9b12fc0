//! Peach's Birthday Cake.
//!
//! The entrance loop ends in a seed fork. Toad's seed sends a player down
//! the Toad path; Bowser's seed sends them down the Bowser path and plants
//! a Bowser seed. Both paths hold piranha plots (`Hazard` spaces): a
//! player stopping on an empty plot may plant a piranha for 30 coins, and
//! a rival stopping on an owned plot hands the owner a star. The happening
//! space withers every piranha while a Bowser seed is planted.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, BoardBuilder, BoardKind, ChainSpace, Extension, SpaceKind};
use crate::core::{Game, PlayerId};
use crate::events::{Controller, Decision, Event};
use crate::movement;
use crate::rules::{BoardRules, Passage};

/// Junction hook: the seed fork.
pub const SEED: u8 = 0;

/// Coins to plant a piranha.
pub const PIRANHA_PRICE: u32 = 30;

pub const TOAD_PATH: ChainSpace = ChainSpace::new(1, 0);
pub const BOWSER_PATH: ChainSpace = ChainSpace::new(2, 0);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeachCakeState {
    bowser_seed_planted: bool,
    /// Plot -> owner. Empty plots are absent.
    piranhas: FxHashMap<u8, PlayerId>,
}

impl PeachCakeState {
    #[must_use]
    pub fn bowser_seed_planted(&self) -> bool {
        self.bowser_seed_planted
    }

    /// Who owns the piranha on `plot`, if anyone.
    #[must_use]
    pub fn piranha(&self, plot: u8) -> Option<PlayerId> {
        self.piranhas.get(&plot).copied()
    }

    /// Number of planted piranhas.
    #[must_use]
    pub fn piranha_count(&self) -> usize {
        self.piranhas.len()
    }
}

fn state(game: &Game) -> &PeachCakeState {
    let Some(state) = game.board.state::<PeachCakeState>() else {
        panic!("Peach's Birthday Cake hook on a {:?} board", game.board.kind())
    };
    state
}

fn state_mut(game: &mut Game) -> &mut PeachCakeState {
    let kind = game.board.kind();
    let Some(state) = game.board.state_mut::<PeachCakeState>() else {
        panic!("Peach's Birthday Cake hook on a {kind:?} board")
    };
    state
}

/// Build the board.
#[must_use]
pub fn board() -> Board {
    use SpaceKind::*;

    let entrance = ChainSpace::new(0, 0);
    let graph = BoardBuilder::new()
        .chain([Start, Blue, Blue, Red, Blue, Junction(SEED)])
        .chain_with_exit(
            [Blue, Star, Blue, Hazard(0), Blue, Mushroom, Hazard(1), Blue],
            entrance,
        )
        .chain_with_exit(
            [Red, Bowser, Hazard(2), Red, Happening, Hazard(3), Blue],
            entrance,
        )
        .build();
    Board::new(
        BoardKind::PeachCake,
        graph,
        entrance,
        Extension::PeachCake(PeachCakeState::default()),
    )
}

/// Hooks for Peach's Birthday Cake.
#[derive(Clone, Copy, Debug, Default)]
pub struct PeachCakeRules;

impl BoardRules for PeachCakeRules {
    fn name(&self) -> &'static str {
        "Peach's Birthday Cake"
    }

    fn pass_junction(&self, game: &mut Game, player: PlayerId, hook: u8, moves: u8) -> Passage {
        if hook != SEED {
            return Passage::Continue;
        }
        game.set_next_event(PeachCakeEvent::SeedCheck { player, moves });
        Passage::Paused
    }

    fn happening(&self, game: &mut Game, _player: PlayerId) -> Option<Event> {
        let state = state_mut(game);
        if state.bowser_seed_planted {
            debug!(withered = state.piranhas.len(), "piranhas wither");
            state.piranhas.clear();
            state.bowser_seed_planted = false;
        }
        None
    }

    fn hazard(&self, game: &mut Game, player: PlayerId, plot: u8) -> Option<Event> {
        match state(game).piranha(plot) {
            Some(owner) if owner == player => None,
            Some(owner) => {
                if game.give_star(player, owner) {
                    debug!(player = %player, owner = %owner, plot, "piranha took a star");
                    state_mut(game).piranhas.remove(&plot);
                }
                None
            }
            None if game.player(player).coins >= PIRANHA_PRICE => {
                Some(PeachCakeEvent::PlantPiranha { player, plot }.into())
            }
            None => None,
        }
    }
}

/// Peach's Birthday Cake decisions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeachCakeEvent {
    /// Which seed the player drew at the fork.
    SeedCheck { player: PlayerId, moves: u8 },
    PlantPiranha { player: PlayerId, plot: u8 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeachCakeResponse {
    BowserSeed,
    ToadSeed,
    Plant,
    Pass,
}

impl Decision for PeachCakeEvent {
    type Response = PeachCakeResponse;

    fn responses(&self, _game: &Game) -> Vec<PeachCakeResponse> {
        match self {
            PeachCakeEvent::SeedCheck { .. } => {
                vec![PeachCakeResponse::BowserSeed, PeachCakeResponse::ToadSeed]
            }
            PeachCakeEvent::PlantPiranha { .. } => {
                vec![PeachCakeResponse::Plant, PeachCakeResponse::Pass]
            }
        }
    }

    fn controller(&self, _game: &Game) -> Controller {
        match self {
            PeachCakeEvent::SeedCheck { .. } => Controller::Cpu,
            PeachCakeEvent::PlantPiranha { player, .. } => Controller::Player(*player),
        }
    }

    fn handle(&self, response: PeachCakeResponse, game: &mut Game) {
        use PeachCakeResponse as R;
        match (self, response) {
            (&PeachCakeEvent::SeedCheck { player, moves }, R::BowserSeed | R::ToadSeed) => {
                let path = if response == R::BowserSeed {
                    state_mut(game).bowser_seed_planted = true;
                    BOWSER_PATH
                } else {
                    TOAD_PATH
                };
                debug!(player = %player, ?response, "seed drawn");
                // The first space of either path costs a move.
                game.players[player].current_space = path;
                movement::move_player(game, player, moves - 1);
            }
            (&PeachCakeEvent::PlantPiranha { player, plot }, R::Plant) => {
                game.lose_coins(player, PIRANHA_PRICE);
                state_mut(game).piranhas.insert(plot, player);
            }
            (PeachCakeEvent::PlantPiranha { .. }, R::Pass) => {}
            (event, response) => unreachable!("{response:?} is not a response to {event:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::events::{Response, TurnEnd};

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);

    fn game() -> Game {
        Game::new(Board::peach_cake(), GameConfig::default())
    }

    fn respond(game: &mut Game, response: PeachCakeResponse) {
        game.resolve(Response::PeachCake(response)).unwrap();
    }

    #[test]
    fn test_toad_seed() {
        let mut game = game();
        game.players[P0].current_space = ChainSpace::new(0, 4);
        game.resolve(Response::Roll(2)).unwrap();
        assert_eq!(
            game.pending(),
            Some(&PeachCakeEvent::SeedCheck { player: P0, moves: 2 }.into())
        );
        assert_eq!(game.controller(), Some(Controller::Cpu));

        respond(&mut game, PeachCakeResponse::ToadSeed);
        // The star shop is free and unaffordable with 10 coins.
        assert_eq!(game.player(P0).current_space, ChainSpace::new(1, 2));
        assert_eq!(game.player(P0).coins, 13);
        assert!(!state(&game).bowser_seed_planted());
    }

    #[test]
    fn test_bowser_seed_lands_on_first_space() {
        let mut game = game();
        game.players[P0].current_space = ChainSpace::new(0, 4);
        game.resolve(Response::Roll(1)).unwrap();
        respond(&mut game, PeachCakeResponse::BowserSeed);

        assert_eq!(game.player(P0).current_space, BOWSER_PATH);
        assert_eq!(game.player(P0).coins, 7);
        assert!(state(&game).bowser_seed_planted());
    }

    #[test]
    fn test_plant_piranha() {
        let mut game = game();
        game.players[P0].coins = 40;
        game.players[P0].current_space = ChainSpace::new(1, 2);
        game.resolve(Response::Roll(1)).unwrap();
        assert_eq!(game.controller(), Some(Controller::Player(P0)));

        respond(&mut game, PeachCakeResponse::Plant);
        assert_eq!(game.player(P0).coins, 10);
        assert_eq!(state(&game).piranha(0), Some(P0));
        assert_eq!(game.pending(), Some(&TurnEnd { player: P0 }.into()));
    }

    #[test]
    fn test_empty_plot_needs_coins() {
        let mut game = game();
        game.players[P0].current_space = ChainSpace::new(1, 2);
        game.resolve(Response::Roll(1)).unwrap();
        assert_eq!(game.current_player, P1);
        assert_eq!(state(&game).piranha_count(), 0);
    }

    #[test]
    fn test_rival_piranha_takes_star() {
        let mut game = game();
        state_mut(&mut game).piranhas.insert(0, P1);
        game.players[P0].stars = 1;
        game.players[P0].current_space = ChainSpace::new(1, 2);
        game.resolve(Response::Roll(1)).unwrap();

        assert_eq!(game.player(P0).stars, 0);
        assert_eq!(game.player(P1).stars, 1);
        assert_eq!(state(&game).piranha(0), None);
        assert_eq!(game.current_player, P1);
    }

    #[test]
    fn test_piranha_stays_without_a_star_to_take() {
        let mut game = game();
        state_mut(&mut game).piranhas.insert(0, P1);
        game.players[P0].current_space = ChainSpace::new(1, 2);
        game.resolve(Response::Roll(1)).unwrap();
        assert_eq!(state(&game).piranha(0), Some(P1));
        assert_eq!(game.total_stars(), 0);
    }

    #[test]
    fn test_own_piranha_is_harmless() {
        let mut game = game();
        state_mut(&mut game).piranhas.insert(0, P0);
        game.players[P0].coins = 40;
        game.players[P0].stars = 1;
        game.players[P0].current_space = ChainSpace::new(1, 2);
        game.resolve(Response::Roll(1)).unwrap();
        assert_eq!(game.player(P0).stars, 1);
        assert_eq!(game.current_player, P1);
    }

    #[test]
    fn test_happening_withers_piranhas_after_bowser_seed() {
        let mut game = game();
        {
            let state = state_mut(&mut game);
            state.bowser_seed_planted = true;
            state.piranhas.insert(0, P1);
            state.piranhas.insert(3, P2);
        }
        let mut unseeded = game.clone();
        state_mut(&mut unseeded).bowser_seed_planted = false;

        for game in [&mut game, &mut unseeded] {
            game.players[P0].current_space = ChainSpace::new(2, 3);
            game.resolve(Response::Roll(1)).unwrap();
        }
        assert_eq!(state(&game).piranha_count(), 0);
        assert!(!state(&game).bowser_seed_planted());
        assert_eq!(state(&unseeded).piranha_count(), 2);
    }
}
