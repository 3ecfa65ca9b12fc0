//! Eternal Star.
//!
//! ## Layout
//!
//! - chain 0, the entrance: ends in the entrance warp
//! - chains 1 to 3, the islands: each holds one Baby Bowser star space and
//!   ends in a warp the player may take or walk past
//! - chain 4, Bowser's road: has a warp of its own and ends at Bowser's
//!   gate, which leads back to the entrance
//!
//! ## Gates
//!
//! Where a warp leads depends on the gate Bowser has set (1 to 3). With
//! gate `g` the entrance warp leads to island `g`, and island `i` warps
//! `g` islands ahead, where landing back on `i` means the entrance
//! instead. The gate is unknown until the first warp reveals it
//! (`WarpDest`). The road warp only tells gate 1 apart from the other two:
//! under gate 1 it leads next to the entrance warp, otherwise to the
//! entrance (`RoadWarpDest`). Passing Bowser's gate costs a star (or 20
//! coins) and resets the gate (`ChangeGates`).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, BoardBuilder, BoardKind, ChainSpace, Extension, SpaceKind};
use crate::core::{Game, PlayerId};
use crate::events::{Controller, Decision, Event};
use crate::movement;
use crate::rules::{BoardRules, Passage};

/// Junction hook: the entrance warp.
pub const WARP_ENTRANCE: u8 = 0;
/// Junction hook: an island's exit warp.
pub const ISLAND_WARP: u8 = 1;
/// Junction hook: an island's Baby Bowser star space.
pub const BABY_BOWSER: u8 = 2;
/// Junction hook: Bowser's gate.
pub const BOWSER_GATE: u8 = 3;
/// Junction hook: the warp on Bowser's road.
pub const ROAD_WARP: u8 = 4;

/// Islands, and so gates and Baby Bowser stars.
pub const ISLANDS: u8 = 3;

/// Coins to challenge Baby Bowser.
pub const BABY_BOWSER_PRICE: u32 = 20;

/// Coins Bowser's gate takes from a player without stars.
pub const BOWSER_GATE_TOLL: u32 = 20;

/// The entrance, where Bowser's gate and the happening space send players.
pub const ENTRANCE: ChainSpace = ChainSpace::new(0, 0);

/// Where the road warp leads under gate 1: the space before the entrance
/// warp.
pub const ROAD_WARP_GATE_ONE: ChainSpace = ChainSpace::new(0, 5);

/// Bowser's road. Warps are numbered by the chain they sit on.
pub const BOWSER_ROAD: u8 = 4;

/// Gate and star-table state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EternalStarState {
    /// 0 while unknown, else 1..=3.
    gate: u8,
    /// The road warp ruled gate 1 out while the gate was unknown.
    gate_not_one: bool,
    star_taken: [bool; ISLANDS as usize],
}

impl EternalStarState {
    /// The current gate, once known.
    #[must_use]
    pub fn gate(&self) -> Option<u8> {
        (self.gate != 0).then_some(self.gate)
    }

    /// Gates consistent with what the warps have shown so far.
    pub fn possible_gates(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=ISLANDS).filter(move |&g| match self.gate() {
            Some(gate) => g == gate,
            None => !(self.gate_not_one && g == 1),
        })
    }

    /// Whether island `island`'s star has been won since the last reset.
    #[must_use]
    pub fn star_taken(&self, island: u8) -> bool {
        self.star_taken[usize::from(island - 1)]
    }

    fn take_star(&mut self, island: u8) {
        self.star_taken[usize::from(island - 1)] = true;
        if self.star_taken.iter().all(|taken| *taken) {
            self.star_taken = [false; ISLANDS as usize];
        }
    }
}

fn state(game: &Game) -> &EternalStarState {
    let Some(state) = game.board.state::<EternalStarState>() else {
        panic!("Eternal Star hook on a {:?} board", game.board.kind())
    };
    state
}

fn state_mut(game: &mut Game) -> &mut EternalStarState {
    let kind = game.board.kind();
    let Some(state) = game.board.state_mut::<EternalStarState>() else {
        panic!("Eternal Star hook on a {kind:?} board")
    };
    state
}

/// Where the warp on chain `from` (the entrance, an island or the road)
/// leads under `gate`.
#[must_use]
pub fn warp_destination(from: u8, gate: u8) -> ChainSpace {
    match from {
        0 => return ChainSpace::new(u16::from(gate), 0),
        BOWSER_ROAD if gate == 1 => return ROAD_WARP_GATE_ONE,
        BOWSER_ROAD => return ENTRANCE,
        _ => {}
    }
    let island = (from - 1 + gate) % ISLANDS + 1;
    if island == from {
        ENTRANCE
    } else {
        ChainSpace::new(u16::from(island), 0)
    }
}

/// Build the board.
#[must_use]
pub fn board() -> Board {
    use SpaceKind::*;

    let features = [Mushroom, ChanceTime, Minigame];
    let mut builder = BoardBuilder::new().chain([
        Start,
        Blue,
        Red,
        Blue,
        Happening,
        Blue,
        Junction(WARP_ENTRANCE),
    ]);
    for feature in features {
        builder = builder.chain_with_exit(
            [
                Invisible,
                Blue,
                Junction(BABY_BOWSER),
                Blue,
                feature,
                Blue,
                Happening,
                Red,
                Blue,
                Junction(ISLAND_WARP),
            ],
            ChainSpace::new(u16::from(BOWSER_ROAD), 0),
        );
    }
    let graph = builder
        .chain_with_exit(
            [
                Blue,
                Red,
                Bowser,
                Junction(ROAD_WARP),
                Boo,
                Blue,
                ChanceTime,
                Junction(BOWSER_GATE),
            ],
            ENTRANCE,
        )
        .build();
    Board::new(
        BoardKind::EternalStar,
        graph,
        ENTRANCE,
        Extension::EternalStar(EternalStarState::default()),
    )
}

/// Hooks for Eternal Star.
#[derive(Clone, Copy, Debug, Default)]
pub struct EternalStarRules;

impl BoardRules for EternalStarRules {
    fn name(&self) -> &'static str {
        "Eternal Star"
    }

    fn pass_junction(&self, game: &mut Game, player: PlayerId, hook: u8, moves: u8) -> Passage {
        let island = game.player(player).current_space.chain as u8;
        match hook {
            WARP_ENTRANCE => warp(game, player, 0, moves),
            ISLAND_WARP | ROAD_WARP => {
                game.set_next_event(EternalStarEvent::WarpChoice {
                    player,
                    moves,
                    from: island,
                });
                Passage::Paused
            }
            BABY_BOWSER => {
                let can_pay = game.player(player).coins >= BABY_BOWSER_PRICE;
                if state(game).star_taken(island) || !can_pay {
                    return Passage::Continue;
                }
                game.set_next_event(EternalStarEvent::VisitBabyBowser {
                    player,
                    moves,
                    island,
                });
                Passage::Paused
            }
            BOWSER_GATE => {
                if !game.take_star(player) {
                    game.lose_coins(player, BOWSER_GATE_TOLL);
                }
                game.set_next_event(EternalStarEvent::ChangeGates { player, moves });
                Passage::Paused
            }
            _ => Passage::Continue,
        }
    }

    fn happening(&self, game: &mut Game, player: PlayerId) -> Option<Event> {
        let here = game.player(player).current_space;
        for p in PlayerId::all() {
            if game.player(p).current_space == here {
                debug!(player = %p, "sent back to the entrance");
                game.players[p].current_space = ENTRANCE;
            }
        }
        None
    }
}

/// Take the warp from `from`, or ask where it led if the gate is unknown.
fn warp(game: &mut Game, player: PlayerId, from: u8, moves: u8) -> Passage {
    let known = state(game);
    let dest = match known.gate() {
        Some(gate) => Some(warp_destination(from, gate)),
        // Gates 2 and 3 agree on the road warp.
        None if from == BOWSER_ROAD && known.gate_not_one => Some(ENTRANCE),
        None => None,
    };
    match dest {
        Some(dest) => {
            game.players[player].current_space = dest;
            Passage::Continue
        }
        None if from == BOWSER_ROAD => {
            game.set_next_event(EternalStarEvent::RoadWarpDest { player, moves });
            Passage::Paused
        }
        None => {
            game.set_next_event(EternalStarEvent::WarpDest {
                player,
                moves,
                from,
            });
            Passage::Paused
        }
    }
}

/// Eternal Star decisions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EternalStarEvent {
    /// Take an island's or the road's warp, or walk on.
    WarpChoice {
        player: PlayerId,
        moves: u8,
        from: u8,
    },
    /// The gate was unknown: which one did the warp reveal?
    WarpDest {
        player: PlayerId,
        moves: u8,
        from: u8,
    },
    /// The gate was unknown: did the road warp lead to the entrance (gate
    /// 2 or 3) or next to the entrance warp (gate 1)?
    RoadWarpDest { player: PlayerId, moves: u8 },
    VisitBabyBowser {
        player: PlayerId,
        moves: u8,
        island: u8,
    },
    BattleBabyBowser {
        player: PlayerId,
        moves: u8,
        island: u8,
    },
    /// Bowser picks the new gate.
    ChangeGates { player: PlayerId, moves: u8 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EternalStarResponse {
    Warp,
    Continue,
    Gate(u8),
    Destination(ChainSpace),
    Play,
    Ignore,
    Win,
    Lose,
}

impl Decision for EternalStarEvent {
    type Response = EternalStarResponse;

    fn responses(&self, game: &Game) -> Vec<EternalStarResponse> {
        use EternalStarResponse as R;
        match self {
            EternalStarEvent::WarpChoice { .. } => vec![R::Warp, R::Continue],
            EternalStarEvent::WarpDest { .. } => state(game).possible_gates().map(R::Gate).collect(),
            EternalStarEvent::RoadWarpDest { .. } => {
                vec![R::Destination(ENTRANCE), R::Destination(ROAD_WARP_GATE_ONE)]
            }
            EternalStarEvent::VisitBabyBowser { .. } => vec![R::Play, R::Ignore],
            EternalStarEvent::BattleBabyBowser { .. } => vec![R::Win, R::Lose],
            EternalStarEvent::ChangeGates { .. } => {
                let current = state(game).gate();
                (1..=ISLANDS)
                    .filter(|g| Some(*g) != current)
                    .map(R::Gate)
                    .collect()
            }
        }
    }

    fn controller(&self, _game: &Game) -> Controller {
        match self {
            EternalStarEvent::WarpChoice { player, .. }
            | EternalStarEvent::VisitBabyBowser { player, .. } => Controller::Player(*player),
            _ => Controller::Cpu,
        }
    }

    fn handle(&self, response: EternalStarResponse, game: &mut Game) {
        use EternalStarResponse as R;
        match (self, response) {
            (&EternalStarEvent::WarpChoice { player, moves, from }, R::Warp) => {
                if warp(game, player, from, moves) == Passage::Continue {
                    movement::move_player(game, player, moves);
                }
            }
            (&EternalStarEvent::WarpChoice { player, moves, .. }, R::Continue)
            | (&EternalStarEvent::VisitBabyBowser { player, moves, .. }, R::Ignore) => {
                movement::move_player(game, player, moves);
            }
            (&EternalStarEvent::WarpDest { player, moves, from }, R::Gate(gate)) => {
                debug!(gate, "gate revealed");
                state_mut(game).gate = gate;
                game.players[player].current_space = warp_destination(from, gate);
                movement::move_player(game, player, moves);
            }
            (&EternalStarEvent::RoadWarpDest { player, moves }, R::Destination(dest)) => {
                let known = state_mut(game);
                if dest == ROAD_WARP_GATE_ONE {
                    known.gate = 1;
                } else {
                    known.gate_not_one = true;
                }
                debug!(?dest, "road warp narrowed the gate");
                game.players[player].current_space = dest;
                movement::move_player(game, player, moves);
            }
            (&EternalStarEvent::VisitBabyBowser { player, moves, island }, R::Play) => {
                game.lose_coins(player, BABY_BOWSER_PRICE);
                game.set_next_event(EternalStarEvent::BattleBabyBowser {
                    player,
                    moves,
                    island,
                });
            }
            (&EternalStarEvent::BattleBabyBowser { player, moves, island }, R::Win) => {
                game.players[player].stars += 1;
                state_mut(game).take_star(island);
                movement::move_player(game, player, moves);
            }
            (&EternalStarEvent::BattleBabyBowser { player, moves, .. }, R::Lose) => {
                game.take_star(player);
                movement::move_player(game, player, moves);
            }
            (&EternalStarEvent::ChangeGates { player, moves }, R::Gate(gate)) => {
                debug!(gate, "Bowser changed the gate");
                let known = state_mut(game);
                known.gate = gate;
                known.gate_not_one = gate != 1;
                game.players[player].current_space = ENTRANCE;
                movement::move_player(game, player, moves);
            }
            (event, response) => unreachable!("{response:?} is not a response to {event:?}"),
        }
    }
}
