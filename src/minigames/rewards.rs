//! Reward table: which reward event each minigame uses.
//!
//! Several coin amounts come from play observation rather than the game
//! data. Those entries are marked `Certainty::Approximate`; correct the
//! numbers here, not in the reward events.

use serde::{Deserialize, Serialize};

use super::{FfaGame, OneVsThreeGame, SinglePlayerGame, TwoVsTwoGame};

/// Inclusive signed coin range for coin-race responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoinRange {
    pub min: i32,
    pub max: i32,
}

impl CoinRange {
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// `0..=max`.
    #[must_use]
    pub const fn up_to(max: i32) -> Self {
        Self::new(0, max)
    }

    pub fn values(self) -> impl Iterator<Item = i32> {
        self.min..=self.max
    }

    #[must_use]
    pub fn contains(self, coins: i32) -> bool {
        (self.min..=self.max).contains(&coins)
    }
}

/// How far a reward entry can be trusted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Certainty {
    Confirmed,
    /// Amounts are estimates, subject to correction.
    Approximate,
}

/// A table entry: a reward shape plus its certainty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reward<S> {
    pub shape: S,
    pub certainty: Certainty,
}

impl<S> Reward<S> {
    const fn confirmed(shape: S) -> Self {
        Self {
            shape,
            certainty: Certainty::Confirmed,
        }
    }

    const fn approximate(shape: S) -> Self {
        Self {
            shape,
            certainty: Certainty::Approximate,
        }
    }
}

// =============================================================================
// Free-for-all
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FfaShape {
    /// The winner takes ten coins, optionally followed by a coin race.
    Winner {
        drawable: bool,
        coins: Option<CoinRange>,
    },
    /// Every player collects coins, seat by seat.
    Coins(CoinRange),
    /// Bitmask of winners; fixed deltas for winners, losers, or everyone
    /// when nobody wins.
    MultiWin { win: i32, lose: i32, if_none: i32 },
    /// One loser pays the others, or everybody survives.
    OneLoser,
    /// Everyone wins or everyone loses.
    Coop,
    /// Players steal from each other; the total is unchanged.
    GrabBag(CoinRange),
}

const WINNER: FfaShape = FfaShape::Winner {
    drawable: false,
    coins: None,
};

const DRAWABLE_WINNER: FfaShape = FfaShape::Winner {
    drawable: true,
    coins: None,
};

const WINNER_WITH_COINS: FfaShape = FfaShape::Winner {
    drawable: false,
    coins: Some(CoinRange::up_to(10)),
};

#[must_use]
pub fn ffa(game: FfaGame) -> Reward<FfaShape> {
    use FfaGame::*;
    match game {
        BurriedTreasure | MusicalMushroom | BalloonBurst | TipsyTourney | BombsAway
        | ShyGuySays | SlotCarDerby => Reward::confirmed(WINNER),
        MushroomMixup | BumperBalls => Reward::confirmed(DRAWABLE_WINNER),
        // Coins and coin bags are not told apart.
        SkateboardScamper | PlatformPeril => Reward::approximate(WINNER_WITH_COINS),
        TreasureDivers => Reward::confirmed(FfaShape::Coins(CoinRange::up_to(50))),
        CoinBlockBlitz => Reward::confirmed(FfaShape::Coins(CoinRange::up_to(40))),
        BoxMountainMayhem => Reward::confirmed(FfaShape::Coins(CoinRange::up_to(25))),
        HammerDrop => Reward::confirmed(FfaShape::Coins(CoinRange::up_to(20))),
        CastAways => Reward::approximate(FfaShape::Coins(CoinRange::up_to(80))),
        CrazyCutter | FaceLift => Reward::confirmed(FfaShape::MultiWin {
            win: 10,
            lose: -5,
            if_none: 0,
        }),
        RunningOfTheBulb => Reward::confirmed(FfaShape::MultiWin {
            win: 10,
            lose: 0,
            if_none: -5,
        }),
        MarioBandstand => Reward::approximate(FfaShape::MultiWin {
            win: 0,
            lose: 0,
            if_none: 0,
        }),
        HotBobomb | HotRopeJump => Reward::confirmed(FfaShape::OneLoser),
        KeypaWay => Reward::confirmed(FfaShape::Coop),
        GrabBag => Reward::approximate(FfaShape::GrabBag(CoinRange::new(-50, 50))),
    }
}

// =============================================================================
// 2 vs 2
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TwoVsTwoShape {
    /// Each loser pays their counterpart on the winning team.
    Winner { drawable: bool },
    /// Each team collects coins; both members receive the team's haul.
    Coins(CoinRange),
}

#[must_use]
pub fn two_vs_two(game: TwoVsTwoGame) -> Reward<TwoVsTwoShape> {
    match game {
        TwoVsTwoGame::BobsledRun | TwoVsTwoGame::DesertDash | TwoVsTwoGame::HandcarHavoc => {
            Reward::confirmed(TwoVsTwoShape::Winner { drawable: false })
        }
        // A scoreless match can time out level.
        TwoVsTwoGame::Bombsketball => {
            Reward::approximate(TwoVsTwoShape::Winner { drawable: true })
        }
        TwoVsTwoGame::DeepSeaDivers => {
            Reward::confirmed(TwoVsTwoShape::Coins(CoinRange::up_to(50)))
        }
    }
}

// =============================================================================
// 1 vs 3
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OneVsThreeShape {
    Winner { drawable: bool },
    PipeMaze,
    BashnCash,
    BowlOver,
    /// A free-for-all coin race.
    Coins(CoinRange),
    CraneGame,
    PaddleBattle,
    /// The solo player may throw the minigame; otherwise a coin race.
    Throwable(CoinRange),
}

#[must_use]
pub fn one_vs_three(game: OneVsThreeGame) -> Reward<OneVsThreeShape> {
    use OneVsThreeGame::*;
    match game {
        PipeMaze => Reward::confirmed(OneVsThreeShape::PipeMaze),
        BashnCash => Reward::confirmed(OneVsThreeShape::BashnCash),
        BowlOver => Reward::confirmed(OneVsThreeShape::BowlOver),
        CoinBlockBash => Reward::confirmed(OneVsThreeShape::Coins(CoinRange::up_to(30))),
        TightropeTreachery | PiranhaPursuit => {
            Reward::confirmed(OneVsThreeShape::Winner { drawable: false })
        }
        TugOWar => Reward::approximate(OneVsThreeShape::Winner { drawable: true }),
        CraneGame => Reward::confirmed(OneVsThreeShape::CraneGame),
        // Payouts for a solo player holding one or two coins are unknown.
        PaddleBattle => Reward::approximate(OneVsThreeShape::PaddleBattle),
        CoinShowerFlower => Reward::confirmed(OneVsThreeShape::Throwable(CoinRange::up_to(30))),
    }
}

// =============================================================================
// Single player
// =============================================================================

const DEFAULT_PAYOUTS: &[i32] = &[-5, 10];
const MEMORY_MATCH: &[i32] = &[0, 2, 4, 6, 10];
const SLOT_MACHINE: &[i32] = &[0, 1, 3, 5, 6, 8, 10, 20];
// Mix of coins and coin bags.
const TEETERING_TOWERS: &[i32] = &[-5, 10, 11, 15, 16];

static WHACK_A_PLANT: [i32; 37] = {
    let mut out = [0; 37];
    let mut i = 0;
    while i < out.len() {
        out[i] = i as i32;
        i += 1;
    }
    out
};

/// Coin results a single-player minigame can pay out.
#[must_use]
pub fn single_player(game: SinglePlayerGame) -> Reward<&'static [i32]> {
    use SinglePlayerGame::*;
    match game {
        MemoryMatch => Reward::confirmed(MEMORY_MATCH),
        SlotMachine => Reward::confirmed(SLOT_MACHINE),
        WhackaPlant => Reward::confirmed(&WHACK_A_PLANT[..]),
        TeeteringTowers => Reward::approximate(TEETERING_TOWERS),
        ShellGame | GhostGuess | PedalPower | GroundPound | KnockBlockTower | LimboDance => {
            Reward::confirmed(DEFAULT_PAYOUTS)
        }
    }
}
