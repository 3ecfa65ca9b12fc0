//! Minigames: team partition, selection and rewards.
//!
//! After the last character turn of a round every player is placed on a
//! team by the colour of the space they last landed on. Undecided players
//! are asked one at a time (`DetermineTeam`). The partition then picks the
//! selector:
//!
//! | blue players | selector |
//! |---|---|
//! | 0 or 4 | `FfaSelector` |
//! | 1 | `OneVsThreeSelector` (the blue player is solo) |
//! | 2 | `TwoVsTwoSelector` |
//! | 3 | `OneVsThreeSelector` (the red player is solo) |
//!
//! A selector names the minigame; its reward event settles coins and ends
//! the round. Single-player minigames are different: they come from
//! landing on a minigame space and run inside the character turn.
//!
//! Reward shapes live in `rewards`. Entries whose coin amounts are not
//! confirmed carry `Certainty::Approximate`.

mod ffa;
mod one_vs_three;
pub mod rewards;
mod single;
mod teams;
mod two_vs_two;

pub use ffa::{
    CoopResult, FfaCoinReward, FfaCoop, FfaGame, FfaMultiWin, FfaOneLoser, FfaReward,
    FfaSelector, GrabBag, FFA_WIN_COINS,
};
pub use one_vs_three::{
    BashnCash, BashnCashAwards, BowlOver, BowlOverResult, CraneGameCoins, CraneGamePlayers,
    OneVsThreeGame, OneVsThreeReward, OneVsThreeSelector, PaddleBattle, PipeMaze, SoloResult,
    ThrowChoice, ThrowableMinigame,
};
pub use rewards::{Certainty, CoinRange, Reward};
pub use single::{SinglePlayerGame, SinglePlayerReward, SinglePlayerSelector};
pub use teams::{first_undecided, partition, selector, DetermineTeam, Partition};
pub use two_vs_two::{TeamResult, TwoVsTwoCoinReward, TwoVsTwoGame, TwoVsTwoReward, TwoVsTwoSelector};
