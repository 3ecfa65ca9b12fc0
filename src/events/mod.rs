//! Events: the decision points of a match.
//!
//! Every uncertain outcome (dice, fork choices, minigame results, board
//! decisions) is an event. An event enumerates its legal responses, names
//! who answers it, and applies a chosen response to the game.
//!
//! ## Decision
//!
//! Each event type implements `Decision` with its own response type. The
//! `event_catalog!` macro folds all of them into two closed unions:
//!
//! - `Event`: one variant per event type
//! - `Response`: one variant per event type, wrapping that type's response
//!
//! so a response of the wrong shape can never reach a handler.
//!
//! ## Sections
//!
//! - `dice`: dice blocks and hidden blocks
//! - `movement`: fork choices and the turn hand-off
//! - `happening`: mushrooms, Boo, the star shop, Chance Time
//! - `bowser`: Bowser's space and his minigames

pub mod bowser;
pub mod dice;
pub mod happening;
pub mod movement;

pub use bowser::{
    bowser_loss, BalloonBurst, BalloonResult, BowserBashnCash, BowserChanceDraw,
    BowserChanceTime, BowserEvent, BowserOutcome, FaceLift, TugOWar, TugResult,
};
pub use dice::{
    DiceBlock, EventDiceBlock, EventFace, HiddenBlock, HiddenPrize, NormalDiceBlock,
    PickDiceBlock,
};
pub use happening::{
    BooCoinsEvent, BooEvent, BooSteal, ChanceOutcome, ChanceTimeDraw, ChanceTimeEvent,
    MushroomCap, MushroomEvent, StarPurchase, StarShopEvent, StealTarget,
};
pub use movement::{BranchEvent, TurnEnd};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::boards::eternal_star::EternalStarEvent;
use crate::boards::peach_cake::PeachCakeEvent;
use crate::core::{Game, PlayerId};
use crate::minigames::{
    BashnCash, BashnCashAwards, BowlOver, CraneGameCoins, CraneGamePlayers, DetermineTeam,
    FfaCoinReward, FfaCoop, FfaMultiWin, FfaOneLoser, FfaReward, FfaSelector, GrabBag,
    OneVsThreeReward, OneVsThreeSelector, PaddleBattle, PipeMaze, SinglePlayerReward,
    SinglePlayerSelector, ThrowableMinigame, TwoVsTwoCoinReward, TwoVsTwoReward,
    TwoVsTwoSelector,
};

/// Who answers an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    /// A player's choice.
    Player(PlayerId),
    /// An outcome of the game itself (dice, minigame results).
    Cpu,
}

/// One kind of decision point.
///
/// ## Implementation Notes
///
/// - `responses`: never empty, deterministic order, may depend on the game
/// - `handle`: called only with a member of `responses`; runs every
///   non-interactive consequence and leaves the next event pending
pub trait Decision {
    type Response: Clone + Debug + PartialEq + Eq + Serialize + DeserializeOwned;

    fn responses(&self, game: &Game) -> Vec<Self::Response>;

    fn controller(&self, game: &Game) -> Controller;

    fn handle(&self, response: Self::Response, game: &mut Game);
}

macro_rules! event_catalog {
    ($( $(#[$meta:meta])* $variant:ident($ty:ty), )*) => {
        /// Every event the engine can raise.
        #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
        pub enum Event {
            $( $(#[$meta])* $variant($ty), )*
        }

        /// A response, tagged with the event kind it answers.
        #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
        pub enum Response {
            $( $variant(<$ty as Decision>::Response), )*
        }

        impl Event {
            /// Stable name of the event kind.
            #[must_use]
            pub fn name(&self) -> &'static str {
                match self {
                    $( Event::$variant(_) => stringify!($variant), )*
                }
            }

            /// Legal responses in a stable order.
            #[must_use]
            pub fn responses(&self, game: &Game) -> Vec<Response> {
                match self {
                    $( Event::$variant(event) => event
                        .responses(game)
                        .into_iter()
                        .map(Response::$variant)
                        .collect(), )*
                }
            }

            #[must_use]
            pub fn controller(&self, game: &Game) -> Controller {
                match self {
                    $( Event::$variant(event) => event.controller(game), )*
                }
            }

            /// Run the handler. `response` has already been checked against
            /// `responses`.
            pub(crate) fn apply(self, response: Response, game: &mut Game) {
                match (self, response) {
                    $( (Event::$variant(event), Response::$variant(response)) => {
                        event.handle(response, game)
                    } )*
                    (event, response) => unreachable!(
                        "{response:?} was accepted for {}", event.name()
                    ),
                }
            }
        }

        $(
            impl From<$ty> for Event {
                fn from(event: $ty) -> Self {
                    Event::$variant(event)
                }
            }
        )*
    };
}

event_catalog! {
    // === Dice ===
    Roll(NormalDiceBlock),
    PickDice(PickDiceBlock),
    EventDice(EventDiceBlock),
    HiddenBlock(HiddenBlock),

    // === Movement ===
    Branch(BranchEvent),
    TurnEnd(TurnEnd),

    // === Happenings ===
    Mushroom(MushroomEvent),
    Boo(BooEvent),
    BooCoins(BooCoinsEvent),
    StarShop(StarShopEvent),
    ChanceTime(ChanceTimeEvent),

    // === Bowser ===
    Bowser(BowserEvent),
    BalloonBurst(BalloonBurst),
    FaceLift(FaceLift),
    TugOWar(TugOWar),
    BowserBashnCash(BowserBashnCash),
    BowserChanceTime(BowserChanceTime),

    // === Minigames ===
    DetermineTeam(DetermineTeam),
    FfaSelector(FfaSelector),
    FfaReward(FfaReward),
    FfaCoinReward(FfaCoinReward),
    FfaMultiWin(FfaMultiWin),
    FfaOneLoser(FfaOneLoser),
    FfaCoop(FfaCoop),
    GrabBag(GrabBag),
    TwoVsTwoSelector(TwoVsTwoSelector),
    TwoVsTwoReward(TwoVsTwoReward),
    TwoVsTwoCoinReward(TwoVsTwoCoinReward),
    OneVsThreeSelector(OneVsThreeSelector),
    OneVsThreeReward(OneVsThreeReward),
    Throwable(ThrowableMinigame),
    PipeMaze(PipeMaze),
    BashnCash(BashnCash),
    BashnCashAwards(BashnCashAwards),
    BowlOver(BowlOver),
    CraneGameCoins(CraneGameCoins),
    CraneGamePlayers(CraneGamePlayers),
    PaddleBattle(PaddleBattle),
    SinglePlayerSelector(SinglePlayerSelector),
    SinglePlayerReward(SinglePlayerReward),

    // === Boards ===
    EternalStar(EternalStarEvent),
    PeachCake(PeachCakeEvent),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, BoardBuilder, ChainSpace, SpaceKind};
    use crate::core::GameConfig;

    fn game() -> Game {
        let graph = BoardBuilder::new().chain([SpaceKind::Start, SpaceKind::Blue]).build();
        Game::new(Board::plain(graph, ChainSpace::new(0, 0)), GameConfig::default())
    }

    #[test]
    fn test_event_name() {
        let event: Event = NormalDiceBlock { player: PlayerId::new(0) }.into();
        assert_eq!(event.name(), "Roll");
        let event: Event = TurnEnd { player: PlayerId::new(0) }.into();
        assert_eq!(event.name(), "TurnEnd");
    }

    #[test]
    fn test_responses_are_tagged_with_their_event() {
        let game = game();
        let event: Event = TurnEnd { player: PlayerId::new(0) }.into();
        assert_eq!(event.responses(&game), vec![Response::TurnEnd(())]);
    }

    #[test]
    fn test_response_serialization() {
        let response = Response::Branch(ChainSpace::new(1, 4));
        let json = serde_json::to_string(&response).unwrap();
        let back: Response = serde_json::from_str(&json).unwrap();
        assert_eq!(response, back);
    }
}
