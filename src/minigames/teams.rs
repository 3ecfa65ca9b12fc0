//! Team partition and team determination.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{FfaSelector, OneVsThreeSelector, TwoVsTwoSelector};
use crate::board::{SpaceKind, Team};
use crate::core::{Game, PlayerId};
use crate::events::{Controller, Decision, Event};

/// Players grouped by team, each group in seat order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    pub blue: Vec<PlayerId>,
    pub red: Vec<PlayerId>,
    pub undecided: Vec<PlayerId>,
}

/// Group every player by the team of their last landed space.
#[must_use]
pub fn partition(game: &Game) -> Partition {
    let mut out = Partition::default();
    for player in PlayerId::all() {
        match game.player(player).last_space.team() {
            Team::Blue => out.blue.push(player),
            Team::Red => out.red.push(player),
            Team::Undecided => out.undecided.push(player),
        }
    }
    out
}

/// The first seat whose team is still undecided.
#[must_use]
pub fn first_undecided(game: &Game) -> Option<PlayerId> {
    PlayerId::all().find(|p| game.player(*p).last_space.team() == Team::Undecided)
}

/// The minigame selector for the current partition. Every player must
/// already be on a team.
#[must_use]
pub fn selector(game: &Game) -> Event {
    let teams = partition(game);
    debug_assert!(teams.undecided.is_empty(), "selector called with undecided players");
    debug!(blue = ?teams.blue, red = ?teams.red, "minigame partition");
    match (teams.blue.as_slice(), teams.red.as_slice()) {
        ([solo], _) | (_, [solo]) => OneVsThreeSelector { solo: *solo }.into(),
        ([b0, b1], [r0, r1]) => TwoVsTwoSelector {
            blue: [*b0, *b1],
            red: [*r0, *r1],
        }
        .into(),
        _ => FfaSelector.into(),
    }
}

/// Put an undecided player on a team. The minigame phase restarts
/// afterwards so the next undecided player, or the selector, follows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetermineTeam {
    pub player: PlayerId,
}

impl Decision for DetermineTeam {
    type Response = Team;

    fn responses(&self, _game: &Game) -> Vec<Team> {
        vec![Team::Blue, Team::Red]
    }

    fn controller(&self, _game: &Game) -> Controller {
        Controller::Cpu
    }

    fn handle(&self, team: Team, game: &mut Game) {
        game.players[self.player].last_space = match team {
            Team::Blue => SpaceKind::Blue,
            Team::Red => SpaceKind::Red,
            Team::Undecided => unreachable!("Undecided is never offered"),
        };
        game.begin_minigame_phase();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, BoardBuilder, ChainSpace};
    use crate::core::GameConfig;
    use crate::events::Response;

    fn game_with(spaces: [SpaceKind; 4]) -> Game {
        let graph = BoardBuilder::new().chain([SpaceKind::Start, SpaceKind::Blue]).build();
        let mut game = Game::new(Board::plain(graph, ChainSpace::new(0, 0)), GameConfig::default());
        for (player, kind) in PlayerId::all().zip(spaces) {
            game.players[player].last_space = kind;
        }
        game
    }

    #[test]
    fn test_partition_sizes_pick_selector() {
        use SpaceKind::{Blue, Bowser, ChanceTime, Red};

        assert_eq!(selector(&game_with([Red, Red, Bowser, Red])).name(), "FfaSelector");
        assert_eq!(selector(&game_with([Blue, ChanceTime, Blue, Blue])).name(), "FfaSelector");
        assert_eq!(
            selector(&game_with([Red, Blue, Red, Red])),
            OneVsThreeSelector { solo: PlayerId::new(1) }.into()
        );
        assert_eq!(
            selector(&game_with([Blue, Blue, Red, Blue])),
            OneVsThreeSelector { solo: PlayerId::new(2) }.into()
        );
        assert_eq!(
            selector(&game_with([Red, Blue, Bowser, Blue])),
            TwoVsTwoSelector {
                blue: [PlayerId::new(1), PlayerId::new(3)],
                red: [PlayerId::new(0), PlayerId::new(2)],
            }
            .into()
        );
    }

    #[test]
    fn test_first_undecided() {
        use SpaceKind::{Blue, Happening, Red, Start};
        assert_eq!(first_undecided(&game_with([Blue, Red, Blue, Red])), None);
        assert_eq!(
            first_undecided(&game_with([Blue, Happening, Start, Red])),
            Some(PlayerId::new(1))
        );
    }

    #[test]
    fn test_determine_team_asks_one_at_a_time() {
        use SpaceKind::{Blue, Happening, Red, Start};
        let mut game = game_with([Blue, Happening, Start, Red]);
        game.begin_minigame_phase();
        assert_eq!(game.pending(), Some(&DetermineTeam { player: PlayerId::new(1) }.into()));

        game.resolve(Response::DetermineTeam(Team::Red)).unwrap();
        assert_eq!(game.player(PlayerId::new(1)).last_space, SpaceKind::Red);
        assert_eq!(game.pending(), Some(&DetermineTeam { player: PlayerId::new(2) }.into()));

        game.resolve(Response::DetermineTeam(Team::Blue)).unwrap();
        assert_eq!(
            game.pending(),
            Some(&TwoVsTwoSelector {
                blue: [PlayerId::new(0), PlayerId::new(2)],
                red: [PlayerId::new(1), PlayerId::new(3)],
            }
            .into())
        );
    }
}
