//! Turn and round discipline.
//!
//! A round ("game turn") is one character turn per seat followed by a
//! minigame. Seats flagged `skip_turn` lose their character turn and the
//! flag is cleared. Rewarding the minigame closes the round; the match ends
//! once `max_turns` rounds have been played.

use tracing::{debug, info};

use crate::core::{Game, PlayerId};
use crate::events::{Event, NormalDiceBlock, PickDiceBlock, TurnEnd};
use crate::minigames::{self, DetermineTeam};

impl Game {
    /// Hand the dice to `player`.
    pub(crate) fn start_character_turn(&mut self, player: PlayerId) {
        debug!(player = %player, turn = self.turn, "character turn starts");
        self.current_player = player;
        self.next_event = Some(if self.config().dice_assist {
            PickDiceBlock { player }.into()
        } else {
            NormalDiceBlock { player }.into()
        });
    }

    /// The current character turn is over; pass to the next seat or, after
    /// the last seat, start the minigame.
    pub(crate) fn end_character_turn(&mut self) {
        self.extra_event = None;
        let next = self.current_player.next();
        self.advance_from(next);
    }

    /// Start the first non-skipping seat at or after `seat`.
    fn advance_from(&mut self, mut seat: Option<PlayerId>) {
        while let Some(player) = seat {
            if self.players[player].skip_turn {
                debug!(player = %player, "turn skipped");
                self.players[player].skip_turn = false;
                seat = player.next();
                continue;
            }
            self.start_character_turn(player);
            return;
        }
        self.begin_minigame_phase();
    }

    /// Ask about the first undecided player, or pick the minigame once
    /// every team is known.
    pub(crate) fn begin_minigame_phase(&mut self) {
        self.extra_event = None;
        let event = match minigames::first_undecided(self) {
            Some(player) => DetermineTeam { player }.into(),
            None => minigames::selector(self),
        };
        self.next_event = Some(event);
    }

    /// The round's minigame has been rewarded.
    pub(crate) fn end_game_turn(&mut self) {
        self.turn += 1;
        info!(turn = self.turn, "round complete");
        if self.turn >= self.config().max_turns {
            self.finish();
            return;
        }
        self.advance_from(Some(PlayerId::new(0)));
    }

    /// Run a landing side chain: `event` goes in the side slot and the main
    /// line waits on the turn hand-off.
    pub(crate) fn open_side_chain(&mut self, player: PlayerId, event: Event) {
        self.extra_event = Some(event);
        self.next_event = Some(TurnEnd { player }.into());
    }

    fn finish(&mut self) {
        self.next_event = None;
        self.extra_event = None;
        if self.config().bonus_stars {
            self.award_bonus_stars();
        }
        info!(standings = ?self.standings(), "match over");
    }

    /// One star each to the leaders in minigame coins, peak coins, and
    /// happening landings. Ties all receive the star; a zero score earns
    /// nothing.
    fn award_bonus_stars(&mut self) {
        let categories: [fn(&crate::core::Player) -> u32; 3] = [
            |p| p.minigame_coins,
            |p| p.max_coins,
            |p| p.happening_count,
        ];
        for score in categories {
            let best = self.players.values().map(score).max().unwrap_or(0);
            if best == 0 {
                continue;
            }
            for player in PlayerId::all() {
                if score(&self.players[player]) == best {
                    self.players[player].stars += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, BoardBuilder, ChainSpace, SpaceKind};
    use crate::core::{Game, GameConfig, PlayerId};
    use crate::events::{Event, NormalDiceBlock};
    use crate::minigames::DetermineTeam;

    fn game(config: GameConfig) -> Game {
        let graph = BoardBuilder::new()
            .chain([SpaceKind::Start, SpaceKind::Blue, SpaceKind::Red])
            .build();
        Game::new(Board::plain(graph, ChainSpace::new(0, 0)), config)
    }

    fn roll(player: u8) -> Event {
        NormalDiceBlock { player: PlayerId::new(player) }.into()
    }

    #[test]
    fn test_end_character_turn_passes_dice() {
        let mut g = game(GameConfig::default());
        g.end_character_turn();
        assert_eq!(g.pending(), Some(&roll(1)));
        assert_eq!(g.current_player, PlayerId::new(1));
    }

    #[test]
    fn test_skipped_seat_is_cleared() {
        let mut g = game(GameConfig::default());
        g.players[PlayerId::new(1)].skip_turn = true;
        g.end_character_turn();
        assert_eq!(g.pending(), Some(&roll(2)));
        assert!(!g.player(PlayerId::new(1)).skip_turn);
    }

    #[test]
    fn test_last_seat_starts_minigame_phase() {
        let mut g = game(GameConfig::default());
        g.current_player = PlayerId::new(3);
        g.end_character_turn();
        assert_eq!(
            g.pending(),
            Some(&DetermineTeam { player: PlayerId::new(0) }.into())
        );
    }

    #[test]
    fn test_everyone_skipping_goes_straight_to_minigame() {
        let mut g = game(GameConfig::default());
        for p in PlayerId::all() {
            g.players[p].skip_turn = true;
            g.players[p].last_space = SpaceKind::Red;
        }
        g.end_game_turn();
        assert_eq!(g.turn, 1);
        assert_eq!(g.pending().map(Event::name), Some("FfaSelector"));
        assert!(g.players.values().all(|p| !p.skip_turn));
    }

    #[test]
    fn test_match_ends_at_max_turns() {
        let mut g = game(GameConfig::default().with_max_turns(1));
        g.end_game_turn();
        assert!(g.is_over());
        assert!(g.result().is_some());
    }

    #[test]
    fn test_bonus_stars() {
        let mut g = game(GameConfig::default().with_max_turns(1).with_bonus_stars());
        g.players[PlayerId::new(0)].minigame_coins = 12;
        g.players[PlayerId::new(1)].max_coins = 60;
        g.players[PlayerId::new(2)].happening_count = 3;
        g.players[PlayerId::new(3)].happening_count = 3;
        g.end_game_turn();

        let stars: Vec<u32> = g.players.values().map(|p| p.stars).collect();
        assert_eq!(stars, vec![1, 1, 1, 1]);
    }
}
