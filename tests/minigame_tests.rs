//! Minigame phase tests.
//!
//! These tests take real rounds into the minigame phase and verify:
//! - The partition picks the right selector
//! - Team rewards move coins between players without creating any
//! - Sequential rewards visit each eligible player exactly once

mod common;

use common::*;
use party_sim::board::SpaceKind;
use party_sim::core::{Game, GameConfig, PlayerId};
use party_sim::events::{Event, NormalDiceBlock};
use party_sim::minigames::{
    BashnCashAwards, FfaCoinReward, OneVsThreeGame, OneVsThreeSelector, SoloResult, TeamResult,
    ThrowChoice, TwoVsTwoGame, TwoVsTwoSelector,
};
use party_sim::Response;

/// Start, then alternating blue and red spaces.
fn striped_game() -> Game {
    let mut kinds = vec![SpaceKind::Start];
    for _ in 0..5 {
        kinds.extend([SpaceKind::Blue, SpaceKind::Red]);
    }
    loop_game(&kinds, GameConfig::default())
}

// =============================================================================
// Partition
// =============================================================================

/// Two blue landers and two red landers play a 2v2.
#[test]
fn test_two_vs_two_round() {
    let mut game = striped_game();
    // Blue is one step away, red two.
    resolve_all(
        &mut game,
        [
            Response::Roll(1),
            Response::Roll(2),
            Response::Roll(2),
            Response::Roll(1),
        ],
    );
    assert_eq!(
        game.pending(),
        Some(&TwoVsTwoSelector { blue: [P0, P3], red: [P1, P2] }.into())
    );
    let before = game.total_coins();

    resolve_all(
        &mut game,
        [
            Response::TwoVsTwoSelector(TwoVsTwoGame::HandcarHavoc),
            Response::TwoVsTwoReward(TeamResult::RedWin),
        ],
    );
    assert_eq!(game.total_coins(), before);
    assert_eq!(game.player(P1).coins, 17);
    assert_eq!(game.player(P0).coins, 3);
    assert_eq!(game.turn, 1);
}

/// One red lander plays alone against the three blue landers.
#[test]
fn test_one_vs_three_round() {
    let mut game = striped_game();
    resolve_all(
        &mut game,
        [
            Response::Roll(1),
            Response::Roll(1),
            Response::Roll(2),
            Response::Roll(1),
        ],
    );
    assert_eq!(game.pending(), Some(&OneVsThreeSelector { solo: P2 }.into()));
    let before = game.total_coins();

    resolve_all(
        &mut game,
        [
            Response::OneVsThreeSelector(OneVsThreeGame::TightropeTreachery),
            Response::OneVsThreeReward(SoloResult::SoloWin),
        ],
    );
    assert_eq!(game.total_coins(), before);
    assert_eq!(game.player(P2).coins, 7 + 15);
}

/// Four players on the same team play a free-for-all.
#[test]
fn test_same_team_plays_free_for_all() {
    let mut game = striped_game();
    roll_round(&mut game, 2);
    assert!(matches!(game.pending(), Some(Event::FfaSelector(_))));
}

// =============================================================================
// Sequential rewards
// =============================================================================

/// A coin race asks about every seat once, in order.
#[test]
fn test_coin_race_visits_every_seat() {
    let mut game = blue_game(GameConfig::default());
    set_teams(&mut game, [SpaceKind::Blue; 4]);
    start_minigame(&mut game);

    resolve_all(
        &mut game,
        [Response::FfaSelector(party_sim::minigames::FfaGame::HammerDrop)],
    );
    let mut visited = Vec::new();
    while let Some(Event::FfaCoinReward(FfaCoinReward { player, .. })) = game.pending().cloned() {
        visited.push(player);
        resolve_all(&mut game, [Response::FfaCoinReward(5)]);
    }
    assert_eq!(visited, PlayerId::all().collect::<Vec<_>>());
    assert!(PlayerId::all().all(|p| game.player(p).coins == 15));
    assert_eq!(game.pending(), Some(&NormalDiceBlock { player: P0 }.into()));
}

/// Bash 'n' Cash hands the scattered coins to the three others, never the
/// solo player, and the last collector takes the rest.
#[test]
fn test_bash_n_cash_awards_skip_solo() {
    let mut game = blue_game(GameConfig::default());
    set_teams(&mut game, [SpaceKind::Blue, SpaceKind::Red, SpaceKind::Blue, SpaceKind::Blue]);
    game.players[P1].coins = 30;
    start_minigame(&mut game);
    let before = game.total_coins();

    resolve_all(
        &mut game,
        [
            Response::OneVsThreeSelector(OneVsThreeGame::BashnCash),
            Response::BashnCash(4),
        ],
    );
    let mut visited = Vec::new();
    while let Some(Event::BashnCashAwards(BashnCashAwards { player, pool, .. })) =
        game.pending().cloned()
    {
        visited.push(player);
        let take = if visited.len() == 3 { pool } else { pool.min(3) };
        resolve_all(&mut game, [Response::BashnCashAwards(take)]);
    }

    assert_eq!(visited, vec![P0, P2, P3]);
    assert_eq!(game.total_coins(), before);
    assert_eq!(game.turn, 1);
}

/// Throwing a throwable minigame ends the round with nobody paid.
#[test]
fn test_thrown_minigame() {
    let mut game = blue_game(GameConfig::default());
    set_teams(&mut game, [SpaceKind::Red, SpaceKind::Blue, SpaceKind::Blue, SpaceKind::Blue]);
    start_minigame(&mut game);
    let before = game.clone();

    resolve_all(
        &mut game,
        [
            Response::OneVsThreeSelector(OneVsThreeGame::CoinShowerFlower),
            Response::Throwable(ThrowChoice::Throw),
        ],
    );
    assert_eq!(game.players, before.players);
    assert_eq!(game.turn, 1);
}
