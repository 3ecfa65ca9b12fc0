//! Player identification, per-seat storage, and the player record.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. A match always has exactly four seats and
//! seat order is turn order.
//!
//! ## PlayerMap
//!
//! Fixed four-entry storage indexed by `PlayerId`. Backed by an array so
//! cloning a `Game` never allocates for per-player data.
//!
//! ## Player
//!
//! Everything the rules track about one participant: position, coins,
//! stars, the counters used for bonus stars, the skip flag, and the last
//! space kind landed on (used for minigame team assignment).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::board::{ChainSpace, SpaceKind};

/// Number of seats in every match.
pub const PLAYER_COUNT: usize = 4;

/// Coins each player holds when the match starts.
pub const STARTING_COINS: u32 = 10;

/// Seat identifier, 0-based. `PlayerId(0)` acts first every round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all four seats in turn order.
    ///
    /// ```
    /// use party_sim::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }

    /// Iterate over the three other seats in turn order.
    pub fn others(self) -> impl Iterator<Item = PlayerId> {
        Self::all().filter(move |p| *p != self)
    }

    /// The seat after this one, or `None` after the last seat.
    #[must_use]
    pub fn next(self) -> Option<PlayerId> {
        let next = self.0 + 1;
        (usize::from(next) < PLAYER_COUNT).then_some(PlayerId(next))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use party_sim::core::{PlayerId, PlayerMap};
///
/// let mut coins: PlayerMap<u32> = PlayerMap::new(|_| 10);
/// coins[PlayerId::new(1)] = 15;
/// assert_eq!(coins[PlayerId::new(0)], 10);
/// assert_eq!(coins[PlayerId::new(1)], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(PlayerId(i as u8))),
        }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Playable characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Character {
    Mario,
    Luigi,
    Peach,
    Yoshi,
    Wario,
    DonkeyKong,
}

impl Character {
    /// Default lineup used by `Game::new`.
    pub const DEFAULT_LINEUP: [Character; PLAYER_COUNT] = [
        Character::Mario,
        Character::Luigi,
        Character::Peach,
        Character::Yoshi,
    ];
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Character::Mario => "Mario",
            Character::Luigi => "Luigi",
            Character::Peach => "Peach",
            Character::Yoshi => "Yoshi",
            Character::Wario => "Wario",
            Character::DonkeyKong => "Donkey Kong",
        };
        f.write_str(name)
    }
}

/// One participant's record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub character: Character,
    pub current_space: ChainSpace,
    pub coins: u32,
    pub stars: u32,
    /// Coins gained from minigames over the match.
    pub minigame_coins: u32,
    /// Highest coin count held at any point.
    pub max_coins: u32,
    /// Number of happening spaces landed on.
    pub happening_count: u32,
    /// Set by a poison mushroom; the next character turn is skipped.
    pub skip_turn: bool,
    /// Kind of the last visible space landed on.
    pub last_space: SpaceKind,
}

impl Player {
    /// Create a player standing on `start` with the starting purse.
    #[must_use]
    pub fn new(character: Character, start: ChainSpace) -> Self {
        Self {
            character,
            current_space: start,
            coins: STARTING_COINS,
            stars: 0,
            minigame_coins: 0,
            max_coins: STARTING_COINS,
            happening_count: 0,
            skip_turn: false,
            last_space: SpaceKind::Start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_next_stops_after_last_seat() {
        assert_eq!(PlayerId::new(0).next(), Some(PlayerId::new(1)));
        assert_eq!(PlayerId::new(3).next(), None);
    }

    #[test]
    fn test_player_id_others() {
        let others: Vec<_> = PlayerId::new(2).others().collect();
        assert_eq!(others, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(3)]);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(1)], 10);
        assert_eq!(map[PlayerId::new(2)], 20);
        assert_eq!(map[PlayerId::new(3)], 30);
    }

    #[test]
    fn test_player_map_mutation_and_iter() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);
        map[PlayerId::new(2)] = 7;

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[2], (PlayerId::new(2), &7));
        assert_eq!(map.values().sum::<i32>(), 7);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(|p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new(Character::Wario, ChainSpace::new(0, 0));
        assert_eq!(player.coins, STARTING_COINS);
        assert_eq!(player.max_coins, STARTING_COINS);
        assert_eq!(player.stars, 0);
        assert_eq!(player.last_space, SpaceKind::Start);
        assert!(!player.skip_turn);
        assert_eq!(player.character.to_string(), "Wario");
    }
}
