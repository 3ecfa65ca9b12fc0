//! Spaces and positions on the board graph.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A position: `space` within `chain`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChainSpace {
    pub chain: u16,
    pub space: u16,
}

impl ChainSpace {
    #[must_use]
    pub const fn new(chain: u16, space: u16) -> Self {
        Self { chain, space }
    }
}

impl std::fmt::Display for ChainSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.chain, self.space)
    }
}

/// What a space does.
///
/// Visible kinds cost one move to enter and take effect when a token
/// stops on them. Passing kinds cost nothing and take effect when a token
/// moves through them; a token never stops on a passing space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceKind {
    // === Visible ===
    /// Start space. Landing pays a fixed bonus.
    Start,
    Blue,
    Red,
    Mushroom,
    Happening,
    Bowser,
    /// Single-player minigame space.
    Minigame,
    ChanceTime,
    /// Board-specific landing hazard, keyed by a board-local hook number.
    Hazard(u8),

    // === Passing ===
    /// Inert waypoint (warp pads, graph joins).
    Invisible,
    Boo,
    /// Star shop.
    Star,
    /// Board-specific passing hook, keyed by a board-local hook number.
    Junction(u8),
}

impl SpaceKind {
    /// Passing spaces do not consume a move.
    #[must_use]
    pub const fn is_passing(self) -> bool {
        matches!(
            self,
            SpaceKind::Invisible | SpaceKind::Boo | SpaceKind::Star | SpaceKind::Junction(_)
        )
    }

    /// Minigame team implied by landing on this kind.
    #[must_use]
    pub const fn team(self) -> Team {
        match self {
            SpaceKind::Blue | SpaceKind::Mushroom | SpaceKind::Minigame | SpaceKind::ChanceTime => {
                Team::Blue
            }
            SpaceKind::Red | SpaceKind::Bowser => Team::Red,
            _ => Team::Undecided,
        }
    }
}

/// Minigame team. `Undecided` players are asked before the minigame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Blue,
    Red,
    Undecided,
}

/// A space in a chain, with optional links to other chains.
///
/// The implicit successor is the next space in the chain (or the chain's
/// exit after the last space). `links` are extra successors; a space with
/// any links is a fork.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub kind: SpaceKind,
    pub links: SmallVec<[ChainSpace; 2]>,
}

impl Space {
    #[must_use]
    pub fn new(kind: SpaceKind) -> Self {
        Self {
            kind,
            links: SmallVec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passing_kinds() {
        assert!(SpaceKind::Boo.is_passing());
        assert!(SpaceKind::Star.is_passing());
        assert!(SpaceKind::Junction(3).is_passing());
        assert!(SpaceKind::Invisible.is_passing());
        assert!(!SpaceKind::Blue.is_passing());
        assert!(!SpaceKind::Hazard(0).is_passing());
    }

    #[test]
    fn test_team_mapping() {
        assert_eq!(SpaceKind::Blue.team(), Team::Blue);
        assert_eq!(SpaceKind::Mushroom.team(), Team::Blue);
        assert_eq!(SpaceKind::Minigame.team(), Team::Blue);
        assert_eq!(SpaceKind::ChanceTime.team(), Team::Blue);
        assert_eq!(SpaceKind::Red.team(), Team::Red);
        assert_eq!(SpaceKind::Bowser.team(), Team::Red);
        assert_eq!(SpaceKind::Happening.team(), Team::Undecided);
        assert_eq!(SpaceKind::Start.team(), Team::Undecided);
        assert_eq!(SpaceKind::Hazard(1).team(), Team::Undecided);
    }

    #[test]
    fn test_chain_space_display() {
        assert_eq!(ChainSpace::new(2, 7).to_string(), "(2, 7)");
    }
}
