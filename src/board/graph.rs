//! Board topology: chains of spaces joined by exits and links.
//!
//! ## Successor rule
//!
//! From a space, the default successor is the next space of the same chain,
//! or the chain's exit after its last space. Any `links` on the space are
//! additional successors. More than one successor makes the space a fork.
//!
//! ## BoardBuilder
//!
//! ```
//! use party_sim::board::{BoardBuilder, ChainSpace, SpaceKind};
//!
//! let graph = BoardBuilder::new()
//!     .chain([SpaceKind::Start, SpaceKind::Blue, SpaceKind::Blue])
//!     .chain_with_exit([SpaceKind::Red, SpaceKind::Blue], ChainSpace::new(0, 0))
//!     .link(ChainSpace::new(0, 1), ChainSpace::new(1, 0))
//!     .build();
//!
//! assert_eq!(graph.successors(ChainSpace::new(0, 1)).len(), 2);
//! assert_eq!(graph.successors(ChainSpace::new(0, 2)).as_slice(), &[ChainSpace::new(0, 0)]);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::space::{ChainSpace, Space, SpaceKind};

/// Successor list; three covers every fork shape in practice.
pub type Successors = SmallVec<[ChainSpace; 3]>;

/// An ordered run of spaces with an exit after the last one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    spaces: Vec<Space>,
    exit: ChainSpace,
}

impl Chain {
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    #[must_use]
    pub fn exit(&self) -> ChainSpace {
        self.exit
    }
}

/// Immutable board topology. Cloning shares the chains.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardGraph {
    chains: Vector<Chain>,
}

impl BoardGraph {
    /// Number of chains.
    #[must_use]
    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    /// Length of one chain.
    #[must_use]
    pub fn chain_len(&self, chain: u16) -> usize {
        self.chains[usize::from(chain)].len()
    }

    /// Whether `at` names an existing space.
    #[must_use]
    pub fn contains(&self, at: ChainSpace) -> bool {
        self.chains
            .get(usize::from(at.chain))
            .is_some_and(|chain| usize::from(at.space) < chain.len())
    }

    /// The space at `at`. Panics on a position outside the graph.
    #[must_use]
    pub fn space(&self, at: ChainSpace) -> &Space {
        &self.chains[usize::from(at.chain)].spaces[usize::from(at.space)]
    }

    /// Every space a token on `at` may step to next.
    #[must_use]
    pub fn successors(&self, at: ChainSpace) -> Successors {
        let chain = &self.chains[usize::from(at.chain)];
        let mut out = Successors::new();
        if usize::from(at.space) + 1 < chain.len() {
            out.push(ChainSpace::new(at.chain, at.space + 1));
        } else {
            out.push(chain.exit);
        }
        out.extend(chain.spaces[usize::from(at.space)].links.iter().copied());
        out
    }

    /// Iterate over every position and its space.
    pub fn iter(&self) -> impl Iterator<Item = (ChainSpace, &Space)> {
        self.chains.iter().enumerate().flat_map(|(c, chain)| {
            chain
                .spaces
                .iter()
                .enumerate()
                .map(move |(s, space)| (ChainSpace::new(c as u16, s as u16), space))
        })
    }
}

/// Builder for `BoardGraph`.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    chains: Vec<(Vec<Space>, Option<ChainSpace>)>,
}

impl BoardBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a chain that loops back to its own first space.
    #[must_use]
    pub fn chain(mut self, kinds: impl IntoIterator<Item = SpaceKind>) -> Self {
        self.chains
            .push((kinds.into_iter().map(Space::new).collect(), None));
        self
    }

    /// Add a chain whose last space continues to `exit`.
    #[must_use]
    pub fn chain_with_exit(
        mut self,
        kinds: impl IntoIterator<Item = SpaceKind>,
        exit: ChainSpace,
    ) -> Self {
        self.chains
            .push((kinds.into_iter().map(Space::new).collect(), Some(exit)));
        self
    }

    /// Add an extra successor to `from`.
    #[must_use]
    pub fn link(mut self, from: ChainSpace, to: ChainSpace) -> Self {
        let (spaces, _) = self
            .chains
            .get_mut(usize::from(from.chain))
            .unwrap_or_else(|| panic!("link source chain {} does not exist", from.chain));
        let space = spaces
            .get_mut(usize::from(from.space))
            .unwrap_or_else(|| panic!("link source {from} does not exist"));
        space.links.push(to);
        self
    }

    /// Finish the graph. Panics if any chain is empty or any exit or link
    /// points outside the graph.
    #[must_use]
    pub fn build(self) -> BoardGraph {
        let chains: Vector<Chain> = self
            .chains
            .into_iter()
            .enumerate()
            .map(|(index, (spaces, exit))| {
                assert!(!spaces.is_empty(), "chain {index} has no spaces");
                Chain {
                    spaces,
                    exit: exit.unwrap_or(ChainSpace::new(index as u16, 0)),
                }
            })
            .collect();
        let graph = BoardGraph { chains };

        for chain in graph.chains.iter() {
            assert!(graph.contains(chain.exit), "chain exit {} is outside the board", chain.exit);
        }
        for (at, space) in graph.iter() {
            for link in &space.links {
                assert!(graph.contains(*link), "link {at} -> {link} is outside the board");
            }
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loop_with_fork() -> BoardGraph {
        BoardBuilder::new()
            .chain([SpaceKind::Start, SpaceKind::Blue, SpaceKind::Red])
            .chain_with_exit([SpaceKind::Blue, SpaceKind::Boo], ChainSpace::new(0, 0))
            .link(ChainSpace::new(0, 1), ChainSpace::new(1, 0))
            .build()
    }

    #[test]
    fn test_successor_within_chain() {
        let graph = loop_with_fork();
        assert_eq!(
            graph.successors(ChainSpace::new(0, 0)).as_slice(),
            &[ChainSpace::new(0, 1)]
        );
    }

    #[test]
    fn test_successor_wraps_to_own_start_by_default() {
        let graph = loop_with_fork();
        assert_eq!(
            graph.successors(ChainSpace::new(0, 2)).as_slice(),
            &[ChainSpace::new(0, 0)]
        );
    }

    #[test]
    fn test_successor_uses_explicit_exit() {
        let graph = loop_with_fork();
        assert_eq!(
            graph.successors(ChainSpace::new(1, 1)).as_slice(),
            &[ChainSpace::new(0, 0)]
        );
    }

    #[test]
    fn test_fork_lists_default_then_links() {
        let graph = loop_with_fork();
        assert_eq!(
            graph.successors(ChainSpace::new(0, 1)).as_slice(),
            &[ChainSpace::new(0, 2), ChainSpace::new(1, 0)]
        );
    }

    #[test]
    fn test_contains() {
        let graph = loop_with_fork();
        assert!(graph.contains(ChainSpace::new(1, 1)));
        assert!(!graph.contains(ChainSpace::new(1, 2)));
        assert!(!graph.contains(ChainSpace::new(2, 0)));
        assert_eq!(graph.iter().count(), 5);
    }

    #[test]
    #[should_panic(expected = "outside the board")]
    fn test_dangling_exit_rejected() {
        let _ = BoardBuilder::new()
            .chain_with_exit([SpaceKind::Blue], ChainSpace::new(4, 0))
            .build();
    }

    #[test]
    #[should_panic(expected = "has no spaces")]
    fn test_empty_chain_rejected() {
        let _ = BoardBuilder::new().chain(Vec::<SpaceKind>::new()).build();
    }
}
