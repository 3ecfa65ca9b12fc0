//! Boards: topology, space kinds, and per-board state.
//!
//! A `Board` couples an immutable `BoardGraph` with the board's `BoardKind`
//! (which selects its hook rules) and its mutable `Extension` payload.

pub mod extension;
pub mod graph;
pub mod space;

pub use extension::Extension;
pub use graph::{BoardBuilder, BoardGraph, Chain, Successors};
pub use space::{ChainSpace, Space, SpaceKind, Team};

use serde::{Deserialize, Serialize};

use crate::boards::{eternal_star, peach_cake};
use crate::rules::{BoardRules, PlainRules};
use extension::BoardExtension;

/// Which rule set drives the board's hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardKind {
    /// Any graph built with `BoardBuilder`; no hooks.
    Plain,
    EternalStar,
    PeachCake,
}

impl BoardKind {
    /// The hook rules for this board.
    #[must_use]
    pub fn rules(self) -> &'static dyn BoardRules {
        match self {
            BoardKind::Plain => &PlainRules,
            BoardKind::EternalStar => &eternal_star::EternalStarRules,
            BoardKind::PeachCake => &peach_cake::PeachCakeRules,
        }
    }
}

/// A playable board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    kind: BoardKind,
    graph: BoardGraph,
    start: ChainSpace,
    extension: Extension,
}

impl Board {
    /// A hook-free board over `graph`. Players start on `start`.
    #[must_use]
    pub fn plain(graph: BoardGraph, start: ChainSpace) -> Self {
        Self::new(BoardKind::Plain, graph, start, Extension::None)
    }

    /// The Eternal Star board.
    #[must_use]
    pub fn eternal_star() -> Self {
        eternal_star::board()
    }

    /// Peach's Birthday Cake.
    #[must_use]
    pub fn peach_cake() -> Self {
        peach_cake::board()
    }

    pub(crate) fn new(
        kind: BoardKind,
        graph: BoardGraph,
        start: ChainSpace,
        extension: Extension,
    ) -> Self {
        assert!(graph.contains(start), "start space {start} is outside the board");
        assert!(
            !graph.space(start).kind.is_passing(),
            "start space {start} must be a visible space"
        );
        Self {
            kind,
            graph,
            start,
            extension,
        }
    }

    #[must_use]
    pub fn kind(&self) -> BoardKind {
        self.kind
    }

    #[must_use]
    pub fn graph(&self) -> &BoardGraph {
        &self.graph
    }

    #[must_use]
    pub fn start(&self) -> ChainSpace {
        self.start
    }

    /// The space at `at`.
    #[must_use]
    pub fn space(&self, at: ChainSpace) -> &Space {
        self.graph.space(at)
    }

    #[must_use]
    pub fn extension(&self) -> &Extension {
        &self.extension
    }

    pub(crate) fn state<T: BoardExtension>(&self) -> Option<&T> {
        T::view(&self.extension)
    }

    pub(crate) fn state_mut<T: BoardExtension>(&mut self) -> Option<&mut T> {
        T::view_mut(&mut self.extension)
    }
}
