//! Search tree nodes.
//!
//! Nodes live in the [`SearchTree`](super::tree::SearchTree) arena and refer
//! to each other by [`NodeId`]. The parent link is only followed upwards
//! during backpropagation.

use smallvec::SmallVec;

use crate::core::{GameRng, GameState, PlayerId};

/// Index into the SearchTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the search tree.
///
/// Owns a private copy of the game state reached by `play`. Children are
/// added one at a time, in the order of the `plays` buffer, which is filled
/// and shuffled on first expansion.
#[derive(Clone, Debug)]
pub struct SearchNode<S: GameState> {
    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// The play that led here from the parent (None for root).
    pub play: Option<S::Move>,

    /// Player who made `play`; rewards are credited from their seat.
    /// For the root this is the player to move.
    pub mover: PlayerId,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Times backpropagation passed through this node.
    pub visits: u32,

    /// Sum of the mover's rewards over all visits.
    pub value: f64,

    state: S,
    terminal: bool,
    children: SmallVec<[NodeId; 8]>,
    /// Legal plays from `state`; `children[i]` was created from `plays[i]`.
    plays: Vec<S::Move>,
}

impl<S: GameState> SearchNode<S> {
    pub fn new(parent: NodeId, play: Option<S::Move>, mover: PlayerId, depth: u16, state: S) -> Self {
        let terminal = state.is_game_over();
        Self {
            parent,
            play,
            mover,
            depth,
            visits: 0,
            value: 0.0,
            state,
            terminal,
            children: SmallVec::new(),
            plays: Vec::new(),
        }
    }

    /// Root node over `state`, credited to the player to move.
    pub fn root(state: S) -> Self {
        let mover = state.current_player();
        Self::new(NodeId::NONE, None, mover, 0, state)
    }

    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Every legal play has a child.
    ///
    /// False before the first expansion and for nodes without plays, so
    /// terminal nodes must be checked separately.
    #[must_use]
    pub fn is_fully_expanded(&self) -> bool {
        !self.plays.is_empty() && self.children.len() == self.plays.len()
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Number of legal plays seen at first expansion (0 before that).
    #[must_use]
    pub fn play_count(&self) -> usize {
        self.plays.len()
    }

    /// Mean reward per visit.
    #[must_use]
    pub fn mean_value(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.value / f64::from(self.visits)
        }
    }

    /// Fill and shuffle the play buffer on first use. Returns false when the
    /// state has no legal plays.
    pub(crate) fn ensure_plays(&mut self, rng: &mut GameRng) -> bool {
        if self.plays.is_empty() {
            self.plays = self.state.legal_plays();
            rng.shuffle(&mut self.plays);
        }
        !self.plays.is_empty()
    }

    /// The next play without a child, in buffer order.
    pub(crate) fn next_untried(&self) -> Option<&S::Move> {
        self.plays.get(self.children.len())
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    /// Credit one visit with `reward` for the mover.
    pub(crate) fn update(&mut self, reward: f64) {
        self.value += reward;
        self.visits += 1;
    }
}
