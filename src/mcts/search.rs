//! Core MCTS search algorithm.
//!
//! Each iteration selects a path with UCT, adds one child, plays a random
//! rollout from a copy of the child's state and credits every node on the
//! path with the reward of the player who moved into it. The budget is a
//! fixed iteration count; there is no timeout.

use std::time::Instant;

use thiserror::Error;
use tracing::debug;

use crate::core::{GameError, GameRng, GameState};

use super::config::MctsConfig;
use super::node::NodeId;
use super::policy::{RandomRollout, SelectionPolicy, SimulationPolicy, Uct};
use super::stats::SearchStats;
use super::tree::SearchTree;

/// Errors that can occur during search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("game error: {0}")]
    Game(#[from] GameError),

    #[error("search started from a finished game")]
    GameOver,

    #[error("non-terminal state has no legal plays")]
    NoLegalPlays,

    #[error("node already has a child for every legal play")]
    FullyExpanded,

    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),

    #[error("no worker produced a play")]
    NoVotes,
}

/// Single-tree MCTS search context.
///
/// Owns its random stream, so two searches built from the same seed over
/// the same state pick the same play.
pub struct Mcts<S: GameState> {
    config: MctsConfig,
    rng: GameRng,
    selection: Box<dyn SelectionPolicy>,
    simulation: Box<dyn SimulationPolicy<S>>,
    stats: SearchStats,
    tree: Option<SearchTree<S>>,
}

impl<S: GameState> Mcts<S> {
    /// Create a search seeded from `config.seed`.
    pub fn new(config: MctsConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }

    /// Create a search drawing from an existing random stream.
    pub fn with_rng(config: MctsConfig, rng: GameRng) -> Self {
        Self {
            config,
            rng,
            selection: Box::new(Uct),
            simulation: Box::new(RandomRollout),
            stats: SearchStats::default(),
            tree: None,
        }
    }

    /// Set a custom selection policy.
    pub fn with_selection<P: SelectionPolicy + 'static>(mut self, selection: P) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom simulation policy.
    pub fn with_simulation<P: SimulationPolicy<S> + 'static>(mut self, simulation: P) -> Self {
        self.simulation = Box::new(simulation);
        self
    }

    /// Build a tree over `state` using the full iteration budget.
    ///
    /// The budget is clamped to at least one iteration so the root always
    /// has a child to choose from.
    pub fn search(&mut self, state: &S) -> Result<&SearchTree<S>, SearchError> {
        if state.is_game_over() {
            return Err(SearchError::GameOver);
        }

        let start = Instant::now();
        self.stats.reset();

        let mut tree = SearchTree::new(state.clone());
        let iterations = self.config.iterations.max(1);
        for _ in 0..iterations {
            self.iteration(&mut tree)?;
            self.stats.iterations += 1;
        }

        self.stats.elapsed = start.elapsed();
        debug!(
            iterations = self.stats.iterations,
            nodes = tree.len(),
            max_depth = self.stats.max_depth,
            elapsed_us = self.stats.elapsed.as_micros() as u64,
            "search finished"
        );

        Ok(&*self.tree.insert(tree))
    }

    /// Search `state` and return the most visited root play.
    pub fn find_play(&mut self, state: &S) -> Result<S::Move, SearchError> {
        self.search(state)?;
        match self.tree.as_ref() {
            Some(tree) => most_visited_play(tree, &mut self.rng).ok_or(SearchError::NoLegalPlays),
            None => Err(SearchError::NoLegalPlays),
        }
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    fn iteration(&mut self, tree: &mut SearchTree<S>) -> Result<(), SearchError> {
        // === SELECTION ===
        let mut current = tree.root();
        loop {
            let node = tree.get(current);
            if node.is_terminal() || !node.is_fully_expanded() {
                break;
            }
            current = self.select_child(tree, current);
        }

        // === EXPANSION ===
        let leaf = if tree.get(current).is_terminal() {
            self.stats.terminal_hits += 1;
            current
        } else {
            let child = tree.expand(current, &mut self.rng)?;
            self.stats.nodes_expanded += 1;
            child
        };
        self.stats.max_depth = self.stats.max_depth.max(tree.get(leaf).depth);

        // === SIMULATION ===
        let mut rollout = tree.get(leaf).state().clone();
        let rewards = self
            .simulation
            .simulate(&mut rollout, &mut self.rng, self.config.simulation_depth)?;
        self.stats.simulations += 1;

        // === BACKPROPAGATION ===
        tree.backpropagate(leaf, &rewards);
        Ok(())
    }

    /// Highest-scoring child of a fully expanded node; first max wins.
    fn select_child(&self, tree: &SearchTree<S>, id: NodeId) -> NodeId {
        let parent = tree.get(id);
        let mut best = NodeId::NONE;
        let mut best_score = f64::NEG_INFINITY;

        for &child_id in parent.children() {
            let child = tree.get(child_id);
            let score = self
                .selection
                .score(parent.visits, child.visits, child.value, &self.config);
            if best.is_none() || score > best_score {
                best = child_id;
                best_score = score;
            }
        }
        best
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The tree built by the last successful search.
    #[must_use]
    pub fn tree(&self) -> Option<&SearchTree<S>> {
        self.tree.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}

/// The root child with the most visits, ties broken uniformly at random.
///
/// Returns `None` when the root has no children.
pub fn most_visited_play<S: GameState>(tree: &SearchTree<S>, rng: &mut GameRng) -> Option<S::Move> {
    let root = tree.root_node();
    let best_visits = root
        .children()
        .iter()
        .map(|&child| tree.get(child).visits)
        .max()?;

    let mut candidates = Vec::new();
    for &child_id in root.children() {
        let child = tree.get(child_id);
        let winner = child.visits == best_visits;
        debug!(
            play = ?child.play,
            visits = child.visits,
            value = child.mean_value(),
            winner,
            "root child"
        );
        if winner {
            if let Some(play) = &child.play {
                candidates.push(play.clone());
            }
        }
    }

    rng.choose(&candidates).cloned()
}
