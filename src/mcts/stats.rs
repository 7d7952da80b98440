//! MCTS search statistics for diagnostics and tuning.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Counters for one call to [`Mcts::search`](super::Mcts::search).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Iterations performed.
    pub iterations: u32,

    /// Children added to the tree.
    pub nodes_expanded: u32,

    /// Rollouts performed.
    pub simulations: u32,

    /// Iterations whose selection ended on a terminal node.
    pub terminal_hits: u32,

    /// Deepest node reached.
    pub max_depth: u16,

    /// Wall time spent in the search loop.
    pub elapsed: Duration,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            f64::from(self.iterations) / secs
        }
    }

    /// Fraction of iterations that grew the tree.
    #[must_use]
    pub fn expansion_rate(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            f64::from(self.nodes_expanded) / f64::from(self.iterations)
        }
    }
}
