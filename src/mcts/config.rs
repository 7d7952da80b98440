//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MctsConfig {
    /// Select/expand/simulate/backpropagate passes per search.
    /// The search stops only when this budget is spent.
    pub iterations: u32,

    /// Maximum random plays per rollout.
    pub simulation_depth: u32,

    /// UCT exploration constant (default: sqrt(2) = 1.414).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Random seed for expansion order, rollouts and tie-breaks.
    /// Same seed produces deterministic searches.
    pub seed: u64,

    /// Independent trees searched by root-parallel MCTS.
    pub workers: usize,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 2000,
            simulation_depth: 10,
            exploration_constant: std::f64::consts::SQRT_2,
            seed: 42,
            workers: 4,
        }
    }
}

impl MctsConfig {
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_simulation_depth(mut self, depth: u32) -> Self {
        self.simulation_depth = depth;
        self
    }

    #[must_use]
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}
