//! MCTS policies for selection and simulation.
//!
//! Policies are trait-based to allow customization:
//! - `SelectionPolicy`: How to score a child while descending (UCT)
//! - `SimulationPolicy`: How to run rollouts from a freshly expanded node

use crate::core::{GameError, GameRng, GameState, PlayerMap};

use super::config::MctsConfig;

// =============================================================================
// Selection Policy
// =============================================================================

/// Scores a child during selection. The child with the highest score is
/// descended into; the first one wins ties.
pub trait SelectionPolicy: Send + Sync {
    fn score(&self, parent_visits: u32, child_visits: u32, child_value: f64, config: &MctsConfig) -> f64;
}

/// Upper Confidence bound applied to Trees.
///
/// Formula: value/n + c * sqrt(ln(N + 1) / n), with `c` taken from
/// [`MctsConfig::exploration_constant`].
#[derive(Clone, Debug, Default)]
pub struct Uct;

impl SelectionPolicy for Uct {
    fn score(&self, parent_visits: u32, child_visits: u32, child_value: f64, config: &MctsConfig) -> f64 {
        if child_visits == 0 {
            return f64::INFINITY;
        }
        let visits = f64::from(child_visits);
        let exploitation = child_value / visits;
        let exploration = ((f64::from(parent_visits) + 1.0).ln() / visits).sqrt();
        exploitation + config.exploration_constant * exploration
    }
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Policy for running simulations (rollouts) from a leaf node.
pub trait SimulationPolicy<S: GameState>: Send + Sync {
    /// Play out `state` for at most `max_depth` plays and evaluate it.
    ///
    /// The state is modified during simulation; callers pass a clone.
    fn simulate(&self, state: &mut S, rng: &mut GameRng, max_depth: u32) -> Result<PlayerMap<f64>, GameError>;
}

/// Uniformly random rollout.
///
/// Stops at the depth cutoff or when the game ends, whichever comes first,
/// and returns the state's own evaluation.
#[derive(Clone, Debug, Default)]
pub struct RandomRollout;

impl<S: GameState> SimulationPolicy<S> for RandomRollout {
    fn simulate(&self, state: &mut S, rng: &mut GameRng, max_depth: u32) -> Result<PlayerMap<f64>, GameError> {
        for _ in 0..max_depth {
            if state.is_game_over() {
                break;
            }
            match state.random_play(rng) {
                Some(play) => state.commit_play(play)?,
                None => break,
            }
        }
        Ok(state.evaluate())
    }
}
