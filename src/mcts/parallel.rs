//! Root-parallel MCTS.
//!
//! Every worker searches its own private tree from its own clone of the
//! starting position with its own forked random stream. Workers never talk
//! to each other; the calling thread waits for all of them, then takes a
//! majority vote over the plays they picked.

use std::collections::BTreeMap;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::core::{GameRng, GameState};

use super::config::MctsConfig;
use super::search::{Mcts, SearchError};

/// Root-parallel search over `config.workers` independent trees.
pub struct RootParallelMcts<S: GameState> {
    config: MctsConfig,
    rng: GameRng,
    pool: ThreadPool,
    votes: Vec<(S::Move, usize)>,
}

impl<S: GameState> RootParallelMcts<S> {
    /// Build the worker pool. At least one worker is always used.
    pub fn new(config: MctsConfig) -> Result<Self, SearchError> {
        let workers = config.workers.max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("mcts-worker-{index}"))
            .build()
            .map_err(|e| SearchError::ThreadPool(e.to_string()))?;
        let rng = GameRng::new(config.seed);

        Ok(Self {
            config,
            rng,
            pool,
            votes: Vec::new(),
        })
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.config.workers.max(1)
    }

    /// Run every worker to completion and return the majority play.
    ///
    /// Ties among equally voted plays are broken uniformly at random.
    pub fn find_play(&mut self, state: &S) -> Result<S::Move, SearchError> {
        if state.is_game_over() {
            return Err(SearchError::GameOver);
        }

        let jobs: Vec<(S, GameRng)> = (0..self.worker_count())
            .map(|_| (state.clone(), self.rng.fork()))
            .collect();
        let config = &self.config;

        let picks: Vec<Result<S::Move, SearchError>> = self.pool.install(|| {
            jobs.into_par_iter()
                .map(|(root, rng)| Mcts::with_rng(config.clone(), rng).find_play(&root))
                .collect()
        });

        let mut tally: BTreeMap<S::Move, usize> = BTreeMap::new();
        for pick in picks {
            *tally.entry(pick?).or_insert(0) += 1;
        }
        debug!(votes = ?tally, "worker votes");

        let top = tally.values().copied().max().ok_or(SearchError::NoVotes)?;
        let leaders: Vec<S::Move> = tally
            .iter()
            .filter(|&(_, &count)| count == top)
            .map(|(play, _)| play.clone())
            .collect();
        let chosen = self.rng.choose(&leaders).cloned().ok_or(SearchError::NoVotes)?;

        self.votes = tally.into_iter().collect();
        Ok(chosen)
    }

    /// Vote counts from the last call to `find_play`, in play order.
    #[must_use]
    pub fn votes(&self) -> &[(S::Move, usize)] {
        &self.votes
    }

    #[must_use]
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::row::{RowGameConfig, RowGameState};

    fn dealt_state(seed: u64) -> RowGameState {
        let config = RowGameConfig::default().with_player_count(4).with_hand_size(5);
        RowGameState::deal(config, &mut GameRng::new(seed)).unwrap()
    }

    #[test]
    fn test_parallel_returns_legal_play() {
        let state = dealt_state(1);
        let config = MctsConfig::default().with_iterations(100).with_workers(3);
        let mut search = RootParallelMcts::new(config).unwrap();

        let play = search.find_play(&state).unwrap();

        assert!(state.legal_plays().contains(&play));
        let total: usize = search.votes().iter().map(|(_, n)| n).sum();
        assert_eq!(total, 3);
        assert!(search.votes().iter().any(|(p, _)| *p == play));
    }

    #[test]
    fn test_parallel_winner_has_most_votes() {
        let state = dealt_state(2);
        let config = MctsConfig::default().with_iterations(60).with_workers(5);
        let mut search = RootParallelMcts::new(config).unwrap();

        let play = search.find_play(&state).unwrap();

        let top = search.votes().iter().map(|(_, n)| *n).max().unwrap();
        let winner_votes = search.votes().iter().find(|(p, _)| *p == play).unwrap().1;
        assert_eq!(winner_votes, top);
    }

    #[test]
    fn test_parallel_deterministic() {
        let state = dealt_state(3);
        let config = MctsConfig::default().with_iterations(80).with_workers(4).with_seed(9);

        let mut first = RootParallelMcts::new(config.clone()).unwrap();
        let mut second = RootParallelMcts::new(config).unwrap();

        assert_eq!(first.find_play(&state).unwrap(), second.find_play(&state).unwrap());
        assert_eq!(first.votes(), second.votes());
    }

    #[test]
    fn test_zero_workers_clamped() {
        let state = dealt_state(4);
        let config = MctsConfig::default().with_iterations(20).with_workers(0);
        let mut search = RootParallelMcts::new(config).unwrap();

        assert_eq!(search.worker_count(), 1);
        assert!(search.find_play(&state).is_ok());
    }
}
