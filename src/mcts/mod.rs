//! Monte Carlo Tree Search over any [`GameState`](crate::core::GameState).
//!
//! ## Overview
//!
//! - **Single tree** ([`Mcts`]): strictly sequential four-phase loop
//!   (selection, expansion, simulation, backpropagation) for a fixed
//!   iteration budget. The root play with the most visits wins.
//! - **Root parallel** ([`RootParallelMcts`]): independent trees on a rayon
//!   pool, merged by majority vote.
//! - **Configurable policies**: selection ([`Uct`]) and simulation
//!   ([`RandomRollout`]) are trait objects.
//!
//! ## Usage
//!
//! ```rust
//! use rust_mcts::core::GameRng;
//! use rust_mcts::games::row::{RowGameConfig, RowGameState};
//! use rust_mcts::mcts::{Mcts, MctsConfig};
//!
//! let mut rng = GameRng::new(7);
//! let state = RowGameState::deal(RowGameConfig::default(), &mut rng).unwrap();
//!
//! let mut search = Mcts::new(MctsConfig::default().with_iterations(200));
//! let card = search.find_play(&state).unwrap();
//! println!("play {card}");
//!
//! for (play, visits) in search.tree().unwrap().play_visits() {
//!     println!("{play}: {visits} visits");
//! }
//! ```

pub mod config;
pub mod node;
pub mod parallel;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::MctsConfig;
pub use node::{NodeId, SearchNode};
pub use parallel::RootParallelMcts;
pub use policy::{RandomRollout, SelectionPolicy, SimulationPolicy, Uct};
pub use search::{most_visited_play, Mcts, SearchError};
pub use stats::SearchStats;
pub use tree::{SearchTree, TreeStats};
