//! # rust-mcts
//!
//! A generic Monte Carlo Tree Search engine with a concrete card game to
//! drive it.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Search**: MCTS only talks to the [`GameState`] trait,
//!    whose associated `Move` type carries the game-specific payload.
//!
//! 2. **Explicit Randomness**: Game states never own a random source. Every
//!    search path passes its own [`GameRng`], so a fixed seed reproduces a
//!    search exactly, including across root-parallel workers.
//!
//! 3. **Fail Fast**: Committing a play outside `legal_plays()` is an error
//!    and leaves the state untouched.
//!
//! ## Architecture
//!
//! - **Arena Tree**: Nodes live in a flat `Vec` and refer to each other by
//!   index. Each node owns a private copy of its game state.
//!
//! - **Root Parallelism**: Independent trees on a rayon pool, merged by
//!   majority vote.
//!
//! - **Logging**: Structured `tracing` events; the embedding application
//!   installs whatever subscriber it wants.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, errors, the game-state contract
//! - `cards`: Shuffled card supply
//! - `games`: Concrete games (the four-row penalty card game)
//! - `mcts`: Monte Carlo Tree Search
//! - `generators`: Strategies that pick a play (random, greedy, console, MCTS)
//! - `harness`: Loops that play games and matches to the end

pub mod core;
pub mod cards;
pub mod games;
pub mod mcts;
pub mod generators;
pub mod harness;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, GameState, PlayerId, PlayerMap};

pub use crate::cards::Deck;

pub use crate::games::row::{InputPhase, RowGameConfig, RowGameState};

pub use crate::mcts::{
    Mcts, MctsConfig, RootParallelMcts, SearchError, SearchStats, SearchTree,
    SelectionPolicy, SimulationPolicy, Uct, RandomRollout,
};

pub use crate::generators::{
    ConsolePlayGenerator, HighestPlayGenerator, PlayError, PlayGenerator, RandomPlayGenerator,
};

pub use crate::harness::{play_game, play_match, MatchResult};
