//! Play generators: strategies that pick one legal play for a state.
//!
//! Every seat at a table is driven by a [`PlayGenerator`]. The harness
//! marks the seat as the point-of-view player before asking, so a generator
//! only ever sees its own hidden information.

pub mod console;
pub mod highest;
pub mod mcts;
pub mod random;

use thiserror::Error;

use crate::core::{GameError, GameState};
use crate::mcts::SearchError;

pub use console::ConsolePlayGenerator;
pub use highest::HighestPlayGenerator;
pub use random::RandomPlayGenerator;

/// Errors a generator can report instead of a play.
#[derive(Debug, Error)]
pub enum PlayError {
    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    #[error("game error: {0}")]
    Game(#[from] GameError),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before a valid play was entered")]
    InputClosed,

    #[error("no legal plays to choose from")]
    NoLegalPlays,

    #[error("expected {expected} generators, got {actual}")]
    GeneratorCount { expected: usize, actual: usize },
}

/// Strategy that picks a play for the current player.
pub trait PlayGenerator<S: GameState> {
    /// Return one play from `state.legal_plays()`.
    fn find_play(&mut self, state: &S) -> Result<S::Move, PlayError>;
}
