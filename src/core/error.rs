//! Rule and precondition errors shared by every game.

use thiserror::Error;

use super::player::PlayerId;

/// Errors raised by a game state when a caller breaks its contract.
///
/// A state that returns one of these has not been modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{player} cannot play {play}: not among the legal plays")]
    IllegalPlay { player: PlayerId, play: String },

    #[error("player index {index} out of range for {player_count} players")]
    InvalidPlayer { index: usize, player_count: usize },

    #[error("row {0} does not exist")]
    InvalidRow(usize),

    #[error("{player} already holds {hand_size} cards")]
    HandFull { player: PlayerId, hand_size: usize },

    #[error("card {0} is not in the unplayed pool")]
    CardUnavailable(u32),

    #[error("the game is over")]
    GameOver,

    #[error("operation not allowed during the {0} phase")]
    InvalidPhase(&'static str),

    #[error("expected {expected} scores, got {actual}")]
    ScoreCountMismatch { expected: usize, actual: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
