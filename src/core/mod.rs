//! Core types: players, RNG, errors and the game-state contract.
//!
//! Everything here is game-agnostic. Concrete games live in `games` and
//! implement [`GameState`].

pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use error::GameError;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::GameState;
