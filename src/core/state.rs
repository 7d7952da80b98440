//! The game-state contract every concrete game implements.
//!
//! MCTS, the play generators and the harness only ever talk to a game
//! through this trait. Each game is an independent implementation; there is
//! no inheritance between games.
//!
//! ## Contract
//!
//! - `legal_plays` is never empty unless `is_game_over` is true.
//! - `clone` yields a state that can diverge from the original without
//!   sharing any mutable substructure.
//! - `commit_play` accepts only plays currently returned by `legal_plays`
//!   and leaves the state untouched when it rejects one.

use std::fmt::Debug;

use super::error::GameError;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;

/// A mutable, cloneable game position.
pub trait GameState: Clone + Send {
    /// Game-specific move payload.
    ///
    /// `Ord` gives moves a total order, used for vote counting in
    /// root-parallel search and by the highest-card generator.
    type Move: Clone + Debug + Ord + Send;

    /// Number of seats at the table.
    fn player_count(&self) -> usize;

    /// The player whose decision the state is waiting for.
    fn current_player(&self) -> PlayerId;

    /// Hand the turn to `player`. Used by harnesses to pick who starts.
    ///
    /// # Panics
    ///
    /// Panics if `player` is not seated at this table.
    fn set_current_player(&mut self, player: PlayerId);

    /// Mark whose hidden information is known to the caller.
    ///
    /// Plays generated for every other seat are drawn from the pool of
    /// cards the viewpoint player cannot see.
    ///
    /// # Panics
    ///
    /// Panics if `player` is not seated at this table.
    fn set_point_of_view_player(&mut self, player: PlayerId);

    /// Legal plays for the current player.
    fn legal_plays(&self) -> Vec<Self::Move>;

    /// Apply a play and advance the turn.
    fn commit_play(&mut self, play: Self::Move) -> Result<(), GameError>;

    /// Per-player evaluation. Defined at every position, not only terminal ones.
    fn evaluate(&self) -> PlayerMap<f64>;

    /// Has the game reached an end state?
    fn is_game_over(&self) -> bool;

    /// Uniform pick from `legal_plays`.
    fn random_play(&self, rng: &mut GameRng) -> Option<Self::Move> {
        rng.choose(&self.legal_plays()).cloned()
    }
}
