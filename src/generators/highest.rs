//! Greedy generator that always plays the highest-ranked legal play.

use crate::core::GameState;

use super::{PlayError, PlayGenerator};

/// Keeps the greatest legal play by the move's total order.
///
/// For the row game that is the highest card in hand, or the highest row
/// index when a row must be taken.
#[derive(Clone, Copy, Debug, Default)]
pub struct HighestPlayGenerator;

impl<S: GameState> PlayGenerator<S> for HighestPlayGenerator {
    fn find_play(&mut self, state: &S) -> Result<S::Move, PlayError> {
        state
            .legal_plays()
            .into_iter()
            .max()
            .ok_or(PlayError::NoLegalPlays)
    }
}
