//! Uniformly random play generator.

use crate::core::{GameRng, GameState};

use super::{PlayError, PlayGenerator};

/// Picks uniformly among the legal plays using its own random stream.
#[derive(Clone, Debug)]
pub struct RandomPlayGenerator {
    rng: GameRng,
}

impl RandomPlayGenerator {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl<S: GameState> PlayGenerator<S> for RandomPlayGenerator {
    fn find_play(&mut self, state: &S) -> Result<S::Move, PlayError> {
        state.random_play(&mut self.rng).ok_or(PlayError::NoLegalPlays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::row::{RowGameConfig, RowGameState};

    #[test]
    fn test_random_play_is_legal() {
        let config = RowGameConfig::default();
        let state = RowGameState::deal(config, &mut GameRng::new(1)).unwrap();
        let mut generator = RandomPlayGenerator::new(2);

        for _ in 0..20 {
            let play = generator.find_play(&state).unwrap();
            assert!(state.legal_plays().contains(&play));
        }
    }

    #[test]
    fn test_random_play_seeded() {
        let config = RowGameConfig::default();
        let state = RowGameState::deal(config, &mut GameRng::new(1)).unwrap();

        let mut a = RandomPlayGenerator::new(8);
        let mut b = RandomPlayGenerator::new(8);
        for _ in 0..5 {
            assert_eq!(a.find_play(&state).unwrap(), b.find_play(&state).unwrap());
        }
    }
}
