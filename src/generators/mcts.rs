//! MCTS-backed generators.

use crate::core::GameState;
use crate::mcts::{Mcts, RootParallelMcts};

use super::{PlayError, PlayGenerator};

impl<S: GameState> PlayGenerator<S> for Mcts<S> {
    fn find_play(&mut self, state: &S) -> Result<S::Move, PlayError> {
        Ok(Mcts::find_play(self, state)?)
    }
}

impl<S: GameState> PlayGenerator<S> for RootParallelMcts<S> {
    fn find_play(&mut self, state: &S) -> Result<S::Move, PlayError> {
        Ok(RootParallelMcts::find_play(self, state)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use crate::games::row::{RowGameConfig, RowGameState};
    use crate::mcts::MctsConfig;

    #[test]
    fn test_mcts_generator() {
        let config = RowGameConfig::default().with_player_count(3).with_hand_size(3);
        let state = RowGameState::deal(config, &mut GameRng::new(4)).unwrap();

        let mut generator: Box<dyn PlayGenerator<RowGameState>> =
            Box::new(Mcts::new(MctsConfig::default().with_iterations(50)));
        let play = generator.find_play(&state).unwrap();

        assert!(state.legal_plays().contains(&play));
    }

    #[test]
    fn test_mcts_generator_reports_game_over() {
        let config = RowGameConfig::default().with_player_count(2).with_hand_size(1);
        let mut state = RowGameState::deal(config, &mut GameRng::new(4)).unwrap();
        while !state.is_game_over() {
            let play = state.legal_plays()[0];
            state.commit_play(play).unwrap();
        }

        let mut generator: RootParallelMcts<RowGameState> =
            RootParallelMcts::new(MctsConfig::default().with_workers(2)).unwrap();
        let result = PlayGenerator::find_play(&mut generator, &state);
        assert!(matches!(result, Err(PlayError::Search(_))));
    }
}
