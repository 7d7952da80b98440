//! Driver loops that seat play generators at a table.
//!
//! Before every decision the seat to move becomes the point-of-view player,
//! so each generator only sees its own hand.

use tracing::{debug, info};

use crate::core::{GameRng, GameState, PlayerId, PlayerMap};
use crate::games::row::{RowGameConfig, RowGameState};
use crate::generators::{PlayError, PlayGenerator};

/// Seat-ordered generators, one per player.
pub type Seats<S> = [Box<dyn PlayGenerator<S>>];

/// Play `state` to the end and return its final evaluation.
pub fn play_game<S: GameState>(state: &mut S, seats: &mut Seats<S>) -> Result<PlayerMap<f64>, PlayError> {
    if seats.len() != state.player_count() {
        return Err(PlayError::GeneratorCount {
            expected: state.player_count(),
            actual: seats.len(),
        });
    }

    let mut plays = 0usize;
    while !state.is_game_over() {
        let player = state.current_player();
        state.set_point_of_view_player(player);
        let play = seats[player.index()].find_play(state)?;
        state.commit_play(play)?;
        plays += 1;
    }

    let result = state.evaluate();
    info!(plays, scores = ?result.as_slice(), "game over");
    Ok(result)
}

/// Outcome of a multi-hand row-game match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult {
    pub scores: PlayerMap<i32>,
    pub hands: usize,
}

impl MatchResult {
    /// Seats sharing the highest score.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        let best = self.scores.iter().map(|(_, &s)| s).max().unwrap_or(i32::MIN);
        self.scores
            .iter()
            .filter(|&(_, &s)| s == best)
            .map(|(player, _)| player)
            .collect()
    }
}

/// Deal and play row-game hands, carrying scores over, until some player's
/// score drops below zero.
pub fn play_match(
    config: &RowGameConfig,
    seats: &mut Seats<RowGameState>,
    rng: &mut GameRng,
) -> Result<MatchResult, PlayError> {
    let mut scores = PlayerMap::with_value(config.player_count, config.starting_score);
    let mut hands = 0;

    loop {
        let mut state = RowGameState::deal(config.clone(), rng)?;
        state.set_initial_scores(scores.as_slice())?;
        play_game(&mut state, seats)?;

        scores = state.scores().clone();
        hands += 1;
        debug!(hands, scores = ?scores.as_slice(), "hand finished");

        if scores.iter().any(|(_, &s)| s < 0) {
            return Ok(MatchResult { scores, hands });
        }
    }
}
