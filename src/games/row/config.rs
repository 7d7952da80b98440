//! Row-game configuration.

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Rows on the board.
pub const ROW_COUNT: usize = 4;

/// Cards a row holds before the next one takes it.
pub const MAX_CARDS_PER_ROW: usize = 5;

/// Highest card identifier; the deck is `1..=DECK_SIZE`.
pub const DECK_SIZE: usize = 104;

/// Score every player starts a match with.
pub const STARTING_SCORE: i32 = 66;

/// Table setup shared by every clone of a row-game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowGameConfig {
    /// Seats at the table (2-10).
    pub player_count: usize,

    /// Allow cards to be placed at the low end of a row.
    pub pro_mode: bool,

    /// Cards dealt to each player; also the number of rounds per hand.
    pub hand_size: usize,

    /// Score each player starts with.
    pub starting_score: i32,
}

impl Default for RowGameConfig {
    fn default() -> Self {
        Self {
            player_count: 5,
            pro_mode: false,
            hand_size: 10,
            starting_score: STARTING_SCORE,
        }
    }
}

impl RowGameConfig {
    #[must_use]
    pub fn with_player_count(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    #[must_use]
    pub fn with_pro_mode(mut self, pro_mode: bool) -> Self {
        self.pro_mode = pro_mode;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_starting_score(mut self, score: i32) -> Self {
        self.starting_score = score;
        self
    }

    /// Check the table fits in one deck.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(2..=10).contains(&self.player_count) {
            return Err(GameError::InvalidConfig(format!(
                "player count must be 2-10, got {}",
                self.player_count
            )));
        }
        if self.hand_size == 0 {
            return Err(GameError::InvalidConfig("hand size must be at least 1".into()));
        }
        let needed = self.player_count * self.hand_size + ROW_COUNT;
        if needed > DECK_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "{} players with {} cards each need {} cards, deck has {}",
                self.player_count, self.hand_size, needed, DECK_SIZE
            )));
        }
        Ok(())
    }
}
