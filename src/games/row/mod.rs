//! Row-taking card game.
//!
//! 104 cards, four rows of at most five cards, every player starting at 66
//! points. Each round every seat picks a card in secret; the picks are then
//! placed lowest first on the row whose high card sits closest below them.
//! Placing a sixth card on a row, or playing a card lower than every row,
//! makes its owner take a row and lose its penalty points.
//!
//! Pro mode also lets a card extend a row at its low end, which can leave a
//! card equally close to two rows; its owner then picks between those two.

mod board;
mod config;
mod game;

pub use board::{card_points, Board, Card, Placement, Row};
pub use config::{RowGameConfig, DECK_SIZE, MAX_CARDS_PER_ROW, ROW_COUNT, STARTING_SCORE};
pub use game::{InputPhase, RowGameState};
