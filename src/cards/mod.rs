//! Card supply.

pub mod deck;

pub use deck::Deck;
