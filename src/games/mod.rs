//! Concrete games implementing [`GameState`](crate::core::GameState).

pub mod row;
