//! Shuffled card supply.

use crate::core::GameRng;

/// A finite, shuffled sequence of card identifiers.
///
/// Keeps the full identifier set for membership bookkeeping and deals from a
/// shuffled copy by advancing a cursor.
#[derive(Clone, Debug)]
pub struct Deck<C> {
    all_cards: Vec<C>,
    shuffled: Vec<C>,
    next: usize,
}

impl<C: Copy> Deck<C> {
    /// Build a deck from `cards` and shuffle it with `rng`.
    pub fn new(cards: Vec<C>, rng: &mut GameRng) -> Self {
        let mut shuffled = cards.clone();
        rng.shuffle(&mut shuffled);
        Self {
            all_cards: cards,
            shuffled,
            next: 0,
        }
    }

    /// Pop the next card, or `None` once the deck is exhausted.
    pub fn deal_card(&mut self) -> Option<C> {
        let card = self.shuffled.get(self.next).copied()?;
        self.next += 1;
        Some(card)
    }

    /// Size of the full identifier set.
    #[must_use]
    pub fn count(&self) -> usize {
        self.all_cards.len()
    }

    /// Cards not yet dealt.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.shuffled.len() - self.next
    }

    /// Every card in the deck, in construction order.
    #[must_use]
    pub fn cards(&self) -> &[C] {
        &self.all_cards
    }
}

impl Deck<u8> {
    /// The 104-card row-game deck, identifiers `1..=104`.
    pub fn row_game(rng: &mut GameRng) -> Self {
        Self::new((1..=104).collect(), rng)
    }
}
