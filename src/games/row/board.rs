//! The four-row board and card placement rules.

use std::fmt;

use smallvec::SmallVec;

use super::config::{MAX_CARDS_PER_ROW, ROW_COUNT};

/// Card identifier, `1..=104`.
pub type Card = u8;

/// Cards on one row, lowest first.
pub type Row = SmallVec<[Card; MAX_CARDS_PER_ROW]>;

/// Where a played card lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Exactly one row fits best.
    Row(usize),
    /// Pro mode only: the card sits equally close above one row's high card
    /// and below another row's low card. The owner picks one of the two.
    Ambiguous([usize; 2]),
    /// No row fits; the owner must take a row of their choice.
    NotFound,
}

/// Penalty points printed on a card.
///
/// 55 is worth 7, other multiples of 11 are worth 5, multiples of 10 are
/// worth 3, other multiples of 5 are worth 2, everything else 1.
#[must_use]
pub fn card_points(card: Card) -> i32 {
    if card == 55 {
        7
    } else if card % 11 == 0 {
        5
    } else if card % 10 == 0 {
        3
    } else if card % 5 == 0 {
        2
    } else {
        1
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    rows: [Row; ROW_COUNT],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards on `row`, lowest first.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Card] {
        &self.rows[row]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Card]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Highest card on `row`, the end normal plays extend.
    #[must_use]
    pub fn high_card(&self, row: usize) -> Option<Card> {
        self.rows[row].last().copied()
    }

    /// Lowest card on `row`, the end pro-mode plays may extend.
    #[must_use]
    pub fn low_card(&self, row: usize) -> Option<Card> {
        self.rows[row].first().copied()
    }

    #[must_use]
    pub fn is_full(&self, row: usize) -> bool {
        self.rows[row].len() >= MAX_CARDS_PER_ROW
    }

    #[must_use]
    pub fn points_on_row(&self, row: usize) -> i32 {
        self.rows[row].iter().map(|&c| card_points(c)).sum()
    }

    #[must_use]
    pub fn total_points(&self) -> i32 {
        (0..ROW_COUNT).map(|r| self.points_on_row(r)).sum()
    }

    /// Find the row `card` belongs on.
    ///
    /// A row fits from above when `card` is greater than its high card; the
    /// tightest such row wins. In pro mode a row also fits from below when
    /// `card` is less than its low card. When both kinds of fit exist the
    /// smaller gap wins and an exact tie is [`Placement::Ambiguous`].
    #[must_use]
    pub fn placement(&self, card: Card, pro_mode: bool) -> Placement {
        let mut above: Option<(usize, Card)> = None;
        let mut below: Option<(usize, Card)> = None;

        for (index, row) in self.rows.iter().enumerate() {
            let (Some(&low), Some(&high)) = (row.first(), row.last()) else {
                continue;
            };
            if card > high && above.map_or(true, |(_, best)| high > best) {
                above = Some((index, high));
            }
            if pro_mode && card < low && below.map_or(true, |(_, best)| low < best) {
                below = Some((index, low));
            }
        }

        match (above, below) {
            (None, None) => Placement::NotFound,
            (Some((row, _)), None) | (None, Some((row, _))) => Placement::Row(row),
            (Some((above_row, high)), Some((below_row, low))) => {
                let gap_above = card - high;
                let gap_below = low - card;
                match gap_above.cmp(&gap_below) {
                    std::cmp::Ordering::Less => Placement::Row(above_row),
                    std::cmp::Ordering::Greater => Placement::Row(below_row),
                    std::cmp::Ordering::Equal => Placement::Ambiguous([above_row, below_row]),
                }
            }
        }
    }

    /// Put `card` on a row that has room.
    ///
    /// In pro mode a card lower than the row's low card goes in front.
    pub fn add_card(&mut self, row: usize, card: Card, pro_mode: bool) {
        debug_assert!(!self.is_full(row));
        let cards = &mut self.rows[row];
        match cards.first() {
            Some(&low) if pro_mode && card < low => cards.insert(0, card),
            _ => cards.push(card),
        }
    }

    /// Clear `row`, leaving `card` alone on it. Returns the cleared cards.
    pub fn take_row(&mut self, row: usize, card: Card) -> Row {
        let mut replacement = Row::new();
        replacement.push(card);
        std::mem::replace(&mut self.rows[row], replacement)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            let cards: Vec<String> = row.iter().map(|c| format!("{c:>3}")).collect();
            writeln!(f, " {} {} ({} pts)", index, cards.join(" "), self.points_on_row(index))?;
        }
        Ok(())
    }
}
