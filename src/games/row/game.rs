//! Row-game state machine.
//!
//! Each round runs `SelectCard` (every seat picks one card) then resolves
//! the picks lowest first in `PlaceCards`. A card that fits no row, or a
//! pro-mode card that fits two rows equally well, pauses resolution in
//! `TakeRow` until its owner names a row. The same integer move domain is
//! a card during `SelectCard` and a row index during `TakeRow`.

use std::fmt;
use std::sync::Arc;

use im::OrdSet;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::cards::Deck;
use crate::core::{GameError, GameRng, GameState, PlayerId, PlayerMap};

use super::board::{card_points, Board, Card, Placement};
use super::config::{RowGameConfig, DECK_SIZE, ROW_COUNT};

/// What the state is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputPhase {
    /// Each player chooses a card to place on the board.
    SelectCard,
    /// Chosen cards are being placed. Only seen inside `commit_play`.
    PlaceCards,
    /// A card fit no row (or two rows equally, in pro mode) and its owner
    /// picks the row.
    TakeRow,
}

impl InputPhase {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            InputPhase::SelectCard => "select-card",
            InputPhase::PlaceCards => "place-cards",
            InputPhase::TakeRow => "take-row",
        }
    }
}

impl fmt::Display for InputPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full row-game position.
///
/// Cloning copies every mutable part; the table configuration is shared
/// read-only through an `Arc`.
#[derive(Clone, Debug)]
pub struct RowGameState {
    config: Arc<RowGameConfig>,
    board: Board,
    hands: PlayerMap<Vec<Card>>,
    /// Seats that were dealt a hand. Distinguishes "played out" from "never dealt".
    dealt: PlayerMap<bool>,
    scores: PlayerMap<i32>,
    /// Cards each player has taken off the board.
    taken: PlayerMap<Vec<Card>>,
    /// Cards not yet on the board, in flight or taken: hands plus undealt deck.
    unplayed: OrdSet<Card>,
    /// This round's picks with their owners; sorted once every seat has picked.
    round: SmallVec<[(Card, PlayerId); 10]>,
    /// Index into `round` of the next card to place.
    cursor: usize,
    phase: InputPhase,
    current: PlayerId,
    point_of_view: PlayerId,
    rounds_played: usize,
}

impl RowGameState {
    /// Empty table: full deck unplayed, no hands, empty rows.
    pub fn new(config: RowGameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let player_count = config.player_count;
        let starting_score = config.starting_score;

        Ok(Self {
            config: Arc::new(config),
            board: Board::new(),
            hands: PlayerMap::with_default(player_count),
            dealt: PlayerMap::with_value(player_count, false),
            scores: PlayerMap::with_value(player_count, starting_score),
            taken: PlayerMap::with_default(player_count),
            unplayed: (1..=DECK_SIZE as Card).collect(),
            round: SmallVec::new(),
            cursor: 0,
            phase: InputPhase::SelectCard,
            current: PlayerId::new(0),
            point_of_view: PlayerId::new(0),
            rounds_played: 0,
        })
    }

    /// Shuffle a deck, deal `hand_size` cards to every seat and one starting
    /// card to every row. Player 0 moves first.
    pub fn deal(config: RowGameConfig, rng: &mut GameRng) -> Result<Self, GameError> {
        let mut state = Self::new(config)?;
        let mut deck = Deck::row_game(rng);
        let exhausted = || GameError::InvalidConfig("deck exhausted while dealing".into());

        for player in PlayerId::all(state.player_count()) {
            for _ in 0..state.config.hand_size {
                let card = deck.deal_card().ok_or_else(exhausted)?;
                state.deal_card(player, card)?;
            }
        }
        for row in 0..ROW_COUNT {
            let card = deck.deal_card().ok_or_else(exhausted)?;
            state.add_starting_card(row, card)?;
        }
        state.set_current_player(PlayerId::new(0));
        Ok(state)
    }

    /// Give `card` to `player`'s hand. A hand never grows past `hand_size`.
    pub fn deal_card(&mut self, player: PlayerId, card: Card) -> Result<(), GameError> {
        self.check_player(player)?;
        if self.hands[player].len() >= self.config.hand_size {
            return Err(GameError::HandFull {
                player,
                hand_size: self.config.hand_size,
            });
        }
        if !self.is_undealt(card) {
            return Err(GameError::CardUnavailable(u32::from(card)));
        }
        self.hands[player].push(card);
        self.dealt[player] = true;
        Ok(())
    }

    /// Seed `row` with `card` before play starts.
    pub fn add_starting_card(&mut self, row: usize, card: Card) -> Result<(), GameError> {
        if row >= ROW_COUNT || self.board.is_full(row) {
            return Err(GameError::InvalidRow(row));
        }
        if !self.is_undealt(card) {
            return Err(GameError::CardUnavailable(u32::from(card)));
        }
        self.unplayed.remove(&card);
        self.board.add_card(row, card, self.config.pro_mode);
        Ok(())
    }

    /// Carry scores over from a previous hand of a match.
    pub fn set_initial_scores(&mut self, scores: &[i32]) -> Result<(), GameError> {
        if scores.len() != self.player_count() {
            return Err(GameError::ScoreCountMismatch {
                expected: self.player_count(),
                actual: scores.len(),
            });
        }
        for (player, score) in self.scores.iter_mut() {
            *score = scores[player.index()];
        }
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &RowGameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> InputPhase {
        self.phase
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player]
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<i32> {
        &self.scores
    }

    /// Cards `player` has taken off the board so far.
    #[must_use]
    pub fn taken_cards(&self, player: PlayerId) -> &[Card] {
        &self.taken[player]
    }

    /// Penalty value of the cards `player` has taken.
    #[must_use]
    pub fn penalty_points(&self, player: PlayerId) -> i32 {
        self.taken[player].iter().map(|&c| card_points(c)).sum()
    }

    /// This round's picks, in pick order until the round is complete and
    /// ascending afterwards.
    pub fn round_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.round.iter().map(|&(card, _)| card)
    }

    /// Cards still in hands or the undealt deck.
    #[must_use]
    pub fn unplayed(&self) -> &OrdSet<Card> {
        &self.unplayed
    }

    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    #[must_use]
    pub fn point_of_view(&self) -> PlayerId {
        self.point_of_view
    }

    fn check_player(&self, player: PlayerId) -> Result<(), GameError> {
        if player.index() >= self.player_count() {
            return Err(GameError::InvalidPlayer {
                index: player.index(),
                player_count: self.player_count(),
            });
        }
        Ok(())
    }

    fn is_undealt(&self, card: Card) -> bool {
        self.unplayed.contains(&card) && !self.hands.iter().any(|(_, hand)| hand.contains(&card))
    }

    fn set_phase(&mut self, phase: InputPhase) {
        debug_assert!(match phase {
            InputPhase::SelectCard => self.round.is_empty(),
            InputPhase::PlaceCards | InputPhase::TakeRow => self.round.len() == self.player_count(),
        });
        trace!(from = %self.phase, to = %phase, "phase change");
        self.phase = phase;
    }

    /// Placement of the card the round is paused on.
    fn pending_placement(&self) -> Option<Placement> {
        let &(card, _) = self.round.get(self.cursor)?;
        Some(self.board.placement(card, self.config.pro_mode))
    }

    fn select_card(&mut self, card: Card) {
        let player = self.current;
        for (_, hand) in self.hands.iter_mut() {
            if let Some(position) = hand.iter().position(|&c| c == card) {
                hand.remove(position);
                break;
            }
        }
        self.unplayed.remove(&card);
        self.round.push((card, player));

        if self.round.len() < self.player_count() {
            self.current = player.next(self.player_count());
            return;
        }

        self.round.sort_unstable();
        self.cursor = 0;
        self.resolve_round(None);
    }

    /// Place the round's cards from the cursor on. `choice` answers the
    /// take-row question the round was paused on, if any.
    fn resolve_round(&mut self, mut choice: Option<usize>) {
        self.set_phase(InputPhase::PlaceCards);
        let pro_mode = self.config.pro_mode;

        while let Some(&(card, owner)) = self.round.get(self.cursor) {
            match (self.board.placement(card, pro_mode), choice.take()) {
                (Placement::Row(row), _) | (Placement::Ambiguous(_), Some(row)) => {
                    if self.board.is_full(row) {
                        self.take_row(row, card, owner);
                    } else {
                        self.board.add_card(row, card, pro_mode);
                    }
                }
                (Placement::NotFound, Some(row)) => self.take_row(row, card, owner),
                (Placement::Ambiguous(_) | Placement::NotFound, None) => {
                    self.current = owner;
                    self.set_phase(InputPhase::TakeRow);
                    return;
                }
            }
            self.cursor += 1;
        }

        self.round.clear();
        self.cursor = 0;
        self.rounds_played += 1;
        self.set_phase(InputPhase::SelectCard);
        self.current = PlayerId::new(0);
    }

    fn take_row(&mut self, row: usize, card: Card, owner: PlayerId) {
        let points = self.board.points_on_row(row);
        let cleared = self.board.take_row(row, card);
        self.scores[owner] -= points;
        self.taken[owner].extend(cleared);
        debug!(player = owner.index(), row, points, card, "row taken");
    }
}

impl GameState for RowGameState {
    type Move = Card;

    fn player_count(&self) -> usize {
        self.config.player_count
    }

    fn current_player(&self) -> PlayerId {
        self.current
    }

    fn set_current_player(&mut self, player: PlayerId) {
        assert!(player.index() < self.player_count(), "{player} is not seated");
        self.current = player;
    }

    fn set_point_of_view_player(&mut self, player: PlayerId) {
        assert!(player.index() < self.player_count(), "{player} is not seated");
        self.point_of_view = player;
    }

    fn legal_plays(&self) -> Vec<Card> {
        if self.is_game_over() {
            return Vec::new();
        }

        match self.phase {
            InputPhase::SelectCard => {
                let own_hand = &self.hands[self.point_of_view];
                if self.current == self.point_of_view {
                    if own_hand.is_empty() {
                        // What-if query: the caller never dealt this hand
                        self.unplayed.iter().copied().collect()
                    } else {
                        own_hand.clone()
                    }
                } else {
                    // Simulated seats draw from cards the viewpoint player
                    // cannot see; its own hand is excluded.
                    self.unplayed
                        .iter()
                        .copied()
                        .filter(|card| !own_hand.contains(card))
                        .collect()
                }
            }
            InputPhase::TakeRow => match self.pending_placement() {
                Some(Placement::NotFound) => (0..ROW_COUNT as Card).collect(),
                Some(Placement::Ambiguous(rows)) => rows.iter().map(|&r| r as Card).collect(),
                Some(Placement::Row(_)) | None => Vec::new(),
            },
            InputPhase::PlaceCards => Vec::new(),
        }
    }

    fn commit_play(&mut self, play: Card) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.phase == InputPhase::PlaceCards {
            return Err(GameError::InvalidPhase(self.phase.name()));
        }
        if !self.legal_plays().contains(&play) {
            return Err(GameError::IllegalPlay {
                player: self.current,
                play: play.to_string(),
            });
        }

        match self.phase {
            InputPhase::SelectCard => self.select_card(play),
            _ => self.resolve_round(Some(usize::from(play))),
        }
        Ok(())
    }

    fn evaluate(&self) -> PlayerMap<f64> {
        self.scores.map(|&score| f64::from(score))
    }

    fn is_game_over(&self) -> bool {
        if !self.round.is_empty() {
            return false;
        }
        if self.dealt[self.point_of_view] {
            return self.hands[self.point_of_view].is_empty();
        }
        // Viewpoint hand never dealt: only the round count can end the game
        self.rounds_played >= self.config.hand_size
    }
}

impl fmt::Display for RowGameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f, "Scores:")?;
        for (player, score) in self.scores.iter() {
            let marker = if player == self.current { '*' } else { ' ' };
            writeln!(f, "{marker}{}: {score}", player.index())?;
        }
        let round: Vec<String> = self.round_cards().map(|c| c.to_string()).collect();
        if round.is_empty() {
            writeln!(f, "Current round cards: -")?;
        } else {
            writeln!(f, "Current round cards: {}", round.join(","))?;
        }
        writeln!(f, "Phase: {}", self.phase)
    }
}
