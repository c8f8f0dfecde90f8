//! Move generation logic for GameState.
//!
//! The generator yields every legal single-card move in a stable order:
//! sources are the column tops 0-7 followed by the occupied cells 0-3, and
//! for each source card the destinations are tried as foundation, free
//! cell, accepting columns, then the newstack column. Stable ordering keeps
//! search traces reproducible.
//!
//! Interchangeable destinations are collapsed: an ace targets only the
//! first accepting foundation slot, a card bound for a free cell targets
//! only the first empty cell, and a newstack move targets only the
//! lowest-indexed empty column. Cell-to-cell shuffling is suppressed, and
//! foundations are never a source.

use super::GameState;
use crate::card::Card;
use crate::location::{ColumnIndex, Location};
use crate::r#move::Move;
use crate::rules::StackingRule;

impl GameState {
    /// Returns all legal single-card moves from the current state.
    pub fn available_moves(&self, rule: StackingRule) -> Vec<Move> {
        let mut moves = Vec::new();
        for column in ColumnIndex::all() {
            if let Some(card) = self.tableau().top(column) {
                self.moves_for_card(*card, Location::Column(column), rule, &mut moves);
            }
        }
        for (cell, card) in self.freecells().occupied() {
            self.moves_for_card(*card, Location::Cell(cell), rule, &mut moves);
        }
        moves
    }

    /// Like [`GameState::available_moves`], but when `foundation_priority`
    /// is set and any foundation move exists, only the foundation moves are
    /// returned. This pruning accelerates breadth-first search on easy
    /// deals; it is unsound for A* and off by default.
    pub fn available_moves_with(
        &self,
        rule: StackingRule,
        foundation_priority: bool,
    ) -> Vec<Move> {
        let mut moves = self.available_moves(rule);
        if foundation_priority && moves.iter().any(Move::is_foundation_move) {
            moves.retain(Move::is_foundation_move);
        }
        moves
    }

    fn moves_for_card(
        &self,
        card: Card,
        from: Location,
        rule: StackingRule,
        out: &mut Vec<Move>,
    ) {
        if let Some(pile) = self.foundations().first_accepting(&card) {
            out.push(Move {
                card,
                from,
                to: Location::Pile(pile),
                onto: None,
            });
        }

        if matches!(from, Location::Column(_)) {
            if let Some(cell) = self.freecells().first_empty() {
                out.push(Move {
                    card,
                    from,
                    to: Location::Cell(cell),
                    onto: None,
                });
            }
        }

        for to_column in ColumnIndex::all() {
            if Location::Column(to_column) == from {
                continue;
            }
            if self.tableau().accepts(to_column, &card, rule) {
                out.push(Move {
                    card,
                    from,
                    to: Location::Column(to_column),
                    onto: self.tableau().top(to_column).copied(),
                });
            }
        }

        if let Some(to_column) = self.tableau().first_empty_column() {
            out.push(Move {
                card,
                from,
                to: Location::Column(to_column),
                onto: None,
            });
        }
    }
}
