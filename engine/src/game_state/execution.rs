//! Move application logic for GameState.

use super::{GameError, GameState};
use crate::location::Location;
use crate::r#move::Move;
use crate::rules::StackingRule;

impl GameState {
    /// Validates a move against the current state without applying it.
    ///
    /// Checks that the source's top card is the move's card and that the
    /// destination accepts it. An empty destination column accepts any card
    /// (the "newstack" case).
    pub fn validate_move(&self, m: &Move, rule: StackingRule) -> Result<(), GameError> {
        let found = match m.from {
            Location::Column(column) => self.tableau.top(column).copied(),
            Location::Cell(cell) => self.freecells.get(cell).copied(),
            Location::Pile(_) => return Err(GameError::FoundationSource),
        };
        let found = found.ok_or(GameError::EmptySource(m.from))?;
        if found != m.card {
            return Err(GameError::SourceMismatch {
                expected: m.card,
                found,
            });
        }

        match m.to {
            Location::Column(column) => {
                if let Some(top) = self.tableau.top(column) {
                    if !rule.allows(&m.card, top) {
                        return Err(GameError::CannotStack {
                            card: m.card,
                            onto: *top,
                        });
                    }
                }
            }
            Location::Cell(cell) => {
                if self.freecells.get(cell).is_some() {
                    return Err(GameError::OccupiedCell(cell));
                }
            }
            Location::Pile(pile) => {
                if !self.foundations.accepts(pile, &m.card) {
                    return Err(GameError::RejectedByFoundation(m.card));
                }
            }
        }
        Ok(())
    }

    /// Validates and applies a move: the card is removed from its source
    /// zone's top and pushed onto the destination.
    pub fn execute_move(&mut self, m: &Move, rule: StackingRule) -> Result<(), GameError> {
        self.validate_move(m, rule)?;

        let card = match m.from {
            Location::Column(column) => self.tableau.pop(column),
            Location::Cell(cell) => self.freecells.take(cell),
            Location::Pile(_) => None,
        }
        .ok_or(GameError::EmptySource(m.from))?;

        match m.to {
            Location::Column(column) => self.tableau.push(column, card),
            Location::Cell(cell) => self.freecells.set(cell, card),
            Location::Pile(pile) => self.foundations.push(pile, card),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Suit};
    use crate::foundations::Foundations;
    use crate::freecells::FreeCells;
    use crate::location::{CellIndex, ColumnIndex, PileIndex};
    use crate::tableau::Tableau;

    fn column(index: u8) -> Location {
        Location::Column(ColumnIndex::new(index).unwrap())
    }

    fn state_with_columns(columns: &[&[Card]]) -> GameState {
        let mut tableau = Tableau::new();
        let mut max_rank = 0;
        for (i, cards) in columns.iter().enumerate() {
            for card in cards.iter() {
                max_rank = max_rank.max(card.rank);
                tableau.push(ColumnIndex::new(i as u8).unwrap(), *card);
            }
        }
        GameState::from_components(tableau, FreeCells::new(), Foundations::new(), max_rank)
    }

    #[test]
    fn stack_move_transfers_top_card() {
        let six = Card::new(Suit::Spades, 6);
        let five = Card::new(Suit::Hearts, 5);
        let mut state = state_with_columns(&[&[five], &[six]]);
        let m = Move {
            card: five,
            from: column(0),
            to: column(1),
            onto: Some(six),
        };
        state.execute_move(&m, StackingRule::OppositeColor).unwrap();
        assert!(state.tableau().is_column_empty(ColumnIndex::new(0).unwrap()));
        assert_eq!(state.tableau().top(ColumnIndex::new(1).unwrap()), Some(&five));
    }

    #[test]
    fn foundation_move_claims_pile() {
        let ace = Card::new(Suit::Hearts, 1);
        let mut state = state_with_columns(&[&[ace]]);
        let m = Move {
            card: ace,
            from: column(0),
            to: Location::Pile(PileIndex::new(0).unwrap()),
            onto: None,
        };
        state.execute_move(&m, StackingRule::OppositeColor).unwrap();
        assert_eq!(state.foundations().top(PileIndex::new(0).unwrap()), Some(&ace));
    }

    #[test]
    fn mismatched_source_card_is_rejected() {
        let six = Card::new(Suit::Spades, 6);
        let mut state = state_with_columns(&[&[six]]);
        let m = Move {
            card: Card::new(Suit::Spades, 7),
            from: column(0),
            to: Location::Cell(CellIndex::new(0).unwrap()),
            onto: None,
        };
        let err = state.execute_move(&m, StackingRule::OppositeColor);
        assert!(matches!(err, Err(GameError::SourceMismatch { .. })));
    }

    #[test]
    fn empty_source_is_rejected() {
        let mut state = state_with_columns(&[]);
        let m = Move {
            card: Card::new(Suit::Spades, 7),
            from: column(0),
            to: Location::Cell(CellIndex::new(0).unwrap()),
            onto: None,
        };
        assert!(matches!(
            state.execute_move(&m, StackingRule::OppositeColor),
            Err(GameError::EmptySource(_))
        ));
    }

    #[test]
    fn occupied_cell_is_rejected() {
        let six = Card::new(Suit::Spades, 6);
        let mut tableau = Tableau::new();
        tableau.push(ColumnIndex::new(0).unwrap(), six);
        let cell = CellIndex::new(0).unwrap();
        let mut freecells = FreeCells::new();
        freecells.set(cell, Card::new(Suit::Hearts, 2));
        let mut state = GameState::from_components(tableau, freecells, Foundations::new(), 6);
        let m = Move {
            card: six,
            from: column(0),
            to: Location::Cell(cell),
            onto: None,
        };
        assert_eq!(
            state.execute_move(&m, StackingRule::OppositeColor),
            Err(GameError::OccupiedCell(cell))
        );
    }

    #[test]
    fn same_color_stacking_is_rejected_by_default_rule() {
        let six = Card::new(Suit::Spades, 6);
        let five = Card::new(Suit::Clubs, 5);
        let mut state = state_with_columns(&[&[five], &[six]]);
        let m = Move {
            card: five,
            from: column(0),
            to: column(1),
            onto: Some(six),
        };
        assert!(matches!(
            state.execute_move(&m, StackingRule::OppositeColor),
            Err(GameError::CannotStack { .. })
        ));
        // The looser rule accepts the same move.
        assert!(state.execute_move(&m, StackingRule::DifferentSuit).is_ok());
    }

    #[test]
    fn foundation_sources_are_rejected() {
        let mut state = state_with_columns(&[]);
        let m = Move {
            card: Card::new(Suit::Spades, 1),
            from: Location::Pile(PileIndex::new(0).unwrap()),
            to: column(0),
            onto: None,
        };
        assert_eq!(
            state.execute_move(&m, StackingRule::OppositeColor),
            Err(GameError::FoundationSource)
        );
    }
}
