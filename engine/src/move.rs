//! Move representation.
//!
//! A move transfers exactly one card between zones. Solvers use moves as the
//! edges of the state graph, and the solution file is a sequence of their
//! printable forms:
//!
//! | Kind | Textual form |
//! |------|--------------|
//! | to a free cell | `freecell <Card>` |
//! | onto a non-empty column | `stack <Card> <TopCardOfDest>` |
//! | onto an empty column | `newstack <Card>` |
//! | to a foundation | `source <Card>` |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::card::Card;
use crate::location::Location;

/// A single-card transfer between two zone slots.
///
/// `onto` records the destination column's top card at generation time; it
/// is present exactly for "stack" moves and yields the second card of their
/// textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub card: Card,
    pub from: Location,
    pub to: Location,
    pub onto: Option<Card>,
}

/// Move categories, named after their printable forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Into an empty free cell.
    ToFreecell,
    /// Onto the top card of a non-empty column.
    ToStack,
    /// Onto an empty column.
    ToNewStack,
    /// Onto a foundation pile ("source" in the output format).
    ToFoundation,
}

impl Move {
    pub fn kind(&self) -> MoveKind {
        match (self.to, self.onto) {
            (Location::Cell(_), _) => MoveKind::ToFreecell,
            (Location::Pile(_), _) => MoveKind::ToFoundation,
            (Location::Column(_), Some(_)) => MoveKind::ToStack,
            (Location::Column(_), None) => MoveKind::ToNewStack,
        }
    }

    /// Foundation moves represent direct progress toward the goal.
    pub fn is_foundation_move(&self) -> bool {
        matches!(self.to, Location::Pile(_))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.to, self.onto) {
            (Location::Cell(_), _) => write!(f, "freecell {}", self.card),
            (Location::Pile(_), _) => write!(f, "source {}", self.card),
            (Location::Column(_), Some(onto)) => write!(f, "stack {} {}", self.card, onto),
            (Location::Column(_), None) => write!(f, "newstack {}", self.card),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use crate::location::{CellIndex, ColumnIndex, PileIndex};

    fn from_column(index: u8) -> Location {
        Location::Column(ColumnIndex::new(index).unwrap())
    }

    #[test]
    fn freecell_move_prints_card_only() {
        let m = Move {
            card: Card::new(Suit::Spades, 13),
            from: from_column(0),
            to: Location::Cell(CellIndex::new(1).unwrap()),
            onto: None,
        };
        assert_eq!(m.kind(), MoveKind::ToFreecell);
        assert_eq!(m.to_string(), "freecell S13");
    }

    #[test]
    fn stack_move_prints_both_cards() {
        let m = Move {
            card: Card::new(Suit::Hearts, 5),
            from: from_column(2),
            to: from_column(4),
            onto: Some(Card::new(Suit::Spades, 6)),
        };
        assert_eq!(m.kind(), MoveKind::ToStack);
        assert_eq!(m.to_string(), "stack H5 S6");
    }

    #[test]
    fn newstack_move_prints_card_only() {
        let m = Move {
            card: Card::new(Suit::Spades, 2),
            from: from_column(0),
            to: from_column(1),
            onto: None,
        };
        assert_eq!(m.kind(), MoveKind::ToNewStack);
        assert_eq!(m.to_string(), "newstack S2");
    }

    #[test]
    fn foundation_move_uses_source_name() {
        let m = Move {
            card: Card::new(Suit::Diamonds, 1),
            from: from_column(3),
            to: Location::Pile(PileIndex::new(0).unwrap()),
            onto: None,
        };
        assert!(m.is_foundation_move());
        assert_eq!(m.to_string(), "source D1");
    }
}
