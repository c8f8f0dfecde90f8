/*!
GameState: the aggregate of tableau, free cells and foundations.

A `GameState` also carries `max_rank`, the highest rank observed in the
deal. Goal detection works from this field rather than a hard-coded 13, so
reduced-rank deals (for example four aces only) are handled uniformly.
*/

mod error;
mod execution;
mod moves;

pub use error::GameError;

use crate::foundations::Foundations;
use crate::freecells::FreeCells;
use crate::tableau::Tableau;

/// Represents the complete state of a FreeCell game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    tableau: Tableau,
    freecells: FreeCells,
    foundations: Foundations,
    max_rank: u8,
}

impl GameState {
    /// An empty state holding no cards. With nothing dealt, `max_rank` is 0
    /// and the state is trivially at goal.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_components(
        tableau: Tableau,
        freecells: FreeCells,
        foundations: Foundations,
        max_rank: u8,
    ) -> Self {
        Self {
            tableau,
            freecells,
            foundations,
            max_rank,
        }
    }

    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    pub fn freecells(&self) -> &FreeCells {
        &self.freecells
    }

    pub fn foundations(&self) -> &Foundations {
        &self.foundations
    }

    /// The highest rank observed in the deal this state descends from.
    pub fn max_rank(&self) -> u8 {
        self.max_rank
    }

    /// Total number of cards across all zones. Conserved by every move.
    pub fn total_cards(&self) -> usize {
        self.tableau.total_cards()
            + self.freecells.occupied_count()
            + self.foundations.total_cards()
    }

    /// True when every foundation holds exactly `max_rank` cards and every
    /// column and free cell is empty. The conjunction is deliberate:
    /// foundation count alone is not trusted.
    pub fn is_goal(&self) -> bool {
        self.foundations.is_complete(self.max_rank)
            && self.tableau.total_cards() == 0
            && self.freecells.occupied_count() == 0
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            tableau: Tableau::new(),
            freecells: FreeCells::new(),
            foundations: Foundations::new(),
            max_rank: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Suit};
    use crate::location::{CellIndex, ColumnIndex, PileIndex};

    #[test]
    fn empty_state_is_trivially_at_goal() {
        assert!(GameState::new().is_goal());
    }

    #[test]
    fn state_with_all_cards_on_foundations_is_goal() {
        let mut foundations = Foundations::new();
        for (i, suit) in Suit::all().enumerate() {
            let pile = PileIndex::new(i as u8).unwrap();
            foundations.push(pile, Card::new(suit, 1));
        }
        let state = GameState::from_components(Tableau::new(), FreeCells::new(), foundations, 1);
        assert!(state.is_goal());
    }

    #[test]
    fn short_foundation_is_not_goal_even_with_empty_zones() {
        let mut foundations = Foundations::new();
        foundations.push(PileIndex::new(0).unwrap(), Card::new(Suit::Spades, 1));
        let state = GameState::from_components(Tableau::new(), FreeCells::new(), foundations, 1);
        assert!(!state.is_goal());
    }

    #[test]
    fn occupied_cell_blocks_goal() {
        let mut foundations = Foundations::new();
        for (i, suit) in Suit::all().enumerate() {
            foundations.push(PileIndex::new(i as u8).unwrap(), Card::new(suit, 1));
        }
        let mut freecells = FreeCells::new();
        freecells.set(CellIndex::new(0).unwrap(), Card::new(Suit::Spades, 2));
        let state = GameState::from_components(Tableau::new(), freecells, foundations, 1);
        assert!(!state.is_goal());
    }

    #[test]
    fn total_cards_spans_all_zones() {
        let mut tableau = Tableau::new();
        tableau.push(ColumnIndex::new(0).unwrap(), Card::new(Suit::Spades, 3));
        let mut freecells = FreeCells::new();
        freecells.set(CellIndex::new(1).unwrap(), Card::new(Suit::Hearts, 4));
        let mut foundations = Foundations::new();
        foundations.push(PileIndex::new(0).unwrap(), Card::new(Suit::Clubs, 1));
        let state = GameState::from_components(tableau, freecells, foundations, 4);
        assert_eq!(state.total_cards(), 3);
    }
}
