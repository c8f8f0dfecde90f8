//! The foundations: four ascending single-suit piles.
//!
//! Pile slots are not pre-bound to suits. The first ace placed into an empty
//! pile claims that slot for its suit; from then on the pile only accepts
//! the next rank of the same suit.

use crate::card::Card;
use crate::location::PileIndex;
use crate::rules;

/// The number of foundation piles.
pub const PILE_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Foundations {
    piles: [Vec<Card>; PILE_COUNT],
}

impl Foundations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Peek at the top card of a pile.
    pub fn top(&self, pile: PileIndex) -> Option<&Card> {
        self.piles[pile.as_usize()].last()
    }

    /// Add a card to a pile. The caller is responsible for having checked
    /// legality via [`Foundations::accepts`].
    pub fn push(&mut self, pile: PileIndex, card: Card) {
        self.piles[pile.as_usize()].push(card);
    }

    pub fn height(&self, pile: PileIndex) -> usize {
        self.piles[pile.as_usize()].len()
    }

    /// True if `card` may be placed on the pile: an ace on an empty pile, or
    /// the next rank of the pile's suit otherwise.
    pub fn accepts(&self, pile: PileIndex, card: &Card) -> bool {
        rules::can_move_to_foundation(card, self.top(pile))
    }

    /// The lowest-indexed pile that accepts `card`. Empty piles are
    /// interchangeable, so an ace yields a single destination.
    pub fn first_accepting(&self, card: &Card) -> Option<PileIndex> {
        PileIndex::all().find(|p| self.accepts(*p, card))
    }

    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(|pile| pile.len()).sum()
    }

    /// True once every pile holds exactly `max_rank` cards.
    pub fn is_complete(&self, max_rank: u8) -> bool {
        self.piles.iter().all(|pile| pile.len() == max_rank as usize)
    }

    /// Iterate over the top card of each pile in slot order.
    pub fn tops(&self) -> impl Iterator<Item = Option<&Card>> {
        self.piles.iter().map(|pile| pile.last())
    }
}
