//! Error types for move application.

use thiserror::Error;

use crate::card::Card;
use crate::location::{CellIndex, Location};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no card to move at {0}")]
    EmptySource(Location),
    #[error("expected {expected} on top of the source, found {found}")]
    SourceMismatch { expected: Card, found: Card },
    #[error("cannot stack {card} on {onto}")]
    CannotStack { card: Card, onto: Card },
    #[error("free cell {} is occupied", .0.get())]
    OccupiedCell(CellIndex),
    #[error("foundation does not accept {0}")]
    RejectedByFoundation(Card),
    #[error("cards cannot leave a foundation")]
    FoundationSource,
}
