//! Validated location identifiers for the three game zones.
//!
//! Every move addresses its source and destination through these types, so
//! an out-of-range column, cell or pile index cannot be constructed outside
//! of a checked `new`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::foundations::PILE_COUNT;
use crate::freecells::CELL_COUNT;
use crate::tableau::COLUMN_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("invalid tableau column index: {0}")]
    InvalidColumn(u8),
    #[error("invalid free cell index: {0}")]
    InvalidCell(u8),
    #[error("invalid foundation pile index: {0}")]
    InvalidPile(u8),
}

/// A validated tableau column index (0-7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnIndex(u8);

impl ColumnIndex {
    pub fn new(index: u8) -> Result<Self, LocationError> {
        if (index as usize) < COLUMN_COUNT {
            Ok(Self(index))
        } else {
            Err(LocationError::InvalidColumn(index))
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..COLUMN_COUNT as u8).map(Self)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// A validated free cell index (0-3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellIndex(u8);

impl CellIndex {
    pub fn new(index: u8) -> Result<Self, LocationError> {
        if (index as usize) < CELL_COUNT {
            Ok(Self(index))
        } else {
            Err(LocationError::InvalidCell(index))
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..CELL_COUNT as u8).map(Self)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// A validated foundation pile index (0-3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileIndex(u8);

impl PileIndex {
    pub fn new(index: u8) -> Result<Self, LocationError> {
        if (index as usize) < PILE_COUNT {
            Ok(Self(index))
        } else {
            Err(LocationError::InvalidPile(index))
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..PILE_COUNT as u8).map(Self)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// A slot in any zone, used to address move sources and destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Column(ColumnIndex),
    Cell(CellIndex),
    Pile(PileIndex),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Column(c) => write!(f, "stack {}", c.get()),
            Location::Cell(c) => write!(f, "freecell {}", c.get()),
            Location::Pile(p) => write!(f, "foundation {}", p.get()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_index_validation() {
        for i in 0..8 {
            assert!(ColumnIndex::new(i).is_ok());
        }
        assert!(matches!(
            ColumnIndex::new(8),
            Err(LocationError::InvalidColumn(8))
        ));
    }

    #[test]
    fn cell_index_validation() {
        for i in 0..4 {
            assert!(CellIndex::new(i).is_ok());
        }
        assert!(matches!(
            CellIndex::new(4),
            Err(LocationError::InvalidCell(4))
        ));
    }

    #[test]
    fn pile_index_validation() {
        for i in 0..4 {
            assert!(PileIndex::new(i).is_ok());
        }
        assert!(matches!(
            PileIndex::new(255),
            Err(LocationError::InvalidPile(255))
        ));
    }

    #[test]
    fn all_iterators_cover_every_slot() {
        assert_eq!(ColumnIndex::all().count(), 8);
        assert_eq!(CellIndex::all().count(), 4);
        assert_eq!(PileIndex::all().count(), 4);
    }
}
