//! Compact state fingerprints for closed-set membership.
//!
//! A state is encoded into a fixed-width byte layout (one byte per card,
//! 0 as the empty sentinel) so that hashing and equality never walk the
//! `GameState` structure. Two encodings exist:
//!
//! - [`PackedState`] is positional: two states compare equal iff every slot
//!   of every zone holds the same cards in the same order. This is the
//!   default closed-set key.
//! - [`LooseKey`] is permutation-insensitive: it keeps only the sorted
//!   multisets of column tops, foundation tops and cell contents. It prunes
//!   far more aggressively (two genuinely different states can collide)
//!   and is offered as an opt-in speed mode.

use freecell_engine::card::Card;
use freecell_engine::foundations::PILE_COUNT;
use freecell_engine::freecells::CELL_COUNT;
use freecell_engine::game_state::GameState;
use freecell_engine::tableau::COLUMN_COUNT;

/// Packs a card into a 1-based id: 1..=52 (0 = empty slot).
fn card_id(card: &Card) -> u8 {
    card.suit as u8 * 13 + card.rank
}

/// Positional fixed-width encoding of a full game state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackedState {
    columns: [u8; 52],
    column_lens: [u8; COLUMN_COUNT],
    cells: [u8; CELL_COUNT],
    // Top card id per pile; a single-suit ascending pile is fully
    // determined by its top card.
    piles: [u8; PILE_COUNT],
}

impl PackedState {
    pub fn from_state(state: &GameState) -> Self {
        let mut columns = [0u8; 52];
        let mut column_lens = [0u8; COLUMN_COUNT];
        let mut idx = 0;
        for (col, cards) in state.tableau().columns().enumerate() {
            column_lens[col] = cards.len() as u8;
            for card in cards {
                columns[idx] = card_id(card);
                idx += 1;
            }
        }
        let mut cells = [0u8; CELL_COUNT];
        for (i, cell) in state.freecells().cells().enumerate() {
            cells[i] = cell.map_or(0, card_id);
        }
        let mut piles = [0u8; PILE_COUNT];
        for (i, top) in state.foundations().tops().enumerate() {
            piles[i] = top.map_or(0, card_id);
        }
        PackedState {
            columns,
            column_lens,
            cells,
            piles,
        }
    }
}

/// Permutation-insensitive encoding: sorted multisets of the accessible
/// cards of each zone kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LooseKey {
    column_tops: [u8; COLUMN_COUNT],
    cells: [u8; CELL_COUNT],
    pile_tops: [u8; PILE_COUNT],
}

impl LooseKey {
    pub fn from_state(state: &GameState) -> Self {
        let mut column_tops = [0u8; COLUMN_COUNT];
        for (i, cards) in state.tableau().columns().enumerate() {
            column_tops[i] = cards.last().map_or(0, card_id);
        }
        let mut cells = [0u8; CELL_COUNT];
        for (i, cell) in state.freecells().cells().enumerate() {
            cells[i] = cell.map_or(0, card_id);
        }
        let mut pile_tops = [0u8; PILE_COUNT];
        for (i, top) in state.foundations().tops().enumerate() {
            pile_tops[i] = top.map_or(0, card_id);
        }
        column_tops.sort_unstable();
        cells.sort_unstable();
        pile_tops.sort_unstable();
        LooseKey {
            column_tops,
            cells,
            pile_tops,
        }
    }
}

/// Which equivalence relation the closed set uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Equivalence {
    /// Positional state identity. Sound; the default.
    #[default]
    Strict,
    /// Accessible-card multisets only. Aggressive pruning that can miss
    /// solutions on adversarial deals; source-behavior parity mode.
    Loose,
}

/// A closed-set key under the chosen equivalence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fingerprint {
    Strict(PackedState),
    Loose(LooseKey),
}

impl Fingerprint {
    pub fn of(state: &GameState, equivalence: Equivalence) -> Self {
        match equivalence {
            Equivalence::Strict => Fingerprint::Strict(PackedState::from_state(state)),
            Equivalence::Loose => Fingerprint::Loose(LooseKey::from_state(state)),
        }
    }
}
