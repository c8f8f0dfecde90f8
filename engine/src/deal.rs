//! Deal ingestion from the whitespace-token text format.
//!
//! Each line seeds one tableau column, bottom card first: line *i* is
//! written verbatim into column *i* regardless of length, and missing
//! trailing lines leave their columns empty. A standard 52-card deal
//! therefore arrives as eight lines of 7/7/7/7/6/6/6/6 tokens, while
//! reduced-rank fixtures (four aces, one per line) parse just as well.
//!
//! The highest rank observed becomes the deal's `max_rank`, and the deck is
//! checked to be exactly one card of every suit for every rank up to it.

use log::debug;

use crate::card::{Card, Suit};
use crate::foundations::Foundations;
use crate::freecells::FreeCells;
use crate::game_state::GameState;
use crate::location::ColumnIndex;
use crate::tableau::{Tableau, COLUMN_COUNT};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("line {line}: cannot parse card token `{token}`")]
    MalformedToken { line: usize, token: String },
    #[error("deal has more than eight rows of cards")]
    TooManyRows,
    #[error("card {0} appears more than once in the deal")]
    DuplicateCard(Card),
    #[error("card {0} is missing from the deal")]
    MissingCard(Card),
}

/// Parses deal text into the initial game state.
pub fn parse_deal(input: &str) -> Result<GameState, DealError> {
    let mut tableau = Tableau::new();
    let mut seen = [[false; 13]; 4];
    let mut max_rank: u8 = 0;

    for (line_no, line) in input.lines().enumerate() {
        if line_no >= COLUMN_COUNT {
            // Blank trailing lines are tolerated, stray cards are not.
            if line.split_whitespace().next().is_some() {
                return Err(DealError::TooManyRows);
            }
            continue;
        }
        let column = ColumnIndex::new(line_no as u8).map_err(|_| DealError::TooManyRows)?;
        for token in line.split_whitespace() {
            let card: Card = token.parse().map_err(|_| DealError::MalformedToken {
                line: line_no + 1,
                token: token.to_string(),
            })?;
            let slot = &mut seen[card.suit as usize][(card.rank - 1) as usize];
            if *slot {
                return Err(DealError::DuplicateCard(card));
            }
            *slot = true;
            max_rank = max_rank.max(card.rank);
            tableau.push(column, card);
        }
    }

    for rank in 1..=max_rank {
        for suit in Suit::all() {
            if !seen[suit as usize][(rank - 1) as usize] {
                return Err(DealError::MissingCard(Card::new(suit, rank)));
            }
        }
    }

    debug!(
        "parsed deal: {} cards, max rank {}",
        tableau.total_cards(),
        max_rank
    );
    Ok(GameState::from_components(
        tableau,
        FreeCells::new(),
        Foundations::new(),
        max_rank,
    ))
}
