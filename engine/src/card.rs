//! Card, suit and color primitives.
//!
//! Cards are plain value types. The printable token form is
//! `<SuitChar><RankDigits>` with no separator (`S13`, `H1`, `D10`), which is
//! also the form used in deal files and emitted move lines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Highest rank a card token may carry. Goal detection does not use this;
/// it works from the maximum rank observed in the deal.
pub const MAX_TOKEN_RANK: u8 = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    pub fn all() -> impl Iterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    pub fn letter(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    pub fn from_letter(letter: char) -> Option<Suit> {
        match letter {
            'S' => Some(Suit::Spades),
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }
}

/// A playing card. Equality is structural; ranks run from 1 (ace) upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
}

impl Card {
    pub fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.letter(), self.rank)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a card token")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit = chars
            .next()
            .and_then(Suit::from_letter)
            .ok_or_else(|| ParseCardError(s.to_string()))?;
        let rank: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| ParseCardError(s.to_string()))?;
        if rank == 0 || rank > MAX_TOKEN_RANK {
            return Err(ParseCardError(s.to_string()));
        }
        Ok(Card { suit, rank })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Suit::Hearts, Color::Red)]
    #[case(Suit::Diamonds, Color::Red)]
    #[case(Suit::Spades, Color::Black)]
    #[case(Suit::Clubs, Color::Black)]
    fn card_has_correct_color(#[case] suit: Suit, #[case] expected_color: Color) {
        let card = Card::new(suit, 7);
        assert_eq!(card.color(), expected_color);
    }

    #[rstest]
    #[case("S13", Card::new(Suit::Spades, 13))]
    #[case("H1", Card::new(Suit::Hearts, 1))]
    #[case("D10", Card::new(Suit::Diamonds, 10))]
    #[case("C2", Card::new(Suit::Clubs, 2))]
    fn parses_valid_tokens(#[case] token: &str, #[case] expected: Card) {
        assert_eq!(token.parse::<Card>().unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("S")]
    #[case("X5")]
    #[case("S0")]
    #[case("S14")]
    #[case("H1x")]
    #[case("13S")]
    #[case("s7")]
    fn rejects_malformed_tokens(#[case] token: &str) {
        assert!(token.parse::<Card>().is_err());
    }

    #[test]
    fn display_round_trips_every_card() {
        for suit in Suit::all() {
            for rank in 1..=MAX_TOKEN_RANK {
                let card = Card::new(suit, rank);
                assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
            }
        }
    }
}
