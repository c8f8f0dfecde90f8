//! A pure, type-safe implementation of FreeCell game logic for solvers.
//!
//! This crate provides the game model a state-space search is built on:
//! value-typed cards, the three zone containers, placement rules, deal
//! ingestion, single-card move generation and move application. It contains
//! no search logic and no I/O beyond parsing deal text.
//!
//! ## Game layout
//!
//! ```text
//! [FreeCells]    [Foundations]
//! [ ][ ][ ][ ]   [ ][ ][ ][ ]
//!
//! [Tableau Columns]
//! [A♠] [K♥] [Q♦] [J♣] ...
//! [2♠] [...] [...] [...]
//! ```
//!
//! - **The tableau**: 8 columns holding the dealt cards. A card may move
//!   onto a column top that is one rank higher and of the opposite color
//!   (configurable, see [`rules::StackingRule`]), or onto an empty column.
//! - **The free cells**: 4 slots each holding at most one card.
//! - **The foundations**: 4 ascending single-suit piles. The game is won
//!   when every card has reached them.
//!
//! Ranks are not fixed at 13: a deal's highest observed rank travels with
//! the [`GameState`] and drives goal detection, so reduced decks solve the
//! same way full ones do.
//!
//! ```rust
//! use freecell_engine::deal::parse_deal;
//! use freecell_engine::rules::StackingRule;
//!
//! let state = parse_deal("H1\nD1\nS1\nC1\n").unwrap();
//! let moves = state.available_moves(StackingRule::default());
//! assert!(!moves.is_empty());
//! ```

pub mod card;
pub mod deal;
pub mod foundations;
pub mod freecells;
pub mod game_state;
pub mod location;
pub mod r#move;
pub mod rules;
pub mod tableau;

// Re-export commonly used types for convenience
pub use card::{Card, Color, Suit};
pub use foundations::Foundations;
pub use freecells::FreeCells;
pub use game_state::GameState;
pub use location::Location;
pub use r#move::{Move, MoveKind};
pub use rules::StackingRule;
pub use tableau::Tableau;
