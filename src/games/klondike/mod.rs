//! Klondike solitaire table.
//!
//! One deck, dealt into seven tableau columns (1..=7 cards, only the last
//! face-up) with the remaining 24 cards in the stock. Cards move between
//! piles under the rules in `crate::rules`; the game is won when every
//! foundation runs Ace to King.

mod game;

pub use game::{Board, BoardBuilder, DealOutcome, Move};
