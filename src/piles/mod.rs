//! Pile system: the thirteen card piles on a Klondike table.
//!
//! ## Key Types
//!
//! - `Pile`: Ordered card sequence with layout and acceptance rules
//! - `PileKind`: Stock, Waste, Foundation or Tableau behaviour
//! - `Run`: A group of cards moved together
//!
//! Piles are the single source of truth for card ownership: a card's
//! `pile` field is only ever written by `Pile::place` and `Pile::remove_from`.

pub mod pile;
mod layout;

pub use pile::{Pile, PileKind, Run};

// Re-export pile ids from core for convenience
pub use crate::core::config::PileId;
