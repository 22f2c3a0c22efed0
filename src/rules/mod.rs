//! Klondike rules.
//!
//! - Foundations build up by suit from the Ace
//! - Tableau columns build down in alternating colours from the King
//! - The game is won when all four foundations hold thirteen cards

pub mod engine;

pub use engine::{foundation_accepts, is_complete, tableau_accepts, FULL_FOUNDATION};
