//! Game implementations.
//!
//! - `klondike`: Single-deck, draw-one Klondike

pub mod klondike;
