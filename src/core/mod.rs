//! Core table types: card ids, pile ids, geometry, input events, RNG,
//! configuration and error types.
//!
//! Nothing in here knows the Klondike rules; the rules live in `rules` and
//! the pile behaviour in `piles`.

pub mod entity;
pub mod geometry;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use entity::{CardId, DECK_SIZE};
pub use geometry::{Point, Rect};
pub use rng::GameRng;
pub use config::{PileId, TableConfig, FOUNDATION_COUNT, PILE_COUNT, TABLEAU_COUNT};
pub use action::InputEvent;
pub use error::{BoardError, MoveError};
