//! Card system: faces, runtime instances and the deck arena.
//!
//! ## Key Types
//!
//! - `CardFace`: Immutable suit + rank, with derived value and colour
//! - `Card`: Runtime state (face-up, position, visibility, owning pile)
//! - `Deck`: Arena of all 52 cards, indexed by `CardId`

pub mod definition;
pub mod instance;
pub mod deck;

pub use definition::{CardFace, Color, Rank, Suit};
pub use instance::{Card, CardImage};
pub use deck::Deck;
