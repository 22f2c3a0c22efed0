//! Card identification.
//!
//! Every card on the table has a unique `CardId`. The 52 ids are dense
//! (`0..52`) so they double as indices into the [`Deck`](crate::cards::Deck)
//! arena that stores per-card state.
//!
//! ## ID Layout
//!
//! `suit_index * 13 + rank_index`, with suits in deck order
//! (Diamonds, Clubs, Hearts, Spades) and ranks Ace..King.
//!
//! ```
//! use rust_klondike::cards::{CardFace, Rank, Suit};
//! use rust_klondike::core::CardId;
//!
//! let ace = CardId::of(CardFace::new(Suit::Diamonds, Rank::Ace));
//! assert_eq!(ace, CardId(0));
//!
//! let king = CardId::of(CardFace::new(Suit::Spades, Rank::King));
//! assert_eq!(king, CardId(51));
//! assert_eq!(king.face(), CardFace::new(Suit::Spades, Rank::King));
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{CardFace, Rank, Suit};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Id of the card with the given face.
    #[must_use]
    pub const fn of(face: CardFace) -> Self {
        Self(face.suit.index() as u8 * 13 + face.rank.index() as u8)
    }

    /// Iterate over all 52 ids in deck order.
    pub fn all() -> impl Iterator<Item = CardId> {
        (0..DECK_SIZE as u8).map(CardId)
    }

    /// The face this id stands for.
    #[must_use]
    pub const fn face(self) -> CardFace {
        CardFace::new(Suit::ALL[self.0 as usize / 13], Rank::ALL[self.0 as usize % 13])
    }

    /// Index into the deck arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.face())
    }
}
