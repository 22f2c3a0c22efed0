//! The deck arena: storage for all 52 cards.
//!
//! Piles hold `CardId`s; the `Deck` holds the `Card` state behind them.
//! Indexing by `CardId` is O(1).

use std::ops::{Index, IndexMut};

use super::instance::Card;
use crate::core::entity::{CardId, DECK_SIZE};

/// Per-card state for a full 52-card deck.
///
/// ```
/// use rust_klondike::cards::Deck;
/// use rust_klondike::core::CardId;
///
/// let mut deck = Deck::standard();
/// assert_eq!(deck.len(), 52);
///
/// deck[CardId(3)].flip_up();
/// assert!(deck[CardId(3)].face_up);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A fresh deck: every card face-down, hidden and in no pile.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cards: CardId::all().map(Card::new).collect(),
        }
    }

    /// Put every card back into its fresh state.
    pub fn reset(&mut self) {
        for card in &mut self.cards {
            *card = Card::new(card.id);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl Index<CardId> for Deck {
    type Output = Card;

    fn index(&self, id: CardId) -> &Self::Output {
        &self.cards[id.index()]
    }
}

impl IndexMut<CardId> for Deck {
    fn index_mut(&mut self, id: CardId) -> &mut Self::Output {
        &mut self.cards[id.index()]
    }
}
