//! Card instances - runtime card state.
//!
//! `Card` tracks what changes during play: which way up the card lies,
//! where it is drawn, whether it is drawn at all, and which pile holds it.
//! The pile link is a lookup key only; the pile's sequence owns the card.

use serde::{Deserialize, Serialize};

use super::definition::{CardFace, Color};
use crate::core::config::PileId;
use crate::core::entity::CardId;
use crate::core::geometry::Point;

/// Image a presenter should draw for a card.
///
/// Opaque to the rules; asset lookup happens behind the presenter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardImage {
    Face(CardFace),
    Back,
}

/// A card on the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique id (also the deck arena index).
    pub id: CardId,

    /// Suit and rank.
    pub face: CardFace,

    /// Is the face showing?
    pub face_up: bool,

    /// Centre of the card on the table.
    pub position: Point,

    /// Is the card drawn at all? Cards buried in the stock or waste are hidden.
    pub visible: bool,

    /// Pile currently holding this card.
    /// `None` only while a run is in transit between piles.
    pub pile: Option<PileId>,
}

impl Card {
    /// A face-down card that is not yet in any pile.
    #[must_use]
    pub fn new(id: CardId) -> Self {
        Self {
            id,
            face: id.face(),
            face_up: false,
            position: Point::default(),
            visible: false,
            pile: None,
        }
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.face.value()
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.face.color()
    }

    pub fn flip_up(&mut self) {
        self.face_up = true;
    }

    pub fn flip_down(&mut self) {
        self.face_up = false;
    }

    /// Image for the current orientation.
    #[must_use]
    pub fn image(&self) -> CardImage {
        if self.face_up {
            CardImage::Face(self.face)
        } else {
            CardImage::Back
        }
    }
}
