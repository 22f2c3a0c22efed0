//! Piles: ordered card sequences with per-kind layout and acceptance.
//!
//! A `Pile` owns the membership and order of its cards (index 0 is the
//! bottom, the last element is the top). Card state lives in the
//! [`Deck`], which every mutating operation takes by `&mut`.
//!
//! The four kinds are a closed enum rather than a trait hierarchy, so every
//! operation has exactly one dispatch point.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use super::layout;
use crate::cards::Deck;
use crate::core::config::{PileId, TableConfig};
use crate::core::entity::CardId;
use crate::core::error::MoveError;
use crate::core::geometry::{Point, Rect};
use crate::rules;

/// A contiguous, top-aligned group of cards moved as one unit.
///
/// Inline capacity covers a full King-to-Ace tableau run.
pub type Run = SmallVec<[CardId; 13]>;

/// Pile behaviour variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    /// Face-down draw pile.
    Stock,
    /// Face-up discard from the stock.
    Waste,
    /// Per-suit Ace-to-King pile.
    Foundation,
    /// Alternating-colour build column.
    Tableau,
}

impl PileKind {
    /// Kind of the pile with the given id.
    #[must_use]
    pub const fn of(id: PileId) -> Self {
        match id {
            PileId::Stock => PileKind::Stock,
            PileId::Waste => PileKind::Waste,
            PileId::Foundation(_) => PileKind::Foundation,
            PileId::Tableau(_) => PileKind::Tableau,
        }
    }
}

/// One pile on the table.
#[derive(Clone, Debug, PartialEq)]
pub struct Pile {
    id: PileId,
    kind: PileKind,
    anchor: Point,
    cards: Vec<CardId>,
}

impl Pile {
    /// An empty pile at its configured anchor.
    #[must_use]
    pub fn new(id: PileId, config: &TableConfig) -> Self {
        Self {
            id,
            kind: PileKind::of(id),
            anchor: config.pile_anchor(id),
            cards: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PileId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> PileKind {
        self.kind
    }

    /// Centre of the bottom card.
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Index of `card` in this pile.
    #[must_use]
    pub fn position_of(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    /// Should the empty-pile outline be drawn?
    #[must_use]
    pub fn outline_visible(&self) -> bool {
        self.cards.is_empty()
    }

    // === Acceptance ===

    /// Foundation rule: could `card` be added on its own?
    ///
    /// Always false for piles that are not foundations.
    #[must_use]
    pub fn can_accept(&self, card: CardId, deck: &Deck) -> bool {
        self.kind == PileKind::Foundation
            && rules::foundation_accepts(self.top().map(|t| &deck[t]), &deck[card])
    }

    /// Tableau rule: could a run headed by `head` be added?
    ///
    /// Always false for piles that are not tableau columns.
    #[must_use]
    pub fn can_accept_head(&self, head: CardId, deck: &Deck) -> bool {
        self.kind == PileKind::Tableau
            && rules::tableau_accepts(self.top().map(|t| &deck[t]), &deck[head])
    }

    /// Would this pile take a dropped run of `len` cards headed by `head`?
    ///
    /// Stock and waste are never drop targets.
    #[must_use]
    pub fn accepts(&self, head: CardId, len: usize, deck: &Deck) -> bool {
        match self.kind {
            PileKind::Foundation => len == 1 && self.can_accept(head, deck),
            PileKind::Tableau => len > 0 && self.can_accept_head(head, deck),
            PileKind::Stock | PileKind::Waste => false,
        }
    }

    // === Mutation ===

    /// Add a run under this pile's rules.
    ///
    /// Stock and waste take anything. A foundation takes exactly one card
    /// that passes [`can_accept`](Self::can_accept); a tableau column takes
    /// a run whose head passes [`can_accept_head`](Self::can_accept_head)
    /// and turns the whole run face-up. On rejection nothing changes.
    pub fn add_cards(
        &mut self,
        run: &[CardId],
        deck: &mut Deck,
        config: &TableConfig,
    ) -> Result<(), MoveError> {
        let &head = run.first().ok_or(MoveError::EmptyRun)?;

        match self.kind {
            PileKind::Stock | PileKind::Waste => {}
            PileKind::Foundation => {
                if run.len() != 1 {
                    return Err(MoveError::WrongArity { pile: self.id, len: run.len() });
                }
                if !self.can_accept(head, deck) {
                    return Err(MoveError::Rejected { pile: self.id, card: head });
                }
                deck[head].flip_up();
            }
            PileKind::Tableau => {
                if !self.can_accept_head(head, deck) {
                    return Err(MoveError::Rejected { pile: self.id, card: head });
                }
                for &id in run {
                    deck[id].flip_up();
                }
            }
        }

        self.place(run, deck, config);
        Ok(())
    }

    /// Append a run unconditionally, take ownership and re-layout.
    ///
    /// Used for dealing, recycling the waste and restoring a failed move.
    pub fn place(&mut self, run: &[CardId], deck: &mut Deck, config: &TableConfig) {
        for &id in run {
            deck[id].pile = Some(self.id);
        }
        self.cards.extend_from_slice(run);
        trace!(pile = %self.id, added = run.len(), size = self.cards.len(), "placed run");
        self.relayout(deck, config);
    }

    /// Remove `card` and every card above it.
    ///
    /// The removed cards lose their pile link. Returns an empty run if
    /// `card` is not in this pile.
    pub fn remove_from(&mut self, card: CardId, deck: &mut Deck, config: &TableConfig) -> Run {
        let Some(index) = self.position_of(card) else {
            return Run::new();
        };

        let run: Run = self.cards.drain(index..).collect();
        for &id in &run {
            deck[id].pile = None;
        }
        trace!(pile = %self.id, removed = run.len(), size = self.cards.len(), "removed run");
        self.relayout(deck, config);
        run
    }

    /// Drop every card without touching card state. Used by a table reset.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Flip the top card face-up if it is face-down.
    ///
    /// Returns the card that was turned over.
    pub fn reveal_top(&mut self, deck: &mut Deck, config: &TableConfig) -> Option<CardId> {
        let top = self.top()?;
        if deck[top].face_up {
            return None;
        }
        deck[top].flip_up();
        self.relayout(deck, config);
        Some(top)
    }

    // === Layout ===

    /// Recompute every card's position and visibility.
    pub fn relayout(&self, deck: &mut Deck, config: &TableConfig) {
        layout::layout(self.kind, self.anchor, &self.cards, deck, config);
    }

    /// Height of the pile's drop area.
    #[must_use]
    pub fn footprint_height(&self, deck: &Deck, config: &TableConfig) -> f32 {
        layout::footprint_height(self.kind, &self.cards, deck, config)
    }

    /// Drop area: one card wide, from the anchor card's top edge down
    /// through the stack extent.
    #[must_use]
    pub fn footprint(&self, deck: &Deck, config: &TableConfig) -> Rect {
        Rect {
            left: self.anchor.x - config.card_width / 2.0,
            top: self.anchor.y - config.card_height / 2.0,
            width: config.card_width,
            height: self.footprint_height(deck, config),
        }
    }

    /// Hit-test against the drop area.
    #[must_use]
    pub fn contains_point(&self, p: Point, deck: &Deck, config: &TableConfig) -> bool {
        self.footprint(deck, config).contains(p)
    }
}
