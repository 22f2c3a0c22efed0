//! The drawing boundary.

use crate::cards::Card;
use crate::core::{PileId, Point};
use crate::games::klondike::Board;
use crate::interaction::{DragSession, DragState};

/// Receives draw calls for one frame of the table.
///
/// Implementations own everything visual: windows, sprites, asset
/// lookup. The engine only says what goes where, in paint order.
pub trait Presenter {
    /// A full redraw is starting.
    fn begin_frame(&mut self) {}

    /// Draw or hide the empty-pile outline at `anchor`.
    fn render_pile_outline(&mut self, pile: PileId, anchor: Point, visible: bool);

    /// Draw `card` centred on `at`, or hide it.
    fn render_card(&mut self, card: &Card, at: Point, visible: bool);

    /// The game has just been won.
    fn notify_win(&mut self);
}

/// Draw the whole board, bottom to top.
///
/// Outlines go first, then each pile's cards in order. A run in hand is
/// drawn last so it stays above every pile it passes over.
pub fn present<P: Presenter + ?Sized>(board: &Board, state: &DragState, presenter: &mut P) {
    presenter.begin_frame();

    for pile in board.piles() {
        presenter.render_pile_outline(pile.id(), pile.anchor(), pile.outline_visible());
    }

    let in_hand = state.session().map_or(&[][..], DragSession::run);
    for pile in board.piles() {
        for &id in pile.cards().iter().filter(|id| !in_hand.contains(id)) {
            let card = board.card(id);
            presenter.render_card(card, card.position, card.visible);
        }
    }
    for &id in in_hand {
        let card = board.card(id);
        presenter.render_card(card, card.position, card.visible);
    }
}
