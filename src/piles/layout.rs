//! Per-kind pile layout.
//!
//! Layout only writes presentation state (`face_up` for stock/waste/
//! foundation, `position`, `visible`); it never changes pile membership and
//! running it twice gives the same result as running it once.

use crate::cards::Deck;
use crate::core::config::TableConfig;
use crate::core::entity::CardId;
use crate::core::geometry::Point;

use super::pile::PileKind;

/// Position and show every card of a pile.
pub(crate) fn layout(
    kind: PileKind,
    anchor: Point,
    cards: &[CardId],
    deck: &mut Deck,
    config: &TableConfig,
) {
    match kind {
        PileKind::Stock => stack(cards, deck, anchor, false),
        PileKind::Foundation => stack(cards, deck, anchor, true),
        PileKind::Waste => fan_right(cards, deck, anchor, config),
        PileKind::Tableau => cascade(cards, deck, anchor, config),
    }
}

/// Height of the area a pile occupies, from the top edge of its anchor card.
pub(crate) fn footprint_height(
    kind: PileKind,
    cards: &[CardId],
    deck: &Deck,
    config: &TableConfig,
) -> f32 {
    match kind {
        PileKind::Tableau => {
            let below: f32 = cards
                .iter()
                .take(cards.len().saturating_sub(1))
                .map(|&id| config.tableau_gap(deck[id].face_up))
                .sum();
            config.card_height + below
        }
        PileKind::Stock | PileKind::Waste | PileKind::Foundation => config.card_height,
    }
}

/// All cards on the anchor, only the top one drawn.
fn stack(cards: &[CardId], deck: &mut Deck, anchor: Point, face_up: bool) {
    let top = cards.len().saturating_sub(1);
    for (i, &id) in cards.iter().enumerate() {
        let card = &mut deck[id];
        card.face_up = face_up;
        card.position = anchor;
        card.visible = i == top;
    }
}

/// Face-up, the newest `waste_fan` cards spread to the right, older ones hidden.
///
/// The top card is always shown, whatever `waste_fan` says.
fn fan_right(cards: &[CardId], deck: &mut Deck, anchor: Point, config: &TableConfig) {
    let fan_start = cards.len().saturating_sub(config.waste_fan.max(1));
    for (i, &id) in cards.iter().enumerate() {
        let step = i.saturating_sub(fan_start) as f32;
        let card = &mut deck[id];
        card.flip_up();
        card.position = anchor.offset(step * config.waste_gap_x, 0.0);
        card.visible = i >= fan_start;
    }
}

/// Every card drawn, each one stepped down by the gap of the card above it.
fn cascade(cards: &[CardId], deck: &mut Deck, anchor: Point, config: &TableConfig) {
    let mut y = anchor.y;
    for &id in cards {
        let card = &mut deck[id];
        card.position = Point::new(anchor.x, y);
        card.visible = true;
        y += config.tableau_gap(card.face_up);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u8]) -> Vec<CardId> {
        raw.iter().map(|&i| CardId(i)).collect()
    }

    #[test]
    fn test_stock_hides_all_but_top() {
        let mut deck = Deck::standard();
        let cards = ids(&[0, 1, 2]);
        deck[CardId(2)].flip_up();
        let anchor = Point::new(10.0, 10.0);

        layout(PileKind::Stock, anchor, &cards, &mut deck, &TableConfig::default());

        assert!(!deck[CardId(0)].visible);
        assert!(!deck[CardId(1)].visible);
        assert!(deck[CardId(2)].visible);
        assert!(cards.iter().all(|&id| !deck[id].face_up && deck[id].position == anchor));
    }

    #[test]
    fn test_waste_fans_last_three() {
        let mut deck = Deck::standard();
        let config = TableConfig::default();
        let cards = ids(&[0, 1, 2, 3, 4]);
        let anchor = Point::new(100.0, 50.0);

        layout(PileKind::Waste, anchor, &cards, &mut deck, &config);

        assert!(!deck[CardId(0)].visible);
        assert!(!deck[CardId(1)].visible);
        assert_eq!(deck[CardId(2)].position, Point::new(100.0, 50.0));
        assert_eq!(deck[CardId(3)].position, Point::new(120.0, 50.0));
        assert_eq!(deck[CardId(4)].position, Point::new(140.0, 50.0));
        assert!(cards.iter().all(|&id| deck[id].face_up));
    }

    #[test]
    fn test_waste_with_two_cards() {
        let mut deck = Deck::standard();
        let config = TableConfig::default();
        let cards = ids(&[7, 8]);
        let anchor = Point::new(0.0, 0.0);

        layout(PileKind::Waste, anchor, &cards, &mut deck, &config);

        assert_eq!(deck[CardId(7)].position, Point::new(0.0, 0.0));
        assert_eq!(deck[CardId(8)].position, Point::new(20.0, 0.0));
        assert!(deck[CardId(7)].visible && deck[CardId(8)].visible);
    }

    #[test]
    fn test_zero_waste_fan_still_shows_top() {
        let mut deck = Deck::standard();
        let mut config = TableConfig::default();
        config.waste_fan = 0;
        let cards = ids(&[7, 8]);
        let anchor = Point::new(0.0, 0.0);

        layout(PileKind::Waste, anchor, &cards, &mut deck, &config);

        assert!(!deck[CardId(7)].visible);
        assert!(deck[CardId(8)].visible);
        assert_eq!(deck[CardId(8)].position, anchor);
    }

    #[test]
    fn test_tableau_gaps_follow_orientation() {
        let mut deck = Deck::standard();
        let config = TableConfig::default();
        let cards = ids(&[0, 1, 2]);
        deck[CardId(1)].flip_up();
        deck[CardId(2)].flip_up();
        let anchor = Point::new(65.0, 255.0);

        layout(PileKind::Tableau, anchor, &cards, &mut deck, &config);

        assert_eq!(deck[CardId(0)].position.y, 255.0);
        assert_eq!(deck[CardId(1)].position.y, 267.0);
        assert_eq!(deck[CardId(2)].position.y, 295.0);
        assert_eq!(footprint_height(PileKind::Tableau, &cards, &deck, &config), 170.0);
    }

    #[test]
    fn test_empty_tableau_footprint_is_one_card() {
        let deck = Deck::standard();
        let config = TableConfig::default();
        assert_eq!(footprint_height(PileKind::Tableau, &[], &deck, &config), 130.0);
        assert_eq!(footprint_height(PileKind::Waste, &ids(&[1, 2, 3]), &deck, &config), 130.0);
    }
}
