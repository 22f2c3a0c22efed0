//! Klondike placement rules.
//!
//! Pure predicates over cards; piles call these from their acceptance
//! checks and the board calls `is_complete` for the win check.

use crate::cards::{Card, Rank};
use crate::core::config::FOUNDATION_COUNT;

/// Cards in a finished foundation.
pub const FULL_FOUNDATION: usize = 13;

/// Can `card` go on a foundation whose top is `top`?
///
/// An empty foundation takes any Ace. Otherwise the card must be the same
/// suit as the top and exactly one rank higher.
#[must_use]
pub fn foundation_accepts(top: Option<&Card>, card: &Card) -> bool {
    match top {
        None => card.face.rank == Rank::Ace,
        Some(top) => card.face.suit == top.face.suit && card.value() == top.value() + 1,
    }
}

/// Can a run headed by `head` go on a tableau column whose top is `top`?
///
/// An empty column takes a King. Otherwise the top must be face-up, of the
/// other colour, and exactly one rank higher than the head.
#[must_use]
pub fn tableau_accepts(top: Option<&Card>, head: &Card) -> bool {
    match top {
        None => head.face.rank == Rank::King,
        Some(top) => {
            top.face_up && top.color() != head.color() && head.value() + 1 == top.value()
        }
    }
}

/// Is the game won, given the size of each foundation?
#[must_use]
pub fn is_complete(foundation_sizes: [usize; FOUNDATION_COUNT]) -> bool {
    foundation_sizes.iter().all(|&n| n == FULL_FOUNDATION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardFace, Suit};
    use crate::core::CardId;

    fn card(suit: Suit, rank: Rank, face_up: bool) -> Card {
        let mut card = Card::new(CardId::of(CardFace::new(suit, rank)));
        card.face_up = face_up;
        card
    }

    #[test]
    fn test_foundation_empty_takes_only_aces() {
        assert!(foundation_accepts(None, &card(Suit::Hearts, Rank::Ace, true)));
        assert!(!foundation_accepts(None, &card(Suit::Hearts, Rank::Two, true)));
    }

    #[test]
    fn test_foundation_builds_up_in_suit() {
        let top = card(Suit::Clubs, Rank::Four, true);
        assert!(foundation_accepts(Some(&top), &card(Suit::Clubs, Rank::Five, true)));
        assert!(!foundation_accepts(Some(&top), &card(Suit::Spades, Rank::Five, true)));
        assert!(!foundation_accepts(Some(&top), &card(Suit::Clubs, Rank::Six, true)));
        assert!(!foundation_accepts(Some(&top), &card(Suit::Clubs, Rank::Three, true)));
    }

    #[test]
    fn test_tableau_empty_takes_only_kings() {
        assert!(tableau_accepts(None, &card(Suit::Diamonds, Rank::King, true)));
        assert!(!tableau_accepts(None, &card(Suit::Diamonds, Rank::Queen, true)));
    }

    #[test]
    fn test_tableau_alternates_colour_descending() {
        let top = card(Suit::Spades, Rank::Queen, true);
        assert!(tableau_accepts(Some(&top), &card(Suit::Hearts, Rank::Jack, true)));
        assert!(tableau_accepts(Some(&top), &card(Suit::Diamonds, Rank::Jack, true)));
        assert!(!tableau_accepts(Some(&top), &card(Suit::Clubs, Rank::Jack, true)));
        assert!(!tableau_accepts(Some(&top), &card(Suit::Hearts, Rank::Ten, true)));
        assert!(!tableau_accepts(Some(&top), &card(Suit::Hearts, Rank::King, true)));
    }

    #[test]
    fn test_tableau_face_down_top_takes_nothing() {
        let top = card(Suit::Spades, Rank::Queen, false);
        assert!(!tableau_accepts(Some(&top), &card(Suit::Hearts, Rank::Jack, true)));
    }

    #[test]
    fn test_tableau_low_ranks() {
        let top = card(Suit::Spades, Rank::Two, true);
        assert!(tableau_accepts(Some(&top), &card(Suit::Hearts, Rank::Ace, true)));
        let top = card(Suit::Spades, Rank::Ace, true);
        assert!(!tableau_accepts(Some(&top), &card(Suit::Hearts, Rank::King, true)));
    }

    #[test]
    fn test_is_complete() {
        assert!(is_complete([13; 4]));
        assert!(!is_complete([13, 13, 13, 12]));
        assert!(!is_complete([0; 4]));
    }
}
