//! Klondike board: deck, piles, dealing and moves.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::cards::{Card, Deck};
use crate::core::{
    BoardError, CardId, GameRng, MoveError, PileId, Point, Rect, TableConfig, FOUNDATION_COUNT,
    TABLEAU_COUNT,
};
use crate::piles::{Pile, Run};
use crate::rules;

/// What a deal from the stock did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealOutcome {
    /// One card went from the stock to the waste.
    Dealt(CardId),
    /// The stock was empty; this many waste cards were turned back over.
    Recycled(usize),
    /// Stock and waste were both empty.
    Nothing,
}

/// A completed move of a run between piles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: PileId,
    pub to: PileId,
    pub run: Run,
    /// Tableau card turned face-up because the move uncovered it.
    pub revealed: Option<CardId>,
}

/// The whole table: every card and every pile.
///
/// Constructed once per session and reset for each new game. Owns its
/// RNG; each deal forks it, so a session is reproducible from the
/// configured seed.
///
/// ```
/// use rust_klondike::games::klondike::Board;
/// use rust_klondike::core::{PileId, TableConfig};
///
/// let board = Board::new(TableConfig::default().with_seed(7));
/// assert_eq!(board.pile(PileId::Tableau(6)).len(), 7);
/// assert_eq!(board.pile(PileId::Stock).len(), 24);
/// assert!(board.audit().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    config: TableConfig,
    rng: GameRng,
    deck: Deck,
    /// Indexed by `PileId::index()`.
    piles: Vec<Pile>,
    games_dealt: u32,
}

impl Board {
    /// Create a table and deal the first game.
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        let mut board = Self::empty(config);
        board.reset();
        board
    }

    fn empty(config: TableConfig) -> Self {
        let piles = PileId::all().map(|id| Pile::new(id, &config)).collect();
        Self {
            rng: GameRng::new(config.seed),
            config,
            deck: Deck::standard(),
            piles,
            games_dealt: 0,
        }
    }

    /// Discard the current game and deal a fresh shuffle.
    ///
    /// Column `k` gets `k + 1` cards with only the last face-up; the
    /// remaining 24 go face-down to the stock.
    #[instrument(skip(self), fields(seed = self.config.seed))]
    pub fn reset(&mut self) {
        for pile in &mut self.piles {
            pile.clear();
        }
        self.deck.reset();

        let mut order: Vec<CardId> = CardId::all().collect();
        let mut shuffle_rng = self.rng.fork();
        shuffle_rng.shuffle(&mut order);

        let mut next = 0;
        for col in 0..TABLEAU_COUNT {
            let column = &order[next..next + col + 1];
            next += col + 1;
            for (row, &id) in column.iter().enumerate() {
                self.deck[id].face_up = row == col;
            }
            self.piles[PileId::Tableau(col as u8).index()].place(column, &mut self.deck, &self.config);
        }
        self.piles[PileId::Stock.index()].place(&order[next..], &mut self.deck, &self.config);
        self.relayout_all();

        self.games_dealt += 1;
        info!(game = self.games_dealt, deal_seed = shuffle_rng.seed(), "dealt new game");
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        &self.deck[id]
    }

    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        &self.piles[id.index()]
    }

    /// All piles in paint order.
    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        self.piles.iter()
    }

    /// Number of games dealt on this board, including the current one.
    #[must_use]
    pub fn games_dealt(&self) -> u32 {
        self.games_dealt
    }

    /// Topmost visible card under `p`.
    #[must_use]
    pub fn card_at(&self, p: Point) -> Option<CardId> {
        let (w, h) = (self.config.card_width, self.config.card_height);
        self.piles.iter().rev().find_map(|pile| {
            pile.cards().iter().rev().copied().find(|&id| {
                let card = &self.deck[id];
                card.visible && Rect::centered(card.position, w, h).contains(p)
            })
        })
    }

    /// Are all four foundations complete?
    #[must_use]
    pub fn is_won(&self) -> bool {
        let mut sizes = [0; FOUNDATION_COUNT];
        for (size, id) in sizes.iter_mut().zip(PileId::foundations()) {
            *size = self.pile(id).len();
        }
        rules::is_complete(sizes)
    }

    // === Stock ===

    /// Turn the top stock card onto the waste, or recycle the waste when
    /// the stock is empty.
    ///
    /// Recycling reverses the waste into the stock face-down, so the next
    /// pass deals the cards in the same order as the last one.
    pub fn deal_from_stock(&mut self) -> DealOutcome {
        let outcome = if let Some(top) = self.pile(PileId::Stock).top() {
            let run = self.piles[PileId::Stock.index()].remove_from(top, &mut self.deck, &self.config);
            self.deck[top].flip_up();
            self.piles[PileId::Waste.index()].place(&run, &mut self.deck, &self.config);
            DealOutcome::Dealt(top)
        } else if let Some(&bottom) = self.pile(PileId::Waste).cards().first() {
            let mut run = self.piles[PileId::Waste.index()].remove_from(bottom, &mut self.deck, &self.config);
            run.reverse();
            for &id in &run {
                self.deck[id].flip_down();
            }
            self.piles[PileId::Stock.index()].place(&run, &mut self.deck, &self.config);
            DealOutcome::Recycled(run.len())
        } else {
            DealOutcome::Nothing
        };

        debug!(?outcome, "deal from stock");
        outcome
    }

    // === Moves ===

    /// Move the run headed by `head` from `origin` to `target`.
    ///
    /// The run is re-derived from the origin's current contents; if it is
    /// not `expected_len` cards long, or the target rejects it, the origin is
    /// restored and nothing changes. After a successful move out of a tableau
    /// column the newly exposed card is turned face-up.
    pub fn commit_move(
        &mut self,
        origin: PileId,
        target: PileId,
        head: CardId,
        expected_len: usize,
    ) -> Result<Move, MoveError> {
        let run = self.piles[origin.index()].remove_from(head, &mut self.deck, &self.config);
        if run.is_empty() {
            return Err(MoveError::NotInPile { pile: origin, card: head });
        }
        if run.len() != expected_len {
            self.piles[origin.index()].place(&run, &mut self.deck, &self.config);
            return Err(MoveError::StaleRun { pile: origin, expected: expected_len, found: run.len() });
        }

        if let Err(err) = self.piles[target.index()].add_cards(&run, &mut self.deck, &self.config) {
            self.piles[origin.index()].place(&run, &mut self.deck, &self.config);
            return Err(err);
        }

        let revealed = if origin.is_tableau() {
            self.piles[origin.index()].reveal_top(&mut self.deck, &self.config)
        } else {
            None
        };

        debug!(from = %origin, to = %target, head = %head, len = run.len(), "moved run");
        Ok(Move { from: origin, to: target, run, revealed })
    }

    /// Send `card` to the first foundation that takes it.
    ///
    /// Only the face-up top card of a waste, tableau or foundation pile is
    /// eligible. Returns `None` when no foundation accepts it.
    pub fn auto_move_to_foundation(&mut self, card: CardId) -> Option<Move> {
        let origin = self.movable_top(card).ok()?;
        let target = PileId::foundations()
            .filter(|&f| f != origin)
            .find(|&f| self.pile(f).can_accept(card, &self.deck))?;

        self.commit_move(origin, target, card, 1).ok()
    }

    fn movable_top(&self, card: CardId) -> Result<PileId, MoveError> {
        let origin = self.deck[card].pile.ok_or(MoveError::NotMovable { card })?;
        let pile = self.pile(origin);
        if origin == PileId::Stock || pile.top() != Some(card) || !self.deck[card].face_up {
            return Err(MoveError::NotMovable { card });
        }
        Ok(origin)
    }

    // === Presentation state ===

    /// Turn over a face-down top card in place.
    pub fn reveal_top(&mut self, pile: PileId) -> Option<CardId> {
        self.piles[pile.index()].reveal_top(&mut self.deck, &self.config)
    }

    /// Move a card's drawn position without changing its pile.
    pub fn set_card_position(&mut self, card: CardId, at: Point) {
        self.deck[card].position = at;
    }

    /// Recompute one pile's layout.
    pub fn relayout(&mut self, pile: PileId) {
        self.piles[pile.index()].relayout(&mut self.deck, &self.config);
    }

    /// Recompute every pile's layout.
    pub fn relayout_all(&mut self) {
        for pile in &self.piles {
            pile.relayout(&mut self.deck, &self.config);
        }
    }

    // === Invariants ===

    /// Check every table invariant.
    ///
    /// - Each of the 52 cards is in exactly one pile, and points back to it
    /// - Each foundation is one suit, Ace upward
    /// - Adjacent face-up tableau cards alternate colour and descend by one
    pub fn audit(&self) -> Result<(), BoardError> {
        let mut seen = FxHashSet::default();
        for pile in &self.piles {
            for &id in pile.cards() {
                if !seen.insert(id) {
                    return Err(BoardError::DuplicateCard { card: id });
                }
                if self.deck[id].pile != Some(pile.id()) {
                    return Err(BoardError::OwnerMismatch { card: id, pile: pile.id() });
                }
            }
        }
        if let Some(card) = CardId::all().find(|id| !seen.contains(id)) {
            return Err(BoardError::MissingCard { card });
        }

        for id in PileId::foundations() {
            let cards = self.pile(id).cards();
            let suit = cards.first().map(|&c| self.deck[c].face.suit);
            for (index, &c) in cards.iter().enumerate() {
                let face = self.deck[c].face;
                if Some(face.suit) != suit || usize::from(face.value()) != index + 1 {
                    return Err(BoardError::FoundationOrder { pile: id, index });
                }
            }
        }

        for id in PileId::tableau() {
            let cards = self.pile(id).cards();
            for (index, pair) in cards.windows(2).enumerate() {
                let (upper, lower) = (&self.deck[pair[0]], &self.deck[pair[1]]);
                if upper.face_up
                    && lower.face_up
                    && (upper.color() == lower.color() || lower.value() + 1 != upper.value())
                {
                    return Err(BoardError::TableauOrder { pile: id, index: index + 1 });
                }
            }
        }

        Ok(())
    }
}

/// Builder for a hand-arranged table.
///
/// Each listed pile receives its cards bottom to top with the given
/// orientation (stock, waste and foundation orientation is forced by their
/// layout). Every card not listed goes face-down into the stock.
///
/// ```
/// use rust_klondike::cards::{CardFace, Rank, Suit};
/// use rust_klondike::core::{CardId, PileId, TableConfig};
/// use rust_klondike::games::klondike::BoardBuilder;
///
/// let ace = CardId::of(CardFace::new(Suit::Hearts, Rank::Ace));
/// let board = BoardBuilder::new(TableConfig::default())
///     .pile(PileId::Waste, &[(ace, true)])
///     .build()
///     .unwrap();
///
/// assert_eq!(board.pile(PileId::Waste).top(), Some(ace));
/// assert_eq!(board.pile(PileId::Stock).len(), 51);
/// ```
pub struct BoardBuilder {
    config: TableConfig,
    piles: Vec<(PileId, Vec<(CardId, bool)>)>,
}

impl BoardBuilder {
    pub fn new(config: TableConfig) -> Self {
        Self { config, piles: Vec::new() }
    }

    /// Put `cards` (bottom to top, with orientation) into `pile`.
    pub fn pile(mut self, pile: PileId, cards: &[(CardId, bool)]) -> Self {
        self.piles.push((pile, cards.to_vec()));
        self
    }

    /// Build the table. Fails if a card is listed twice.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board::empty(self.config);
        let mut seen = FxHashSet::default();

        for (pile, cards) in &self.piles {
            let mut run = Run::new();
            for &(id, face_up) in cards {
                if !seen.insert(id) {
                    return Err(BoardError::DuplicateCard { card: id });
                }
                board.deck[id].face_up = face_up;
                run.push(id);
            }
            board.piles[pile.index()].place(&run, &mut board.deck, &board.config);
        }

        let rest: Vec<CardId> = CardId::all().filter(|id| !seen.contains(id)).collect();
        board.piles[PileId::Stock.index()].place(&rest, &mut board.deck, &board.config);
        board.games_dealt = 1;
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardFace, Rank, Suit};

    fn id(suit: Suit, rank: Rank) -> CardId {
        CardId::of(CardFace::new(suit, rank))
    }

    #[test]
    fn test_deal_shape() {
        let board = Board::new(TableConfig::default());

        for (k, col) in PileId::tableau().enumerate() {
            let pile = board.pile(col);
            assert_eq!(pile.len(), k + 1);
            for (row, &c) in pile.cards().iter().enumerate() {
                assert_eq!(board.card(c).face_up, row == k);
            }
        }

        let stock = board.pile(PileId::Stock);
        assert_eq!(stock.len(), 24);
        assert!(stock.cards().iter().all(|&c| !board.card(c).face_up));
        assert!(board.pile(PileId::Waste).is_empty());
        assert!(PileId::foundations().all(|f| board.pile(f).is_empty()));
        assert!(board.audit().is_ok());
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = Board::new(TableConfig::default().with_seed(5));
        let b = Board::new(TableConfig::default().with_seed(5));
        let c = Board::new(TableConfig::default().with_seed(6));

        assert_eq!(a.pile(PileId::Stock).cards(), b.pile(PileId::Stock).cards());
        assert_ne!(a.pile(PileId::Stock).cards(), c.pile(PileId::Stock).cards());
    }

    #[test]
    fn test_reset_deals_a_different_game() {
        let mut board = Board::new(TableConfig::default());
        let first = board.pile(PileId::Stock).cards().to_vec();

        board.deal_from_stock();
        board.reset();

        assert_eq!(board.games_dealt(), 2);
        assert_ne!(board.pile(PileId::Stock).cards(), first.as_slice());
        assert!(board.pile(PileId::Waste).is_empty());
        assert!(board.audit().is_ok());
    }

    #[test]
    fn test_deal_moves_one_card_face_up() {
        let mut board = Board::new(TableConfig::default());
        let top = board.pile(PileId::Stock).top().unwrap();

        assert_eq!(board.deal_from_stock(), DealOutcome::Dealt(top));

        assert_eq!(board.pile(PileId::Stock).len(), 23);
        assert_eq!(board.pile(PileId::Waste).top(), Some(top));
        assert!(board.card(top).face_up);
        assert_eq!(board.card(top).pile, Some(PileId::Waste));
    }

    #[test]
    fn test_recycle_reproduces_draw_order() {
        let mut board = Board::new(TableConfig::default());
        let first_pass: Vec<_> = (0..24)
            .map(|_| match board.deal_from_stock() {
                DealOutcome::Dealt(c) => c,
                other => panic!("unexpected {:?}", other),
            })
            .collect();

        assert_eq!(board.deal_from_stock(), DealOutcome::Recycled(24));
        assert!(board.pile(PileId::Waste).is_empty());
        assert!(board
            .pile(PileId::Stock)
            .cards()
            .iter()
            .all(|&c| !board.card(c).face_up));

        let second_pass: Vec<_> = (0..24)
            .map(|_| match board.deal_from_stock() {
                DealOutcome::Dealt(c) => c,
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn test_deal_with_nothing_left_is_noop() {
        let all: Vec<(CardId, bool)> = CardId::all().map(|c| (c, true)).collect();
        let mut board = BoardBuilder::new(TableConfig::default())
            .pile(PileId::Tableau(0), &all)
            .build()
            .unwrap();

        assert_eq!(board.deal_from_stock(), DealOutcome::Nothing);
        assert_eq!(board.pile(PileId::Tableau(0)).len(), 52);
    }

    #[test]
    fn test_arrangement_rejects_duplicates() {
        let ace = id(Suit::Hearts, Rank::Ace);
        let result = BoardBuilder::new(TableConfig::default())
            .pile(PileId::Waste, &[(ace, true)])
            .pile(PileId::Tableau(0), &[(ace, true)])
            .build();
        assert_eq!(result.err(), Some(BoardError::DuplicateCard { card: ace }));
    }

    #[test]
    fn test_auto_move_ace_from_waste() {
        let ace = id(Suit::Spades, Rank::Ace);
        let mut board = BoardBuilder::new(TableConfig::default())
            .pile(PileId::Waste, &[(ace, true)])
            .build()
            .unwrap();

        let mv = board.auto_move_to_foundation(ace).unwrap();

        assert_eq!(mv.from, PileId::Waste);
        assert_eq!(mv.to, PileId::Foundation(0));
        assert_eq!(board.pile(PileId::Foundation(0)).cards(), &[ace]);
        assert!(board.pile(PileId::Waste).is_empty());
        assert!(board.audit().is_ok());
    }

    #[test]
    fn test_auto_move_reveals_tableau_card() {
        let hidden = id(Suit::Clubs, Rank::Nine);
        let ace = id(Suit::Diamonds, Rank::Ace);
        let mut board = BoardBuilder::new(TableConfig::default())
            .pile(PileId::Tableau(2), &[(hidden, false), (ace, true)])
            .build()
            .unwrap();

        let mv = board.auto_move_to_foundation(ace).unwrap();

        assert_eq!(mv.revealed, Some(hidden));
        assert!(board.card(hidden).face_up);
    }

    #[test]
    fn test_auto_move_requires_top_card() {
        let ace = id(Suit::Diamonds, Rank::Ace);
        let king = id(Suit::Clubs, Rank::King);
        let mut board = BoardBuilder::new(TableConfig::default())
            .pile(PileId::Tableau(0), &[(ace, true), (king, true)])
            .build()
            .unwrap();

        assert!(board.auto_move_to_foundation(ace).is_none());
        assert_eq!(board.pile(PileId::Tableau(0)).len(), 2);
    }

    #[test]
    fn test_auto_move_with_no_taker() {
        let two = id(Suit::Hearts, Rank::Two);
        let mut board = BoardBuilder::new(TableConfig::default())
            .pile(PileId::Waste, &[(two, true)])
            .build()
            .unwrap();

        assert!(board.auto_move_to_foundation(two).is_none());
        assert_eq!(board.pile(PileId::Waste).top(), Some(two));
    }

    #[test]
    fn test_commit_move_restores_on_rejection() {
        let king = id(Suit::Hearts, Rank::King);
        let seven = id(Suit::Spades, Rank::Seven);
        let mut board = BoardBuilder::new(TableConfig::default())
            .pile(PileId::Tableau(0), &[(king, true)])
            .pile(PileId::Tableau(1), &[(seven, true)])
            .build()
            .unwrap();

        let err = board.commit_move(PileId::Tableau(0), PileId::Tableau(1), king, 1).unwrap_err();

        assert_eq!(err, MoveError::Rejected { pile: PileId::Tableau(1), card: king });
        assert_eq!(board.pile(PileId::Tableau(0)).cards(), &[king]);
        assert!(board.audit().is_ok());
    }

    #[test]
    fn test_commit_move_detects_stale_run() {
        let king = id(Suit::Hearts, Rank::King);
        let queen = id(Suit::Spades, Rank::Queen);
        let mut board = BoardBuilder::new(TableConfig::default())
            .pile(PileId::Tableau(0), &[(king, true), (queen, true)])
            .build()
            .unwrap();

        let err = board.commit_move(PileId::Tableau(0), PileId::Tableau(1), king, 1).unwrap_err();

        assert_eq!(err, MoveError::StaleRun { pile: PileId::Tableau(0), expected: 1, found: 2 });
        assert_eq!(board.pile(PileId::Tableau(0)).cards(), &[king, queen]);
    }

    #[test]
    fn test_card_at_finds_topmost() {
        let board = Board::new(TableConfig::default());
        let column = board.pile(PileId::Tableau(6));
        let top = column.top().unwrap();

        assert_eq!(board.card_at(board.card(top).position), Some(top));

        let first = column.cards()[0];
        let sliver = board.card(first).position.offset(0.0, -60.0);
        assert_eq!(board.card_at(sliver), Some(first));

        assert_eq!(board.card_at(Point::new(-100.0, -100.0)), None);
    }

    #[test]
    fn test_is_won() {
        let mut builder = BoardBuilder::new(TableConfig::default());
        for (pile, suit) in PileId::foundations().zip(Suit::ALL) {
            let run: Vec<_> = Rank::ALL.iter().map(|&r| (id(suit, r), true)).collect();
            builder = builder.pile(pile, &run);
        }

        let board = builder.build().unwrap();

        assert!(board.is_won());
        assert!(board.audit().is_ok());
        assert!(!Board::new(TableConfig::default()).is_won());
    }

    #[test]
    fn test_audit_catches_foundation_disorder() {
        let two = id(Suit::Hearts, Rank::Two);
        let board = BoardBuilder::new(TableConfig::default())
            .pile(PileId::Foundation(0), &[(two, true)])
            .build()
            .unwrap();

        assert_eq!(
            board.audit(),
            Err(BoardError::FoundationOrder { pile: PileId::Foundation(0), index: 0 })
        );
    }

    #[test]
    fn test_audit_catches_tableau_disorder() {
        let board = BoardBuilder::new(TableConfig::default())
            .pile(
                PileId::Tableau(4),
                &[(id(Suit::Hearts, Rank::Nine), true), (id(Suit::Diamonds, Rank::Eight), true)],
            )
            .build()
            .unwrap();

        assert_eq!(
            board.audit(),
            Err(BoardError::TableauOrder { pile: PileId::Tableau(4), index: 1 })
        );
    }
}
