//! Drag-and-drop state machine.
//!
//! ## States
//!
//! - `Idle`: nothing in hand
//! - `Dragging`: a run has been picked up and follows the pointer
//!
//! [`DragState::on_event`] is the whole controller: it consumes the current
//! state and one input event, mutates the board through its pile contract,
//! and returns the next state plus an [`Outcome`] describing what happened.
//! There is no hidden state, so every sequence of events can be replayed in
//! a unit test without a UI loop.
//!
//! ## Drop resolution
//!
//! On release, single cards are offered to the foundations first (first
//! match wins). Otherwise the tableau columns under the pointer that take
//! the run's head compete, and the one whose anchor is horizontally closest
//! to the pointer wins. No taker means the run snaps back.

use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::core::{CardId, InputEvent, PileId, Point};
use crate::games::klondike::{Board, DealOutcome, Move};
use crate::piles::{PileKind, Run};

/// A run in hand.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    /// Pile the run was picked up from.
    pub(crate) origin: PileId,

    /// The run, head first, never empty. Still owned by `origin` until the
    /// drop commits.
    pub(crate) run: Run,

    /// Per-card offset from the pointer to the card centre.
    pub(crate) offsets: SmallVec<[Point; 13]>,
}

impl DragSession {
    #[must_use]
    pub fn origin(&self) -> PileId {
        self.origin
    }

    /// The cards in hand, head first.
    #[must_use]
    pub fn run(&self) -> &[CardId] {
        &self.run
    }

    #[must_use]
    pub fn offsets(&self) -> &[Point] {
        &self.offsets
    }

    /// Bottom card of the run; its placement decides the drop.
    #[must_use]
    pub fn head(&self) -> CardId {
        self.run[0]
    }
}

/// Controller state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// What handling one event did.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The event had no effect.
    Ignored,
    /// The stock was dealt from (or recycled).
    Dealt(DealOutcome),
    /// A face-down tableau top was turned over.
    Flipped(CardId),
    /// A run was picked up.
    PickedUp { origin: PileId, len: usize },
    /// The run in hand followed the pointer.
    Dragged,
    /// A run changed piles. `won` is true if the table is now complete.
    Moved { mv: Move, won: bool },
    /// The run in hand went back to its pile.
    SnappedBack(PileId),
    /// A new game was dealt.
    NewGame,
}

impl Outcome {
    /// Did cards change piles?
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, Outcome::Moved { .. })
    }
}

/// Result of a state transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub next: DragState,
    pub outcome: Outcome,
}

impl Transition {
    fn idle(outcome: Outcome) -> Self {
        Self { next: DragState::Idle, outcome }
    }
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    /// The run in hand, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// Handle one input event.
    #[instrument(level = "debug", skip(self, board), fields(dragging = self.is_dragging()))]
    pub fn on_event(self, event: InputEvent, board: &mut Board) -> Transition {
        match (self, event) {
            (DragState::Dragging(session), InputEvent::PointerMove(p)) => drag_to(board, session, p),
            (DragState::Dragging(session), InputEvent::PointerUp(p)) => drop_at(board, &session, p),
            (DragState::Dragging(session), InputEvent::CancelRequested) => {
                Transition::idle(snap_back(board, &session))
            }
            (state, InputEvent::PointerDown(p)) => {
                state.release(board);
                pointer_down(board, p)
            }
            (state, InputEvent::DoubleClick(p)) => {
                state.release(board);
                double_click(board, p)
            }
            (state, InputEvent::DealRequested) => {
                state.release(board);
                Transition::idle(Outcome::Dealt(board.deal_from_stock()))
            }
            (_, InputEvent::NewGameRequested) => {
                board.reset();
                Transition::idle(Outcome::NewGame)
            }
            (state, event) => {
                debug!(?event, "ignored");
                Transition { next: state, outcome: Outcome::Ignored }
            }
        }
    }

    /// Put back whatever is in hand.
    fn release(self, board: &mut Board) {
        if let DragState::Dragging(session) = self {
            snap_back(board, &session);
        }
    }
}

/// Press: deal from the stock, flip a tableau top, or pick up a run.
fn pointer_down(board: &mut Board, p: Point) -> Transition {
    if board.pile(PileId::Stock).contains_point(p, board.deck(), board.config()) {
        return Transition::idle(Outcome::Dealt(board.deal_from_stock()));
    }

    let Some(card) = board.card_at(p) else {
        return Transition::idle(Outcome::Ignored);
    };
    let Some(origin) = board.card(card).pile else {
        return Transition::idle(Outcome::Ignored);
    };
    let pile = board.pile(origin);
    let grab = board.card(card).position.minus(p);

    let (run, offsets): (Run, SmallVec<[Point; 13]>) = match pile.kind() {
        PileKind::Stock => return Transition::idle(Outcome::Ignored),
        PileKind::Waste | PileKind::Foundation => {
            if pile.top() != Some(card) {
                return Transition::idle(Outcome::Ignored);
            }
            (Run::from_slice(&[card]), SmallVec::from_slice(&[grab]))
        }
        PileKind::Tableau => {
            if !board.card(card).face_up {
                if pile.top() == Some(card) {
                    board.reveal_top(origin);
                    debug!(%card, pile = %origin, "turned over tableau top");
                    return Transition::idle(Outcome::Flipped(card));
                }
                return Transition::idle(Outcome::Ignored);
            }
            let Some(index) = pile.position_of(card) else {
                return Transition::idle(Outcome::Ignored);
            };
            let run = Run::from_slice(&pile.cards()[index..]);
            let step = board.config().tableau_gap_face_up;
            let offsets = (0..run.len()).map(|i| grab.offset(0.0, i as f32 * step)).collect();
            (run, offsets)
        }
    };

    debug!(head = %card, pile = %origin, len = run.len(), "picked up run");
    let len = run.len();
    Transition {
        next: DragState::Dragging(DragSession { origin, run, offsets }),
        outcome: Outcome::PickedUp { origin, len },
    }
}

/// Move: the run follows the pointer. Pile membership is untouched.
fn drag_to(board: &mut Board, session: DragSession, p: Point) -> Transition {
    for (&id, &offset) in session.run.iter().zip(&session.offsets) {
        board.set_card_position(id, p + offset);
    }
    Transition {
        next: DragState::Dragging(session),
        outcome: Outcome::Dragged,
    }
}

/// Release: commit to the best drop target or snap back.
fn drop_at(board: &mut Board, session: &DragSession, p: Point) -> Transition {
    let Some(target) = drop_target(board, session, p) else {
        return Transition::idle(snap_back(board, session));
    };

    match board.commit_move(session.origin, target, session.head(), session.run.len()) {
        Ok(mv) => {
            let won = board.is_won();
            Transition::idle(Outcome::Moved { mv, won })
        }
        Err(err) => {
            debug!(%err, "drop refused");
            Transition::idle(snap_back(board, session))
        }
    }
}

fn drop_target(board: &Board, session: &DragSession, p: Point) -> Option<PileId> {
    let (deck, config) = (board.deck(), board.config());
    let head = session.head();

    if session.run.len() == 1 {
        let foundation = PileId::foundations().find(|&f| {
            let pile = board.pile(f);
            f != session.origin && pile.contains_point(p, deck, config) && pile.can_accept(head, deck)
        });
        if foundation.is_some() {
            return foundation;
        }
    }

    PileId::tableau()
        .filter(|&t| t != session.origin)
        .map(|t| board.pile(t))
        .filter(|pile| pile.contains_point(p, deck, config) && pile.can_accept_head(head, deck))
        .map(|pile| (pile.id(), (pile.anchor().x - p.x).abs()))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

/// Return the run to its pre-drag presentation.
fn snap_back(board: &mut Board, session: &DragSession) -> Outcome {
    board.relayout(session.origin);
    debug!(pile = %session.origin, "snapped back");
    Outcome::SnappedBack(session.origin)
}

/// Double click: send the card under the pointer to a foundation.
fn double_click(board: &mut Board, p: Point) -> Transition {
    let outcome = board
        .card_at(p)
        .and_then(|card| board.auto_move_to_foundation(card))
        .map_or(Outcome::Ignored, |mv| {
            let won = board.is_won();
            Outcome::Moved { mv, won }
        });
    Transition::idle(outcome)
}
