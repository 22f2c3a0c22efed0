//! Rule rejections and board audit failures.
//!
//! Neither is fatal: a rejected move leaves the table untouched and the
//! controller snaps the dragged run back. `BoardError` only surfaces from
//! [`Board::audit`](crate::games::klondike::Board::audit).

use derive_more::{Display, Error};

use super::config::PileId;
use super::entity::CardId;

/// Why a pile refused an incoming run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Nothing to move.
    #[display("cannot move an empty run")]
    EmptyRun,

    /// The pile only takes runs of a fixed length.
    #[display("{pile} does not accept a run of {len} cards")]
    WrongArity { pile: PileId, len: usize },

    /// The head of the run does not continue the pile.
    #[display("{card} cannot be placed on {pile}")]
    Rejected { pile: PileId, card: CardId },

    /// The card is not where the move expected it.
    #[display("{card} is not in {pile}")]
    NotInPile { pile: PileId, card: CardId },

    /// The run picked up earlier no longer matches the origin pile.
    #[display("run of {expected} cards picked up from {pile} is now {found} cards")]
    StaleRun { pile: PileId, expected: usize, found: usize },

    /// The card cannot be picked up or auto-moved from where it lies.
    #[display("{card} cannot be moved")]
    NotMovable { card: CardId },
}

/// A violated table invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    #[display("{card} appears in more than one place")]
    DuplicateCard { card: CardId },

    #[display("{card} is not in any pile")]
    MissingCard { card: CardId },

    #[display("{card} sits in {pile} but points elsewhere")]
    OwnerMismatch { card: CardId, pile: PileId },

    #[display("{pile} is out of order at position {index}")]
    FoundationOrder { pile: PileId, index: usize },

    #[display("{pile} breaks its run at position {index}")]
    TableauOrder { pile: PileId, index: usize },
}
