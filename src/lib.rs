//! # rust-klondike
//!
//! A Klondike solitaire table engine: card and pile model, dealing,
//! drag-and-drop interaction and win detection.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The engine never draws. Front ends implement
//!    `Presenter` and feed `InputEvent`s in board coordinates.
//!
//! 2. **Piles Own Cards**: Every card is in exactly one pile at all times.
//!    A dragged run stays in its origin pile until the drop commits.
//!
//! 3. **Reproducible**: Deals come from a seeded ChaCha RNG, so a session
//!    replays exactly from `TableConfig::seed`.
//!
//! ## Modules
//!
//! - `core`: Card and pile ids, geometry, input events, RNG, configuration, errors
//! - `cards`: Card faces, runtime card state and the deck arena
//! - `rules`: Foundation and tableau acceptance, completion check
//! - `piles`: Pile sequences, layout and acceptance
//! - `games`: The Klondike board (deal, stock, moves, audit)
//! - `interaction`: Drag-and-drop state machine
//! - `presentation`: Presenter boundary, `Table`, text rendering

pub mod core;
pub mod cards;
pub mod rules;
pub mod piles;
pub mod games;
pub mod interaction;
pub mod presentation;

// Re-export commonly used types
pub use crate::core::{
    BoardError, CardId, GameRng, InputEvent, MoveError, PileId, Point, Rect, TableConfig,
};

pub use crate::cards::{Card, CardFace, CardImage, Color, Deck, Rank, Suit};

pub use crate::piles::{Pile, PileKind, Run};

pub use crate::games::klondike::{Board, BoardBuilder, DealOutcome, Move};

pub use crate::interaction::{DragSession, DragState, Outcome, Transition};

pub use crate::presentation::{Presenter, Table, TextPresenter};
