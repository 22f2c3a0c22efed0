//! Presentation boundary.
//!
//! The engine never draws. It hands a [`Presenter`] the cards and empty-pile
//! outlines to show, in paint order, and tells it when a game is won.
//!
//! ## Key Types
//!
//! - `Presenter`: draw-call sink implemented by a front end
//! - `Table`: board, drag state and presenter wired together
//! - `TextPresenter`: character-grid presenter for terminals and logs

pub mod presenter;
pub mod table;
pub mod text;

pub use presenter::{present, Presenter};
pub use table::Table;
pub use text::TextPresenter;
