//! Pointer and keyboard interaction.
//!
//! Input arrives as [`InputEvent`](crate::core::InputEvent)s; the
//! [`DragState`] machine turns them into board changes.

pub mod drag;

pub use drag::{DragSession, DragState, Outcome, Transition};
