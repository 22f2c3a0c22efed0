//! Input events delivered by the windowing environment.
//!
//! Events arrive serially; each one is processed to completion by the
//! interaction controller before the next is delivered.

use serde::{Deserialize, Serialize};

use super::geometry::Point;

/// A user input event, in board coordinates.
///
/// ```
/// use rust_klondike::core::{InputEvent, Point};
///
/// let press = InputEvent::PointerDown(Point::new(65.0, 255.0));
/// assert_eq!(press.pointer(), Some(Point::new(65.0, 255.0)));
/// assert_eq!(InputEvent::DealRequested.pointer(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Primary button pressed.
    PointerDown(Point),
    /// Pointer moved with the button held.
    PointerMove(Point),
    /// Primary button released.
    PointerUp(Point),
    /// Double click on a card.
    DoubleClick(Point),
    /// Deal from the stock (keyboard shortcut).
    DealRequested,
    /// Discard the current game and deal a new one.
    NewGameRequested,
    /// Abort the current drag.
    CancelRequested,
}

impl InputEvent {
    /// Pointer position carried by the event, if any.
    #[must_use]
    pub fn pointer(&self) -> Option<Point> {
        match *self {
            InputEvent::PointerDown(p)
            | InputEvent::PointerMove(p)
            | InputEvent::PointerUp(p)
            | InputEvent::DoubleClick(p) => Some(p),
            InputEvent::DealRequested
            | InputEvent::NewGameRequested
            | InputEvent::CancelRequested => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_events_carry_position() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(InputEvent::PointerMove(p).pointer(), Some(p));
        assert_eq!(InputEvent::PointerUp(p).pointer(), Some(p));
        assert_eq!(InputEvent::DoubleClick(p).pointer(), Some(p));
        assert_eq!(InputEvent::CancelRequested.pointer(), None);
        assert_eq!(InputEvent::NewGameRequested.pointer(), None);
    }

    #[test]
    fn test_event_serialization() {
        let event = InputEvent::PointerUp(Point::new(3.5, 4.0));
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: InputEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
