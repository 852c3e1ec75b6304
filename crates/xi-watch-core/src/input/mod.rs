//! Input abstraction layer.

pub mod mock;

use crate::geometry::Point;

/// Discrete input events, drained once per frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    PointerDown(Point),
    PointerUp(Point),
    /// Pointer motion; `dx`/`dy` are relative to the previous position.
    PointerMove {
        pos: Point,
        dx: i32,
        dy: i32,
    },
    KeyDown,
    Quit,
}

impl InputEvent {
    /// Pointer position carried by the event, if any.
    pub const fn position(self) -> Option<Point> {
        match self {
            Self::PointerDown(pos) | Self::PointerUp(pos) | Self::PointerMove { pos, .. } => {
                Some(pos)
            }
            Self::KeyDown | Self::Quit => None,
        }
    }
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
