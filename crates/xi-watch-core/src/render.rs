//! App-level view models consumed by the board/host renderer.

use crate::geometry::{Point, Rect};

pub const STOPWATCH_PLACEHOLDER: &str = "Stopwatch Placeholder - Press any key";
pub const COMPLEX_APP_PLACEHOLDER: &str = "Complex App Placeholder - Press any key";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ButtonView<'a> {
    pub label: &'a str,
    pub rect: Rect,
    pub hovered: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MenuItemView<'a> {
    pub label: &'a str,
    /// Relative to the scroll area's top-left corner.
    pub rect: Rect,
    pub hovered: bool,
}

/// One frame's worth of UI, borrowed from the app for the duration of a draw.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScreenView<'a> {
    Home {
        time: &'a str,
        date: &'a str,
        enter: ButtonView<'a>,
    },
    AppMenu {
        /// Clip rectangle in screen coordinates.
        area: Rect,
        /// Only items inside the viewport.
        items: &'a [MenuItemView<'a>],
    },
    NumberSlider {
        track: Rect,
        knob: Point,
        knob_radius: i32,
        value: i32,
        label_offset: i32,
        generate: ButtonView<'a>,
        back: ButtonView<'a>,
    },
    NumberResult {
        number: i32,
        back: ButtonView<'a>,
    },
    Placeholder {
        message: &'a str,
    },
}
