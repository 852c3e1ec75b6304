//! Touch-panel orientation correction.
//!
//! Some panels report coordinates with swapped or mirrored axes relative to
//! the display. The correction is three static flags applied in a fixed order:
//! swap, then horizontal inversion, then vertical inversion.

use crate::{geometry::Point, input::InputEvent};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CalibrationConfig {
    pub swap_xy: bool,
    pub invert_x: bool,
    pub invert_y: bool,
}

impl CalibrationConfig {
    /// Pass-through, for mouse-driven simulation.
    pub const IDENTITY: Self = Self::new(false, false, false);
    /// Resistive 480x320 panel mounted with its axes swapped.
    pub const TOUCH_PANEL: Self = Self::new(true, false, false);

    pub const fn new(swap_xy: bool, invert_x: bool, invert_y: bool) -> Self {
        Self {
            swap_xy,
            invert_x,
            invert_y,
        }
    }

}

/// Maps raw pointer coordinates into logical screen space.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Calibrator {
    config: CalibrationConfig,
    width: i32,
    height: i32,
}

impl Calibrator {
    pub const fn new(config: CalibrationConfig, width: i32, height: i32) -> Self {
        Self {
            config,
            width,
            height,
        }
    }

    pub const fn config(&self) -> CalibrationConfig {
        self.config
    }

    pub const fn transform(&self, raw: Point) -> Point {
        let (mut x, mut y) = (raw.x, raw.y);
        if self.config.swap_xy {
            (x, y) = (y, x);
        }
        if self.config.invert_x {
            x = self.width - x;
        }
        if self.config.invert_y {
            y = self.height - y;
        }
        Point::new(x, y)
    }

    /// Relative motion follows the axes but not the origin shift.
    pub const fn transform_delta(&self, dx: i32, dy: i32) -> (i32, i32) {
        let (mut dx, mut dy) = (dx, dy);
        if self.config.swap_xy {
            (dx, dy) = (dy, dx);
        }
        if self.config.invert_x {
            dx = -dx;
        }
        if self.config.invert_y {
            dy = -dy;
        }
        (dx, dy)
    }

    pub const fn apply(&self, event: InputEvent) -> InputEvent {
        match event {
            InputEvent::PointerDown(pos) => InputEvent::PointerDown(self.transform(pos)),
            InputEvent::PointerUp(pos) => InputEvent::PointerUp(self.transform(pos)),
            InputEvent::PointerMove { pos, dx, dy } => {
                let (dx, dy) = self.transform_delta(dx, dy);
                InputEvent::PointerMove {
                    pos: self.transform(pos),
                    dx,
                    dy,
                }
            }
            InputEvent::KeyDown | InputEvent::Quit => event,
        }
    }
}
