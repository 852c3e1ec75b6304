//! Horizontal slider whose knob position encodes an integer.

use crate::geometry::{Point, Rect};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SliderConfig {
    /// Left end of the track.
    pub x: i32,
    /// Track centerline.
    pub y: i32,
    /// Track length in pixels; must be non-zero.
    pub width: i32,
    pub height: i32,
    pub knob_radius: i32,
    pub min_val: i32,
    pub max_val: i32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            x: 50,
            y: 150,
            width: 400,
            height: 5,
            knob_radius: 10,
            min_val: 1,
            max_val: 100,
        }
    }
}

impl SliderConfig {
    pub const fn track(&self) -> Rect {
        Rect::new(self.x, self.y - self.height / 2, self.width, self.height)
    }

    pub const fn knob_max_x(&self) -> i32 {
        self.x + self.width
    }

    /// Linear map of a knob position onto `[min_val, max_val]`, truncating.
    pub fn value_at(&self, knob_x: i32) -> i32 {
        let travel = i64::from(knob_x.clamp(self.x, self.knob_max_x()) - self.x);
        let span = i64::from(self.max_val) - i64::from(self.min_val);
        let width = i64::from(self.width.max(1));
        (i64::from(self.min_val) + travel * span / width) as i32
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SliderState {
    knob_x: i32,
    dragging: bool,
}

impl SliderState {
    /// Knob parked at the left end of the track.
    pub const fn new(config: &SliderConfig) -> Self {
        Self {
            knob_x: config.x,
            dragging: false,
        }
    }

    pub const fn knob_x(&self) -> i32 {
        self.knob_x
    }

    pub const fn knob(&self, config: &SliderConfig) -> Point {
        Point::new(self.knob_x, config.y)
    }

    pub fn value(&self, config: &SliderConfig) -> i32 {
        config.value_at(self.knob_x)
    }

    /// Grabs the knob when the press lands within twice its radius; returns
    /// whether this press grabbed it.
    pub fn press(&mut self, config: &SliderConfig, pos: Point) -> bool {
        let dx = i64::from(self.knob_x - pos.x);
        let dy = i64::from(config.y - pos.y);
        let reach = i64::from(config.knob_radius) * 2;
        let grabbed = dx * dx + dy * dy < reach * reach;
        if grabbed {
            self.dragging = true;
        }
        grabbed
    }

    /// Follows horizontal pointer motion while grabbed; returns `true` when
    /// the knob moved.
    pub fn drag_to(&mut self, config: &SliderConfig, pointer_x: i32) -> bool {
        if !self.dragging {
            return false;
        }

        let next = pointer_x.clamp(config.x, config.knob_max_x());
        let moved = next != self.knob_x;
        self.knob_x = next;
        moved
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rightmost_knob_yields_max_value() {
        let config = SliderConfig::default();

        assert_eq!(config.value_at(config.x + 400), 100);
        assert_eq!(config.value_at(config.x), 1);
    }

    #[test]
    fn value_truncates_toward_min() {
        let config = SliderConfig::default();

        // 1 + 399 * 99 / 400 = 1 + 98.75
        assert_eq!(config.value_at(config.x + 399), 99);
        assert_eq!(config.value_at(config.x + 200), 50);
    }

    #[test]
    fn value_stays_in_range_for_every_track_position() {
        let config = SliderConfig::default();

        for knob_x in (config.x - 50)..=(config.knob_max_x() + 50) {
            let value = config.value_at(knob_x);
            assert!((config.min_val..=config.max_val).contains(&value));
        }
    }

    #[test]
    fn press_far_from_knob_does_not_grab() {
        let config = SliderConfig::default();
        let mut slider = SliderState::new(&config);

        assert!(!slider.press(&config, Point::new(config.x + 20, config.y)));
        assert!(!slider.drag_to(&config, 300));
        assert_eq!(slider.knob_x(), config.x);
    }

    #[test]
    fn drag_is_clamped_to_track() {
        let config = SliderConfig::default();
        let mut slider = SliderState::new(&config);

        assert!(slider.press(&config, Point::new(config.x + 5, config.y + 5)));
        assert!(slider.drag_to(&config, 1_000));
        assert_eq!(slider.knob_x(), config.knob_max_x());
        assert!(slider.drag_to(&config, -1_000));
        assert_eq!(slider.knob_x(), config.x);

        slider.release();
        assert!(!slider.drag_to(&config, 200));
        assert_eq!(slider.value(&config), config.min_val);
    }

    #[test]
    fn far_press_during_grab_reports_no_grab() {
        let config = SliderConfig::default();
        let mut slider = SliderState::new(&config);

        assert!(slider.press(&config, Point::new(config.x, config.y)));
        assert!(!slider.press(&config, Point::new(config.x + 300, config.y + 100)));
        // The earlier grab still holds.
        assert!(slider.drag_to(&config, config.x + 40));
    }
}
