//! Integer screen geometry shared by layout, hit-testing, and renderers.

/// A position in logical screen pixels.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle; `right` and `bottom` are exclusive.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    pub const fn center(self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Hit-test; empty rectangles contain nothing.
    pub const fn contains(self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Shrinks every edge by `amount` (negative grows).
    pub const fn inset(self, amount: i32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.width - 2 * amount,
            self.height - 2 * amount,
        )
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_excludes_right_and_bottom_edges() {
        let rect = Rect::new(10, 20, 5, 5);

        assert!(rect.contains(Point::new(10, 20)));
        assert!(rect.contains(Point::new(14, 24)));
        assert!(!rect.contains(Point::new(15, 24)));
        assert!(!rect.contains(Point::new(14, 25)));
        assert!(!rect.contains(Point::new(9, 20)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let rect = Rect::new(0, 0, 10, 10).inset(6);

        assert!(rect.is_empty());
        assert!(!rect.contains(Point::new(5, 5)));
    }

    #[test]
    fn inset_keeps_center() {
        let rect = Rect::new(0, 0, 480, 320);

        assert_eq!(rect.inset(10), Rect::new(10, 10, 460, 300));
        assert_eq!(rect.inset(10).center(), rect.center());
    }
}
