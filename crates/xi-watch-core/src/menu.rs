//! Vertically scrollable app-launcher list.
//!
//! Items live in a clipped scroll area. Only items whose top edge lies in
//! `[0, area_height - item_height]` (area-local) are drawn or hit-tested.

use heapless::String;
use log::debug;

use crate::{
    geometry::{Point, Rect},
    input::InputEvent,
};

pub const MAX_MENU_ITEMS: usize = 8;
pub const MENU_ID_BYTES: usize = 32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MenuItem {
    pub label: &'static str,
}

impl MenuItem {
    pub const fn new(label: &'static str) -> Self {
        Self { label }
    }

    /// Routing identifier: the label lower-cased with spaces removed.
    pub fn identifier(&self) -> String<MENU_ID_BYTES> {
        let mut id = String::new();
        for ch in self.label.chars().filter(|ch| *ch != ' ') {
            for lower in ch.to_lowercase() {
                if id.push(lower).is_err() {
                    return id;
                }
            }
        }
        id
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MenuLayout {
    /// Scroll viewport in screen coordinates.
    pub area: Rect,
    pub item_height: i32,
    pub spacing: i32,
    pub visible_items: u8,
    /// Gap above the first item, area-local.
    pub top_padding: i32,
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self {
            area: Rect::new(20, 20, 440, 280),
            item_height: 65,
            spacing: 25,
            visible_items: 3,
            top_padding: 10,
        }
    }
}

impl MenuLayout {
    pub const fn stride(&self) -> i32 {
        self.item_height + self.spacing
    }

    /// `(min_scroll, max_scroll)`; `min_scroll` is zero when every item fits.
    pub fn scroll_bounds(&self, item_count: usize) -> (i32, i32) {
        let hidden = item_count.saturating_sub(self.visible_items as usize) as i32;
        (-hidden.saturating_mul(self.stride()), 0)
    }

    /// Area-local rect of item `index` at scroll `offset`.
    pub fn item_rect(&self, index: usize, offset: i32) -> Rect {
        let y = self.top_padding + index as i32 * self.stride() + offset;
        Rect::new(0, y, self.area.width, self.item_height)
    }

    pub fn is_visible(&self, item: Rect) -> bool {
        (0..=self.area.height - self.item_height).contains(&item.y)
    }

    pub const fn to_local(&self, point: Point) -> Point {
        Point::new(point.x - self.area.x, point.y - self.area.y)
    }

    /// Visible item under a screen-space point.
    pub fn hit_test(&self, item_count: usize, offset: i32, point: Point) -> Option<usize> {
        let local = self.to_local(point);
        (0..item_count).find(|&index| {
            let rect = self.item_rect(index, offset);
            self.is_visible(rect) && rect.contains(local)
        })
    }
}

/// Scroll position, always within `[min, max]`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScrollState {
    offset: i32,
    min: i32,
    max: i32,
}

impl ScrollState {
    pub fn new(layout: &MenuLayout, item_count: usize) -> Self {
        let (min, max) = layout.scroll_bounds(item_count);
        Self {
            offset: max,
            min,
            max,
        }
    }

    pub const fn offset(&self) -> i32 {
        self.offset
    }

    pub const fn bounds(&self) -> (i32, i32) {
        (self.min, self.max)
    }

    /// Applies a drag delta; returns `true` when the offset moved.
    pub fn scroll_by(&mut self, dy: i32) -> bool {
        let next = self.offset.saturating_add(dy).clamp(self.min, self.max);
        let moved = next != self.offset;
        self.offset = next;
        moved
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DragState {
    Idle,
    Dragging,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuOutcome {
    Unchanged,
    Scrolled,
    Selected(usize),
}

/// Drag-to-scroll and tap-to-select over a fixed item list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScrollMenu {
    layout: MenuLayout,
    item_count: usize,
    scroll: ScrollState,
    drag: DragState,
}

impl ScrollMenu {
    pub fn new(layout: MenuLayout, item_count: usize) -> Self {
        Self {
            layout,
            item_count,
            scroll: ScrollState::new(&layout, item_count),
            drag: DragState::Idle,
        }
    }

    pub const fn layout(&self) -> &MenuLayout {
        &self.layout
    }

    pub const fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub const fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Drops any drag carried over from a previous visit.
    pub fn reset_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    pub fn handle(&mut self, event: InputEvent) -> MenuOutcome {
        match event {
            InputEvent::PointerDown(pos) => {
                if self.layout.area.contains(pos) {
                    self.drag = DragState::Dragging;
                }
                MenuOutcome::Unchanged
            }
            InputEvent::PointerMove { dy, .. } if self.drag == DragState::Dragging => {
                if self.scroll.scroll_by(dy) {
                    MenuOutcome::Scrolled
                } else {
                    MenuOutcome::Unchanged
                }
            }
            InputEvent::PointerUp(pos) => {
                let was_dragging = self.drag == DragState::Dragging;
                self.drag = DragState::Idle;
                if !was_dragging {
                    return MenuOutcome::Unchanged;
                }

                match self
                    .layout
                    .hit_test(self.item_count, self.scroll.offset(), pos)
                {
                    Some(index) => {
                        debug!("menu: release at {:?} selects item {}", pos, index);
                        MenuOutcome::Selected(index)
                    }
                    None => MenuOutcome::Unchanged,
                }
            }
            InputEvent::PointerMove { .. } | InputEvent::KeyDown | InputEvent::Quit => {
                MenuOutcome::Unchanged
            }
        }
    }

    /// `(index, area-local rect)` of every item currently in the viewport.
    pub fn visible_items(&self) -> impl Iterator<Item = (usize, Rect)> + '_ {
        (0..self.item_count).filter_map(move |index| {
            let rect = self.layout.item_rect(index, self.scroll.offset());
            self.layout.is_visible(rect).then_some((index, rect))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(menu: &mut ScrollMenu, from: Point, dy: i32) {
        menu.handle(InputEvent::PointerDown(from));
        menu.handle(InputEvent::PointerMove {
            pos: Point::new(from.x, from.y + dy),
            dx: 0,
            dy,
        });
    }

    #[test]
    fn identifier_strips_spaces_and_case() {
        assert_eq!(
            MenuItem::new("Number Generator").identifier().as_str(),
            "numbergenerator"
        );
        assert_eq!(MenuItem::new("Stopwatch").identifier().as_str(), "stopwatch");
    }

    #[test]
    fn three_items_with_three_visible_cannot_scroll() {
        let mut menu = ScrollMenu::new(MenuLayout::default(), 3);

        assert_eq!(menu.scroll().bounds(), (0, 0));
        drag(&mut menu, Point::new(100, 100), -80);
        assert_eq!(menu.scroll().offset(), 0);
        drag(&mut menu, Point::new(100, 100), 80);
        assert_eq!(menu.scroll().offset(), 0);
    }

    #[test]
    fn offset_stays_clamped_for_any_delta_sequence() {
        let layout = MenuLayout::default();
        let mut menu = ScrollMenu::new(layout, 7);
        let (min, max) = menu.scroll().bounds();
        assert_eq!(min, -4 * layout.stride());

        menu.handle(InputEvent::PointerDown(Point::new(100, 100)));
        for dy in [-50, -1000, 37, 999, -3, i32::MIN, i32::MAX, -420, 12] {
            menu.handle(InputEvent::PointerMove {
                pos: Point::new(100, 100),
                dx: 0,
                dy,
            });
            let offset = menu.scroll().offset();
            assert!((min..=max).contains(&offset), "offset {offset} escaped");
        }
    }

    #[test]
    fn move_without_press_does_not_scroll() {
        let mut menu = ScrollMenu::new(MenuLayout::default(), 6);

        let outcome = menu.handle(InputEvent::PointerMove {
            pos: Point::new(100, 100),
            dx: 0,
            dy: -40,
        });

        assert_eq!(outcome, MenuOutcome::Unchanged);
        assert_eq!(menu.scroll().offset(), 0);
    }

    #[test]
    fn press_outside_area_does_not_start_drag() {
        let mut menu = ScrollMenu::new(MenuLayout::default(), 6);

        menu.handle(InputEvent::PointerDown(Point::new(5, 5)));

        assert_eq!(menu.drag_state(), DragState::Idle);
    }

    #[test]
    fn tap_on_item_selects_it() {
        let mut menu = ScrollMenu::new(MenuLayout::default(), 3);
        // Item 1 spans screen y 120..185.
        let tap = Point::new(240, 150);

        assert_eq!(
            menu.handle(InputEvent::PointerDown(tap)),
            MenuOutcome::Unchanged
        );
        assert_eq!(
            menu.handle(InputEvent::PointerUp(tap)),
            MenuOutcome::Selected(1)
        );
        assert_eq!(menu.drag_state(), DragState::Idle);
    }

    #[test]
    fn release_between_items_selects_nothing() {
        let mut menu = ScrollMenu::new(MenuLayout::default(), 3);
        // Gap between item 0 (30..95) and item 1 (120..185).
        let gap = Point::new(240, 105);

        menu.handle(InputEvent::PointerDown(gap));

        assert_eq!(
            menu.handle(InputEvent::PointerUp(gap)),
            MenuOutcome::Unchanged
        );
    }

    #[test]
    fn release_without_press_selects_nothing() {
        let mut menu = ScrollMenu::new(MenuLayout::default(), 3);

        assert_eq!(
            menu.handle(InputEvent::PointerUp(Point::new(240, 150))),
            MenuOutcome::Unchanged
        );
    }

    #[test]
    fn scrolled_out_items_are_neither_visible_nor_hittable() {
        let layout = MenuLayout::default();
        let mut menu = ScrollMenu::new(layout, 5);
        drag(&mut menu, Point::new(240, 200), -20);
        assert_eq!(menu.scroll().offset(), -20);

        // Item 0 top edge is now at -10: hidden.
        let visible: heapless::Vec<usize, MAX_MENU_ITEMS> =
            menu.visible_items().map(|(index, _)| index).collect();
        assert_eq!(visible.as_slice(), &[1, 2]);

        let item0 = layout.item_rect(0, -20);
        let inside_item0 = Point::new(
            layout.area.x + 100,
            layout.area.y + item0.y + item0.height - 5,
        );
        assert_eq!(layout.hit_test(5, -20, inside_item0), None);
    }
}
