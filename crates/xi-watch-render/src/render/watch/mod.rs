use core::convert::Infallible;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::{DrawTarget, DrawTargetExt, Point, Primitive, RgbColor, Size},
    primitives::{Circle, PrimitiveStyle, Rectangle},
    Drawable,
};
use watch_fb::FrameBuffer;
use xi_watch_core::{
    geometry::{Point as UiPoint, Rect},
    render::{ButtonView, MenuItemView, ScreenView},
    settings::{SCREEN_HEIGHT, SCREEN_WIDTH},
};

use super::FrameRenderer;

mod home;
mod menu;
mod numgen;
mod palette;
mod placeholder;
mod primitives;
mod text;

#[allow(unused_imports)]
use self::{
    home::*, menu::*, numgen::*, palette::*, placeholder::*, primitives::*, text::*,
};

pub use self::primitives::{fill_rounded_rect, stroke_rounded_rect};

/// Bezel and inner-panel geometry shared by every screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChromeStyle {
    pub border_width: i32,
    pub outer_radius: i32,
    pub inner_radius: i32,
    pub padding: i32,
}

impl Default for ChromeStyle {
    fn default() -> Self {
        Self {
            border_width: 4,
            outer_radius: 15,
            inner_radius: 15,
            padding: 10,
        }
    }
}

impl ChromeStyle {
    pub const fn inner_panel(&self) -> Rect {
        Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT).inset(self.padding)
    }
}

/// Renderer for the home clock, app menu, number generator, and placeholders.
#[derive(Debug, Clone, Default)]
pub struct WatchRenderer {
    chrome: ChromeStyle,
    frames_rendered: u32,
}

impl WatchRenderer {
    pub const fn frames_rendered(&self) -> u32 {
        self.frames_rendered
    }

    /// Draws one view into any RGB565 target.
    pub fn draw<D>(&self, screen: ScreenView<'_>, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        match screen {
            ScreenView::Home { time, date, enter } => {
                draw_home(target, &self.chrome, time, date, enter)
            }
            ScreenView::AppMenu { area, items } => draw_menu(target, &self.chrome, area, items),
            ScreenView::NumberSlider {
                track,
                knob,
                knob_radius,
                value,
                label_offset,
                generate,
                back,
            } => draw_slider_screen(
                target,
                &self.chrome,
                SliderView {
                    track,
                    knob,
                    knob_radius,
                    value,
                    label_offset,
                },
                generate,
                back,
            ),
            ScreenView::NumberResult { number, back } => {
                draw_result_screen(target, &self.chrome, number, back)
            }
            ScreenView::Placeholder { message } => draw_placeholder(target, message),
        }
    }
}

impl FrameRenderer for WatchRenderer {
    fn render(&mut self, screen: ScreenView<'_>, frame: &mut FrameBuffer) {
        let result: Result<(), Infallible> = self.draw(screen, frame);
        if let Err(never) = result {
            match never {}
        }
        self.frames_rendered = self.frames_rendered.wrapping_add(1);
    }
}

fn to_point(point: UiPoint) -> Point {
    Point::new(point.x, point.y)
}

/// `None` for empty rects, which draw nothing.
fn to_rectangle(rect: Rect) -> Option<Rectangle> {
    if rect.is_empty() {
        return None;
    }
    Some(Rectangle::new(
        Point::new(rect.x, rect.y),
        Size::new(rect.width as u32, rect.height as u32),
    ))
}
