//! Geometry of the watch panel.

/// Panel width in pixels.
pub const WIDTH: usize = 480;
/// Panel height in pixels.
pub const HEIGHT: usize = 320;
/// Number of pixels in one display line.
pub const LINE_PIXELS: usize = WIDTH;
/// Total framebuffer size in pixels.
pub const PIXEL_COUNT: usize = WIDTH * HEIGHT;
