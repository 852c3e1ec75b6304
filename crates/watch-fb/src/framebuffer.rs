//! In-memory framebuffer for the watch panel.

use core::convert::TryFrom;

use crate::format::{HEIGHT, LINE_PIXELS, PIXEL_COUNT, WIDTH};

/// RGB565 framebuffer, row-major, one `u16` per pixel.
#[derive(Clone)]
pub struct FrameBuffer {
    pixels: [u16; PIXEL_COUNT],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Creates a new black framebuffer.
    pub const fn new() -> Self {
        Self {
            pixels: [0u16; PIXEL_COUNT],
        }
    }

    /// Returns the underlying pixel words.
    pub fn raw(&self) -> &[u16; PIXEL_COUNT] {
        &self.pixels
    }

    /// Fills the whole framebuffer with one color.
    pub fn clear(&mut self, raw: u16) {
        self.pixels.fill(raw);
    }

    /// Sets a pixel.
    ///
    /// Returns `true` when pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: usize, y: usize, raw: u16) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }

        self.pixels[y * LINE_PIXELS + x] = raw;
        true
    }

    /// Reads a pixel.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u16> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }

        Some(self.pixels[y * LINE_PIXELS + x])
    }

    /// Fills a rectangle, clipped to the panel.
    ///
    /// Returns the number of pixels written.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, raw: u16) -> usize {
        let x_end = x.saturating_add(w).min(WIDTH);
        let y_end = y.saturating_add(h).min(HEIGHT);
        if x >= x_end || y >= y_end {
            return 0;
        }

        for row in y..y_end {
            let start = row * LINE_PIXELS;
            self.pixels[start + x..start + x_end].fill(raw);
        }

        (x_end - x) * (y_end - y)
    }

    /// Returns the pixels of line `0..HEIGHT`.
    pub fn line(&self, line: usize) -> Option<&[u16; LINE_PIXELS]> {
        if line >= HEIGHT {
            return None;
        }

        let start = line * LINE_PIXELS;
        <&[u16; LINE_PIXELS]>::try_from(&self.pixels[start..start + LINE_PIXELS]).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_are_row_major() {
        let mut fb = FrameBuffer::new();

        assert!(fb.set_pixel(3, 0, 0xF800));
        assert!(fb.set_pixel(0, 1, 0x07E0));

        assert_eq!(fb.raw()[3], 0xF800);
        assert_eq!(fb.raw()[LINE_PIXELS], 0x07E0);
        assert_eq!(fb.line(1).unwrap()[0], 0x07E0);
    }

    #[test]
    fn out_of_bounds_pixel_is_ignored() {
        let mut fb = FrameBuffer::new();

        assert!(!fb.set_pixel(WIDTH, 0, 0xFFFF));
        assert!(!fb.set_pixel(0, HEIGHT, 0xFFFF));
        assert!(fb.raw().iter().all(|&px| px == 0));
    }

    #[test]
    fn set_and_read_last_pixel() {
        let mut fb = FrameBuffer::new();

        assert!(fb.set_pixel(WIDTH - 1, HEIGHT - 1, 0x1234));
        assert_eq!(fb.pixel(WIDTH - 1, HEIGHT - 1), Some(0x1234));
        assert_eq!(fb.pixel(WIDTH, HEIGHT), None);
        assert!(fb.line(HEIGHT).is_none());
    }

    #[test]
    fn fill_rect_is_clipped_to_panel() {
        let mut fb = FrameBuffer::new();

        let written = fb.fill_rect(WIDTH - 2, HEIGHT - 3, 10, 10, 0xFFFF);

        assert_eq!(written, 2 * 3);
        assert_eq!(fb.pixel(WIDTH - 1, HEIGHT - 1), Some(0xFFFF));
        assert_eq!(fb.pixel(WIDTH - 3, HEIGHT - 1), Some(0));
        assert_eq!(fb.fill_rect(WIDTH, 0, 5, 5, 0xFFFF), 0);
    }

    #[test]
    fn clear_overwrites_every_pixel() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(10, 10, 0xAAAA);

        fb.clear(0x5555);

        assert!(fb.raw().iter().all(|&px| px == 0x5555));
    }
}
