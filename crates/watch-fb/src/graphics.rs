use core::convert::Infallible;

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Size},
    pixelcolor::{
        Rgb565,
        raw::{RawData, RawU16},
    },
    primitives::Rectangle,
};

use crate::{FrameBuffer, format};

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }

            let x = point.x as usize;
            let y = point.y as usize;
            let _ = self.set_pixel(x, y, RawU16::from(color).into_inner());
        }

        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.size.width == 0 || area.size.height == 0 {
            return Ok(());
        }

        let _ = self.fill_rect(
            area.top_left.x as usize,
            area.top_left.y as usize,
            area.size.width as usize,
            area.size.height as usize,
            RawU16::from(color).into_inner(),
        );
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        FrameBuffer::clear(self, RawU16::from(color).into_inner());
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(format::WIDTH as u32, format::HEIGHT as u32)
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics_core::{geometry::Point, pixelcolor::RgbColor};

    use super::*;

    #[test]
    fn fill_solid_clips_negative_origin() {
        let mut fb = FrameBuffer::new();
        let area = Rectangle::new(Point::new(-5, -5), Size::new(10, 10));

        fb.fill_solid(&area, Rgb565::RED).unwrap();

        assert_eq!(fb.pixel(4, 4), Some(0xF800));
        assert_eq!(fb.pixel(5, 5), Some(0));
    }

    #[test]
    fn negative_pixels_are_skipped() {
        let mut fb = FrameBuffer::new();

        fb.draw_iter([
            Pixel(Point::new(-1, 0), Rgb565::WHITE),
            Pixel(Point::new(0, 0), Rgb565::BLUE),
        ])
        .unwrap();

        assert_eq!(fb.pixel(0, 0), Some(0x001F));
    }
}
