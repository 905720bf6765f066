//! embedded-graphics adapter over a borrowed framebuffer

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::paint::{color::Color, framebuffer::Paint};

/// A [`Paint`] bound to one buffer, usable as an embedded-graphics target.
///
/// [`BinaryColor::On`] draws black.
pub struct Canvas<'a> {
    paint: Paint,
    frame: &'a mut [u8],
}

impl<'a> Canvas<'a> {
    /// Draw into `frame` through `paint`
    pub fn new(paint: Paint, frame: &'a mut [u8]) -> Self {
        Canvas { paint, frame }
    }

    /// Rotation state used for every pixel
    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    /// Mutable access to the rotation state
    pub fn paint_mut(&mut self) -> &mut Paint {
        &mut self.paint
    }

    /// The buffer drawn so far
    pub fn frame(&self) -> &[u8] {
        self.frame
    }
}

/// For use with embedded_graphics
impl DrawTarget for Canvas<'_> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.paint
                .set_pixel(self.frame, point.x, point.y, Color::from(color));
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.paint.clear(self.frame, Color::from(color));
        Ok(())
    }
}

/// For use with embedded_graphics
impl OriginDimensions for Canvas<'_> {
    fn size(&self) -> Size {
        Size::new(self.paint.width() as u32, self.paint.height() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{framebuffer::DisplayRotation, graphics::draw_filled_rectangle};
    use crate::BUFFER_SIZE;
    use embedded_graphics::{
        mono_font::{ascii::FONT_6X10, MonoTextStyle},
        primitives::{PrimitiveStyle, Rectangle},
        text::Text,
    };

    #[test]
    fn test_rectangle_matches_native_primitive() -> anyhow::Result<()> {
        let paint = Paint::new(DisplayRotation::Rotate90);
        let mut expected = [0xFFu8; BUFFER_SIZE];
        draw_filled_rectangle(&paint, &mut expected, 2, 3, 6, 6, Color::Black);

        let mut frame = [0xFFu8; BUFFER_SIZE];
        let mut canvas = Canvas::new(paint, &mut frame);
        Rectangle::new(Point::new(2, 3), Size::new(5, 4))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut canvas)?;

        assert_eq!(frame, expected);
        Ok(())
    }

    #[test]
    fn test_clear_and_size() -> anyhow::Result<()> {
        let mut frame = [0x00u8; BUFFER_SIZE];
        let mut canvas = Canvas::new(Paint::default(), &mut frame);
        assert_eq!(canvas.size(), Size::new(200, 200));

        canvas.clear(BinaryColor::Off)?;
        assert!(canvas.frame().iter().all(|&b| b == 0xFF));

        canvas.paint_mut().set_rotation(DisplayRotation::Rotate270);
        assert_eq!(canvas.paint().rotation(), DisplayRotation::Rotate270);
        Ok(())
    }

    #[test]
    fn test_text_stays_within_its_cells() -> anyhow::Result<()> {
        let mut frame = [0xFFu8; BUFFER_SIZE];
        let paint = Paint::default();
        let mut canvas = Canvas::new(paint, &mut frame);
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        Text::new("Hi", Point::new(0, 10), style).draw(&mut canvas)?;

        let mut inked = 0;
        for y in 0..paint.height() {
            for x in 0..paint.width() {
                if paint.pixel(&frame, x, y) == Some(Color::Black) {
                    assert!(x < 12 && y <= 12, "stray pixel ({}, {})", x, y);
                    inked += 1;
                }
            }
        }
        assert!(inked > 0);
        Ok(())
    }
}
