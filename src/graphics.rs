use embedded_graphics::{
    mono_font::{ascii::FONT_7X13_BOLD, MonoTextStyle},
    pixelcolor::{Rgb888, RgbColor},
    prelude::{DrawTarget, OriginDimensions, Point, Size},
    text::{Baseline, Text},
    Drawable, Pixel,
};
use std::convert::Infallible;

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb8(0, 0, 0);
    pub const WHITE: Color = Color::rgb8(255, 255, 255);

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn as_rgba8(self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    /// Perceived brightness, used when several pixels compete for one cell
    pub fn luma(self) -> u32 {
        299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b)
    }
}

impl From<Rgb888> for Color {
    fn from(color: Rgb888) -> Self {
        Color::rgb8(color.r(), color.g(), color.b())
    }
}

/// RGBA pixel surface with row-major layout and top-left origin
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixel_data: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        FrameBuffer {
            width,
            height,
            pixel_data: vec![0u8; width * height * 4],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes
    pub fn pixel_data(&self) -> &[u8] {
        &self.pixel_data
    }

    /// Color at (x, y), or `None` outside the buffer
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.width + x) * 4;
        let p = &self.pixel_data[offset..offset + 4];
        Some(Color {
            r: p[0],
            g: p[1],
            b: p[2],
            a: p[3],
        })
    }

    /// Fills the whole buffer with one color
    pub fn clear(&mut self, color: Color) {
        let (r, g, b, a) = color.as_rgba8();
        for pixel in self.pixel_data.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[r, g, b, a]);
        }
    }

    /// Sets a pixel, silently dropping coordinates outside the buffer
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let offset = (y as usize * self.width + x as usize) * 4;
        let (r, g, b, a) = color.as_rgba8();
        self.pixel_data[offset] = r;
        self.pixel_data[offset + 1] = g;
        self.pixel_data[offset + 2] = b;
        self.pixel_data[offset + 3] = a;
    }

    /// Draws a line between two points (inclusive) using Bresenham's algorithm
    pub fn draw_line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        let (mut x0, mut y0) = (x0, y0);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy; // error value e_xy

        loop {
            self.set_pixel(x0, y0, color);

            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Draws a line of bold monospace text with its top-left corner at (x, y)
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) {
        let (r, g, b, _) = color.as_rgba8();
        let style = MonoTextStyle::new(&FONT_7X13_BOLD, Rgb888::new(r, g, b));
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(self)
            .unwrap_or_else(|never| match never {});
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(i64::from(point.x), i64::from(point.y), color.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(frame: &FrameBuffer) -> Vec<(usize, usize)> {
        let mut points = Vec::new();
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                if frame.pixel(x, y) != Some(Color::BLACK) {
                    points.push((x, y));
                }
            }
        }
        points
    }

    fn blank(width: usize, height: usize) -> FrameBuffer {
        let mut frame = FrameBuffer::new(width, height);
        frame.clear(Color::BLACK);
        frame
    }

    #[test]
    fn new_buffer_has_rgba_layout() {
        let frame = FrameBuffer::new(4, 3);
        assert_eq!(frame.pixel_data().len(), 4 * 3 * 4);
        assert_eq!(frame.pixel(4, 0), None);
        assert_eq!(frame.pixel(0, 3), None);
    }

    #[test]
    fn clear_overwrites_every_pixel() {
        let mut frame = FrameBuffer::new(5, 5);
        frame.set_pixel(2, 2, Color::WHITE);
        frame.clear(Color::rgb8(1, 2, 3));
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(frame.pixel(x, y), Some(Color::rgb8(1, 2, 3)));
            }
        }
    }

    #[test]
    fn horizontal_line_includes_both_endpoints() {
        let mut frame = blank(10, 3);
        frame.draw_line(2, 1, 6, 1, Color::WHITE);
        assert_eq!(lit(&frame), vec![(2, 1), (3, 1), (4, 1), (5, 1), (6, 1)]);
    }

    #[test]
    fn diagonal_line_is_symmetric_in_direction() {
        let mut forward = blank(8, 8);
        forward.draw_line(0, 0, 7, 7, Color::WHITE);
        let mut backward = blank(8, 8);
        backward.draw_line(7, 7, 0, 0, Color::WHITE);
        assert_eq!(lit(&forward), lit(&backward));
        assert_eq!(lit(&forward).len(), 8);
    }

    #[test]
    fn single_point_line_sets_one_pixel() {
        let mut frame = blank(3, 3);
        frame.draw_line(1, 1, 1, 1, Color::WHITE);
        assert_eq!(lit(&frame), vec![(1, 1)]);
    }

    #[test]
    fn lines_are_clipped_to_the_buffer() {
        let mut frame = blank(4, 4);
        frame.draw_line(-10, 2, 10, 2, Color::WHITE);
        assert_eq!(lit(&frame), vec![(0, 2), (1, 2), (2, 2), (3, 2)]);

        let mut frame = blank(4, 4);
        frame.draw_line(-100, -100, -50, -80, Color::WHITE);
        assert!(lit(&frame).is_empty());
    }

    #[test]
    fn text_is_drawn_below_and_right_of_its_anchor() {
        let mut frame = blank(120, 40);
        frame.draw_text("Hi!", 10, 10, Color::WHITE);
        let points = lit(&frame);
        assert!(!points.is_empty());
        for &(x, y) in &points {
            assert!((10..10 + 3 * 7).contains(&x), "x = {x}");
            assert!((10..10 + 13).contains(&y), "y = {y}");
            assert_eq!(frame.pixel(x, y), Some(Color::WHITE));
        }
    }

    #[test]
    fn luma_orders_black_below_white() {
        assert!(Color::BLACK.luma() < Color::rgb8(0, 0, 255).luma());
        assert!(Color::rgb8(0, 0, 255).luma() < Color::WHITE.luma());
    }
}
