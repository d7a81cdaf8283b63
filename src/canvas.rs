//! In-memory 1-bpp canvas implementing `DrawTarget`.
//!
//! Stands in for the SSD1306 buffer in host tests: rendering code is
//! generic over `DrawTarget<Color = BinaryColor>`, so everything that
//! draws on the panel can be asserted pixel by pixel here.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::Pixel;

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

const W: usize = DISPLAY_WIDTH as usize;
const H: usize = DISPLAY_HEIGHT as usize;

/// A 128x64 monochrome pixel buffer. Out-of-bounds draws are discarded,
/// matching the clipping behavior of the real display buffer.
pub struct PixelCanvas {
    pixels: [[bool; W]; H],
}

impl PixelCanvas {
    pub fn new() -> Self {
        Self {
            pixels: [[false; W]; H],
        }
    }

    /// Whether the pixel at (x, y) is lit. Out-of-range coordinates
    /// read as unlit.
    pub fn is_lit(&self, x: i32, y: i32) -> bool {
        if (0..W as i32).contains(&x) && (0..H as i32).contains(&y) {
            self.pixels[y as usize][x as usize]
        } else {
            false
        }
    }

    /// Total number of lit pixels.
    pub fn lit_count(&self) -> usize {
        self.pixels
            .iter()
            .map(|row| row.iter().filter(|&&p| p).count())
            .sum()
    }

    /// Number of lit pixels inside the given rectangle (exclusive end).
    pub fn lit_in_rect(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> usize {
        let mut count = 0;
        for y in y0..y1 {
            for x in x0..x1 {
                if self.is_lit(x, y) {
                    count += 1;
                }
            }
        }
        count
    }
}

impl Default for PixelCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for PixelCanvas {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

impl DrawTarget for PixelCanvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if (0..W as i32).contains(&point.x) && (0..H as i32).contains(&point.y) {
                self.pixels[point.y as usize][point.x as usize] = color.is_on();
            }
        }
        Ok(())
    }
}
