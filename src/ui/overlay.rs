//! Status bar overlay: IP address, signal bars, separator line.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Pixel;

use crate::config::DISPLAY_WIDTH;
use crate::net::NetSnapshot;
use crate::ui::engine::Overlay;

/// Leftmost bar column on screen; columns step right by 2 px.
const BARS_X: i32 = 120;

/// Baseline row of the bar graph; bars grow upward from here.
const BARS_BOTTOM: i32 = 7;

/// Row of the separator line under the status bar.
const SEPARATOR_Y: i32 = 10;

/// Drawn on top of every frame, every tick, at fixed positions.
pub struct StatusOverlay;

impl<D: DrawTarget<Color = BinaryColor>> Overlay<D> for StatusOverlay {
    fn draw(&self, display: &mut D, net: &NetSnapshot) -> Result<(), D::Error> {
        // Local address, top-left. An unset address renders as 0.0.0.0;
        // there is deliberately no guard.
        let mut ip: heapless::String<15> = heapless::String::new();
        let _ = write!(ip, "{}", net.ip);
        let style = MonoTextStyleBuilder::new()
            .font(&FONT_6X10)
            .text_color(BinaryColor::On)
            .build();
        Text::with_baseline(ip.as_str(), Point::zero(), style, Baseline::Top).draw(display)?;

        // Signal bar graph: 4 columns, column i is 2*(i+1) rows tall and
        // lights up fully once quality clears i*25; the bottom row of
        // every column is always lit.
        let quality = i32::from(net.quality());
        for i in 0..4 {
            for j in 0..2 * (i + 1) {
                if quality > i * 25 || j == 0 {
                    Pixel(
                        Point::new(BARS_X + 2 * i, BARS_BOTTOM - j),
                        BinaryColor::On,
                    )
                    .draw(display)?;
                }
            }
        }

        Line::new(
            Point::new(0, SEPARATOR_Y),
            Point::new(DISPLAY_WIDTH as i32 - 1, SEPARATOR_Y),
        )
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::PixelCanvas;

    fn draw_with_rssi(dbm: i32) -> PixelCanvas {
        let mut net = NetSnapshot::new();
        net.rssi_dbm = dbm;
        let mut canvas = PixelCanvas::new();
        Overlay::draw(&StatusOverlay, &mut canvas, &net).unwrap();
        canvas
    }

    /// Lit pixels in the bar-graph region (x 120..=126, y 0..=7).
    fn bar_pixels(canvas: &PixelCanvas) -> usize {
        canvas.lit_in_rect(BARS_X, 0, BARS_X + 7, BARS_BOTTOM + 1)
    }

    #[test]
    fn zero_quality_lights_one_pixel_per_column() {
        let canvas = draw_with_rssi(-100);
        assert_eq!(bar_pixels(&canvas), 4);
        for i in 0..4 {
            assert!(canvas.is_lit(BARS_X + 2 * i, BARS_BOTTOM));
        }
    }

    #[test]
    fn full_quality_lights_every_bar_row() {
        let canvas = draw_with_rssi(-50);
        // 2 + 4 + 6 + 8 pixels.
        assert_eq!(bar_pixels(&canvas), 20);
        assert!(canvas.is_lit(BARS_X + 6, 0), "tallest bar should reach the top");
    }

    #[test]
    fn mid_quality_fills_first_two_columns() {
        // -75 dBm -> quality 50: columns 0 and 1 full, 2 and 3 minimal.
        let canvas = draw_with_rssi(-75);
        assert_eq!(bar_pixels(&canvas), 2 + 4 + 1 + 1);
        assert!(canvas.is_lit(BARS_X + 2, BARS_BOTTOM - 3), "column 1 should be full");
        assert!(!canvas.is_lit(BARS_X + 4, BARS_BOTTOM - 1), "column 2 should be minimal");
    }

    #[test]
    fn separator_spans_full_width() {
        let canvas = draw_with_rssi(-80);
        for x in 0..DISPLAY_WIDTH as i32 {
            assert!(canvas.is_lit(x, SEPARATOR_Y), "separator gap at x={x}");
        }
    }

    #[test]
    fn unset_address_renders_as_zeros() {
        // "0.0.0.0" in a 6 px font occupies the top-left corner.
        let canvas = draw_with_rssi(-100);
        assert!(canvas.lit_in_rect(0, 0, 7 * 6, 10) > 0);
    }
}
