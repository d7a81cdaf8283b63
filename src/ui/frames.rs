//! The two panel frames: WiFi logo and network info.
//!
//! Everything is drawn relative to the animation offset handed in by the
//! engine so slide transitions carry the whole page.

use core::fmt::Write;

use embedded_graphics::image::Image;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_9X15};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::images::wifi_logo;
use crate::net::NetSnapshot;
use crate::ui::engine::Frame;

fn text_style(font: &'static MonoFont<'static>) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(BinaryColor::On)
        .build()
}

/// Static WiFi logo page.
pub struct LogoFrame;

impl<D: DrawTarget<Color = BinaryColor>> Frame<D> for LogoFrame {
    fn draw(&self, display: &mut D, _net: &NetSnapshot, offset: Point) -> Result<(), D::Error> {
        Image::new(&wifi_logo(), offset + Point::new(34, 14)).draw(display)
    }
}

/// Hostname, SSID and signal quality as three lines of text.
pub struct NetworkFrame;

impl<D: DrawTarget<Color = BinaryColor>> Frame<D> for NetworkFrame {
    fn draw(&self, display: &mut D, net: &NetSnapshot, offset: Point) -> Result<(), D::Error> {
        Text::with_baseline(
            net.hostname.as_str(),
            offset + Point::new(0, 14),
            text_style(&FONT_9X15),
            Baseline::Top,
        )
        .draw(display)?;

        Text::with_baseline(
            net.ssid.as_str(),
            offset + Point::new(0, 32),
            text_style(&FONT_6X10),
            Baseline::Top,
        )
        .draw(display)?;

        let mut quality: heapless::String<16> = heapless::String::new();
        let _ = write!(quality, "Signal: {}%", net.quality());
        Text::with_baseline(
            quality.as_str(),
            offset + Point::new(0, 44),
            text_style(&FONT_6X10),
            Baseline::Top,
        )
        .draw(display)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::PixelCanvas;
    use crate::images::{WIFI_LOGO_HEIGHT, WIFI_LOGO_WIDTH};

    fn snapshot() -> NetSnapshot {
        let mut net = NetSnapshot::new();
        let _ = net.hostname.push_str("printer3d");
        let _ = net.ssid.push_str("workshop");
        net.rssi_dbm = -75;
        net
    }

    #[test]
    fn logo_frame_draws_inside_its_box() {
        let mut canvas = PixelCanvas::new();
        LogoFrame
            .draw(&mut canvas, &snapshot(), Point::zero())
            .unwrap();

        let w = WIFI_LOGO_WIDTH as i32;
        let h = WIFI_LOGO_HEIGHT as i32;
        assert!(canvas.lit_in_rect(34, 14, 34 + w, 14 + h) > 0);
        // Nothing outside the logo box.
        assert_eq!(canvas.lit_count(), canvas.lit_in_rect(34, 14, 34 + w, 14 + h));
    }

    #[test]
    fn logo_frame_honors_offset() {
        let mut at_rest = PixelCanvas::new();
        LogoFrame
            .draw(&mut at_rest, &snapshot(), Point::zero())
            .unwrap();

        let mut shifted = PixelCanvas::new();
        LogoFrame
            .draw(&mut shifted, &snapshot(), Point::new(-10, 0))
            .unwrap();

        for y in 0..64 {
            for x in 0..118 {
                assert_eq!(
                    at_rest.is_lit(x, y),
                    shifted.is_lit(x - 10, y),
                    "pixel ({x},{y}) did not shift by the offset"
                );
            }
        }
    }

    #[test]
    fn network_frame_draws_text_rows() {
        let mut canvas = PixelCanvas::new();
        NetworkFrame
            .draw(&mut canvas, &snapshot(), Point::zero())
            .unwrap();

        // One band of lit pixels per text line.
        assert!(canvas.lit_in_rect(0, 14, 128, 29) > 0, "hostname row blank");
        assert!(canvas.lit_in_rect(0, 32, 128, 42) > 0, "ssid row blank");
        assert!(canvas.lit_in_rect(0, 44, 128, 54) > 0, "signal row blank");
    }

    #[test]
    fn network_frame_tolerates_empty_strings() {
        let mut canvas = PixelCanvas::new();
        NetworkFrame
            .draw(&mut canvas, &NetSnapshot::new(), Point::zero())
            .unwrap();
        // Only the "Signal: 0%" line renders.
        assert!(canvas.lit_in_rect(0, 44, 128, 54) > 0);
        assert_eq!(canvas.lit_in_rect(0, 0, 128, 44), 0);
    }
}
