//! Raster images drawn by the frames.

use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::BinaryColor;

/// WiFi logo width in pixels.
pub const WIFI_LOGO_WIDTH: u32 = 60;

/// WiFi logo height in pixels.
pub const WIFI_LOGO_HEIGHT: u32 = 36;

/// 60x36 WiFi logo, 1 bit per pixel, rows padded to whole bytes.
#[rustfmt::skip]
const WIFI_LOGO_DATA: &[u8] = &[
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x1f, 0xc0, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x01, 0xff, 0xfc, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x07, 0xff, 0xff, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x1f, 0x80, 0x0f, 0xc0, 0x00, 0x00,
    0x00, 0x00, 0x3e, 0x00, 0x03, 0xe0, 0x00, 0x00,
    0x00, 0x00, 0xf8, 0x00, 0x00, 0xf8, 0x00, 0x00,
    0x00, 0x01, 0xe0, 0x1f, 0xc0, 0x3c, 0x00, 0x00,
    0x00, 0x03, 0xc0, 0xff, 0xf8, 0x1e, 0x00, 0x00,
    0x00, 0x01, 0x83, 0xff, 0xfe, 0x0c, 0x00, 0x00,
    0x00, 0x00, 0x07, 0xc0, 0x1f, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x0f, 0x00, 0x07, 0x80, 0x00, 0x00,
    0x00, 0x00, 0x1e, 0x00, 0x03, 0xc0, 0x00, 0x00,
    0x00, 0x00, 0x0c, 0x0f, 0x81, 0x80, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x3f, 0xe0, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xff, 0xf8, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x01, 0xf0, 0x7c, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x40, 0x10, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x0f, 0x80, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// WiFi logo as a drawable raw image.
pub fn wifi_logo() -> ImageRaw<'static, BinaryColor> {
    ImageRaw::new(WIFI_LOGO_DATA, WIFI_LOGO_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;

    #[test]
    fn logo_dimensions_match_data_length() {
        // 60 px wide -> 8 bytes per row.
        assert_eq!(WIFI_LOGO_DATA.len(), 8 * WIFI_LOGO_HEIGHT as usize);
        assert_eq!(
            wifi_logo().size(),
            Size::new(WIFI_LOGO_WIDTH, WIFI_LOGO_HEIGHT)
        );
    }

    #[test]
    fn logo_is_not_blank() {
        assert!(WIFI_LOGO_DATA.iter().any(|&b| b != 0));
    }
}
