//! Face palette and color helpers.
//!
//! All functions return `palette::Srgb` with components in the range 0.0-1.0.

use palette::{FromColor, Hsv, Srgb};

pub const BLACK: Srgb = Srgb::new(0.0, 0.0, 0.0);

/// Default color of the second hand and center dot.
pub const HAND_COLOR: Srgb = Srgb::new(0.741, 0.082, 0.180);

/// Default color of the hour and minute hands and the tick marks.
pub const ACCENT_COLOR: Srgb = Srgb::new(0.933, 0.933, 0.933);

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgb {
    Srgb::from_color(Hsv::new(hue, saturation, value))
}

/// Removes all saturation, keeping the HSV value.
///
/// Used for the ambient palette: a low-power display keeps each hand's
/// brightness but drops its hue.
pub fn desaturate(color: Srgb) -> Srgb {
    let current: Hsv = Hsv::from_color(color);
    hsv(0.0, 0.0, current.value)
}

/// Converts to 8-bit channels, rounding to nearest.
pub fn to_rgb8(color: Srgb) -> (u8, u8, u8) {
    let c: Srgb<u8> = color.into_format();
    (c.red, c.green, c.blue)
}
