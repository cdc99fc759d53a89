//! Mapping smoothed sensor values onto strip colors.
//!
//! Hue is carried as a fraction of the color wheel (0.0..1.0) and converted
//! to the 0-255 circle of `smart_leds::hsv::Hsv` at the edge. Saturation and
//! value stay pinned at maximum; only hue tracks the temperature.

use smart_leds::RGB8;
use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::config::{
    BRIGHTNESS_MAX, BRIGHTNESS_MIN, HUE_COLD, HUE_WARM, LIGHT_IN_MAX, LIGHT_IN_MIN, MAX_TEMP,
    MIN_TEMP,
};
use crate::scale::linear_map;

/// Hue fraction for a smoothed temperature: `MIN_TEMP` sits at the cold blue
/// end of the wheel (0.6) and the hue falls toward red (0.0) as it warms.
pub fn temperature_hue(smoothed_temp: f32) -> f32 {
    linear_map(smoothed_temp, MIN_TEMP, MAX_TEMP, HUE_COLD, HUE_WARM)
}

/// Steady-mode brightness for a smoothed light level.
pub fn light_brightness(smoothed_light: f32) -> f32 {
    linear_map(
        smoothed_light,
        LIGHT_IN_MIN,
        LIGHT_IN_MAX,
        BRIGHTNESS_MIN,
        BRIGHTNESS_MAX,
    )
}

/// Fully saturated, full-value color at a fractional hue.
pub fn hue_color(hue: f32) -> RGB8 {
    hsv2rgb(Hsv {
        hue: unit_to_byte(hue),
        sat: 255,
        val: 255,
    })
}

/// Saturating fraction-to-byte conversion.
///
/// The mapper extrapolates outside its output range, so fractions are
/// clamped to 0.0..1.0 here rather than wrapping the byte.
pub fn unit_to_byte(fraction: f32) -> u8 {
    (fraction.clamp(0.0, 1.0) * 255.0) as u8
}
