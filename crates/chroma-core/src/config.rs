//! Compile-time configuration for the color-temperature light.
//!
//! Set `MIN_TEMP`/`MAX_TEMP` based on the ambient temperature range at the
//! install site for best results; everything else matches the board.

/// Coldest ambient temperature expected, in °C. Maps to the bluest hue.
pub const MIN_TEMP: f32 = 15.0;

/// Warmest ambient temperature expected, in °C. Maps to the reddest hue.
pub const MAX_TEMP: f32 = 32.0;

/// Hue (fraction of the color wheel) displayed at `MIN_TEMP`.
pub const HUE_COLD: f32 = 0.6;

/// Hue displayed at `MAX_TEMP`.
pub const HUE_WARM: f32 = 0.0;

/// Number of samples in each rolling-average window.
pub const SMOOTHING_WINDOW: usize = 20;

/// Readings must lie strictly inside these bounds to enter a window.
pub const READING_LOWER_BOUND: f32 = 0.0;
pub const READING_UPPER_BOUND: f32 = 200.0;

/// Input range of the light-to-brightness mapping, in lux.
pub const LIGHT_IN_MIN: f32 = 0.0;
pub const LIGHT_IN_MAX: f32 = 50.0;

/// Steady-mode brightness range the light level maps onto.
pub const BRIGHTNESS_MIN: f32 = 0.009;
pub const BRIGHTNESS_MAX: f32 = 0.25;

/// Number of brightness steps in each direction of a pulse cycle.
pub const PULSE_STEPS: u32 = 500;

/// Peak brightness reached by a pulse cycle.
pub const PULSE_MAX_BRIGHTNESS: f32 = 0.25;

/// Number of pixels on the strip.
pub const PIXEL_COUNT: usize = 10;

/// Poll loop tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;
