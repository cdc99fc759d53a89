//! Per-tick orchestration: smoothing, mode selection, and rendering.

use log::info;

use crate::color::{hue_color, light_brightness, temperature_hue};
use crate::config::{READING_LOWER_BOUND, READING_UPPER_BOUND, SMOOTHING_WINDOW};
use crate::mode::{ButtonSource, ButtonStates, DisplayMode};
use crate::pulse::PulseRamp;
use crate::smoothing::{INVALID_READING, RollingAverage};
use crate::strip::{PixelStrip, StripError};

/// What the poll loop should draw for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// One of the smoothing windows is still empty; nothing trustworthy to
    /// display yet.
    Warmup,
    /// Constant color at a light-derived brightness.
    Steady { hue: f32, brightness: f32 },
    /// One pulse cycle at a temperature-derived hue.
    Pulse { hue: f32 },
}

/// How a pulse cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseOutcome {
    /// The full ramp ran to the end.
    Completed,
    /// A button requested a different mode mid-cycle.
    Interrupted(DisplayMode),
}

/// Owns the smoothing windows and the active display mode.
///
/// One instance lives for the whole process; the poll loop feeds it raw
/// readings and button levels once per tick and renders whatever [`Frame`]
/// comes back.
pub struct ColorTempEngine {
    temperature: RollingAverage<SMOOTHING_WINDOW>,
    light: RollingAverage<SMOOTHING_WINDOW>,
    mode: DisplayMode,
    last_raw_temp: f32,
}

impl ColorTempEngine {
    pub const fn new() -> Self {
        Self {
            temperature: RollingAverage::new(READING_LOWER_BOUND, READING_UPPER_BOUND),
            light: RollingAverage::new(READING_LOWER_BOUND, READING_UPPER_BOUND),
            mode: DisplayMode::Steady,
            last_raw_temp: INVALID_READING,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Feed one tick's raw readings and button levels.
    ///
    /// Both readings pass through their rolling windows, the mode machine
    /// applies the button levels, and the frame for the resulting mode is
    /// computed from the smoothed values.
    pub fn tick(&mut self, raw_temp: f32, raw_light: f32, buttons: ButtonStates) -> Frame {
        let temp = self.temperature.admit(raw_temp);
        let light = self.light.admit(raw_light);
        self.last_raw_temp = raw_temp;
        self.mode = self.mode.next(buttons);

        let (Some(temp), Some(light)) = (temp, light) else {
            return Frame::Warmup;
        };

        let hue = temperature_hue(temp);
        match self.mode {
            DisplayMode::Pulsing => Frame::Pulse { hue },
            DisplayMode::Steady | DisplayMode::Reserved => Frame::Steady {
                hue,
                brightness: light_brightness(light),
            },
        }
    }

    /// Drive one pulse cycle on the strip, flushing after every ramp step.
    ///
    /// The button source is polled between steps; when the levels request a
    /// mode other than pulsing, the cycle aborts early, the engine adopts
    /// the requested mode, and the outcome reports it. An uninterrupted
    /// cycle performs exactly [`PulseRamp::LEN`] flushes.
    pub fn run_pulse<S, B>(
        &mut self,
        strip: &mut S,
        buttons: &mut B,
        hue: f32,
    ) -> Result<PulseOutcome, StripError>
    where
        S: PixelStrip,
        B: ButtonSource,
    {
        strip.fill(hue_color(hue));
        for level in PulseRamp::new() {
            strip.show(level)?;

            let requested = DisplayMode::Pulsing.next(buttons.read());
            if requested != DisplayMode::Pulsing {
                self.mode = requested;
                return Ok(PulseOutcome::Interrupted(requested));
            }
        }
        Ok(PulseOutcome::Completed)
    }

    /// Diagnostic tuple logged once per tick:
    /// `(smoothed °C, CPU °C, raw °F, smoothed light)`.
    ///
    /// Fahrenheit is derived from the raw (unsmoothed) ambient reading.
    /// Empty windows report [`INVALID_READING`].
    pub fn diagnostics(&self, cpu_temp: f32) -> (f32, f32, f32, f32) {
        (
            self.temperature.mean_or_invalid(),
            cpu_temp,
            self.last_raw_temp * 1.8 + 32.0,
            self.light.mean_or_invalid(),
        )
    }

    /// Emit the per-tick diagnostic line.
    pub fn log_diagnostics(&self, cpu_temp: f32) {
        let (smoothed_temp, cpu, fahrenheit, smoothed_light) = self.diagnostics(cpu_temp);
        info!(
            "({:.2}, {:.2}, {:.2}, {:.2})",
            smoothed_temp, cpu, fahrenheit, smoothed_light
        );
    }
}

impl Default for ColorTempEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Fill the whole strip with the steady color and flush once.
pub fn render_steady<S: PixelStrip>(
    strip: &mut S,
    hue: f32,
    brightness: f32,
) -> Result<(), StripError> {
    strip.fill(hue_color(hue));
    strip.show(brightness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_with_bad_readings_is_warmup() {
        let mut engine = ColorTempEngine::new();
        let frame = engine.tick(-5.0, 300.0, ButtonStates::IDLE);
        assert_eq!(frame, Frame::Warmup);
    }

    #[test]
    fn test_warmup_until_both_windows_have_data() {
        let mut engine = ColorTempEngine::new();
        // Valid temperature, implausible light: still warming up.
        assert_eq!(engine.tick(23.5, -1.0, ButtonStates::IDLE), Frame::Warmup);
        // Both valid: a real frame appears.
        let frame = engine.tick(23.5, 50.0, ButtonStates::IDLE);
        assert!(matches!(frame, Frame::Steady { .. }));
    }

    #[test]
    fn test_steady_frame_maps_temperature_and_light() {
        let mut engine = ColorTempEngine::new();
        let frame = engine.tick(23.5, 50.0, ButtonStates::IDLE);

        let Frame::Steady { hue, brightness } = frame else {
            panic!("expected a steady frame");
        };
        assert!((hue - 0.3).abs() < 1e-6);
        assert!((brightness - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_pulsing_button_switches_frame_kind() {
        let mut engine = ColorTempEngine::new();
        let buttons = ButtonStates {
            steady: false,
            pulsing: true,
        };
        let frame = engine.tick(23.5, 25.0, buttons);
        assert!(matches!(frame, Frame::Pulse { .. }));
        assert_eq!(engine.mode(), DisplayMode::Pulsing);
    }

    #[test]
    fn test_diagnostics_after_one_tick() {
        let mut engine = ColorTempEngine::new();
        engine.tick(20.0, 30.0, ButtonStates::IDLE);

        let (smoothed_temp, cpu, fahrenheit, smoothed_light) = engine.diagnostics(41.5);
        assert_eq!(smoothed_temp, 20.0);
        assert_eq!(cpu, 41.5);
        assert_eq!(fahrenheit, 68.0);
        assert_eq!(smoothed_light, 30.0);
    }

    #[test]
    fn test_diagnostics_report_sentinel_while_empty() {
        let engine = ColorTempEngine::new();
        let (smoothed_temp, _, _, smoothed_light) = engine.diagnostics(40.0);
        assert_eq!(smoothed_temp, INVALID_READING);
        assert_eq!(smoothed_light, INVALID_READING);
    }

    #[test]
    fn test_smoothing_survives_a_sensor_glitch() {
        let mut engine = ColorTempEngine::new();
        engine.tick(20.0, 20.0, ButtonStates::IDLE);
        engine.tick(22.0, 20.0, ButtonStates::IDLE);
        // Glitched readings are dropped; the frame reflects prior history.
        let frame = engine.tick(-40.0, 900.0, ButtonStates::IDLE);
        let Frame::Steady { hue, .. } = frame else {
            panic!("expected a steady frame");
        };
        assert!((hue - temperature_hue(21.0)).abs() < 1e-6);
    }
}
