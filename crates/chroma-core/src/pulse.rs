//! Brightness ramp for the pulsing display mode.

use crate::config::{PULSE_MAX_BRIGHTNESS, PULSE_STEPS};
use crate::scale::linear_map;

/// Lazy brightness sequence for one pulse cycle: `PULSE_STEPS` ascending
/// levels from 0 toward the peak, then `PULSE_STEPS` descending levels back
/// down, [`PulseRamp::LEN`] steps in total.
///
/// The ramp is a plain iterator so the driver can flush the strip, poll
/// buttons, or abort between steps; constructing a new ramp restarts the
/// cycle from the bottom.
#[derive(Debug, Clone)]
pub struct PulseRamp {
    step: u32,
}

impl PulseRamp {
    /// Total number of brightness levels in one full cycle.
    pub const LEN: usize = (2 * PULSE_STEPS) as usize;

    pub const fn new() -> Self {
        Self { step: 0 }
    }
}

impl Default for PulseRamp {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PulseRamp {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let level = if self.step < PULSE_STEPS {
            // Rising edge: 0, 1, .., PULSE_STEPS - 1.
            linear_map(
                self.step as f32,
                0.0,
                PULSE_STEPS as f32,
                0.0,
                PULSE_MAX_BRIGHTNESS,
            )
        } else if self.step < 2 * PULSE_STEPS {
            // Falling edge: PULSE_STEPS, PULSE_STEPS - 1, .., 1.
            let i = 2 * PULSE_STEPS - self.step;
            linear_map(
                i as f32,
                PULSE_STEPS as f32,
                0.0,
                PULSE_MAX_BRIGHTNESS,
                0.0,
            )
        } else {
            return None;
        };
        self.step += 1;
        Some(level)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = Self::LEN - self.step as usize;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle_has_exactly_1000_steps() {
        assert_eq!(PulseRamp::LEN, 1000);
        assert_eq!(PulseRamp::new().count(), 1000);
    }

    #[test]
    fn test_cycle_starts_dark_and_peaks_at_the_turnaround() {
        let levels: heapless::Vec<f32, { PulseRamp::LEN }> = PulseRamp::new().collect();
        assert_eq!(levels[0], 0.0);
        assert!((levels[500] - PULSE_MAX_BRIGHTNESS).abs() < 1e-6);
        // The final descending step lands one increment above zero.
        assert!(*levels.last().unwrap() < 0.001);
    }

    #[test]
    fn test_levels_never_exceed_the_peak() {
        for level in PulseRamp::new() {
            assert!((0.0..=PULSE_MAX_BRIGHTNESS + 1e-6).contains(&level));
        }
    }

    #[test]
    fn test_monotonic_up_then_down() {
        let levels: heapless::Vec<f32, { PulseRamp::LEN }> = PulseRamp::new().collect();
        for pair in levels[..500].windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for pair in levels[500..].windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn test_ramp_is_restartable() {
        let mut first = PulseRamp::new();
        let _ = first.nth(700);

        let restarted = PulseRamp::new();
        assert_eq!(restarted.clone().next(), Some(0.0));
        assert_eq!(restarted.count(), 1000);
    }
}
