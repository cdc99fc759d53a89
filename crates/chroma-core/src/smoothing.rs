//! Bounded rolling-average smoothing for sensor readings.
//!
//! Each monitored quantity (temperature, light) owns one window. Readings
//! outside the configured plausibility bounds are dropped before they can
//! disturb the average, so a single bad sample never corrupts the window.

use heapless::Deque;

/// Stand-in value reported for an empty window.
///
/// The typed API returns `None` instead; this constant only appears in the
/// diagnostic log line, which prints `-1` until real data arrives.
pub const INVALID_READING: f32 = -1.0;

/// A FIFO window of the most recent plausible readings, capped at `N`.
pub struct RollingAverage<const N: usize> {
    window: Deque<f32, N>,
    lower: f32,
    upper: f32,
}

impl<const N: usize> RollingAverage<N> {
    /// Create an empty window admitting readings strictly between
    /// `lower` and `upper`.
    pub const fn new(lower: f32, upper: f32) -> Self {
        Self {
            window: Deque::new(),
            lower,
            upper,
        }
    }

    /// Offer a candidate reading and return the current mean.
    ///
    /// Plausible candidates (strictly inside the bounds) are appended; when
    /// the window is full the oldest sample is evicted first, so the length
    /// never exceeds `N`. Implausible candidates leave the window untouched
    /// and the returned mean reflects prior history only.
    pub fn admit(&mut self, candidate: f32) -> Option<f32> {
        if candidate > self.lower && candidate < self.upper {
            if self.window.is_full() {
                self.window.pop_front();
            }
            // Cannot fail: a slot was just freed if the window was full.
            let _ = self.window.push_back(candidate);
        }
        self.mean()
    }

    /// Arithmetic mean of the window, or `None` while it is still empty.
    pub fn mean(&self) -> Option<f32> {
        if self.window.is_empty() {
            return None;
        }
        let sum: f32 = self.window.iter().sum();
        Some(sum / self.window.len() as f32)
    }

    /// Mean with [`INVALID_READING`] standing in for an empty window.
    pub fn mean_or_invalid(&self) -> f32 {
        self.mean().unwrap_or(INVALID_READING)
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window<const N: usize>() -> RollingAverage<N> {
        RollingAverage::new(0.0, 200.0)
    }

    #[test]
    fn test_empty_mean_is_none() {
        let avg = window::<20>();
        assert_eq!(avg.mean(), None);
        assert_eq!(avg.mean_or_invalid(), INVALID_READING);
    }

    #[test]
    fn test_mean_of_three_readings() {
        let mut avg = window::<20>();
        avg.admit(10.0);
        avg.admit(20.0);
        let mean = avg.admit(30.0);
        assert_eq!(mean, Some(20.0));
    }

    #[test]
    fn test_length_never_exceeds_capacity() {
        let mut avg = window::<20>();
        for i in 0..100 {
            avg.admit(1.0 + i as f32);
            assert!(avg.len() <= 20);
        }
        assert_eq!(avg.len(), 20);
    }

    #[test]
    fn test_full_window_evicts_oldest_first() {
        let mut avg = window::<20>();
        for i in 1..=20 {
            avg.admit(i as f32);
        }
        assert_eq!(avg.mean(), Some(10.5));

        // 21st reading pushes out the 1.0 at the front.
        let mean = avg.admit(21.0);
        assert_eq!(avg.len(), 20);
        assert_eq!(mean, Some(11.5));
    }

    #[test]
    fn test_out_of_bounds_candidate_leaves_window_untouched() {
        let mut avg = window::<20>();
        avg.admit(10.0);
        avg.admit(20.0);
        avg.admit(30.0);

        for bad in [-5.0, 250.0, f32::MAX] {
            let mean = avg.admit(bad);
            assert_eq!(mean, Some(20.0));
            assert_eq!(avg.len(), 3);
        }
    }

    #[test]
    fn test_bounds_are_strict() {
        let mut avg = window::<20>();
        avg.admit(0.0);
        avg.admit(200.0);
        assert!(avg.is_empty());

        avg.admit(0.1);
        avg.admit(199.9);
        assert_eq!(avg.len(), 2);
    }

    #[test]
    fn test_rejection_on_empty_window_still_reports_no_data() {
        let mut avg = window::<20>();
        assert_eq!(avg.admit(-1.0), None);
        assert_eq!(avg.mean_or_invalid(), INVALID_READING);
    }
}
