//! Pixel-strip output seam.

use smart_leds::RGB8;
use thiserror_no_std::Error;

/// Errors surfaced by strip implementations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    /// The underlying write to the LED hardware failed.
    #[error("failed to write pixel data to the strip")]
    WriteFailed,
}

/// An addressable RGB strip with an explicit flush.
///
/// Staged colors are not visible until [`show`](PixelStrip::show) is called,
/// which applies a global brightness scalar in `0.0..=1.0` to every pixel.
///
/// Implementations: the RMT-driven WS2812 strip in `chroma-firmware`, the
/// ANSI terminal renderer in `chroma-simulator`, and mocks in tests.
pub trait PixelStrip {
    /// Stage the same color on every pixel.
    fn fill(&mut self, color: RGB8);

    /// Make staged colors visible at the given global brightness.
    fn show(&mut self, brightness: f32) -> Result<(), StripError>;
}
