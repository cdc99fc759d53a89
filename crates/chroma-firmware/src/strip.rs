//! WS2812 pixel strip on the RMT peripheral.

use chroma_core::color::unit_to_byte;
use chroma_core::config::PIXEL_COUNT;
use chroma_core::{PixelStrip, RGB8, StripError};
use esp_hal_smartled::SmartLedsAdapter;
use smart_leds::brightness;
use smart_leds_trait::SmartLedsWrite;

/// RMT buffer size for the strip: 24 pulses per pixel plus the reset code.
pub const STRIP_BUFFER_SIZE: usize = PIXEL_COUNT * 24 + 1;

/// The onboard strip: staged colors are held in RAM and only pushed out over
/// RMT when `show` runs, so a tick can restage freely before flushing.
pub struct RmtStrip<'a> {
    adapter: SmartLedsAdapter<'a, STRIP_BUFFER_SIZE>,
    staged: [RGB8; PIXEL_COUNT],
}

impl<'a> RmtStrip<'a> {
    pub fn new(adapter: SmartLedsAdapter<'a, STRIP_BUFFER_SIZE>) -> Self {
        Self {
            adapter,
            staged: [RGB8::default(); PIXEL_COUNT],
        }
    }
}

impl PixelStrip for RmtStrip<'_> {
    fn fill(&mut self, color: RGB8) {
        self.staged = [color; PIXEL_COUNT];
    }

    fn show(&mut self, level: f32) -> Result<(), StripError> {
        let scaled = brightness(self.staged.iter().copied(), unit_to_byte(level));
        self.adapter
            .write(scaled)
            .map_err(|_| StripError::WriteFailed)
    }
}
