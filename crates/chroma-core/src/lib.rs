//! Hardware-independent core library for chroma-rs
//!
//! This crate contains all platform-agnostic logic for the chroma
//! color-temperature light: rolling-average smoothing of sensor readings,
//! linear range mapping, the two-mode display state machine, pulse ramp
//! generation, and the per-tick engine that ties them together.
//!
//! It is `#![no_std]` so it compiles on both the embedded target (ESP32-S3)
//! and desktop hosts (for the simulator and tests). Hardware is reached only
//! through the [`strip::PixelStrip`] and [`mode::ButtonSource`] traits.

#![no_std]

pub mod color;
pub mod config;
pub mod engine;
pub mod mode;
pub mod pulse;
pub mod scale;
pub mod smoothing;
pub mod strip;

pub use engine::{ColorTempEngine, Frame, PulseOutcome, render_steady};
pub use mode::{ButtonSource, ButtonStates, DisplayMode};
pub use smoothing::{INVALID_READING, RollingAverage};
pub use strip::{PixelStrip, StripError};

// Re-exported so strip implementations don't need their own color dependency.
pub use smart_leds::RGB8;
