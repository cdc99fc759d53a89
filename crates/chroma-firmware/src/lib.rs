//! ESP32-S3 firmware-specific modules for chroma-rs
//!
//! This crate contains hardware code that cannot compile on desktop targets:
//! peripheral initialization, the GPIO mode buttons, the RMT-driven WS2812
//! strip, and the concrete I2C sensor drivers.

#![no_std]

pub mod buttons;
pub mod sensors;
pub mod strip;
