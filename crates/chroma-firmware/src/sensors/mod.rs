//! Concrete sensor drivers for the chroma board.

mod bh1750;
mod cpu;
mod sht40;

pub use bh1750::Bh1750Sensor;
pub use cpu::CpuTemperature;
pub use sht40::Sht40Sensor;

use thiserror_no_std::Error;

/// Errors surfaced by the sensor drivers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// A measurement could not be completed.
    #[error("{sensor}: {operation} failed")]
    ReadFailed {
        sensor: &'static str,
        operation: &'static str,
    },
}
