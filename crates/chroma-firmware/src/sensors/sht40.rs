//! SHT40 ambient temperature driver.

use embedded_hal_async::i2c::I2c;
use log::error;
use sht4x::Sht4xAsync;

use super::SensorError;

/// Ambient temperature from the SHT40, in °C. This is the reading that
/// drives the display hue.
pub struct Sht40Sensor<I> {
    sensor: Sht4xAsync<I, embassy_time::Delay>,
}

impl<I: I2c> Sht40Sensor<I> {
    pub fn new(i2c: I) -> Self {
        Self {
            sensor: Sht4xAsync::<I, embassy_time::Delay>::new(i2c),
        }
    }

    pub async fn read_celsius(&mut self) -> Result<f32, SensorError> {
        let measurement = self
            .sensor
            .measure(sht4x::Precision::High, &mut embassy_time::Delay)
            .await
            .map_err(|e| {
                error!("SHT40 measurement failed: {:?}", e);
                SensorError::ReadFailed {
                    sensor: "SHT40",
                    operation: "measure temperature",
                }
            })?;

        Ok(measurement.temperature_celsius().to_num::<f32>())
    }
}
