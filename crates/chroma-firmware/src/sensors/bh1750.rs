//! BH1750 ambient light driver.

use bh1750_embedded::{Address, Resolution, r#async::Bh1750Async};
use embedded_hal_async::i2c::I2c;
use log::error;

use super::SensorError;

/// Ambient light level from the BH1750, in lux. This is the reading that
/// drives the steady-mode brightness.
pub struct Bh1750Sensor<I> {
    sensor: Bh1750Async<I, embassy_time::Delay>,
}

impl<I: I2c> Bh1750Sensor<I> {
    pub fn new(i2c: I) -> Self {
        Self {
            sensor: Bh1750Async::<I, embassy_time::Delay>::new(
                i2c,
                embassy_time::Delay,
                Address::Low,
            ),
        }
    }

    pub async fn read_lux(&mut self) -> Result<f32, SensorError> {
        self.sensor
            .one_time_measurement(Resolution::High)
            .await
            .map_err(|e| {
                error!("BH1750 one_time_measurement failed: {:?}", e);
                SensorError::ReadFailed {
                    sensor: "BH1750",
                    operation: "one_time_measurement",
                }
            })
    }
}
