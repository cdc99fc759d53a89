//! On-chip temperature sensor.

use esp_hal::tsens::TemperatureSensor;

/// Die temperature of the ESP32-S3 itself. Feeds the diagnostic log line
/// only; it never influences the displayed color.
pub struct CpuTemperature<'a> {
    tsens: TemperatureSensor<'a>,
}

impl<'a> CpuTemperature<'a> {
    pub fn new(tsens: TemperatureSensor<'a>) -> Self {
        Self { tsens }
    }

    pub fn read_celsius(&mut self) -> f32 {
        self.tsens.get_temperature().to_celsius()
    }
}
