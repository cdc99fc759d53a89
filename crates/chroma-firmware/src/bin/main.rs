#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]

use chroma_core::config::{PIXEL_COUNT, TICK_INTERVAL_MS};
use chroma_core::{ButtonSource, ColorTempEngine, Frame, render_steady};
use chroma_firmware::buttons::BoardButtons;
use chroma_firmware::sensors::{Bh1750Sensor, CpuTemperature, Sht40Sensor};
use chroma_firmware::strip::RmtStrip;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::tsens::{Config as TsensConfig, TemperatureSensor};
use esp_hal_smartled::{SmartLedsAdapter, smart_led_buffer};
use log::{info, warn};

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    rtt_target::rprintln!("PANIC: {}", info);
    loop {}
}

// This creates a default app-descriptor required by the esp-idf bootloader.
esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    rtt_target::rtt_init_log!();

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    info!("Embassy initialized");

    // Ambient sensors, each on its own I2C bus (distinct default addresses,
    // but separate buses keep the wiring trivial).
    let i2c0 = I2c::new(peripherals.I2C0, I2cConfig::default())
        .expect("Failed to initialize I2C0")
        .with_sda(peripherals.GPIO8)
        .with_scl(peripherals.GPIO9)
        .into_async();
    let mut thermometer = Sht40Sensor::new(i2c0);

    let i2c1 = I2c::new(peripherals.I2C1, I2cConfig::default())
        .expect("Failed to initialize I2C1")
        .with_sda(peripherals.GPIO17)
        .with_scl(peripherals.GPIO18)
        .into_async();
    let mut light_meter = Bh1750Sensor::new(i2c1);

    // Die temperature, diagnostic log line only.
    let tsens = TemperatureSensor::new(peripherals.TSENS, TsensConfig::default())
        .expect("Failed to initialize the temperature sensor");
    let mut cpu = CpuTemperature::new(tsens);

    // Mode buttons, active high.
    let input_config = InputConfig::default().with_pull(Pull::Down);
    let mut buttons = BoardButtons::new(
        Input::new(peripherals.GPIO1, input_config),
        Input::new(peripherals.GPIO2, input_config),
    );

    // WS2812 strip on RMT channel 0.
    let rmt = Rmt::new(peripherals.RMT, Rate::from_mhz(80)).expect("Failed to initialize RMT");
    let mut rmt_buffer = smart_led_buffer!(PIXEL_COUNT);
    let adapter = SmartLedsAdapter::new(rmt.channel0, peripherals.GPIO48, &mut rmt_buffer);
    let mut strip = RmtStrip::new(adapter);

    let mut engine = ColorTempEngine::new();

    info!(
        "chroma-rs running: {} pixels, {} ms tick",
        PIXEL_COUNT, TICK_INTERVAL_MS
    );

    loop {
        Timer::after(Duration::from_millis(TICK_INTERVAL_MS)).await;

        let raw_temp = match thermometer.read_celsius().await {
            Ok(value) => value,
            Err(e) => {
                warn!("skipping tick: {}", e);
                continue;
            }
        };
        let raw_light = match light_meter.read_lux().await {
            Ok(value) => value,
            Err(e) => {
                warn!("skipping tick: {}", e);
                continue;
            }
        };

        let frame = engine.tick(raw_temp, raw_light, buttons.read());
        engine.log_diagnostics(cpu.read_celsius());

        let result = match frame {
            Frame::Warmup => Ok(()),
            Frame::Steady { hue, brightness } => render_steady(&mut strip, hue, brightness),
            Frame::Pulse { hue } => engine
                .run_pulse(&mut strip, &mut buttons, hue)
                .map(|outcome| info!("pulse cycle: {:?}", outcome)),
        };
        if let Err(e) = result {
            warn!("strip flush failed: {}", e);
        }
    }
}
