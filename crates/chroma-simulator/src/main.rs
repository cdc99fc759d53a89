//! Desktop simulator for the chroma-rs color-temperature light.
//!
//! Runs the core tick engine against synthetic sensor data and renders the
//! strip as truecolor blocks on one terminal line. A scripted button
//! schedule switches between the steady and pulsing display modes so both
//! render paths are exercised without hardware.
//!
//! Diagnostics go through `env_logger`; run with `RUST_LOG=info` to see the
//! per-tick tuple.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use chroma_core::color::unit_to_byte;
use chroma_core::config::{PIXEL_COUNT, TICK_INTERVAL_MS};
use chroma_core::{
    ButtonSource, ButtonStates, ColorTempEngine, Frame, PixelStrip, RGB8, StripError,
    render_steady,
};
use log::info;

// ---------------------------------------------------------------------------
// Synthetic sensor data
// ---------------------------------------------------------------------------

/// Generates slowly varying temperature and light readings, like an
/// afternoon of sun through a window.
struct SyntheticSensors {
    elapsed_secs: f64,
}

impl SyntheticSensors {
    fn new() -> Self {
        Self { elapsed_secs: 0.0 }
    }

    /// Advance the internal clock and return `(temperature °C, light lux)`.
    fn next_readings(&mut self, dt_secs: f64) -> (f32, f32) {
        self.elapsed_secs += dt_secs;
        let t = self.elapsed_secs;

        // Temperature: sweeps most of the configured 15-32 °C hue range.
        let temperature = 23.5 + 8.0 * (t / 60.0).sin();

        // Light: 5-45 lux with a shorter flicker component.
        let light = 25.0 + 18.0 * (t / 45.0).sin() + 2.0 * (t / 7.0).cos();

        (temperature as f32, light as f32)
    }
}

// ---------------------------------------------------------------------------
// Terminal strip
// ---------------------------------------------------------------------------

/// Renders the staged pixels as truecolor blocks, brightness pre-multiplied
/// into the RGB values since terminals have no global brightness knob.
struct TerminalStrip {
    staged: [RGB8; PIXEL_COUNT],
}

impl TerminalStrip {
    fn new() -> Self {
        Self {
            staged: [RGB8::default(); PIXEL_COUNT],
        }
    }
}

impl PixelStrip for TerminalStrip {
    fn fill(&mut self, color: RGB8) {
        self.staged = [color; PIXEL_COUNT];
    }

    fn show(&mut self, brightness: f32) -> Result<(), StripError> {
        let scale = unit_to_byte(brightness) as u16;
        let mut line = String::with_capacity(PIXEL_COUNT * 24);
        for pixel in &self.staged {
            let r = (pixel.r as u16 * scale / 255) as u8;
            let g = (pixel.g as u16 * scale / 255) as u8;
            let b = (pixel.b as u16 * scale / 255) as u8;
            line.push_str(&format!("\x1b[38;2;{r};{g};{b}m\u{2588}\u{2588}"));
        }
        print!("\r{line}\x1b[0m");
        io::stdout().flush().map_err(|_| StripError::WriteFailed)
    }
}

// ---------------------------------------------------------------------------
// Scripted buttons
// ---------------------------------------------------------------------------

/// Cycle length of the button script.
const SCRIPT_PERIOD: Duration = Duration::from_secs(30);

/// How long each scripted "press" is held.
const PRESS_WINDOW: Duration = Duration::from_secs(1);

/// Holds the pulsing button 10 s into every script period and the steady
/// button 20 s in, so each mode runs for a while and the pulse interruption
/// path gets exercised.
struct ScriptedButtons {
    started: Instant,
}

impl ScriptedButtons {
    fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl ButtonSource for ScriptedButtons {
    fn read(&mut self) -> ButtonStates {
        let in_period = self.started.elapsed().as_secs_f64() % SCRIPT_PERIOD.as_secs_f64();
        let window = PRESS_WINDOW.as_secs_f64();
        ButtonStates {
            steady: (20.0..20.0 + window).contains(&in_period),
            pulsing: (10.0..10.0 + window).contains(&in_period),
        }
    }
}

// ---------------------------------------------------------------------------
// Main loop
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();

    let tick = Duration::from_millis(TICK_INTERVAL_MS);
    let mut sensors = SyntheticSensors::new();
    let mut buttons = ScriptedButtons::new();
    let mut strip = TerminalStrip::new();
    let mut engine = ColorTempEngine::new();

    info!(
        "simulating {} pixels at a {} ms tick; press Ctrl-C to quit",
        PIXEL_COUNT, TICK_INTERVAL_MS
    );

    loop {
        let (raw_temp, raw_light) = sensors.next_readings(tick.as_secs_f64());
        let frame = engine.tick(raw_temp, raw_light, buttons.read());
        // A die runs well above ambient; close enough for a fake.
        engine.log_diagnostics(raw_temp + 18.0);

        let result = match frame {
            Frame::Warmup => Ok(()),
            Frame::Steady { hue, brightness } => render_steady(&mut strip, hue, brightness),
            Frame::Pulse { hue } => engine
                .run_pulse(&mut strip, &mut buttons, hue)
                .map(|outcome| info!("pulse cycle: {:?}", outcome)),
        };
        if let Err(e) = result {
            eprintln!("render failed: {e}");
        }

        thread::sleep(tick);
    }
}
