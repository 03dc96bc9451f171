//! Page chrome helpers: the boot greeting sequence, the clock line, the
//! link entrance fade, and the fake telemetry readouts.
//!
//! Everything here is a pure function of elapsed time (plus an RNG for
//! the readouts), so the frame loop can simply re-evaluate them each
//! repaint instead of running its own timers.

use chrono::NaiveDateTime;
use rand::Rng;

/// Seconds the `HELLO WORLD` banner holds before typing starts.
const GREETING_HOLD: f64 = 2.5;
/// Typing speed of the greeting, seconds per character.
const CHAR_DELAY: f64 = 0.1;
/// Blink half-period of the trailing cursor once typing is done.
const CURSOR_BLINK: f64 = 0.8;
/// Seconds between telemetry resamples.
const READOUT_INTERVAL: f64 = 3.0;
/// Seconds before the first link starts fading in.
const ENTRANCE_DELAY: f64 = 0.1;
/// Extra delay per link after the first.
const ENTRANCE_STEP: f64 = 0.1;
/// Seconds a single link takes to fade from invisible to opaque.
const ENTRANCE_FADE: f64 = 0.4;

/// Time-of-day greeting, bucketed the way the page always has:
/// morning 05..12, afternoon 12..18, evening otherwise.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if (5..12).contains(&hour) {
        "> GOOD MORNING"
    } else if (12..18).contains(&hour) {
        "> GOOD AFTERNOON"
    } else {
        "> GOOD EVENING"
    }
}

/// The greeting to display `elapsed` seconds after startup.
///
/// Holds on `HELLO WORLD`, then types `target` one character per
/// [`CHAR_DELAY`] (the first appears as soon as typing starts), then
/// alternates between the bare text and a trailing `_` cursor every
/// [`CURSOR_BLINK`] seconds, starting bare.
pub fn greeting_text(elapsed: f64, target: &str) -> String {
    if elapsed < GREETING_HOLD {
        return "HELLO WORLD".to_owned();
    }

    let typing = elapsed - GREETING_HOLD;
    let chars: Vec<char> = target.chars().collect();
    // The first character lands the instant typing starts.
    let shown = ((typing / CHAR_DELAY) as usize + 1).min(chars.len());
    if shown < chars.len() {
        return chars[..shown].iter().collect();
    }

    let settled = typing - chars.len() as f64 * CHAR_DELAY;
    if (settled / CURSOR_BLINK) as u64 % 2 == 1 {
        format!("{target}_")
    } else {
        target.to_owned()
    }
}

/// Formats the header clock, e.g. `23 Aug • 14:03:05`.
pub fn clock_line(now: NaiveDateTime) -> String {
    now.format("%-d %b • %H:%M:%S").to_string()
}

/// Entrance opacity of the link at `index`, staggered top to bottom.
pub fn entrance_alpha(elapsed: f64, index: usize) -> f32 {
    let delay = ENTRANCE_DELAY + index as f64 * ENTRANCE_STEP;
    ((elapsed - delay) / ENTRANCE_FADE).clamp(0.0, 1.0) as f32
}

/// Fake CPU/MEM figures shown in the footer. Resampled every
/// [`READOUT_INTERVAL`] seconds so the footer looks alive without
/// flickering every frame.
pub struct Readouts {
    pub cpu: u32,
    pub mem: u32,
    last_sample: f64,
}

impl Readouts {
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut readouts = Self {
            cpu: 0,
            mem: 0,
            last_sample: 0.0,
        };
        readouts.sample(rng);
        readouts
    }

    /// Resamples once the interval has passed; a no-op otherwise.
    pub fn tick(&mut self, now: f64, rng: &mut impl Rng) {
        if now - self.last_sample >= READOUT_INTERVAL {
            self.sample(rng);
            self.last_sample = now;
        }
    }

    fn sample(&mut self, rng: &mut impl Rng) {
        self.cpu = rng.random_range(5..35);
        self.mem = rng.random_range(300..500);
    }

    pub fn cpu_label(&self) -> String {
        format!("CPU: {}%", self.cpu)
    }

    pub fn mem_label(&self) -> String {
        format!("MEM: {}MB", self.mem)
    }
}
