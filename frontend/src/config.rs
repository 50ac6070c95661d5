use log::Level;

/// Auto-rotation period of the hero slider.
pub const ROTATION_INTERVAL_MS: u32 = 5_000;

/// Tick period of a running stat counter.
pub const COUNTER_TICK_MS: u32 = 20;

/// A counter reaches its target in this many ticks, whatever the target is.
pub const COUNTER_STEPS: f64 = 100.0;

/// Simulated round trip of an appointment request.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

/// How long a service card's icon keeps its `pulse` class.
pub const ICON_PULSE_MS: u32 = 300;

pub const CARD_VISIBILITY_THRESHOLD: f64 = 0.1;
pub const CARD_ROOT_MARGIN: &str = "0px 0px -100px 0px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
