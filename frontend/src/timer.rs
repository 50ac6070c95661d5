//! Cancellable scheduled tasks.
//!
//! Every feature that waits on the clock goes through [`Scheduler`]. A task lives as long as
//! its handle: dropping the handle cancels it, and dropping it again is impossible, so
//! cancellation is idempotent by ownership.

use gloo_timers::callback::{Interval, Timeout};

pub trait Scheduler {
    type Handle;

    /// Runs `tick` every `period_ms` until the handle is dropped.
    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;

    /// Runs `done` once after `delay_ms` unless the handle is dropped first.
    fn once(&self, delay_ms: u32, done: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser event-loop timers (`setInterval` / `setTimeout`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserScheduler;

pub enum TaskHandle {
    Repeating(Interval),
    Once(Timeout),
}

impl Scheduler for BrowserScheduler {
    type Handle = TaskHandle;

    fn every(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> TaskHandle {
        TaskHandle::Repeating(Interval::new(period_ms, move || tick()))
    }

    fn once(&self, delay_ms: u32, done: Box<dyn FnOnce()>) -> TaskHandle {
        TaskHandle::Once(Timeout::new(delay_ms, done))
    }
}
