//! Hero slider state machine.
//!
//! A [`Rotator`] owns the active panel index and the auto-rotation timer. The view layer
//! only forwards clicks, pointer events and timer ticks; indicator state is derived from
//! [`Rotator::active`], so panel and indicator can never disagree.

use std::rc::Rc;

use log::{debug, error};

use crate::config::ROTATION_INTERVAL_MS;
use crate::error::SiteError;
use crate::timer::Scheduler;

pub struct Rotator<S: Scheduler> {
    len: usize,
    active: usize,
    hovered: bool,
    scheduler: S,
    tick: Rc<dyn Fn()>,
    // Present iff auto-rotation is running.
    timer: Option<S::Handle>,
}

impl<S: Scheduler> Rotator<S> {
    /// Starts rotating `len` panels from panel 0. Returns `None` when there is nothing to
    /// rotate; the slider is then simply absent.
    ///
    /// `tick` is called by the timer; it should route back into [`Rotator::tick`].
    pub fn start(len: usize, scheduler: S, tick: Rc<dyn Fn()>) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let mut rotator = Self {
            len,
            active: 0,
            hovered: false,
            scheduler,
            tick,
            timer: None,
        };
        rotator.start_timer();
        Some(rotator)
    }

    pub fn panel_count(&self) -> usize {
        self.len
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn show(&mut self, index: usize) -> Result<(), SiteError> {
        if index >= self.len {
            return Err(SiteError::PanelOutOfRange {
                index,
                len: self.len,
            });
        }
        debug!("Slider: panel {} -> {}", self.active, index);
        self.active = index;
        Ok(())
    }

    pub fn advance(&mut self) {
        self.show_wrapped(self.active + 1);
    }

    pub fn retreat(&mut self) {
        self.show_wrapped(self.active + self.len - 1);
    }

    fn show_wrapped(&mut self, index: usize) {
        if let Err(e) = self.show(index % self.len) {
            error!("Slider wrap-around failed: {}", e);
        }
    }

    /// Indicator click: jump, then give the visitor a full interval on the chosen panel.
    pub fn go_to(&mut self, index: usize) -> Result<(), SiteError> {
        self.show(index)?;
        self.restart_timer();
        Ok(())
    }

    pub fn next(&mut self) {
        self.advance();
        self.restart_timer();
    }

    pub fn prev(&mut self) {
        self.retreat();
        self.restart_timer();
    }

    /// Timer tick. A tick that was already queued when the timer got cancelled is dropped.
    pub fn tick(&mut self) {
        if self.is_running() {
            self.advance();
        }
    }

    pub fn pause(&mut self) {
        self.hovered = true;
        self.timer = None;
    }

    pub fn resume(&mut self) {
        self.hovered = false;
        if self.timer.is_none() {
            self.start_timer();
        }
    }

    fn restart_timer(&mut self) {
        self.timer = None;
        // While hovered, resume() owns the restart.
        if !self.hovered {
            self.start_timer();
        }
    }

    fn start_timer(&mut self) {
        let tick = Rc::clone(&self.tick);
        self.timer = Some(
            self.scheduler
                .every(ROTATION_INTERVAL_MS, Box::new(move || tick())),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::manual::ManualScheduler;
    use proptest::prelude::*;
    use std::cell::Cell;

    struct Harness {
        clock: ManualScheduler,
        pending: Rc<Cell<u32>>,
        rotator: Rotator<ManualScheduler>,
    }

    impl Harness {
        fn new(len: usize) -> Self {
            let clock = ManualScheduler::default();
            let pending = Rc::new(Cell::new(0));
            let queued = Rc::clone(&pending);
            let rotator = Rotator::start(
                len,
                clock.clone(),
                Rc::new(move || queued.set(queued.get() + 1)),
            )
            .expect("non-empty slider");
            Self {
                clock,
                pending,
                rotator,
            }
        }

        /// Advances the clock and delivers queued ticks, like the component's message loop.
        fn wait(&mut self, ms: u64) -> u32 {
            self.clock.advance(ms);
            let ticks = self.pending.replace(0);
            for _ in 0..ticks {
                self.rotator.tick();
            }
            ticks
        }
    }

    #[test]
    fn zero_panels_disables_slider() {
        let clock = ManualScheduler::default();
        assert!(Rotator::start(0, clock.clone(), Rc::new(|| {})).is_none());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn starts_on_first_panel_with_timer_running() {
        let harness = Harness::new(4);
        assert_eq!(harness.rotator.active(), 0);
        assert!(harness.rotator.is_running());
        assert_eq!(harness.clock.pending(), 1);
    }

    #[test]
    fn three_panels_advance_wraps_to_start() {
        let mut harness = Harness::new(3);
        let mut seen = vec![harness.rotator.active()];
        for _ in 0..3 {
            harness.rotator.advance();
            seen.push(harness.rotator.active());
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn retreat_wraps_from_first_to_last() {
        let mut harness = Harness::new(3);
        harness.rotator.retreat();
        assert_eq!(harness.rotator.active(), 2);
        harness.rotator.retreat();
        assert_eq!(harness.rotator.active(), 1);
    }

    #[test]
    fn single_panel_stays_put() {
        let mut harness = Harness::new(1);
        harness.rotator.advance();
        harness.rotator.retreat();
        assert_eq!(harness.rotator.active(), 0);
    }

    #[test]
    fn show_rejects_out_of_range_index() {
        let mut harness = Harness::new(3);
        harness.rotator.show(1).unwrap();
        let err = harness.rotator.show(3).unwrap_err();
        assert!(matches!(err, SiteError::PanelOutOfRange { index: 3, len: 3 }));
        assert_eq!(harness.rotator.active(), 1);
    }

    #[test]
    fn exactly_one_indicator_is_active() {
        let mut harness = Harness::new(5);
        harness.rotator.go_to(3).unwrap();
        let active: Vec<usize> = (0..5).filter(|&i| harness.rotator.is_active(i)).collect();
        assert_eq!(active, vec![3]);
    }

    #[test]
    fn timer_advances_every_five_seconds() {
        let mut harness = Harness::new(3);
        assert_eq!(harness.wait(4_999), 0);
        assert_eq!(harness.wait(1), 1);
        assert_eq!(harness.rotator.active(), 1);
        assert_eq!(harness.wait(10_000), 2);
        assert_eq!(harness.rotator.active(), 0);
    }

    #[test]
    fn manual_navigation_restarts_the_clock() {
        let mut harness = Harness::new(3);
        harness.wait(4_000);
        harness.rotator.go_to(2).unwrap();

        assert_eq!(harness.wait(4_999), 0);
        assert_eq!(harness.rotator.active(), 2);
        assert_eq!(harness.wait(1), 1);
        assert_eq!(harness.rotator.active(), 0);
    }

    #[test]
    fn prev_and_next_also_restart_the_clock() {
        let mut harness = Harness::new(4);
        harness.wait(3_000);
        harness.rotator.next();
        harness.wait(3_000);
        harness.rotator.prev();
        assert_eq!(harness.rotator.active(), 0);
        assert_eq!(harness.wait(4_999), 0);
        assert_eq!(harness.wait(1), 1);
        assert_eq!(harness.clock.pending(), 1);
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let mut harness = Harness::new(3);
        harness.wait(2_000);
        harness.rotator.pause();
        assert!(!harness.rotator.is_running());
        assert_eq!(harness.wait(60_000), 0);

        harness.rotator.resume();
        assert_eq!(harness.wait(4_999), 0);
        assert_eq!(harness.wait(1), 1);
    }

    #[test]
    fn pause_and_resume_are_idempotent() {
        let mut harness = Harness::new(3);
        harness.rotator.pause();
        harness.rotator.pause();
        harness.rotator.resume();
        harness.rotator.resume();
        assert_eq!(harness.clock.pending(), 1);
        assert_eq!(harness.wait(5_000), 1);
    }

    #[test]
    fn navigating_while_hovered_stays_paused() {
        let mut harness = Harness::new(3);
        harness.rotator.pause();
        harness.rotator.go_to(1).unwrap();
        harness.rotator.next();
        assert!(!harness.rotator.is_running());
        assert_eq!(harness.wait(20_000), 0);
        assert_eq!(harness.rotator.active(), 2);
    }

    #[test]
    fn stale_tick_after_pause_is_ignored() {
        let mut harness = Harness::new(3);
        harness.rotator.pause();
        harness.rotator.tick();
        assert_eq!(harness.rotator.active(), 0);
    }

    #[test]
    fn advance_and_retreat_land_where_show_would() {
        for start in 0..4 {
            let mut stepped = Harness::new(4);
            let mut shown = Harness::new(4);
            stepped.rotator.show(start).unwrap();

            stepped.rotator.advance();
            shown.rotator.show((start + 1) % 4).unwrap();
            assert_eq!(stepped.rotator.active(), shown.rotator.active());

            stepped.rotator.retreat();
            stepped.rotator.retreat();
            shown.rotator.show((start + 3) % 4).unwrap();
            assert_eq!(stepped.rotator.active(), shown.rotator.active());
        }
    }

    proptest! {
        #[test]
        fn prop_advance_len_times_returns_to_start(len in 1usize..64, start in 0usize..64) {
            let mut harness = Harness::new(len);
            let start = start % len;
            harness.rotator.show(start).unwrap();
            for _ in 0..len {
                harness.rotator.advance();
            }
            prop_assert_eq!(harness.rotator.active(), start);
        }

        #[test]
        fn prop_retreat_undoes_advance(len in 1usize..64, start in 0usize..64) {
            let mut harness = Harness::new(len);
            let start = start % len;
            harness.rotator.show(start).unwrap();
            harness.rotator.advance();
            harness.rotator.retreat();
            prop_assert_eq!(harness.rotator.active(), start);
        }
    }
}
