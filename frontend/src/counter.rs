//! Scroll-triggered stat counters.

use log::{debug, warn};

use crate::config::COUNTER_STEPS;

/// Element rectangle in viewport coordinates, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// All four edges inside the window; partially visible elements don't count.
    pub fn fully_contains(&self, bounds: &Bounds) -> bool {
        bounds.top >= 0.0
            && bounds.left >= 0.0
            && bounds.bottom <= self.height
            && bounds.right <= self.width
    }
}

/// Reads the leading integer of an attribute value the way markup authors expect:
/// `"1200"`, `" 98% "` and `"+15 years"` all count, `"n/a"` does not.
pub fn parse_target(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}

/// Fixed-step count from zero to a target: the same number of ticks whatever the target,
/// so large numbers move in coarser jumps.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: f64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CountUp {
    pub fn new(target: i64) -> Self {
        let target = target as f64;
        Self {
            target,
            increment: target / COUNTER_STEPS,
            current: 0.0,
            finished: false,
        }
    }

    /// One tick. Returns the value to display.
    pub fn step(&mut self) -> i64 {
        if !self.finished {
            self.current += self.increment;
            if self.current >= self.target {
                self.current = self.target;
                self.finished = true;
            }
        }
        self.displayed()
    }

    pub fn displayed(&self) -> i64 {
        self.current.floor() as i64
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[derive(Clone, Debug)]
pub struct Metric {
    raw: String,
    target: Option<i64>,
    animated: bool,
    count: Option<CountUp>,
}

impl Metric {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            target: parse_target(&raw),
            raw,
            animated: false,
            count: None,
        }
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    pub fn is_counting(&self) -> bool {
        self.count.as_ref().map_or(false, |count| !count.is_finished())
    }

    /// Text for the metric's number element.
    pub fn display(&self) -> String {
        match (&self.count, self.target) {
            (Some(count), _) => count.displayed().to_string(),
            (None, Some(_)) => "0".to_string(),
            (None, None) => self.raw.clone(),
        }
    }
}

/// All counters of one stats section, plus the shortcut flag that turns the scroll check
/// into a no-op once every metric has fired.
#[derive(Clone, Debug)]
pub struct StatsBoard {
    metrics: Vec<Metric>,
    all_animated: bool,
}

impl StatsBoard {
    /// `None` when there are no metrics; the counter feature is then absent.
    pub fn new<I, T>(raw_targets: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let metrics: Vec<Metric> = raw_targets.into_iter().map(Metric::new).collect();
        if metrics.is_empty() {
            return None;
        }
        Some(Self {
            metrics,
            all_animated: false,
        })
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn all_animated(&self) -> bool {
        self.all_animated
    }

    pub fn animated_count(&self) -> usize {
        self.metrics.iter().filter(|metric| metric.animated).count()
    }

    /// Starts every not-yet-animated metric for which `in_view` holds and returns the
    /// indices that now need a running tick.
    pub fn check_and_animate(&mut self, mut in_view: impl FnMut(usize) -> bool) -> Vec<usize> {
        if self.all_animated {
            return Vec::new();
        }

        let mut started = Vec::new();
        for (index, metric) in self.metrics.iter_mut().enumerate() {
            if metric.animated || !in_view(index) {
                continue;
            }
            metric.animated = true;
            match metric.target {
                Some(target) => {
                    debug!("Counter {} starts toward {}", index, target);
                    metric.count = Some(CountUp::new(target));
                    started.push(index);
                }
                None => warn!(
                    "Counter {} has no numeric target ({:?}); leaving it as is",
                    index, metric.raw
                ),
            }
        }

        self.all_animated = self.metrics.iter().all(|metric| metric.animated);
        started
    }

    /// Advances one metric's animation. Returns `true` once that metric has reached its
    /// target (and for any index that isn't counting), so the caller can stop its tick.
    pub fn step(&mut self, index: usize) -> bool {
        match self
            .metrics
            .get_mut(index)
            .and_then(|metric| metric.count.as_mut())
        {
            Some(count) => {
                count.step();
                count.is_finished()
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SCREEN: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    fn bounds(top: f64, left: f64, bottom: f64, right: f64) -> Bounds {
        Bounds {
            top,
            left,
            bottom,
            right,
        }
    }

    #[test]
    fn viewport_requires_all_four_edges_inside() {
        assert!(SCREEN.fully_contains(&bounds(100.0, 10.0, 300.0, 400.0)));
        assert!(SCREEN.fully_contains(&bounds(0.0, 0.0, 720.0, 1280.0)));
        assert!(!SCREEN.fully_contains(&bounds(-1.0, 10.0, 300.0, 400.0)));
        assert!(!SCREEN.fully_contains(&bounds(600.0, 10.0, 800.0, 400.0)));
        assert!(!SCREEN.fully_contains(&bounds(100.0, -5.0, 300.0, 400.0)));
        assert!(!SCREEN.fully_contains(&bounds(100.0, 1000.0, 300.0, 1300.0)));
    }

    #[test]
    fn parses_leading_integer() {
        assert_eq!(parse_target("57"), Some(57));
        assert_eq!(parse_target("  1200 "), Some(1200));
        assert_eq!(parse_target("98%"), Some(98));
        assert_eq!(parse_target("+15 years"), Some(15));
        assert_eq!(parse_target("-3"), Some(-3));
        assert_eq!(parse_target("n/a"), None);
        assert_eq!(parse_target(""), None);
        assert_eq!(parse_target("-"), None);
    }

    #[test]
    fn target_57_ends_exactly_at_57() {
        let mut count = CountUp::new(57);
        let mut steps = 0;
        let mut last = 0;
        while !count.is_finished() {
            let shown = count.step();
            assert!(shown >= last);
            assert!(shown <= 57);
            last = shown;
            steps += 1;
        }
        assert_eq!(count.displayed(), 57);
        assert!((100..=101).contains(&steps), "took {} steps", steps);
    }

    #[test]
    fn zero_target_finishes_on_first_step() {
        let mut count = CountUp::new(0);
        assert_eq!(count.step(), 0);
        assert!(count.is_finished());
    }

    #[test]
    fn finished_count_stays_put() {
        let mut count = CountUp::new(10);
        for _ in 0..500 {
            count.step();
        }
        assert_eq!(count.step(), 10);
    }

    #[test]
    fn empty_board_is_absent() {
        assert!(StatsBoard::new(Vec::<String>::new()).is_none());
    }

    #[test]
    fn only_visible_metrics_start() {
        let mut board = StatsBoard::new(["10", "20", "30"]).unwrap();
        let started = board.check_and_animate(|index| index != 1);
        assert_eq!(started, vec![0, 2]);
        assert!(!board.all_animated());

        let started = board.check_and_animate(|_| true);
        assert_eq!(started, vec![1]);
        assert!(board.all_animated());
    }

    #[test]
    fn animated_metric_is_never_restarted() {
        let mut board = StatsBoard::new(["40", "50"]).unwrap();
        board.check_and_animate(|index| index == 0);
        while !board.step(0) {}
        assert_eq!(board.metrics()[0].display(), "40");

        let started = board.check_and_animate(|_| true);
        assert_eq!(started, vec![1]);
        assert_eq!(board.metrics()[0].display(), "40");
        assert!(!board.metrics()[0].is_counting());
    }

    #[test]
    fn check_is_a_no_op_once_everything_fired() {
        let mut board = StatsBoard::new(["5"]).unwrap();
        board.check_and_animate(|_| true);
        let mut asked = false;
        let started = board.check_and_animate(|_| {
            asked = true;
            true
        });
        assert!(started.is_empty());
        assert!(!asked);
    }

    #[test]
    fn non_numeric_target_keeps_raw_text() {
        let mut board = StatsBoard::new(["24/7", "abc"]).unwrap();
        let started = board.check_and_animate(|_| true);
        assert_eq!(started, vec![0]);
        assert_eq!(board.metrics()[1].display(), "abc");
        assert!(board.metrics()[1].is_animated());
        assert!(board.all_animated());
        assert!(board.step(1));
    }

    #[test]
    fn animated_count_moves_only_when_a_metric_is_flagged() {
        let mut board = StatsBoard::new(["10", "n/a", "30"]).unwrap();
        board.check_and_animate(|_| false);
        assert_eq!(board.animated_count(), 0);

        let started = board.check_and_animate(|index| index == 1);
        assert!(started.is_empty());
        assert_eq!(board.animated_count(), 1);

        board.check_and_animate(|index| index == 1);
        assert_eq!(board.animated_count(), 1);
    }

    #[test]
    fn pending_metric_shows_zero() {
        let board = StatsBoard::new(["250"]).unwrap();
        assert_eq!(board.metrics()[0].display(), "0");
    }

    proptest! {
        #[test]
        fn prop_count_is_monotone_and_lands_on_target(target in 0i64..5_000_000) {
            let mut count = CountUp::new(target);
            let mut last = count.displayed();
            let mut steps = 0;
            while !count.is_finished() {
                let shown = count.step();
                prop_assert!(shown >= last);
                prop_assert!(shown <= target);
                last = shown;
                steps += 1;
                prop_assert!(steps <= 102);
            }
            prop_assert_eq!(count.displayed(), target);
        }
    }
}
