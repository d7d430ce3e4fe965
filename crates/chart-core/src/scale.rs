// File: crates/chart-core/src/scale.rs
// Summary: Time (X) and value (Y) scales mapping data domains to pixel ranges.

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeZone, Timelike, Utc, Weekday};

use crate::geometry::Rect;
use crate::series::{time_extent, Sample};
use crate::ticks::{linear_ticks, precision_for_step, tick_step};

/// Fixed value domain of the plotted metric (a percentage).
pub const VALUE_DOMAIN: (f64, f64) = (0.0, 100.0);

/// A monotonic mapping from a data domain onto a pixel range, with tick support.
pub trait Scale {
    type Domain: Copy;

    fn map(&self, v: Self::Domain) -> f64;
    /// Output range as `(start, end)` pixels; `end` may be smaller than `start`.
    fn range(&self) -> (f64, f64);
    /// Roughly `count` representative domain values, ascending.
    fn ticks(&self, count: usize) -> Vec<Self::Domain>;
    fn format_tick(&self, v: Self::Domain, count: usize) -> String;
}

/// Continuous linear scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    /// Value scale over [`VALUE_DOMAIN`], inverted so larger values sit higher.
    pub fn for_values(plot: &Rect) -> Self {
        Self::new(VALUE_DOMAIN, (plot.bottom, plot.top))
    }

    pub fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }

    /// A zero-width domain maps everything to the range start.
    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span == 0.0 || !span.is_finite() {
            return self.r0;
        }
        self.r0 + (v - self.d0) / span * (self.r1 - self.r0)
    }

    pub fn invert(&self, px: f64) -> f64 {
        let span = self.r1 - self.r0;
        if span == 0.0 {
            return self.d0;
        }
        self.d0 + (px - self.r0) / span * (self.d1 - self.d0)
    }
}

impl Scale for LinearScale {
    type Domain = f64;

    fn map(&self, v: f64) -> f64 { self.apply(v) }

    fn range(&self) -> (f64, f64) { (self.r0, self.r1) }

    fn ticks(&self, count: usize) -> Vec<f64> { linear_ticks(self.d0, self.d1, count) }

    fn format_tick(&self, v: f64, count: usize) -> String {
        let prec = precision_for_step(tick_step(self.d0, self.d1, count));
        let s = format!("{:.*}", prec, v);
        // avoid "-0" / "-0.0" for values that round to zero
        if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
            s[1..].to_string()
        } else {
            s
        }
    }
}

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;
/// 1970-01-04 was the first Sunday after the epoch; weeks start on Sunday.
const SUNDAY_OFFSET: i64 = 3 * DAY;

/// Calendar-aware tick spacing for time axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeInterval {
    /// Every `step` seconds, aligned so that `(t - offset) % step == 0`.
    Fixed { step: i64, offset: i64 },
    /// First of every month whose zero-based index is a multiple of `step`.
    Months(u32),
    /// January 1st of every year divisible by `step`.
    Years(i32),
}

const TICK_INTERVALS: [(TimeInterval, i64); 17] = [
    (TimeInterval::Fixed { step: 1, offset: 0 }, 1),
    (TimeInterval::Fixed { step: 5, offset: 0 }, 5),
    (TimeInterval::Fixed { step: 15, offset: 0 }, 15),
    (TimeInterval::Fixed { step: 30, offset: 0 }, 30),
    (TimeInterval::Fixed { step: MINUTE, offset: 0 }, MINUTE),
    (TimeInterval::Fixed { step: 5 * MINUTE, offset: 0 }, 5 * MINUTE),
    (TimeInterval::Fixed { step: 15 * MINUTE, offset: 0 }, 15 * MINUTE),
    (TimeInterval::Fixed { step: 30 * MINUTE, offset: 0 }, 30 * MINUTE),
    (TimeInterval::Fixed { step: HOUR, offset: 0 }, HOUR),
    (TimeInterval::Fixed { step: 3 * HOUR, offset: 0 }, 3 * HOUR),
    (TimeInterval::Fixed { step: 6 * HOUR, offset: 0 }, 6 * HOUR),
    (TimeInterval::Fixed { step: 12 * HOUR, offset: 0 }, 12 * HOUR),
    (TimeInterval::Fixed { step: DAY, offset: 0 }, DAY),
    (TimeInterval::Fixed { step: 2 * DAY, offset: 0 }, 2 * DAY),
    (TimeInterval::Fixed { step: WEEK, offset: SUNDAY_OFFSET }, WEEK),
    (TimeInterval::Months(1), MONTH),
    (TimeInterval::Months(3), 3 * MONTH),
];

impl TimeInterval {
    /// Pick the interval whose spacing is closest (by ratio) to `span / count`.
    pub fn choose(start: i64, stop: i64, count: usize) -> Self {
        let target = (stop - start).abs() as f64 / count.max(1) as f64;
        let i = TICK_INTERVALS.partition_point(|&(_, secs)| (secs as f64) <= target);
        if i == TICK_INTERVALS.len() {
            let step = tick_step(start as f64 / YEAR as f64, stop as f64 / YEAR as f64, count);
            let step = if step.is_finite() { step.round().max(1.0) as i32 } else { 1 };
            return TimeInterval::Years(step);
        }
        if i == 0 {
            return TICK_INTERVALS[0].0;
        }
        let (below, below_secs) = TICK_INTERVALS[i - 1];
        let (above, above_secs) = TICK_INTERVALS[i];
        if target / (below_secs as f64) < (above_secs as f64) / target {
            below
        } else {
            above
        }
    }

    /// All interval boundaries in `[start, stop]` (Unix seconds, inclusive).
    pub fn range(&self, start: i64, stop: i64) -> Vec<DateTime<Utc>> {
        let mut out = Vec::new();
        match *self {
            TimeInterval::Fixed { step, offset } => {
                let rem = (start - offset).rem_euclid(step);
                let mut t = if rem == 0 { start } else { start + step - rem };
                while t <= stop {
                    if let Some(dt) = DateTime::from_timestamp(t, 0) {
                        out.push(dt);
                    }
                    t += step;
                }
            }
            TimeInterval::Months(step) => {
                let Some(mut cursor) = first_of_month_at_or_after(start) else { return out };
                while cursor.timestamp() <= stop {
                    if cursor.month0() % step.max(1) == 0 {
                        out.push(cursor);
                    }
                    match cursor.checked_add_months(Months::new(1)) {
                        Some(next) => cursor = next,
                        None => break,
                    }
                }
            }
            TimeInterval::Years(step) => {
                let Some(first) = DateTime::from_timestamp(start, 0) else { return out };
                let step = step.max(1);
                let mut year = first.year();
                if utc_ymd(year, 1, 1).map_or(true, |d| d.timestamp() < start) {
                    year += 1;
                }
                year += (step - year.rem_euclid(step)) % step;
                while let Some(dt) = utc_ymd(year, 1, 1) {
                    if dt.timestamp() > stop {
                        break;
                    }
                    out.push(dt);
                    year += step;
                }
            }
        }
        out
    }
}

fn utc_ymd(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

fn first_of_month_at_or_after(secs: i64) -> Option<DateTime<Utc>> {
    let t = DateTime::from_timestamp(secs, 0)?;
    let first = utc_ymd(t.year(), t.month(), 1)?;
    if first.timestamp() < secs {
        first.checked_add_months(Months::new(1))
    } else {
        Some(first)
    }
}

/// Multi-resolution UTC label: the coarsest unit that still distinguishes `t`.
pub fn format_time_tick(t: DateTime<Utc>) -> String {
    let fmt = if t.second() != 0 {
        ":%S"
    } else if t.minute() != 0 {
        "%I:%M"
    } else if t.hour() != 0 {
        "%I %p"
    } else if t.day() != 1 {
        if t.weekday() != Weekday::Sun { "%a %d" } else { "%b %d" }
    } else if t.month() != 1 {
        "%B"
    } else {
        "%Y"
    };
    t.format(fmt).to_string()
}

/// UTC time scale over `[first, last]` sample timestamps.
/// Assumes ascending input; with a reversed domain the mapping is still
/// linear but ticks are laid out over the min..max span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    domain: Option<(DateTime<Utc>, DateTime<Utc>)>,
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(domain: Option<(DateTime<Utc>, DateTime<Utc>)>, range: (f64, f64)) -> Self {
        let (d0, d1) = domain
            .map(|(a, b)| (a.timestamp() as f64, b.timestamp() as f64))
            .unwrap_or((0.0, 0.0));
        Self { domain, linear: LinearScale::new((d0, d1), range) }
    }

    /// Domain from the first and last samples, range across the plotting rectangle.
    pub fn for_samples(samples: &[Sample], plot: &Rect) -> Self {
        Self::new(time_extent(samples), (plot.left, plot.right))
    }

    pub fn domain(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> { self.domain }

    /// First and last instants coincide (single sample or all-equal timestamps).
    pub fn is_degenerate(&self) -> bool {
        self.domain.is_some_and(|(a, b)| a == b)
    }
}

impl Scale for TimeScale {
    type Domain = DateTime<Utc>;

    fn map(&self, t: DateTime<Utc>) -> f64 {
        self.linear.apply(t.timestamp() as f64)
    }

    fn range(&self) -> (f64, f64) { self.linear.range() }

    fn ticks(&self, count: usize) -> Vec<DateTime<Utc>> {
        let Some((a, b)) = self.domain else { return Vec::new() };
        if count == 0 {
            return Vec::new();
        }
        if a == b {
            return vec![a];
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        TimeInterval::choose(lo.timestamp(), hi.timestamp(), count).range(lo.timestamp(), hi.timestamp())
    }

    fn format_tick(&self, t: DateTime<Utc>, _count: usize) -> String {
        format_time_tick(t)
    }
}
