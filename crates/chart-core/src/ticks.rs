// File: crates/chart-core/src/ticks.rs
// Summary: "Nice" tick layout helpers (1/2/5 x 10^k steps) for numeric axes.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Snap a normalized step mantissa (in [1, 10)) to 1, 2, 5 or 10.
fn nice_factor(error: f64) -> f64 {
    if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    }
}

/// Integer tick bounds plus increment. A negative increment encodes the
/// reciprocal step (1/|inc|) to keep sub-unit ticks exact.
fn tick_layout(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = nice_factor(error);

    let mut i1: i64;
    let mut i2: i64;
    let inc: f64;
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round() as i64;
        i2 = (stop * inv).round() as i64;
        if (i1 as f64) / inv < start { i1 += 1; }
        if (i2 as f64) / inv > stop { i2 -= 1; }
        inc = -inv;
    } else {
        let step = 10f64.powf(power) * factor;
        i1 = (start / step).round() as i64;
        i2 = (stop / step).round() as i64;
        if (i1 as f64) * step < start { i1 += 1; }
        if (i2 as f64) * step > stop { i2 -= 1; }
        inc = step;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_layout(start, stop, count * 2.0);
    }
    Some((i1, i2, inc))
}

/// Evenly spaced, human-friendly values covering `[start, stop]`, roughly
/// `count` of them. Returned in ascending order.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if start < stop { (start, stop) } else { (stop, start) };
    let Some((i1, i2, inc)) = tick_layout(lo, hi, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }
    (i1..=i2)
        .map(|i| if inc < 0.0 { i as f64 / -inc } else { i as f64 * inc })
        .collect()
}

/// Signed tick increment as in [`tick_layout`]: positive = step, negative = 1/step.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if !step.is_finite() || step <= 0.0 {
        return f64::NAN;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = nice_factor(error);
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Absolute tick step for `[start, stop]` at roughly `count` ticks.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if start < stop { (start, stop) } else { (stop, start) };
    let inc = tick_increment(lo, hi, count);
    if inc.is_nan() {
        inc
    } else if inc < 0.0 {
        1.0 / -inc
    } else {
        inc
    }
}

/// Number of fraction digits needed to print ticks spaced by `step`.
pub fn precision_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let p = -step.abs().log10().floor();
    if p > 0.0 { p as usize } else { 0 }
}
