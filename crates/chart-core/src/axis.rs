// File: crates/chart-core/src/axis.rs
// Summary: Axis groups (domain line + labelled ticks) laid out from a scale.

use crate::scale::Scale;

/// Length of tick marks and of the outer domain caps, in pixels.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label, in pixels.
pub const TICK_PADDING: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    /// Horizontal axis below the plot; ticks point down.
    Bottom,
    /// Vertical axis left of the plot; ticks point left.
    Left,
}

/// One tick: its offset along the axis (pixels) and printed label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

/// A positioned axis ready for drawing. Coordinates of `ticks` and the domain
/// line are local to the group; `translate` places the group on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisGroup {
    pub orient: AxisOrient,
    pub translate: (f64, f64),
    /// Pixel extent of the scale range along the axis.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl AxisGroup {
    /// Lay out an axis for `scale` with roughly `count` ticks.
    pub fn new<S: Scale>(scale: &S, orient: AxisOrient, translate: (f64, f64), count: usize) -> Self {
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|v| Tick { offset: scale.map(v), label: scale.format_tick(v, count) })
            .collect();
        Self { orient, translate, range: scale.range(), ticks }
    }

    pub fn bottom<S: Scale>(scale: &S, y: f64, count: usize) -> Self {
        Self::new(scale, AxisOrient::Bottom, (0.0, y), count)
    }

    pub fn left<S: Scale>(scale: &S, x: f64, count: usize) -> Self {
        Self::new(scale, AxisOrient::Left, (x, 0.0), count)
    }

    /// Sign of the outward direction (ticks grow away from the plot).
    pub fn direction(&self) -> f64 {
        match self.orient {
            AxisOrient::Bottom => 1.0,
            AxisOrient::Left => -1.0,
        }
    }

    /// Domain line as a polyline in canvas coordinates: outer cap, span, outer cap.
    pub fn domain_points(&self) -> [(f64, f64); 4] {
        let k = self.direction() * TICK_SIZE;
        let (r0, r1) = self.range;
        let (tx, ty) = self.translate;
        match self.orient {
            AxisOrient::Bottom => [(tx + r0, ty + k), (tx + r0, ty), (tx + r1, ty), (tx + r1, ty + k)],
            AxisOrient::Left => [(tx + k, ty + r0), (tx, ty + r0), (tx, ty + r1), (tx + k, ty + r1)],
        }
    }

    /// Tick mark endpoints in canvas coordinates.
    pub fn tick_line(&self, tick: &Tick) -> ((f64, f64), (f64, f64)) {
        let k = self.direction() * TICK_SIZE;
        let (tx, ty) = self.translate;
        match self.orient {
            AxisOrient::Bottom => ((tx + tick.offset, ty), (tx + tick.offset, ty + k)),
            AxisOrient::Left => ((tx, ty + tick.offset), (tx + k, ty + tick.offset)),
        }
    }

    /// Label anchor in canvas coordinates (label is centered on it for the
    /// bottom axis, right-aligned to it for the left axis).
    pub fn label_anchor(&self, tick: &Tick) -> (f64, f64) {
        let k = self.direction() * (TICK_SIZE + TICK_PADDING);
        let (tx, ty) = self.translate;
        match self.orient {
            AxisOrient::Bottom => (tx + tick.offset, ty + k),
            AxisOrient::Left => (tx + k, ty + tick.offset),
        }
    }
}
