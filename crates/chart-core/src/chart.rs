// File: crates/chart-core/src/chart.rs
// Summary: Chart configuration and the sample -> vector graphic rendering pipeline.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::axis::AxisGroup;
use crate::container::{Node, Surface};
use crate::error::{ChartError, RenderNote};
use crate::geometry::{Point, Rect};
use crate::line::{DefinedFn, LineGenerator, LinePath};
use crate::scale::{LinearScale, Scale, TimeScale, VALUE_DOMAIN};
use crate::series::{is_chronological, Sample};
use crate::theme::Paint;
use crate::types::{Margins, HEIGHT, WIDTH};

/// Stroke settings of the data line. The line is never filled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub stroke: Paint,
    pub stroke_width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { stroke: Paint::var("foreground"), stroke_width: 1.5 }
    }
}

/// Fixed layout of a chart: canvas size, margins, line style and tick density.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
    pub line: LineStyle,
    /// Approximate number of ticks per axis.
    pub ticks: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margins: Margins::default(),
            line: LineStyle::default(),
            ticks: 10,
        }
    }
}

impl ChartConfig {
    /// Region inside the margins where data is drawn.
    pub fn plot_rect(&self) -> Rect {
        let m = &self.margins;
        Rect::from_ltrb(
            m.left as f64,
            m.top as f64,
            self.width as f64 - m.right as f64,
            self.height as f64 - m.bottom as f64,
        )
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::InvalidConfig(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.margins.hsum() >= self.width || self.margins.vsum() >= self.height {
            return Err(ChartError::InvalidConfig(format!(
                "margins {:?} leave no plotting area in {}x{}",
                self.margins, self.width, self.height
            )));
        }
        if !(self.line.stroke_width.is_finite() && self.line.stroke_width > 0.0) {
            return Err(ChartError::InvalidConfig(format!(
                "stroke width must be positive, got {}",
                self.line.stroke_width
            )));
        }
        Ok(())
    }

    /// Parse a TOML document (missing keys take defaults) and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, ChartError> {
        let cfg: ChartConfig =
            toml::from_str(text).map_err(|e| ChartError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// A finished chart: canvas size, both axes and exactly one line series.
#[derive(Clone, Debug, PartialEq)]
pub struct Graphic {
    pub width: u32,
    pub height: u32,
    pub x_axis: AxisGroup,
    pub y_axis: AxisGroup,
    pub line: LinePath,
    pub style: LineStyle,
    /// Degenerate conditions met while rendering, in detection order.
    pub notes: Vec<RenderNote>,
}

impl Graphic {
    /// Serialize as a standalone `<svg>` element.
    pub fn to_svg(&self) -> String {
        crate::svg::to_svg(self)
    }
}

/// Time-series line chart of a percentage metric.
///
/// Holds only configuration; every `render` call rebuilds its scales from the
/// given samples, so one chart may be shared across threads and calls.
#[derive(Clone, Debug)]
pub struct Chart {
    config: ChartConfig,
    line: LineGenerator,
}

impl Default for Chart {
    fn default() -> Self { Self::new(ChartConfig::default()) }
}

impl Chart {
    pub fn new(config: ChartConfig) -> Self {
        Self { config, line: LineGenerator::default() }
    }

    /// Replace the predicate that decides which samples are drawn.
    pub fn with_defined(mut self, defined: DefinedFn) -> Self {
        self.line = LineGenerator::new(defined);
        self
    }

    pub fn config(&self) -> &ChartConfig { &self.config }

    /// Build the graphic for `samples`, expected in ascending time order.
    ///
    /// Never fails: empty input yields axes only, a single timestamp maps to
    /// the left edge of the plot, and undefined samples leave gaps. A sample the
    /// predicate accepts without a value is plotted at the bottom of the domain.
    pub fn render(&self, samples: &[Sample]) -> Graphic {
        let plot = self.config.plot_rect();
        let x = TimeScale::for_samples(samples, &plot);
        let y = LinearScale::for_values(&plot);

        let mut notes = Vec::new();
        if samples.is_empty() {
            debug!("no samples; rendering axes only");
            notes.push(RenderNote::EmptyInput);
        } else if x.is_degenerate() {
            debug!(samples = samples.len(), "single-instant time domain; points pinned to left edge");
            notes.push(RenderNote::DegenerateDomain);
        }
        if !is_chronological(samples) {
            warn!(samples = samples.len(), "samples are not in ascending time order; time axis may be misleading");
        }

        let defined = self.line.defined();
        let missing = samples.iter().filter(|s| !defined(s)).count();
        if missing > 0 {
            debug!(missing, "undefined samples leave gaps in the line");
            notes.push(RenderNote::MissingValues { count: missing });
        }

        let line = self.line.generate(samples, |s| {
            Point::new(x.map(s.timestamp), y.map(s.value.unwrap_or(VALUE_DOMAIN.0)))
        });

        Graphic {
            width: self.config.width,
            height: self.config.height,
            x_axis: AxisGroup::bottom(&x, plot.bottom, self.config.ticks),
            y_axis: AxisGroup::left(&y, plot.left, self.config.ticks),
            line,
            style: self.config.line.clone(),
            notes,
        }
    }

    /// Render and append the graphic to `surface`, leaving existing content alone.
    pub fn render_into<S: Surface + ?Sized>(&self, samples: &[Sample], surface: &mut S) {
        surface.attach(Node::Graphic(self.render(samples)));
    }
}

/// One-shot convenience over [`Chart::render`] with the default predicate.
pub fn render(samples: &[Sample], config: &ChartConfig) -> Graphic {
    Chart::new(config.clone()).render(samples)
}

/// One-shot convenience over [`Chart::render_into`].
pub fn render_into<S: Surface + ?Sized>(samples: &[Sample], config: &ChartConfig, surface: &mut S) {
    Chart::new(config.clone()).render_into(samples, surface)
}
