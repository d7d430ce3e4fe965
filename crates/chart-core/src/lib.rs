// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the sample model and the SVG chart renderer.

pub mod axis;
pub mod chart;
pub mod container;
pub mod error;
pub mod geometry;
pub mod line;
pub mod scale;
pub mod series;
pub mod svg;
pub mod theme;
pub mod ticks;
pub mod types;

pub use axis::{AxisGroup, AxisOrient, Tick};
pub use chart::{render, render_into, Chart, ChartConfig, Graphic, LineStyle};
pub use container::{Container, Element, Node, Surface};
pub use error::{ChartError, RenderNote};
pub use line::{DefinedFn, LineGenerator, LinePath, PathCommand};
pub use scale::{LinearScale, Scale, TimeScale};
pub use series::{is_defined, Sample};
pub use theme::{Color, Paint, Theme};
pub use types::Margins;
