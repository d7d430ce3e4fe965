// File: crates/chart-core/src/types.rs
// Summary: Shared layout constants and chart margins.

use serde::{Deserialize, Serialize};

/// Default canvas width in pixels.
pub const WIDTH: u32 = 640;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 400;

/// Space between the canvas edge and the plotting rectangle, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    /// Create new margins (non-negative by type).
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(20, 20, 30, 40)
    }
}
