// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming; resolves paint tokens to concrete colors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// How a stroke or fill is specified in the graphic. Tokens stay symbolic in
/// vector output and are resolved through a [`Theme`] for raster output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    /// A CSS custom property, e.g. `Var("foreground")` -> `var(--foreground)`.
    Var(String),
    /// Inherit the surrounding text color.
    CurrentColor,
}

impl Paint {
    pub fn var(name: impl Into<String>) -> Self { Paint::Var(name.into()) }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Var(name) => write!(f, "var(--{name})"),
            Paint::CurrentColor => f.write_str("currentColor"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub foreground: Color,
    pub axis_line: Color,
    pub axis_label: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            foreground: Color::from_argb(255, 64, 160, 255),
            axis_line: Color::from_argb(255, 180, 180, 190),
            axis_label: Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            foreground: Color::from_argb(255, 32, 120, 200),
            axis_line: Color::from_argb(255, 60, 60, 70),
            axis_label: Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_argb(255, 0x00, 0x00, 0x00),
            foreground: Color::from_argb(255, 0x00, 0xff, 0xff),
            axis_line: Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }

    /// Concrete color for a paint. Unknown variables fall back to the foreground.
    pub fn resolve(&self, paint: &Paint) -> Color {
        match paint {
            Paint::CurrentColor => self.axis_line,
            Paint::Var(name) => match name.as_str() {
                "background" => self.background,
                "axis" => self.axis_line,
                "label" => self.axis_label,
                _ => self.foreground,
            },
        }
    }

    /// CSS declaring the theme's custom properties, for HTML hosts.
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{ --background: {}; --foreground: {}; --axis: {}; --label: {}; }}\n\
             body {{ background: var(--background); color: var(--label); font-family: sans-serif; }}\n\
             svg {{ color: var(--axis); }}",
            self.background.to_hex(),
            self.foreground.to_hex(),
            self.axis_line.to_hex(),
            self.axis_label.to_hex(),
        )
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
