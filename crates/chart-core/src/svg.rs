// File: crates/chart-core/src/svg.rs
// Summary: SVG serialization of a rendered graphic (axes + line path).

use crate::axis::{AxisGroup, AxisOrient, TICK_PADDING, TICK_SIZE};
use crate::chart::Graphic;
use crate::line::{LinePath, PathCommand};

/// Compact, deterministic number formatting: at most 3 decimals, no trailing zeros.
pub fn fmt_num(v: f64) -> String {
    let s = format!("{v:.3}");
    let t = if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.') } else { s.as_str() };
    if t == "-0" { "0".to_string() } else { t.to_string() }
}

/// Escape text content and attribute values.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// SVG path data (`d` attribute), e.g. `M40,335L233.333,300M620,230Z`.
pub fn path_data(path: &LinePath) -> String {
    let mut d = String::new();
    for cmd in path.commands() {
        match cmd {
            PathCommand::MoveTo(p) => d.push_str(&format!("M{},{}", fmt_num(p.x), fmt_num(p.y))),
            PathCommand::LineTo(p) => d.push_str(&format!("L{},{}", fmt_num(p.x), fmt_num(p.y))),
            PathCommand::Close => d.push('Z'),
        }
    }
    d
}

fn axis_group(axis: &AxisGroup, out: &mut String) {
    let (class, anchor) = match axis.orient {
        AxisOrient::Bottom => ("axis axis--x", "middle"),
        AxisOrient::Left => ("axis axis--y", "end"),
    };
    let k = axis.direction();
    let (r0, r1) = axis.range;
    let outer = fmt_num(k * TICK_SIZE);
    let domain = match axis.orient {
        AxisOrient::Bottom => format!("M{},{outer}V0H{}V{outer}", fmt_num(r0), fmt_num(r1)),
        AxisOrient::Left => format!("M{outer},{}H0V{}H{outer}", fmt_num(r0), fmt_num(r1)),
    };

    out.push_str(&format!(
        "<g class=\"{class}\" transform=\"translate({},{})\" fill=\"none\" font-size=\"10\" font-family=\"sans-serif\" text-anchor=\"{anchor}\">",
        fmt_num(axis.translate.0),
        fmt_num(axis.translate.1),
    ));
    out.push_str(&format!("<path class=\"domain\" stroke=\"currentColor\" d=\"{domain}\"/>"));

    let label_at = fmt_num(k * (TICK_SIZE + TICK_PADDING));
    for tick in &axis.ticks {
        let offset = fmt_num(tick.offset);
        let label = escape_text(&tick.label);
        match axis.orient {
            AxisOrient::Bottom => out.push_str(&format!(
                "<g class=\"tick\" transform=\"translate({offset},0)\"><line stroke=\"currentColor\" y2=\"{outer}\"/><text fill=\"currentColor\" y=\"{label_at}\" dy=\"0.71em\">{label}</text></g>"
            )),
            AxisOrient::Left => out.push_str(&format!(
                "<g class=\"tick\" transform=\"translate(0,{offset})\"><line stroke=\"currentColor\" x2=\"{outer}\"/><text fill=\"currentColor\" x=\"{label_at}\" dy=\"0.32em\">{label}</text></g>"
            )),
        }
    }
    out.push_str("</g>");
}

/// Serialize `g` as an `<svg>` element of exactly `width x height` pixels.
pub fn to_svg(g: &Graphic) -> String {
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = g.width,
        h = g.height,
    );
    axis_group(&g.x_axis, &mut out);
    axis_group(&g.y_axis, &mut out);
    out.push_str(&format!(
        "<path class=\"line\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" d=\"{}\"/>",
        escape_text(&g.style.stroke.to_string()),
        fmt_num(g.style.stroke_width),
        path_data(&g.line),
    ));
    out.push_str("</svg>");
    out
}
