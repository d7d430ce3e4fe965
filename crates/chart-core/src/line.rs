// File: crates/chart-core/src/line.rs
// Summary: Line path generation with gaps at undefined samples.

use crate::geometry::Point;
use crate::series::{is_defined, Sample};

/// Predicate deciding whether a sample takes part in the line.
pub type DefinedFn = fn(&Sample) -> bool;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Closes a run made of a single point so it still renders as a dot.
    Close,
}

/// Vector path of a line series: one or more runs, each starting with `MoveTo`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinePath {
    commands: Vec<PathCommand>,
}

impl LinePath {
    pub fn commands(&self) -> &[PathCommand] { &self.commands }

    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// Connected runs, in order. Each slice starts with a `MoveTo`.
    pub fn runs(&self) -> Vec<&[PathCommand]> {
        let mut out = Vec::new();
        let mut start = 0;
        for (i, cmd) in self.commands.iter().enumerate() {
            if matches!(cmd, PathCommand::MoveTo(_)) && i > start {
                out.push(&self.commands[start..i]);
                start = i;
            }
        }
        if start < self.commands.len() {
            out.push(&self.commands[start..]);
        }
        out
    }

    /// Number of breaks between runs.
    pub fn discontinuities(&self) -> usize {
        self.runs().len().saturating_sub(1)
    }

    /// All projected vertices, in order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::Close => None,
        })
    }
}

/// Builds line paths; the only knob is which samples count as defined.
#[derive(Clone, Copy, Debug)]
pub struct LineGenerator {
    defined: DefinedFn,
}

impl Default for LineGenerator {
    fn default() -> Self { Self { defined: is_defined } }
}

impl LineGenerator {
    pub fn new(defined: DefinedFn) -> Self { Self { defined } }

    pub fn defined(&self) -> DefinedFn { self.defined }

    /// Project every defined sample and connect adjacent defined neighbours.
    /// An undefined sample ends the current run; the next defined sample
    /// starts a fresh one.
    pub fn generate<F>(&self, samples: &[Sample], project: F) -> LinePath
    where
        F: Fn(&Sample) -> Point,
    {
        let mut commands = Vec::with_capacity(samples.len() + 1);
        let mut run_len = 0usize;
        for s in samples {
            if !(self.defined)(s) {
                if run_len == 1 { commands.push(PathCommand::Close); }
                run_len = 0;
                continue;
            }
            let p = project(s);
            commands.push(if run_len == 0 { PathCommand::MoveTo(p) } else { PathCommand::LineTo(p) });
            run_len += 1;
        }
        if run_len == 1 { commands.push(PathCommand::Close); }
        LinePath { commands }
    }
}
