//! Run-length scanning of a binary grid.
//!
//! A run is a maximal stretch of foreground pixels along a single row
//! (horizontal) or column (vertical). Only runs strictly longer than the
//! configured minimum survive; short runs are text strokes, speckle and the
//! perpendicular crossings of lines on the other axis.
//!
//! Rows and columns are independent, so with the `parallel` feature each scan
//! line is processed on the rayon pool. Per-line results are concatenated in
//! line order, so the output is identical to the sequential scan.

use crate::image::{BinaryView, ImageView};
use serde::Serialize;

/// Scan direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    /// Runs along rows; the fixed coordinate is `y`.
    Horizontal,
    /// Runs along columns; the fixed coordinate is `x`.
    Vertical,
}

impl Axis {
    pub fn label(self) -> &'static str {
        match self {
            Axis::Horizontal => "H",
            Axis::Vertical => "V",
        }
    }
}

/// Maximal foreground segment along one scan line. `end` is inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Run {
    /// Row index for horizontal runs, column index for vertical runs.
    pub pos: u32,
    pub start: u32,
    pub end: u32,
    pub len: u32,
}

/// Collect every run on `axis` whose length is strictly greater than `min_len`.
pub fn scan_runs(grid: &BinaryView<'_>, axis: Axis, min_len: u32) -> Vec<Run> {
    let lines = match axis {
        Axis::Horizontal => grid.height(),
        Axis::Vertical => grid.width(),
    };
    scan_lines(grid, axis, min_len, lines)
}

#[cfg(not(feature = "parallel"))]
fn scan_lines(grid: &BinaryView<'_>, axis: Axis, min_len: u32, lines: usize) -> Vec<Run> {
    let mut runs = Vec::new();
    for line in 0..lines {
        scan_line(grid, axis, line, min_len, &mut runs);
    }
    runs
}

#[cfg(feature = "parallel")]
fn scan_lines(grid: &BinaryView<'_>, axis: Axis, min_len: u32, lines: usize) -> Vec<Run> {
    use rayon::prelude::*;

    let per_line: Vec<Vec<Run>> = (0..lines)
        .into_par_iter()
        .map(|line| {
            let mut runs = Vec::new();
            scan_line(grid, axis, line, min_len, &mut runs);
            runs
        })
        .collect();
    per_line.into_iter().flatten().collect()
}

fn scan_line(grid: &BinaryView<'_>, axis: Axis, line: usize, min_len: u32, out: &mut Vec<Run>) {
    let pos = line as u32;
    match axis {
        Axis::Horizontal => collect_runs(grid.row(line).iter().copied(), pos, min_len, out),
        Axis::Vertical => collect_runs(grid.column(line), pos, min_len, out),
    }
}

/// Walk one scan line and push each qualifying run.
fn collect_runs(
    samples: impl Iterator<Item = u8>,
    pos: u32,
    min_len: u32,
    out: &mut Vec<Run>,
) {
    let mut start: Option<u32> = None;
    let mut idx = 0u32;
    for v in samples {
        match (v != 0, start) {
            (true, None) => start = Some(idx),
            (false, Some(s)) => {
                push_run(pos, s, idx, min_len, out);
                start = None;
            }
            _ => {}
        }
        idx += 1;
    }
    if let Some(s) = start {
        push_run(pos, s, idx, min_len, out);
    }
}

#[inline]
fn push_run(pos: u32, start: u32, end_exclusive: u32, min_len: u32, out: &mut Vec<Run>) {
    let len = end_exclusive - start;
    if len > min_len {
        out.push(Run {
            pos,
            start,
            end: end_exclusive - 1,
            len,
        });
    }
}
