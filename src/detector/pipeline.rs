//! Detector pipeline orchestrating end-to-end rectangle detection.
//!
//! Typical usage:
//! ```no_run
//! use rect_detector::{DetectorParams, RectDetector};
//! use rect_detector::image::BinaryGrid;
//! use rect_detector::types::Offset;
//!
//! # fn example(grid: BinaryGrid) -> Result<(), rect_detector::DetectError> {
//! let detector = RectDetector::new(DetectorParams::default());
//! for rect in detector.detect(grid.as_view(), Offset::default())? {
//!     println!("{:.0}x{:.0} at ({:.0}, {:.0})", rect.width, rect.height, rect.x, rect.y);
//! }
//! # Ok(())
//! # }
//! ```

// Stages
// - Validate: reject empty or inconsistent grids before any work.
// - Runs: horizontal and vertical run scans (`runs::scan_runs`).
// - Grouping: per-axis line groups (`lines::group_lines`).
// - Classification: main/inner split (`lines::classify`).
// - Assembly: candidate rectangles (`rects::assemble`).
// - Dedup: merge near-identical candidates, order by y (`rects::dedupe`).

use super::params::DetectorParams;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    AxisStage, DetectionReport, InputDescriptor, PipelineTrace, TimingBreakdown,
};
use crate::error::Result;
use crate::image::BinaryView;
use crate::lines::{classify, group_lines, ClassifyOptions, LineGroup};
use crate::rects::{assemble, dedupe, rank};
use crate::runs::{scan_runs, Axis};
use crate::types::{Offset, RankedRect, Rect};
use log::debug;
use std::time::Instant;

/// Stateless rectangle detector.
#[derive(Clone, Debug, Default)]
pub struct RectDetector {
    params: DetectorParams,
}

impl RectDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: DetectorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Replace all thresholds.
    pub fn set_params(&mut self, params: DetectorParams) {
        self.params = params;
    }

    /// Detect rectangles, ordered top to bottom, in canvas coordinates.
    pub fn detect(&self, grid: BinaryView<'_>, offset: Offset) -> Result<Vec<Rect>> {
        Ok(self.process(grid, offset)?.rects)
    }

    /// Detect rectangles and return them largest first with hierarchy labels.
    pub fn detect_ranked(&self, grid: BinaryView<'_>, offset: Offset) -> Result<Vec<RankedRect>> {
        let rects = self.detect(grid, offset)?;
        Ok(rank(&rects, self.params.main_region_ratio))
    }

    /// Run the full pipeline and capture a stage-by-stage trace.
    pub fn process(&self, grid: BinaryView<'_>, offset: Offset) -> Result<DetectionReport> {
        grid.validate()?;
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let p = &self.params;

        let horizontal = timings.time("horizontal", || {
            self.scan_axis(&grid, Axis::Horizontal, grid.w, &p.horizontal_classify())
        });
        let vertical = timings.time("vertical", || {
            self.scan_axis(&grid, Axis::Vertical, grid.h, &p.vertical_classify())
        });

        let assemble_opts = p.assemble_options();
        let candidates = timings.time("assemble", || {
            assemble(
                &horizontal.classes.lines(),
                &vertical.classes.lines(),
                offset,
                &assemble_opts,
            )
        });
        let rects = timings.time("dedupe", || dedupe(&candidates, p.dedup_tolerance));
        timings.total_ms = elapsed_ms(total_start);

        debug!(
            "RectDetector::process {}x{} candidates={} unique={} elapsed_ms={:.3}",
            grid.w,
            grid.h,
            candidates.len(),
            rects.len(),
            timings.total_ms
        );

        let trace = PipelineTrace {
            input: InputDescriptor {
                width: grid.w,
                height: grid.h,
                foreground: grid.foreground_count(),
            },
            offset,
            timings,
            horizontal,
            vertical,
            candidates: candidates.len(),
            unique: rects.len(),
        };
        Ok(DetectionReport { rects, trace })
    }

    /// Runs, groups and classes for one axis; `extent` is the image length along the runs.
    fn scan_axis(
        &self,
        grid: &BinaryView<'_>,
        axis: Axis,
        extent: usize,
        opts: &ClassifyOptions,
    ) -> AxisStage {
        let runs = scan_runs(grid, axis, self.params.min_run_length);
        let groups = group_lines(&runs, self.params.group_tolerance);
        debug!(
            "{} runs={} groups={}",
            axis.label(),
            runs.len(),
            groups.len()
        );
        log_groups(axis, &groups);
        let classes = classify(&groups, extent, opts);
        for g in classes.main.iter() {
            debug!("  main {}: pos={} len={}", axis.label(), g.avg_pos, g.max_len);
        }
        for g in classes.inner.iter() {
            debug!("  inner {}: pos={} len={}", axis.label(), g.avg_pos, g.max_len);
        }
        AxisStage {
            axis,
            runs: runs.len(),
            groups,
            main_threshold: opts.main_threshold(extent),
            classes,
        }
    }
}

fn log_groups(axis: Axis, groups: &[LineGroup]) {
    if !log::log_enabled!(log::Level::Trace) {
        return;
    }
    for (i, g) in groups.iter().enumerate() {
        log::trace!(
            "  {}{}: pos={} members={} longest={}px",
            axis.label(),
            i,
            g.avg_pos,
            g.members,
            g.max_len
        );
    }
}
