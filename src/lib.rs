#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// Stage modules – public so tools can run stages in isolation.
pub mod lines;
pub mod rects;
pub mod runs;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{DetectorParams, RectDetector};
pub use crate::error::DetectError;
pub use crate::types::{Offset, RankedRect, Rect, RegionLevel};

// Diagnostics returned by `RectDetector::process`.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use rect_detector::prelude::*;
///
/// # fn main() -> Result<(), DetectError> {
/// let (w, h) = (640usize, 480usize);
/// let mask = vec![0u8; w * h];
/// let grid = BinaryView::new(w, h, &mask);
///
/// let det = RectDetector::new(DetectorParams::default());
/// let rects = det.detect(grid, Offset::default())?;
/// println!("found {} rectangles", rects.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{BinaryGrid, BinaryView};
    pub use crate::{DetectError, DetectorParams, Offset, Rect, RectDetector};
}

// --- Stage-level API (for tools & advanced users) ---------------------------

pub mod stages {
    pub use crate::lines::{classify, group_lines, ClassifyOptions, LineClasses, LineGroup};
    pub use crate::rects::{assemble, dedupe, rank, AssembleOptions};
    pub use crate::runs::{scan_runs, Axis, Run};
}
