//! Rectangle detector orchestrating the run → line → rectangle pipeline.
//!
//! Overview
//! - Scans rows and columns of a binary grid for long foreground runs.
//! - Groups runs with nearby fixed coordinates into line groups.
//! - Classifies groups into main lines (long, frame-level) and, for the
//!   horizontal axis, inner lines inside tall bands between main lines.
//! - Pairs adjacent horizontal lines with all vertical line pairs to build
//!   candidate rectangles, then merges near-duplicates.
//!
//! Modules
//! - [`params`] – thresholds used by every stage and the JSON tools.
//! - `pipeline` – the [`RectDetector`] implementation.
//!
//! The detector is stateless: each call borrows the grid, validates it once
//! and returns fresh results.

pub mod params;
mod pipeline;

pub use params::DetectorParams;
pub use pipeline::RectDetector;
