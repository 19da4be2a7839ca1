use crate::diagnostics::TimingBreakdown;
use crate::lines::{LineClasses, LineGroup};
use crate::runs::Axis;
use crate::types::{Offset, Rect};
use serde::Serialize;

/// Result produced by [`RectDetector::process`](crate::RectDetector::process).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    /// Deduplicated rectangles ordered top to bottom.
    pub rects: Vec<Rect>,
    pub trace: PipelineTrace,
}

/// End-to-end trace describing the internal execution of the detector.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub offset: Offset,
    pub timings: TimingBreakdown,
    pub horizontal: AxisStage,
    pub vertical: AxisStage,
    /// Rectangles emitted by assembly, before deduplication.
    pub candidates: usize,
    pub unique: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub foreground: usize,
}

/// Runs, groups and classification for one scan axis.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisStage {
    pub axis: Axis,
    pub runs: usize,
    pub groups: Vec<LineGroup>,
    pub main_threshold: f64,
    pub classes: LineClasses,
}
