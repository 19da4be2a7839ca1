//! Diagnostics data model returned by the detector.
//!
//! `DetectionReport` bundles the final rectangles with a `PipelineTrace`
//! describing what every stage saw: run counts, line groups, the main/inner
//! split per axis, candidate counts and per-stage timings.

pub mod pipeline;
pub mod timing;

pub use pipeline::{AxisStage, DetectionReport, InputDescriptor, PipelineTrace};
pub use timing::{StageTiming, TimingBreakdown};
