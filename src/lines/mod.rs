//! Line groups built from scan runs and their main/inner classification.
//!
//! - [`group_lines`] chains runs whose fixed coordinates are close into
//!   [`LineGroup`]s, each collapsed to a single representative position.
//! - [`classify`] separates frame-spanning main lines from shorter inner
//!   lines that subdivide a band between two consecutive main lines.

mod classify;
mod group;

pub use classify::{classify, ClassifyOptions, InnerLineOptions, LineClasses, RegionReport};
pub use group::{group_lines, LineGroup};
