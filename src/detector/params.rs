//! Parameter types configuring the detection stages.
//!
//! Every threshold of the run → line → rectangle pipeline lives here. The
//! defaults are tuned for screenshots and scanned layouts fitted into a canvas
//! of roughly 1000 px; all values are in pixels of the scanned grid unless
//! noted otherwise.

use crate::lines::{ClassifyOptions, InnerLineOptions};
use crate::rects::AssembleOptions;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Runs must be strictly longer than this.
    pub min_run_length: u32,
    /// Maximum gap between consecutive run coordinates within one line group.
    pub group_tolerance: u32,
    /// Fraction of the image width a horizontal main line must reach.
    pub main_fraction_horizontal: f64,
    /// Fraction of the image height a vertical main line must reach.
    pub main_fraction_vertical: f64,
    /// Shortest horizontal inner line.
    pub min_inner_length: u32,
    /// Clearance between an inner line and the main lines around it.
    pub inner_margin: i64,
    /// Bands between main lines must be strictly taller than this to keep inner lines.
    pub min_region_height: i64,
    /// Cap on inner lines per band (the longest win).
    pub max_inner_per_band: usize,
    /// Minimum distance between paired lines.
    pub min_pair_gap: i64,
    /// Both rectangle sides must be strictly longer than this.
    pub min_rect_side: i64,
    /// Rectangles closer than this in x, y, width and height are merged.
    pub dedup_tolerance: f64,
    /// Area share of the frame above which a rectangle ranks as a main region.
    pub main_region_ratio: f64,
}

impl Default for DetectorParams {
    fn default() -> Self {
        let inner = InnerLineOptions::default();
        let assemble = AssembleOptions::default();
        Self {
            min_run_length: 10,
            group_tolerance: 8,
            main_fraction_horizontal: ClassifyOptions::horizontal().main_fraction,
            main_fraction_vertical: ClassifyOptions::vertical().main_fraction,
            min_inner_length: inner.min_len,
            inner_margin: inner.margin,
            min_region_height: inner.min_region_height,
            max_inner_per_band: inner.max_per_band,
            min_pair_gap: assemble.min_pair_gap,
            min_rect_side: assemble.min_side,
            dedup_tolerance: 5.0,
            main_region_ratio: 0.2,
        }
    }
}

impl DetectorParams {
    pub fn horizontal_classify(&self) -> ClassifyOptions {
        ClassifyOptions {
            main_fraction: self.main_fraction_horizontal,
            inner: Some(InnerLineOptions {
                min_len: self.min_inner_length,
                margin: self.inner_margin,
                min_region_height: self.min_region_height,
                max_per_band: self.max_inner_per_band,
            }),
        }
    }

    pub fn vertical_classify(&self) -> ClassifyOptions {
        ClassifyOptions {
            main_fraction: self.main_fraction_vertical,
            inner: None,
        }
    }

    pub fn assemble_options(&self) -> AssembleOptions {
        AssembleOptions {
            min_pair_gap: self.min_pair_gap,
            min_side: self.min_rect_side,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let p = DetectorParams::default();
        assert_eq!(p.min_run_length, 10);
        assert_eq!(p.group_tolerance, 8);
        assert_eq!(p.main_fraction_horizontal, 0.5);
        assert_eq!(p.main_fraction_vertical, 0.3);
        assert_eq!(p.min_inner_length, 15);
        assert_eq!(p.min_region_height, 80);
        assert_eq!(p.dedup_tolerance, 5.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let p: DetectorParams =
            serde_json::from_str(r#"{ "group_tolerance": 4, "min_rect_side": 20 }"#).unwrap();
        assert_eq!(p.group_tolerance, 4);
        assert_eq!(p.assemble_options().min_side, 20);
        assert_eq!(p.min_run_length, 10);
        assert!(p.vertical_classify().inner.is_none());
    }
}
