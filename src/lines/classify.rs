//! Main/inner line classification.
//!
//! A main line spans a large fraction of the image extent along its axis
//! (`main_fraction`). Horizontal main lines split the image into bands; inside
//! every band taller than `min_region_height`, shorter horizontal groups that
//! keep `margin` pixels from both band edges become inner lines. Dense bands
//! are capped to the `max_per_band` longest candidates to suppress speckle.
//!
//! Vertical groups are classified without inner options, so only their main
//! lines survive. An axis with fewer than two main lines cannot bound a
//! rectangle and yields an empty result.

use super::LineGroup;
use log::debug;
use serde::{Deserialize, Serialize};

/// Thresholds for inner-line detection inside bands between main lines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InnerLineOptions {
    /// Shortest accepted inner line (pixels).
    pub min_len: u32,
    /// Required clearance from each bounding main line (pixels, exclusive).
    pub margin: i64,
    /// Bands must be strictly taller than this to host inner lines.
    pub min_region_height: i64,
    /// Keep at most this many of the longest candidates per band.
    pub max_per_band: usize,
}

impl Default for InnerLineOptions {
    fn default() -> Self {
        Self {
            min_len: 15,
            margin: 10,
            min_region_height: 80,
            max_per_band: 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifyOptions {
    /// Fraction of the image extent a main line must reach.
    pub main_fraction: f64,
    /// `None` disables inner-line detection for this axis.
    pub inner: Option<InnerLineOptions>,
}

impl ClassifyOptions {
    pub fn horizontal() -> Self {
        Self {
            main_fraction: 0.5,
            inner: Some(InnerLineOptions::default()),
        }
    }

    pub fn vertical() -> Self {
        Self {
            main_fraction: 0.3,
            inner: None,
        }
    }

    pub fn main_threshold(&self, extent: usize) -> f64 {
        extent as f64 * self.main_fraction
    }
}

/// Decision taken for one band between consecutive main lines.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionReport {
    pub top: i64,
    pub bottom: i64,
    pub height: i64,
    /// Candidates found before the per-band cap.
    pub candidates: usize,
    /// Positions of the inner lines kept for this band.
    pub kept: Vec<i64>,
    /// False when the band was too thin and its candidates were ignored.
    pub accepted: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineClasses {
    pub main: Vec<LineGroup>,
    pub inner: Vec<LineGroup>,
    pub regions: Vec<RegionReport>,
}

impl LineClasses {
    /// Main lines followed by inner lines, the set used for assembly.
    pub fn lines(&self) -> Vec<LineGroup> {
        self.main.iter().chain(self.inner.iter()).copied().collect()
    }

    pub fn len(&self) -> usize {
        self.main.len() + self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split `groups` into main and inner lines for an axis of length `extent`.
pub fn classify(groups: &[LineGroup], extent: usize, opts: &ClassifyOptions) -> LineClasses {
    let main_threshold = opts.main_threshold(extent);
    let mut main: Vec<LineGroup> = groups
        .iter()
        .filter(|g| g.max_len as f64 >= main_threshold)
        .copied()
        .collect();
    main.sort_by_key(|g| g.avg_pos);

    debug!(
        "classify: extent={} main_threshold={:.0}px main={} of {}",
        extent,
        main_threshold,
        main.len(),
        groups.len()
    );

    if main.len() < 2 {
        debug!("classify: fewer than two main lines, nothing to assemble");
        return LineClasses::default();
    }

    let (inner, regions) = match opts.inner {
        Some(inner_opts) => find_inner_lines(groups, &main, main_threshold, &inner_opts),
        None => (Vec::new(), Vec::new()),
    };

    LineClasses {
        main,
        inner,
        regions,
    }
}

fn find_inner_lines(
    groups: &[LineGroup],
    main: &[LineGroup],
    main_threshold: f64,
    opts: &InnerLineOptions,
) -> (Vec<LineGroup>, Vec<RegionReport>) {
    let mut inner = Vec::new();
    let mut regions = Vec::with_capacity(main.len() - 1);

    for pair in main.windows(2) {
        let top = pair[0].avg_pos;
        let bottom = pair[1].avg_pos;
        let height = bottom - top;

        let mut in_band: Vec<LineGroup> = groups
            .iter()
            .filter(|g| {
                g.avg_pos > top + opts.margin
                    && g.avg_pos < bottom - opts.margin
                    && g.max_len >= opts.min_len
                    && (g.max_len as f64) < main_threshold
            })
            .copied()
            .collect();
        let candidates = in_band.len();

        if in_band.len() > opts.max_per_band {
            in_band.sort_by(|a, b| b.max_len.cmp(&a.max_len));
            in_band.truncate(opts.max_per_band);
            debug!(
                "classify: band y={}..{} (h={}) had {} inner candidates, kept the {} longest",
                top, bottom, height, candidates, opts.max_per_band
            );
        } else if candidates > 0 {
            debug!(
                "classify: band y={}..{} (h={}) has {} inner lines",
                top, bottom, height, candidates
            );
        }

        let accepted = height > opts.min_region_height;
        if !accepted && candidates > 0 {
            debug!(
                "classify: band y={}..{} too thin ({}px), ignoring inner lines",
                top, bottom, height
            );
        }

        regions.push(RegionReport {
            top,
            bottom,
            height,
            candidates,
            kept: if accepted {
                in_band.iter().map(|g| g.avg_pos).collect()
            } else {
                Vec::new()
            },
            accepted,
        });
        if accepted {
            inner.extend(in_band);
        }
    }

    (inner, regions)
}
