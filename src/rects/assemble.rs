use crate::lines::LineGroup;
use crate::types::{Offset, Rect};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssembleOptions {
    /// Horizontal pairs closer than this are skipped; vertical pairs must be
    /// strictly farther apart.
    pub min_pair_gap: i64,
    /// Both sides of an emitted rectangle must be strictly longer than this.
    pub min_side: i64,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            min_pair_gap: 10,
            min_side: 15,
        }
    }
}

/// Build candidate rectangles from horizontal and vertical line groups.
///
/// Horizontal lines are sorted by position and only adjacent lines are paired,
/// so a band split by an inner line never also yields the unsplit band. Vertical
/// lines are paired exhaustively (any left with any right further along),
/// letting a frame side pair with an inner divider across other dividers.
/// Coordinates are shifted by `offset`.
pub fn assemble(
    horizontal: &[LineGroup],
    vertical: &[LineGroup],
    offset: Offset,
    opts: &AssembleOptions,
) -> Vec<Rect> {
    if horizontal.len() < 2 || vertical.len() < 2 {
        debug!(
            "assemble: not enough lines (h={} v={})",
            horizontal.len(),
            vertical.len()
        );
        return Vec::new();
    }

    let mut rows: Vec<&LineGroup> = horizontal.iter().collect();
    rows.sort_by_key(|g| g.avg_pos);

    let mut rects = Vec::new();
    for pair in rows.windows(2) {
        let (top, bottom) = (pair[0], pair[1]);
        let height = bottom.avg_pos - top.avg_pos;
        if height < opts.min_pair_gap {
            continue;
        }
        for (m, left) in vertical.iter().enumerate() {
            for (n, right) in vertical.iter().enumerate() {
                if m == n || right.avg_pos <= left.avg_pos + opts.min_pair_gap {
                    continue;
                }
                let width = right.avg_pos - left.avg_pos;
                if width > opts.min_side && height > opts.min_side {
                    rects.push(Rect::new(
                        left.avg_pos as f64 + offset.x,
                        top.avg_pos as f64 + offset.y,
                        width as f64,
                        height as f64,
                    ));
                }
            }
        }
    }

    debug!("assemble: {} candidate rectangles", rects.len());
    rects
}
