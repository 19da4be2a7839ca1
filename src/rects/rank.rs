use crate::types::{RankedRect, Rect, RegionLevel};

/// Order rectangles by area (largest first) and label their hierarchy level.
///
/// The largest rectangle is the frame. Any other rectangle whose area exceeds
/// `main_ratio` times the frame's area is a main region; the rest are sub
/// regions. Equal areas keep their input order.
pub fn rank(rects: &[Rect], main_ratio: f64) -> Vec<RankedRect> {
    let mut sorted = rects.to_vec();
    sorted.sort_by(|a, b| b.area.total_cmp(&a.area));
    let frame_area = sorted.first().map_or(0.0, |r| r.area);
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, rect)| {
            let level = if i == 0 {
                RegionLevel::Frame
            } else if rect.area > frame_area * main_ratio {
                RegionLevel::Main
            } else {
                RegionLevel::Sub
            };
            RankedRect { rect, level }
        })
        .collect()
}
