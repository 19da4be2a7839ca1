use crate::types::Rect;
use log::debug;

/// Merge near-identical rectangles and order the survivors top to bottom.
///
/// Each candidate is compared with the survivors so far; the first one whose
/// x, y, width and height are all within `tolerance` (exclusive) absorbs it,
/// taking the candidate's place if the candidate has the larger area. The
/// final sort by `y` is stable, so equal rows keep first-seen order.
pub fn dedupe(candidates: &[Rect], tolerance: f64) -> Vec<Rect> {
    let mut unique: Vec<Rect> = Vec::with_capacity(candidates.len());
    for rect in candidates {
        match unique.iter_mut().find(|u| rect.near(u, tolerance)) {
            Some(existing) => {
                if rect.area > existing.area {
                    *existing = *rect;
                }
            }
            None => unique.push(*rect),
        }
    }
    unique.sort_by(|a, b| a.y.total_cmp(&b.y));
    debug!(
        "dedupe: {} candidates -> {} unique",
        candidates.len(),
        unique.len()
    );
    unique
}
