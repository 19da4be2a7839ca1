use rect_detector::image::BinaryGrid;
use rect_detector::types::Offset;
use rect_detector::{DetectorParams, RectDetector};

fn main() {
    // Demo stub: draws a framed layout with two columns and runs the detector
    let w = 320usize;
    let h = 240usize;
    let grid = BinaryGrid::from_fn(w, h, |x, y| {
        x == 0 || y == 0 || x == w - 1 || y == h - 1 || x == w / 2
    });

    let det = RectDetector::new(DetectorParams::default());
    match det.detect_ranked(grid.as_view(), Offset::default()) {
        Ok(ranked) => {
            for r in ranked {
                println!(
                    "{:?}: x={} y={} w={} h={}",
                    r.level, r.rect.x, r.rect.y, r.rect.width, r.rect.height
                );
            }
        }
        Err(err) => eprintln!("Error: {err}"),
    }
}
