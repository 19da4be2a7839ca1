mod common;

use common::synthetic_image::{columns_frame, hline, outline, outlined_rgba, vline};
use image::DynamicImage;
use rect_detector::image::{binarize_image, BinaryGrid, FitTransform};
use rect_detector::stages::{scan_runs, Axis};
use rect_detector::{DetectorParams, Offset, Rect, RectDetector, RegionLevel};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn detect(grid: &BinaryGrid) -> Vec<Rect> {
    RectDetector::default()
        .detect(grid.as_view(), Offset::default())
        .expect("valid grid")
}

#[test]
fn blank_grid_has_no_rectangles() {
    init_logger();
    let grid = BinaryGrid::new(320, 240);
    assert!(detect(&grid).is_empty());
}

#[test]
fn full_border_outline_matches_bounding_box() {
    init_logger();
    let grid = columns_frame(100, 100, &[]);
    let rects = detect(&grid);
    assert_eq!(rects.len(), 1);
    let r = rects[0];
    assert_eq!((r.x, r.y, r.width, r.height, r.area), (0.0, 0.0, 99.0, 99.0, 9801.0));
}

#[test]
fn single_outline_inside_image() {
    init_logger();
    let mut grid = BinaryGrid::new(200, 150);
    outline(&mut grid, 20, 30, 170, 120);
    let rects = detect(&grid);
    assert_eq!(rects, vec![Rect::new(20.0, 30.0, 150.0, 90.0)]);
}

#[test]
fn smallest_supported_outline() {
    init_logger();
    let mut grid = BinaryGrid::new(40, 40);
    outline(&mut grid, 5, 5, 24, 24);
    let rects = detect(&grid);
    assert_eq!(rects.len(), 1);
    let r = rects[0];
    assert!((r.x - 5.0).abs() <= 8.0 && (r.y - 5.0).abs() <= 8.0);
    assert!((r.width - 19.0).abs() <= 8.0 && (r.height - 19.0).abs() <= 8.0);
}

#[test]
fn side_by_side_partitions_include_frame_and_columns() {
    init_logger();
    let grid = columns_frame(200, 150, &[100]);
    let rects = detect(&grid);
    assert!(rects.len() >= 2);

    let outer = rects
        .iter()
        .copied()
        .max_by(|a, b| a.area.total_cmp(&b.area))
        .unwrap();
    assert_eq!(outer, Rect::new(0.0, 0.0, 199.0, 149.0));

    let inner: Vec<_> = rects.iter().filter(|r| **r != outer).collect();
    assert_eq!(inner.len(), 2);
    let inner_area: f64 = inner.iter().map(|r| r.area).sum();
    assert!(inner_area <= outer.area);
    assert!(inner.iter().all(|r| outer.contains(r)));
}

#[test]
fn nested_partitions_pair_adjacent_rows_only() {
    init_logger();
    let (w, h) = (400, 300);
    let mut grid = columns_frame(w, h, &[]);
    hline(&mut grid, 150, 0, w - 1); // main divider
    vline(&mut grid, 200, 0, 150); // upper band split into two columns
    hline(&mut grid, 220, 0, 150); // inner line in the lower band

    let report = RectDetector::default()
        .process(grid.as_view(), Offset::default())
        .unwrap();
    let h_trace = &report.trace.horizontal;
    let mains: Vec<_> = h_trace.classes.main.iter().map(|g| g.avg_pos).collect();
    let inner: Vec<_> = h_trace.classes.inner.iter().map(|g| g.avg_pos).collect();
    assert_eq!(mains, vec![0, 150, 299]);
    assert_eq!(inner, vec![220]);

    // three bands (0-150, 150-220, 220-299) times three vertical pairs
    let rects = &report.rects;
    assert_eq!(rects.len(), 9);
    assert!(rects.windows(2).all(|p| p[0].y <= p[1].y));
    assert!(rects.iter().all(|r| r.height <= 150.0));
    assert!(rects.contains(&Rect::new(0.0, 0.0, 200.0, 150.0)));
    assert!(rects.contains(&Rect::new(200.0, 220.0, 199.0, 79.0)));

    let ranked = RectDetector::default()
        .detect_ranked(grid.as_view(), Offset::default())
        .unwrap();
    assert_eq!(ranked[0].level, RegionLevel::Frame);
    assert_eq!(ranked[0].rect, Rect::new(0.0, 0.0, 399.0, 150.0));
    assert!(ranked.windows(2).all(|p| p[0].rect.area >= p[1].rect.area));
}

#[test]
fn near_identical_candidates_collapse_to_larger() {
    init_logger();
    let (w, h) = (120, 100);
    let mut grid = columns_frame(w, h, &[]);
    // a second vertical border just inside the first, split into its own group
    vline(&mut grid, 4, 0, h - 1);
    vline(&mut grid, 110, 0, h - 1);
    let params = DetectorParams {
        group_tolerance: 2,
        ..Default::default()
    };
    let report = RectDetector::new(params)
        .process(grid.as_view(), Offset::default())
        .unwrap();
    let v: Vec<_> = report
        .trace
        .vertical
        .classes
        .main
        .iter()
        .map(|g| g.avg_pos)
        .collect();
    assert_eq!(v, vec![0, 4, 110, 119]);
    // (0..110) and (4..110) differ by 4px in x and width; the wider one stays
    assert!(report.rects.contains(&Rect::new(0.0, 0.0, 110.0, 99.0)));
    assert!(!report.rects.contains(&Rect::new(4.0, 0.0, 106.0, 99.0)));
    assert!(report.trace.candidates > report.trace.unique);
}

#[test]
fn repeated_runs_are_identical() {
    init_logger();
    let mut grid = columns_frame(300, 200, &[120, 240]);
    hline(&mut grid, 90, 0, 100);
    let det = RectDetector::default();
    let a = det.detect(grid.as_view(), Offset::new(12.5, 7.0)).unwrap();
    let b = det.detect(grid.as_view(), Offset::new(12.5, 7.0)).unwrap();
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn run_length_boundary_is_strict() {
    let mut grid = BinaryGrid::new(40, 2);
    hline(&mut grid, 0, 0, 9); // 10 px
    hline(&mut grid, 1, 0, 10); // 11 px
    let runs = scan_runs(&grid.as_view(), Axis::Horizontal, 10);
    assert_eq!(runs.len(), 1);
    assert_eq!((runs[0].pos, runs[0].len), (1, 11));
}

#[test]
fn malformed_grid_is_invalid_input() {
    let data = vec![0u8; 10];
    let view = rect_detector::image::BinaryView::new(0, 10, &data);
    let err = RectDetector::default()
        .detect(view, Offset::default())
        .unwrap_err();
    assert!(matches!(
        err,
        rect_detector::DetectError::InvalidDimensions { .. }
    ));
}

#[test]
fn rgba_raster_through_binarizer_with_canvas_offset() {
    init_logger();
    let img = outlined_rgba(200, 100, &[(0, 0, 199, 99), (0, 0, 99, 99)]);
    let fit = FitTransform::contain(200, 100, 200, 200).unwrap();
    assert_eq!(fit.offset, Offset::new(0.0, 50.0));

    let grid = binarize_image(&DynamicImage::ImageRgba8(img)).unwrap();
    let rects = RectDetector::default()
        .detect(grid.as_view(), fit.offset)
        .unwrap();
    assert_eq!(
        rects,
        vec![
            Rect::new(0.0, 50.0, 99.0, 99.0),
            Rect::new(0.0, 50.0, 199.0, 99.0),
            Rect::new(99.0, 50.0, 100.0, 99.0),
        ]
    );
}
