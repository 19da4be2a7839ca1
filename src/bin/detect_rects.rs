use rect_detector::config::detect;
use rect_detector::diagnostics::PipelineTrace;
use rect_detector::image::io::{load_image, save_binary_png, write_json_file};
use rect_detector::image::{binarize_image, fit_to_canvas, FitTransform};
use rect_detector::rects::rank;
use rect_detector::types::{Offset, RankedRect, Rect};
use rect_detector::RectDetector;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = detect::load_config(Path::new(&config_path))?;

    let source = load_image(&config.input)?;
    let (image, fit) = match config.canvas {
        Some(canvas) => fit_to_canvas(&source, canvas.width, canvas.height)
            .ok_or_else(|| format!("Cannot fit {} into canvas", config.input.display()))?,
        None => {
            let (w, h) = (source.width(), source.height());
            let identity = FitTransform::contain(w, h, w, h)
                .ok_or_else(|| format!("Image {} is empty", config.input.display()))?;
            (source, identity)
        }
    };

    let grid = binarize_image(&image).map_err(|e| e.to_string())?;
    if let Some(path) = &config.output.binary_image {
        save_binary_png(&grid, path)?;
    }

    let detector = RectDetector::new(config.params.clone());
    let report = detector
        .process(grid.as_view(), fit.offset)
        .map_err(|e| e.to_string())?;
    let ranked = rank(&report.rects, detector.params().main_region_ratio);

    let summary = DetectRectsReport {
        fit,
        offset: fit.offset,
        rects: report.rects,
        ranked,
        trace: config.output.trace.then_some(report.trace),
    };
    write_json_file(&config.output.result_json, &summary)?;

    println!(
        "Detected {} rectangles ({}x{} grid) -> {}",
        summary.rects.len(),
        grid.width(),
        grid.height(),
        config.output.result_json.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: detect_rects <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectRectsReport {
    fit: FitTransform,
    offset: Offset,
    rects: Vec<Rect>,
    ranked: Vec<RankedRect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<PipelineTrace>,
}
