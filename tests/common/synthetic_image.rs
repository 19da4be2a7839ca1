#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use rect_detector::image::BinaryGrid;

/// Horizontal foreground segment on row `y`, columns `x0..=x1`.
pub fn hline(grid: &mut BinaryGrid, y: usize, x0: usize, x1: usize) {
    for x in x0..=x1 {
        grid.set(x, y, true);
    }
}

/// Vertical foreground segment on column `x`, rows `y0..=y1`.
pub fn vline(grid: &mut BinaryGrid, x: usize, y0: usize, y1: usize) {
    for y in y0..=y1 {
        grid.set(x, y, true);
    }
}

/// One-pixel outline with corners `(x0, y0)` and `(x1, y1)` inclusive.
pub fn outline(grid: &mut BinaryGrid, x0: usize, y0: usize, x1: usize, y1: usize) {
    hline(grid, y0, x0, x1);
    hline(grid, y1, x0, x1);
    vline(grid, x0, y0, y1);
    vline(grid, x1, y0, y1);
}

/// Full-image outline split into side-by-side columns at `dividers`.
pub fn columns_frame(width: usize, height: usize, dividers: &[usize]) -> BinaryGrid {
    let mut grid = BinaryGrid::new(width, height);
    outline(&mut grid, 0, 0, width - 1, height - 1);
    for &x in dividers {
        vline(&mut grid, x, 0, height - 1);
    }
    grid
}

/// White RGBA raster with black one-pixel outlines.
pub fn outlined_rgba(width: u32, height: u32, boxes: &[(u32, u32, u32, u32)]) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
    let ink = Rgba([20, 20, 20, 255]);
    for &(x0, y0, x1, y1) in boxes {
        for x in x0..=x1 {
            img.put_pixel(x, y0, ink);
            img.put_pixel(x, y1, ink);
        }
        for y in y0..=y1 {
            img.put_pixel(x0, y, ink);
            img.put_pixel(x1, y, ink);
        }
    }
    img
}
