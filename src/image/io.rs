//! I/O helpers for the detection tools.
//!
//! - `load_image`: decode a PNG/JPEG/etc. from disk.
//! - `save_binary_png`: write a [`BinaryGrid`] as black-on-white PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::BinaryGrid;
use image::{DynamicImage, GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load and decode an image from disk.
pub fn load_image(path: &Path) -> Result<DynamicImage, String> {
    image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))
}

/// Save a binary mask, foreground black and background white.
pub fn save_binary_png(grid: &BinaryGrid, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let out = GrayImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        if grid.get(x as usize, y as usize) {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    });
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
