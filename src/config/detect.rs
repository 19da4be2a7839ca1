use crate::detector::DetectorParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DetectToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Fit the image into this canvas before detection; output is in canvas space.
    #[serde(default)]
    pub canvas: Option<CanvasConfig>,
    #[serde(default)]
    pub params: DetectorParams,
    pub output: DetectOutputConfig,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct DetectOutputConfig {
    #[serde(rename = "result_json")]
    pub result_json: PathBuf,
    /// Optional debug dump of the binarized grid.
    #[serde(default)]
    pub binary_image: Option<PathBuf>,
    /// Include the full pipeline trace in the JSON output.
    #[serde(default)]
    pub trace: bool,
}

pub fn load_config(path: &Path) -> Result<DetectToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<DetectToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
