use serde::{Deserialize, Serialize};

/// Translation applied to image-space coordinates to place them on the caller's canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in canvas space. `area == width * height`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub area: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            area: width * height,
        }
    }

    /// True when all four of x, y, width, height differ by less than `tol`.
    #[inline]
    pub fn near(&self, other: &Rect, tol: f64) -> bool {
        (self.x - other.x).abs() < tol
            && (self.y - other.y).abs() < tol
            && (self.width - other.width).abs() < tol
            && (self.height - other.height).abs() < tol
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True if `other` lies inside `self` (edges may touch).
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Hierarchy label assigned by [`crate::rects::rank`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegionLevel {
    /// Largest rectangle, taken as the outer frame.
    Frame,
    /// Area above the configured share of the frame.
    Main,
    Sub,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedRect {
    pub rect: Rect,
    pub level: RegionLevel,
}
