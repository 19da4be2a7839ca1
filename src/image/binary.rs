use super::ImageView;
use crate::error::{DetectError, Result};

/// Borrowed foreground mask. A non-zero sample is foreground.
#[derive(Clone, Copy, Debug)]
pub struct BinaryView<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // samples between rows
    pub data: &'a [u8],
}

impl<'a> BinaryView<'a> {
    /// Tightly packed view over `data` (`stride == width`).
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.stride + x] != 0
    }

    /// Checks the dimensions and buffer length once, before any stage runs.
    pub fn validate(&self) -> Result<()> {
        let fits_u32 = u32::try_from(self.w).is_ok() && u32::try_from(self.h).is_ok();
        if self.w == 0 || self.h == 0 || !fits_u32 || self.stride < self.w {
            return Err(DetectError::InvalidDimensions {
                width: self.w,
                height: self.h,
            });
        }
        let expected = self
            .stride
            .checked_mul(self.h - 1)
            .and_then(|n| n.checked_add(self.w))
            .ok_or(DetectError::InvalidDimensions {
                width: self.w,
                height: self.h,
            })?;
        // Packed views must match exactly; strided views only need the last row.
        let ok = if self.stride == self.w {
            self.data.len() == expected
        } else {
            self.data.len() >= expected
        };
        if !ok {
            return Err(DetectError::BufferSizeMismatch {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    pub fn foreground_count(&self) -> usize {
        self.rows()
            .map(|row| row.iter().filter(|&&v| v != 0).count())
            .sum()
    }
}

impl<'a> ImageView for BinaryView<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

/// Owned foreground mask, one byte per pixel (0 or 1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BinaryGrid {
    /// All-background grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width * height],
        }
    }

    /// Wrap raw samples; length is checked when the detector validates the view.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y) as u8);
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.width + x] != 0
    }

    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        self.data[y * self.width + x] = value as u8;
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Borrow as a read-only [`BinaryView`].
    pub fn as_view(&self) -> BinaryView<'_> {
        BinaryView::new(self.width, self.height, &self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_zero_dimensions() {
        let data: [u8; 0] = [];
        let err = BinaryView::new(0, 4, &data).validate().unwrap_err();
        assert_eq!(
            err,
            DetectError::InvalidDimensions {
                width: 0,
                height: 4
            }
        );
    }

    #[test]
    fn validate_rejects_short_buffer() {
        let data = vec![0u8; 11];
        let err = BinaryView::new(4, 3, &data).validate().unwrap_err();
        assert_eq!(
            err,
            DetectError::BufferSizeMismatch {
                expected: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn strided_view_reads_rows_and_columns() {
        // 3x2 image stored with stride 4
        let data = [1u8, 0, 1, 9, 0, 1, 0];
        let view = BinaryView {
            w: 3,
            h: 2,
            stride: 4,
            data: &data,
        };
        assert!(view.validate().is_ok());
        assert_eq!(view.row(1), &[0, 1, 0]);
        assert_eq!(view.column(2).collect::<Vec<_>>(), vec![1, 0]);
        assert_eq!(view.foreground_count(), 3);
        assert!(view.as_slice().is_none());
    }

    #[test]
    fn from_fn_marks_border() {
        let grid = BinaryGrid::from_fn(5, 4, |x, y| x == 0 || y == 3);
        assert!(grid.get(0, 1));
        assert!(grid.get(4, 3));
        assert!(!grid.get(2, 1));
        assert_eq!(grid.as_view().foreground_count(), 4 + 4);
    }
}
