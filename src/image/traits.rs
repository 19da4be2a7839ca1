/// Read-only raster with row access; implemented by every grid the pipeline scans.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    #[inline]
    fn pixel(&self, x: usize, y: usize) -> Self::Pixel {
        self.row(y)[x]
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    /// Iterate the pixels of column `x` from top to bottom.
    fn column(&self, x: usize) -> Column<'_, Self>
    where
        Self: Sized,
    {
        Column {
            image: self,
            x,
            y: 0,
        }
    }

    fn is_contiguous(&self) -> bool {
        self.stride() == self.width()
    }

    fn as_slice(&self) -> Option<&[Self::Pixel]> {
        None
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }
}

pub struct Column<'a, I: ?Sized + ImageView> {
    image: &'a I,
    x: usize,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Column<'a, I> {
    type Item = I::Pixel;

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.pixel(self.x, y))
    }
}
