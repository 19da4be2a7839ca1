pub mod binarize;
pub mod binary;
pub mod fit;
pub mod io;
pub mod traits;

pub use self::binarize::{binarize_image, binarize_rgba};
pub use self::binary::{BinaryGrid, BinaryView};
pub use self::fit::{fit_to_canvas, FitTransform};
pub use self::traits::{Column, ImageView, Rows};
