//! Gray-level quantization
//!
//! Converts RGB pixels to a single gray value by channel averaging and,
//! when the configured level count is inside the rescaling range, maps the
//! 0-255 gray range down into `[0, gray_level]`.

use crate::source::PixelSource;

use super::errors::{GlcmError, GlcmResult};

/// Highest gray value the averaging step can produce
pub const MAX_GRAY: u8 = 255;

/// Quantize one pixel
///
/// Gray is the floor of the channel mean. It is rescaled with
/// `gray * gray_level / 255` only when `0 < gray_level < 255`; any other
/// `gray_level` leaves the raw 0-255 value untouched.
///
/// # Arguments
/// * `r`, `g`, `b` - 8-bit channel values (alpha is not used)
/// * `gray_level` - Configured gray level count
///
/// # Returns
/// The quantized gray value
pub fn quantize_rgb(r: u8, g: u8, b: u8, gray_level: i32) -> u8 {
    let gray = (u32::from(r) + u32::from(g) + u32::from(b)) / 3;

    if gray_level > 0 && gray_level < i32::from(MAX_GRAY) {
        (gray * gray_level as u32 / u32::from(MAX_GRAY)) as u8
    } else {
        gray as u8
    }
}

/// Grid of quantized gray values
///
/// The outer index `i` follows the image x axis and the inner index `j`
/// follows the image y axis, so `get(i, j)` is the pixel at `(x = i, y = j)`.
/// Storage is a flat buffer of `rows * cols` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayLevelGrid {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl GrayLevelGrid {
    /// Quantize every pixel of a source image
    ///
    /// # Arguments
    /// * `source` - Pixel collaborator supplying RGB values
    /// * `gray_level` - Configured gray level count
    pub fn from_source<S: PixelSource + ?Sized>(source: &S, gray_level: i32) -> Self {
        let (width, height) = source.dimensions();
        let rows = width as usize;
        let cols = height as usize;
        let mut data = Vec::with_capacity(rows * cols);

        for x in 0..width {
            for y in 0..height {
                let [r, g, b] = source.rgb_at(x, y);
                data.push(quantize_rgb(r, g, b, gray_level));
            }
        }

        GrayLevelGrid { rows, cols, data }
    }

    /// Build a grid from already quantized values
    ///
    /// # Arguments
    /// * `values` - Outer vector indexed by `i`, inner vectors by `j`
    ///
    /// # Returns
    /// The grid, or `InvalidConfiguration` if the inner vectors differ in length
    pub fn from_rows(values: Vec<Vec<u8>>) -> GlcmResult<Self> {
        let rows = values.len();
        let cols = values.first().map_or(0, Vec::len);

        if values.iter().any(|row| row.len() != cols) {
            return Err(GlcmError::InvalidConfiguration(
                "gray level grid rows must all have the same length".to_string(),
            ));
        }

        Ok(GrayLevelGrid {
            rows,
            cols,
            data: values.into_iter().flatten().collect(),
        })
    }

    /// Extent of the outer index
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Extent of the inner index
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Gray value at `(i, j)`
    ///
    /// Panics if the position is outside the grid.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u8 {
        debug_assert!(j < self.cols);
        self.data[i * self.cols + j]
    }

    /// Largest gray value present, or `None` for an empty grid
    pub fn max_value(&self) -> Option<u8> {
        self.data.iter().copied().max()
    }
}
