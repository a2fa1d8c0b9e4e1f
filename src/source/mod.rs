//! Image input for feature extraction
//!
//! The extractor reads pixels through the [`PixelSource`] trait, so any
//! rectangular RGB(A) grid can be analysed. Implementations are provided for
//! the `image` crate's buffers, along with loaders that decode files and
//! in-memory bytes.

mod loader;

pub use loader::{load_image, load_image_from_bytes};

use std::ops::Deref;

use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel};

/// Rectangular grid of pixels with 8-bit color channels
pub trait PixelSource {
    /// Image size as `(width, height)`
    fn dimensions(&self) -> (u32, u32);

    /// Red, green and blue channels of the pixel at `(x, y)`
    ///
    /// Alpha, when present, is dropped. Callers stay within `dimensions()`.
    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3];
}

impl PixelSource for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        let [r, g, b, _] = self.get_pixel(x, y).0;
        [r, g, b]
    }
}

impl<P, C> PixelSource for ImageBuffer<P, C>
where
    P: Pixel<Subpixel = u8>,
    C: Deref<Target = [u8]>,
{
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).to_rgb().0
    }
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        (**self).rgb_at(x, y)
    }
}
