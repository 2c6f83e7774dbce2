//! Owned 3-channel 8-bit image in row-major layout.
//!
//! This is the buffer the rasterizer draws into. Pixels are `[r, g, b]`
//! triples; the raw byte view is interleaved RGB, ready for PNG encoding.
use super::traits::{ImageView, ImageViewMut};

pub type Rgb = [u8; 3];

pub const WHITE: Rgb = [255, 255, 255];
pub const BLACK: Rgb = [0, 0, 0];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order, `w * h` pixels
    pub data: Vec<Rgb>,
}

impl RasterImage {
    /// Construct a `w × h` buffer filled with `color`.
    pub fn filled(w: usize, h: usize, color: Rgb) -> Self {
        Self {
            w,
            h,
            data: vec![color; w * h],
        }
    }

    /// Construct a white `w × h` buffer.
    pub fn white(w: usize, h: usize) -> Self {
        Self::filled(w, h, WHITE)
    }

    /// Interleaved RGB bytes, `w * h * 3` long.
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_flattened()
    }

    /// Count pixels equal to `color`.
    pub fn count(&self, color: Rgb) -> usize {
        self.data.iter().filter(|&&px| px == color).count()
    }
}

impl ImageView for RasterImage {
    type Pixel = Rgb;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for RasterImage {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Rgb] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }
}
