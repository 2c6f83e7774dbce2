//! Polyline rasterization onto the fixed dataset canvas.
//!
//! Consecutive points are joined by 1-pixel black Bresenham segments on a
//! white `CANVAS_SIZE × CANVAS_SIZE` RGB buffer. Points are expected on the
//! canvas already; pixels that would land outside it are skipped.
mod line;

pub use self::line::LinePixels;

use crate::image::{ImageViewMut, RasterImage, Rgb, BLACK};
use crate::types::Point;

/// Side length of every dataset image.
pub const CANVAS_SIZE: usize = 256;

/// Draw one segment, endpoints included.
pub fn draw_line<I: ImageViewMut<Pixel = Rgb>>(image: &mut I, a: Point, b: Point, color: Rgb) {
    for p in LinePixels::new(a, b) {
        image.put_pixel(p.x, p.y, color);
    }
}

/// Render a polyline. Zero or one point gives a blank white image.
pub fn rasterize(points: &[Point]) -> RasterImage {
    let mut image = RasterImage::white(CANVAS_SIZE, CANVAS_SIZE);
    for pair in points.windows(2) {
        draw_line(&mut image, pair[0], pair[1], BLACK);
    }
    image
}
