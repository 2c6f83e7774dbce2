/// Read-only row access over a row-major pixel buffer.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    /// Pixel at (x, y), or `None` outside the image.
    fn pixel(&self, x: usize, y: usize) -> Option<Self::Pixel> {
        if x < self.width() && y < self.height() {
            Some(self.row(y)[x])
        } else {
            None
        }
    }
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];

    /// Write a pixel; coordinates outside the image are ignored.
    fn put_pixel(&mut self, x: i32, y: i32, value: Self::Pixel) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width() && y < self.height() {
            self.row_mut(y)[x] = value;
        }
    }
}
