pub mod io;
pub mod rgb;
pub mod traits;

pub use self::rgb::{RasterImage, Rgb, BLACK, WHITE};
pub use self::traits::{ImageView, ImageViewMut};
