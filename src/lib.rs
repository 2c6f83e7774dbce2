#![doc = include_str!("../README.md")]

pub mod config;
pub mod dataset;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod raster;
pub mod segments;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::dataset::{build_dataset, DatasetAssembler};
pub use crate::error::DatasetError;
pub use crate::raster::{rasterize, CANVAS_SIZE};
pub use crate::segments::{canonicalize, CanonicalSegment};
pub use crate::types::{PathType, Point, PointSequence, TracedPoint};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use line_dataset::prelude::*;
///
/// let path = [Point::new(10, 10), Point::new(50, 10), Point::new(50, 40)];
/// let image = rasterize(&path);
/// let lines = canonicalize(&path);
/// println!("{}x{} image, {} lines", image.w, image.h, lines.len());
/// ```
pub mod prelude {
    pub use crate::image::RasterImage;
    pub use crate::{canonicalize, rasterize, CanonicalSegment, Point};
}
