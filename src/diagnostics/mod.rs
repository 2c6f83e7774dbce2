//! Run reports: what each batch produced and where the time went.
pub mod timing;

pub use self::timing::{StageTiming, TimingBreakdown};

use crate::dataset::{AnnotationId, ImageId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Summary of one processed batch.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub name: String,
    pub images: usize,
    pub annotations: usize,
    /// Points moved onto the canvas under the clamp policy.
    pub clamped_points: usize,
    pub first_image_id: ImageId,
    /// First image id not used by this batch.
    pub next_image_id: ImageId,
    pub first_annotation_id: AnnotationId,
    pub next_annotation_id: AnnotationId,
    pub annotation_file: PathBuf,
    pub timing: TimingBreakdown,
}

/// Summary of a full run over all batches.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub batches: Vec<BatchReport>,
    pub timing: TimingBreakdown,
}

impl RunReport {
    pub fn total_images(&self) -> usize {
        self.batches.iter().map(|b| b.images).sum()
    }

    pub fn total_annotations(&self) -> usize {
        self.batches.iter().map(|b| b.annotations).sum()
    }
}
