use super::records::{AnnotationId, ImageId};
use serde::{Deserialize, Serialize};

/// Identifier counters shared by every batch of a run.
///
/// Both counters only move forward, so ids are never reused, including
/// across batches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCounters {
    next_image: u64,
    next_annotation: u64,
}

impl IdCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from explicit starting values.
    pub fn starting_at(image: u64, annotation: u64) -> Self {
        Self {
            next_image: image,
            next_annotation: annotation,
        }
    }

    /// Id the next image will receive.
    pub fn peek_image(&self) -> ImageId {
        ImageId(self.next_image)
    }

    /// Id the next annotation will receive.
    pub fn peek_annotation(&self) -> AnnotationId {
        AnnotationId(self.next_annotation)
    }

    pub fn next_image(&mut self) -> ImageId {
        let id = ImageId(self.next_image);
        self.next_image += 1;
        id
    }

    pub fn next_annotation(&mut self) -> AnnotationId {
        let id = AnnotationId(self.next_annotation);
        self.next_annotation += 1;
        id
    }
}
