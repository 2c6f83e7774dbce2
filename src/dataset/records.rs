use crate::segments::CanonicalSegment;
use serde::{Deserialize, Serialize};

/// Identifier of one rendered image; also the stem of its file name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub u64);

/// Identifier of one segment annotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationId(pub u64);

impl ImageId {
    pub fn file_name(self) -> String {
        format!("{}.png", self.0)
    }
}

/// Category every annotation belongs to.
pub const LINE_CATEGORY_ID: u32 = 0;
/// Annotations carry no meaningful area; the field is a constant placeholder.
pub const LINE_AREA: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub file_name: String,
    pub height: usize,
    pub width: usize,
    pub id: ImageId,
}

impl ImageRecord {
    pub fn new(id: ImageId, width: usize, height: usize) -> Self {
        Self {
            file_name: id.file_name(),
            height,
            width,
            id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    pub id: AnnotationId,
    pub image_id: ImageId,
    pub category_id: u32,
    pub line: CanonicalSegment,
    pub area: u32,
}

impl AnnotationRecord {
    pub fn line(id: AnnotationId, image_id: ImageId, line: CanonicalSegment) -> Self {
        Self {
            id,
            image_id,
            category_id: LINE_CATEGORY_ID,
            line,
            area: LINE_AREA,
        }
    }
}

/// Category entry. The id is written as a string, unlike every other id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub supercategory: String,
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn line() -> Self {
        Self {
            supercategory: "line".to_string(),
            id: LINE_CATEGORY_ID.to_string(),
            name: "line".to_string(),
        }
    }
}

/// COCO-style annotation document for one batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDocument {
    pub images: Vec<ImageRecord>,
    pub annotations: Vec<AnnotationRecord>,
    pub categories: Vec<Category>,
}

impl Default for LineDocument {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            annotations: Vec::new(),
            categories: vec![Category::line()],
        }
    }
}
