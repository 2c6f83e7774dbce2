use super::records::ImageId;
use std::path::PathBuf;

/// File layout under the output root:
/// `<root>/<batch>/<id>.png` and `<root>/annotations/lines_<batch>.json`.
#[derive(Clone, Debug)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn image_dir(&self, batch: &str) -> PathBuf {
        self.root.join(batch)
    }

    pub fn image_path(&self, batch: &str, id: ImageId) -> PathBuf {
        self.image_dir(batch).join(id.file_name())
    }

    pub fn annotation_dir(&self) -> PathBuf {
        self.root.join("annotations")
    }

    pub fn annotation_path(&self, batch: &str) -> PathBuf {
        self.annotation_dir().join(format!("lines_{batch}.json"))
    }
}
