//! JSON configuration for the dataset builder.
use crate::dataset::{BatchSpec, BoundsPolicy};
use crate::error::{DatasetError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DatasetToolConfig {
    /// Directory holding the batch source files.
    pub input_dir: PathBuf,
    /// Output root for image directories and `annotations/`.
    pub output_dir: PathBuf,
    #[serde(default = "BatchSpec::defaults")]
    pub batches: Vec<BatchSpec>,
    #[serde(default)]
    pub bounds: BoundsPolicy,
    /// Optional path for a pretty-printed run report.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

impl DatasetToolConfig {
    /// Config equivalent to the `<src> <dst>` command line.
    pub fn from_dirs(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            batches: BatchSpec::defaults(),
            bounds: BoundsPolicy::default(),
            report_json: None,
        }
    }
}

pub fn load_config(path: &Path) -> Result<DatasetToolConfig> {
    let data = fs::read_to_string(path).map_err(|e| DatasetError::config(path, e))?;
    parse_config(&data).map_err(|e| DatasetError::config(path, e))
}

pub fn parse_config(data: &str) -> serde_json::Result<DatasetToolConfig> {
    serde_json::from_str(data)
}
