//! Where batches of traced paths come from.
use super::batch::BatchSpec;
use crate::error::{DatasetError, Result};
use crate::image::io::read_json_file;
use crate::types::PointSequence;
use log::debug;
use std::collections::HashMap;
use std::path::PathBuf;

/// Supplies the ordered sequences of one batch.
pub trait SequenceSource {
    fn load(&self, batch: &BatchSpec) -> Result<Vec<PointSequence>>;

    /// Path used when reporting problems with `batch`.
    fn origin(&self, batch: &BatchSpec) -> PathBuf {
        batch.source.clone()
    }
}

/// Reads `<dir>/<batch.source>` as a JSON array of `[x, y, path_type]` sequences.
#[derive(Clone, Debug)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SequenceSource for JsonDirSource {
    fn load(&self, batch: &BatchSpec) -> Result<Vec<PointSequence>> {
        let path = self.origin(batch);
        let sequences: Vec<PointSequence> = read_json_file(&path)?;
        debug!(
            "loaded {} sequences for batch '{}' from {}",
            sequences.len(),
            batch.name,
            path.display()
        );
        Ok(sequences)
    }

    fn origin(&self, batch: &BatchSpec) -> PathBuf {
        self.dir.join(&batch.source)
    }
}

/// Batches held in memory, keyed by batch name.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    batches: HashMap<String, Vec<PointSequence>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batch(mut self, name: impl Into<String>, sequences: Vec<PointSequence>) -> Self {
        self.batches.insert(name.into(), sequences);
        self
    }
}

impl SequenceSource for MemorySource {
    fn load(&self, batch: &BatchSpec) -> Result<Vec<PointSequence>> {
        self.batches
            .get(&batch.name)
            .cloned()
            .ok_or_else(|| DatasetError::input(&batch.source, "batch not present in memory source"))
    }
}
