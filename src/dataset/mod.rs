pub mod assembler;
pub mod batch;
pub mod ids;
pub mod layout;
pub mod records;
pub mod source;

pub use self::assembler::{BatchOutcome, DatasetAssembler};
pub use self::batch::{to_grid_path, BatchSpec, BoundsPolicy, GridPath};
pub use self::ids::IdCounters;
pub use self::layout::OutputLayout;
pub use self::records::{
    AnnotationId, AnnotationRecord, Category, ImageId, ImageRecord, LineDocument,
};
pub use self::source::{JsonDirSource, MemorySource, SequenceSource};

use crate::config::DatasetToolConfig;
use crate::diagnostics::RunReport;
use crate::error::Result;
use crate::image::io::write_json_file;

/// Build the full dataset described by `config`, writing the run report if requested.
pub fn build_dataset(config: &DatasetToolConfig) -> Result<RunReport> {
    let source = JsonDirSource::new(&config.input_dir);
    let mut assembler = DatasetAssembler::new(&config.output_dir, config.bounds);
    let report = assembler.run(&source, &config.batches)?;
    if let Some(path) = &config.report_json {
        write_json_file(path, &report)?;
    }
    Ok(report)
}
