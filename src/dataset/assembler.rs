//! Drives rasterization and canonicalization over whole batches.
//!
//! For every sequence, in input order, the assembler:
//! 1. strips path-type labels and enforces canvas bounds,
//! 2. rasterizes the path and writes `<root>/<batch>/<image_id>.png`,
//! 3. canonicalizes the segments and records one annotation per segment,
//! 4. advances the image id.
//!
//! After each batch the annotation document for that batch is written to
//! `<root>/annotations/lines_<batch>.json`. Id counters are owned by the
//! assembler and keep running across batches.
use super::batch::{to_grid_path, BatchSpec, BoundsPolicy};
use super::ids::IdCounters;
use super::layout::OutputLayout;
use super::records::{AnnotationRecord, ImageRecord, LineDocument};
use super::source::SequenceSource;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{BatchReport, RunReport, TimingBreakdown};
use crate::error::Result;
use crate::image::io::{ensure_dir, save_rgb_png, write_json_compact};
use crate::image::BLACK;
use crate::raster::{rasterize, CANVAS_SIZE};
use crate::segments::canonicalize;
use crate::types::PointSequence;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Document and report produced by one batch.
#[derive(Clone, Debug)]
pub struct BatchOutcome {
    pub document: LineDocument,
    pub report: BatchReport,
}

#[derive(Clone, Debug)]
pub struct DatasetAssembler {
    layout: OutputLayout,
    bounds: BoundsPolicy,
    ids: IdCounters,
}

impl DatasetAssembler {
    pub fn new(output_root: impl Into<PathBuf>, bounds: BoundsPolicy) -> Self {
        Self {
            layout: OutputLayout::new(output_root),
            bounds,
            ids: IdCounters::new(),
        }
    }

    /// Start numbering from `ids` instead of zero.
    pub fn with_ids(mut self, ids: IdCounters) -> Self {
        self.ids = ids;
        self
    }

    pub fn ids(&self) -> IdCounters {
        self.ids
    }

    /// Process `batches` in order, loading each from `source`.
    pub fn run<S: SequenceSource + ?Sized>(
        &mut self,
        source: &S,
        batches: &[BatchSpec],
    ) -> Result<RunReport> {
        let mut report = RunReport::default();
        for batch in batches {
            let sequences = report.timing.time("load", || source.load(batch))?;
            let start = Instant::now();
            let outcome = self.process_batch(batch, &sequences, &source.origin(batch))?;
            report.timing.push("process", elapsed_ms(start));
            report.batches.push(outcome.report);
        }
        Ok(report)
    }

    /// Render and annotate one batch, then write its annotation document.
    pub fn process_batch(
        &mut self,
        batch: &BatchSpec,
        sequences: &[PointSequence],
        origin: &Path,
    ) -> Result<BatchOutcome> {
        debug!(
            "batch '{}': {} sequences, next image id {}",
            batch.name,
            sequences.len(),
            self.ids.peek_image().0
        );
        ensure_dir(&self.layout.image_dir(&batch.name))?;

        let first_image_id = self.ids.peek_image();
        let first_annotation_id = self.ids.peek_annotation();
        let mut document = LineDocument::default();
        let mut timing = TimingBreakdown::default();
        let mut clamped_points = 0;

        for (index, sequence) in sequences.iter().enumerate() {
            clamped_points +=
                self.process_sequence(batch, index, sequence, origin, &mut document, &mut timing)?;
        }

        let annotation_file = self.layout.annotation_path(&batch.name);
        timing.time("write_annotations", || {
            write_json_compact(&annotation_file, &document)
        })?;
        info!(
            "batch '{}': {} images, {} annotations -> {}",
            batch.name,
            document.images.len(),
            document.annotations.len(),
            annotation_file.display()
        );

        let report = BatchReport {
            name: batch.name.clone(),
            images: document.images.len(),
            annotations: document.annotations.len(),
            clamped_points,
            first_image_id,
            next_image_id: self.ids.peek_image(),
            first_annotation_id,
            next_annotation_id: self.ids.peek_annotation(),
            annotation_file,
            timing,
        };
        Ok(BatchOutcome { document, report })
    }

    fn process_sequence(
        &mut self,
        batch: &BatchSpec,
        index: usize,
        sequence: &PointSequence,
        origin: &Path,
        document: &mut LineDocument,
        timing: &mut TimingBreakdown,
    ) -> Result<usize> {
        let path = to_grid_path(sequence, index, CANVAS_SIZE, self.bounds, origin)?;
        let image_id = self.ids.next_image();

        let raster = timing.time("rasterize", || rasterize(&path.points));
        debug!(
            "image {}: {} points, {} ink pixels",
            image_id.0,
            path.points.len(),
            raster.count(BLACK)
        );
        document
            .images
            .push(ImageRecord::new(image_id, raster.w, raster.h));
        let image_path = self.layout.image_path(&batch.name, image_id);
        timing.time("write_images", || save_rgb_png(&raster, &image_path))?;

        let lines = timing.time("canonicalize", || canonicalize(&path.points));
        for line in lines {
            let id = self.ids.next_annotation();
            document
                .annotations
                .push(AnnotationRecord::line(id, image_id, line));
        }

        info!("Finishing {}", image_path.display());
        Ok(path.clamped)
    }
}
