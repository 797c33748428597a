//! Segment merging
//!
//! Concatenates extracted clips, in the order supplied, into one continuous
//! output file. Clip handles are consumed by concatenation and therefore
//! released on both the success and error paths.

use std::path::Path;

use tracing::info;

use crate::domain::CutJobConfig;
use crate::error::{CutError, CutResult};
use crate::media::{ClipHandle, MediaBackend, OpenVideo, WriteSettings};

/// Result of a completed merge
#[derive(Debug, Clone, PartialEq)]
pub struct MergedResult {
    pub duration_seconds: f64,
    pub segments_count: usize,
}

pub struct SegmentMerger<'a, B: MediaBackend> {
    backend: &'a B,
    config: &'a CutJobConfig,
}

impl<'a, B: MediaBackend> SegmentMerger<'a, B> {
    pub fn new(backend: &'a B, config: &'a CutJobConfig) -> Self {
        Self { backend, config }
    }

    /// Concatenate the clips in supplied order and write a single output file
    pub fn merge(
        &self,
        clips: Vec<<B::Video as OpenVideo>::Clip>,
        output_path: &Path,
    ) -> CutResult<MergedResult> {
        if clips.is_empty() {
            return Err(CutError::NoClipsToMerge);
        }
        let segments_count = clips.len();

        let merged = self.backend.concatenate(clips)?;
        let duration_seconds = merged.duration_seconds();

        let settings = WriteSettings::from_config(self.config);
        info!(
            "Merging {} segments ({:.3}s total) into {}",
            segments_count,
            duration_seconds,
            output_path.display()
        );
        merged.write(output_path, &settings)?;

        Ok(MergedResult {
            duration_seconds,
            segments_count,
        })
    }
}
