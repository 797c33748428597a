//! Clip extraction
//!
//! Turns one resolved interval into an independent sub-clip: written to disk
//! immediately in per-segment mode, or handed back unwritten for the merger.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::{CutJobConfig, ResolvedInterval};
use crate::error::CutResult;
use crate::media::{ClipHandle, OpenVideo, WriteSettings};
use crate::utils::path::segment_output_path;

pub struct ClipExtractor<'a> {
    config: &'a CutJobConfig,
}

impl<'a> ClipExtractor<'a> {
    pub fn new(config: &'a CutJobConfig) -> Self {
        Self { config }
    }

    /// Take a time-bounded view of the source covering the interval, without
    /// writing anything. Used in merge mode.
    pub fn extract<V: OpenVideo>(
        &self,
        video: &V,
        interval: &ResolvedInterval,
    ) -> CutResult<V::Clip> {
        video.subclip(interval.start_seconds, interval.end_seconds)
    }

    /// Extract the interval and write it immediately, deriving the output
    /// path from `base_output` and the interval's label.
    pub fn extract_to_file<V: OpenVideo>(
        &self,
        video: &V,
        interval: &ResolvedInterval,
        base_output: &Path,
    ) -> CutResult<PathBuf> {
        let clip = self.extract(video, interval)?;
        let output_path = segment_output_path(base_output, &interval.label);
        let settings = WriteSettings::from_config(self.config);
        info!(
            "Writing segment '{}' ({:.3}s - {:.3}s) to {}",
            interval.label,
            interval.start_seconds,
            interval.end_seconds,
            output_path.display()
        );
        clip.write(&output_path, &settings)?;
        Ok(output_path)
    }
}
