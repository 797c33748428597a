//! Cutting job orchestration
//!
//! The two caller-facing entry points: explicit-segment cutting and
//! scene-detection cutting. All failures surface as `CutError`; the
//! explicit path is fail-fast, so a caller asking for N outputs gets
//! exactly N files or an error and never a silent subset.

use std::path::Path;

use tracing::info;

use crate::detect::SceneDetector;
use crate::domain::{CutJobConfig, CutOutcome, CutSegment, SceneCutReport};
use crate::engine::{ClipExtractor, SegmentMerger};
use crate::error::{CutError, CutResult};
use crate::media::{MediaBackend, OpenVideo};
use crate::planner::SegmentPlanner;
use crate::utils::path::ensure_parent_dir;

pub struct VideoCutter<'a, B: MediaBackend> {
    backend: &'a B,
    config: CutJobConfig,
}

impl<'a, B: MediaBackend> VideoCutter<'a, B> {
    pub fn new(backend: &'a B, config: CutJobConfig) -> Self {
        Self { backend, config }
    }

    /// Cut the source video according to explicit segments.
    ///
    /// With `merge` unset, every segment becomes its own file derived from
    /// `output_path`; with `merge` set, all segments are concatenated into a
    /// single file at `output_path`.
    pub fn cut(
        &self,
        video_path: &Path,
        output_path: &Path,
        segments: &[CutSegment],
        merge: bool,
    ) -> CutResult<CutOutcome> {
        if !video_path.exists() {
            return Err(CutError::SourceNotFound {
                path: video_path.display().to_string(),
            });
        }
        info!("Starting video cutting: {}", video_path.display());
        ensure_parent_dir(output_path)?;

        let video = self.backend.open_video(video_path)?;
        let duration = video.info().duration_seconds;
        let intervals = SegmentPlanner::new().plan(segments, video.info())?;
        let extractor = ClipExtractor::new(&self.config);

        if merge {
            let mut clips = Vec::with_capacity(intervals.len());
            for interval in &intervals {
                clips.push(extractor.extract(&video, interval)?);
            }
            let merged = SegmentMerger::new(self.backend, &self.config).merge(clips, output_path)?;
            info!(
                "Merged {} segments into {}",
                merged.segments_count,
                output_path.display()
            );
            Ok(CutOutcome::Merged {
                output_path: output_path.to_path_buf(),
                duration_seconds: merged.duration_seconds,
                segments_count: merged.segments_count,
            })
        } else {
            let mut output_paths = Vec::with_capacity(intervals.len());
            for interval in &intervals {
                output_paths.push(extractor.extract_to_file(&video, interval, output_path)?);
            }
            info!("Cut video into {} segments", output_paths.len());
            Ok(CutOutcome::Segments {
                segments_count: output_paths.len(),
                output_paths,
                original_duration: duration,
            })
        }
    }

    /// Detect scene boundaries and cut the video at them, one file per scene
    pub fn cut_by_scenes(
        &self,
        video_path: &Path,
        output_path: &Path,
        detector: &SceneDetector,
    ) -> CutResult<SceneCutReport> {
        if !video_path.exists() {
            return Err(CutError::SourceNotFound {
                path: video_path.display().to_string(),
            });
        }

        // Detection has its own pass over the source; the handle is released
        // before the cutting job opens its own.
        let segments = {
            let video = self.backend.open_video(video_path)?;
            detector.detect(&video)
        };
        let scene_boundaries: Vec<(f64, f64)> = segments.iter().map(|s| (s.start, s.end)).collect();
        info!("Detected {} scene(s)", scene_boundaries.len());

        let outcome = self.cut(video_path, output_path, &segments, false)?;
        Ok(SceneCutReport {
            outcome,
            scenes_detected: scene_boundaries.len(),
            scene_boundaries,
        })
    }
}
