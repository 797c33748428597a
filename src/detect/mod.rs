//! Naive scene-boundary detection
//!
//! Samples the video once per second and closes a scene wherever the
//! frame-to-frame mean absolute pixel difference exceeds a threshold. The
//! metric is a cheap, format-agnostic baseline with no normalization for
//! resolution or motion; callers needing broadcast-quality detection should
//! treat its output as advisory.

use tracing::{debug, warn};

use crate::domain::{CutCoordinateSystem, CutSegment};
use crate::media::{FrameBuffer, OpenVideo};

/// Fixed interval between sampled frames, in seconds
const SAMPLE_INTERVAL: f64 = 1.0;

/// Scene-change detector configuration
#[derive(Debug, Clone)]
pub struct SceneDetector {
    /// Mean-absolute-difference level above which a boundary is declared
    threshold: f64,
    /// Minimum scene length in seconds; differences inside this window are
    /// ignored
    min_scene_length: f64,
    /// Cap on the number of produced segments; tail scenes past the cap are
    /// dropped
    max_scenes: Option<usize>,
}

impl SceneDetector {
    pub fn new(threshold: f64, min_scene_length: f64, max_scenes: Option<usize>) -> Self {
        Self {
            threshold,
            min_scene_length,
            max_scenes,
        }
    }

    /// Derive Time-coordinate segments from detected scene boundaries.
    ///
    /// Never fails: unreadable samples are skipped and detection continues,
    /// and a video with no detectable boundaries yields a single segment
    /// spanning the full duration. The trailing scene always closes at the
    /// end of the video, even when shorter than the minimum scene length.
    pub fn detect<V: OpenVideo>(&self, video: &V) -> Vec<CutSegment> {
        let duration = video.info().duration_seconds;
        let mut scenes: Vec<(f64, f64)> = Vec::new();
        let mut prev_frame: Option<FrameBuffer> = None;
        let mut scene_start = 0.0;
        let mut t = 0.0;

        while t < duration {
            match video.sample_frame(t) {
                Ok(frame) => {
                    if let Some(prev) = &prev_frame {
                        let diff = frame.mean_abs_diff(prev);
                        if diff > self.threshold && (t - scene_start) >= self.min_scene_length {
                            debug!("Scene boundary at {:.1}s (diff {:.2})", t, diff);
                            scenes.push((scene_start, t));
                            scene_start = t;
                        }
                    }
                    prev_frame = Some(frame);
                }
                Err(e) => {
                    debug!("Skipping unreadable sample at {:.1}s: {}", t, e);
                }
            }
            t += SAMPLE_INTERVAL;
        }

        if scene_start < duration {
            scenes.push((scene_start, duration));
        }

        if let Some(max) = self.max_scenes {
            if scenes.len() > max {
                warn!(
                    "Scene cap reached: keeping first {} of {} scenes, the tail of \
                     the video is not represented",
                    max,
                    scenes.len()
                );
                scenes.truncate(max);
            }
        }

        scenes
            .into_iter()
            .enumerate()
            .map(|(i, (start, end))| {
                CutSegment::with_label(start, end, CutCoordinateSystem::Time, format!("scene_{}", i + 1))
            })
            .collect()
    }
}
