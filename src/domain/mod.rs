// Domain models - Core types and data structures

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CutError;

/// Coordinate system a cut boundary is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutCoordinateSystem {
    /// Absolute time in seconds
    Time,
    /// Integer frame index
    Frame,
    /// Percentage of total duration (0-100)
    Percentage,
}

impl FromStr for CutCoordinateSystem {
    type Err = CutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "time" => Ok(Self::Time),
            "frame" => Ok(Self::Frame),
            "percentage" => Ok(Self::Percentage),
            other => Err(CutError::UnsupportedCoordinateSystem {
                system: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for CutCoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Time => write!(f, "time"),
            Self::Frame => write!(f, "frame"),
            Self::Percentage => write!(f, "percentage"),
        }
    }
}

/// A requested or detected span of the source video, not yet resolved to
/// absolute time. Immutable once constructed; carries no reference to the
/// source video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutSegment {
    pub start: f64,
    pub end: f64,
    pub system: CutCoordinateSystem,
    pub label: Option<String>,
}

impl CutSegment {
    pub fn new(start: f64, end: f64, system: CutCoordinateSystem) -> Self {
        Self {
            start,
            end,
            system,
            label: None,
        }
    }

    pub fn with_label(start: f64, end: f64, system: CutCoordinateSystem, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            system,
            label: Some(label.into()),
        }
    }
}

/// Probed information about a source video; read-only for the lifetime of
/// one cutting operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub duration_seconds: f64,
    pub frame_rate: Option<f64>,
    pub width: u32,
    pub height: u32,
}

impl VideoInfo {
    /// Total frame count, when the frame rate is known
    pub fn total_frames(&self) -> Option<u64> {
        self.frame_rate
            .map(|rate| (rate * self.duration_seconds) as u64)
    }
}

/// A segment after resolution and clamping, always in absolute seconds.
/// Invariant: `0 <= start_seconds < end_seconds <= duration_seconds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedInterval {
    pub start_seconds: f64,
    pub end_seconds: f64,
    pub label: String,
}

impl ResolvedInterval {
    pub fn duration_seconds(&self) -> f64 {
        self.end_seconds - self.start_seconds
    }
}

/// Output quality preset, mapped to fixed video/audio bitrates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputQuality {
    /// Keep the encoder's default rate control (no bitrate override)
    Original,
    High,
    Medium,
    Low,
}

impl OutputQuality {
    /// Fixed (video, audio) bitrate pair for this preset, `None` for Original
    pub fn bitrates(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Original => None,
            Self::High => Some(("8000k", "320k")),
            Self::Medium => Some(("4000k", "192k")),
            Self::Low => Some(("1000k", "128k")),
        }
    }
}

impl FromStr for OutputQuality {
    type Err = CutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "original" => Ok(Self::Original),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(CutError::InvalidCutSpec {
                message: format!(
                    "Invalid quality: {}. Use 'original', 'high', 'medium', or 'low'",
                    other
                ),
            }),
        }
    }
}

impl fmt::Display for OutputQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => write!(f, "original"),
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Configuration for one cutting operation; constructed once per job and
/// never mutated mid-job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutJobConfig {
    /// Video codec name passed to the encoder
    pub codec: String,
    /// Audio codec name, used when `preserve_audio` is set
    pub audio_codec: String,
    /// Keep audio tracks in the output
    pub preserve_audio: bool,
    /// Quality preset for the output
    pub quality: OutputQuality,
    /// Override the output frame rate
    pub target_fps: Option<u32>,
}

impl Default for CutJobConfig {
    fn default() -> Self {
        Self {
            codec: "libx264".to_string(),
            audio_codec: "aac".to_string(),
            preserve_audio: true,
            quality: OutputQuality::Original,
            target_fps: None,
        }
    }
}

/// Result of a completed cutting operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CutOutcome {
    /// Individual segment files were written
    Segments {
        output_paths: Vec<PathBuf>,
        segments_count: usize,
        original_duration: f64,
    },
    /// All segments were concatenated into a single file
    Merged {
        output_path: PathBuf,
        duration_seconds: f64,
        segments_count: usize,
    },
}

impl CutOutcome {
    pub fn segments_count(&self) -> usize {
        match self {
            Self::Segments { segments_count, .. } => *segments_count,
            Self::Merged { segments_count, .. } => *segments_count,
        }
    }
}

/// Outcome of a scene-based cut, carrying the detected boundaries alongside
/// the cutting result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneCutReport {
    #[serde(flatten)]
    pub outcome: CutOutcome,
    pub scenes_detected: usize,
    pub scene_boundaries: Vec<(f64, f64)>,
}

#[cfg(test)]
mod tests;
