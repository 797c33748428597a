//! Media boundary - interface to the codec layer
//!
//! The cutting engine never decodes or encodes media itself; it talks to an
//! implementation of these traits. `ffmpeg::FfmpegBackend` is the production
//! adapter; `mock::MockBackend` is the deterministic in-memory adapter used
//! by the test suite.

pub mod ffmpeg;
pub mod mock;

use std::path::Path;

use crate::domain::{CutJobConfig, VideoInfo};
use crate::error::CutResult;

/// One decoded frame sample as raw interleaved channel bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pub channels: u32,
    pub data: Vec<u8>,
}

impl FrameBuffer {
    /// Mean absolute pixel-value difference over all channels against
    /// another frame. Compared over the overlapping byte range when the
    /// frames disagree on dimensions.
    pub fn mean_abs_diff(&self, other: &FrameBuffer) -> f64 {
        let len = self.data.len().min(other.data.len());
        if len == 0 {
            return 0.0;
        }
        let sum: u64 = self.data[..len]
            .iter()
            .zip(&other.data[..len])
            .map(|(a, b)| (i16::from(*a) - i16::from(*b)).unsigned_abs() as u64)
            .sum();
        sum as f64 / len as f64
    }
}

/// Encoder settings for one output write, derived from the job config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSettings {
    pub codec: String,
    /// `None` drops audio from the output entirely
    pub audio_codec: Option<String>,
    pub video_bitrate: Option<String>,
    pub audio_bitrate: Option<String>,
    pub fps: Option<u32>,
}

impl WriteSettings {
    pub fn from_config(config: &CutJobConfig) -> Self {
        let (video_bitrate, audio_bitrate) = match config.quality.bitrates() {
            Some((video, audio)) => (Some(video.to_string()), Some(audio.to_string())),
            None => (None, None),
        };
        Self {
            codec: config.codec.clone(),
            audio_codec: config
                .preserve_audio
                .then(|| config.audio_codec.clone()),
            video_bitrate,
            audio_bitrate: if config.preserve_audio { audio_bitrate } else { None },
            fps: config.target_fps,
        }
    }
}

/// An opened, probed source video. One handle serves one job; its read
/// position is not safe for concurrent use.
pub trait OpenVideo {
    type Clip: ClipHandle;

    /// Probed metadata, derived once when the file was opened
    fn info(&self) -> &VideoInfo;

    /// Time-bounded view of the source covering `[start_seconds, end_seconds)`
    fn subclip(&self, start_seconds: f64, end_seconds: f64) -> CutResult<Self::Clip>;

    /// Decode a single frame at time `t`, used by scene detection
    fn sample_frame(&self, t: f64) -> CutResult<FrameBuffer>;
}

/// A time-bounded view on source material that can be written out as an
/// independent file
pub trait ClipHandle {
    fn duration_seconds(&self) -> f64;

    fn write(&self, output_path: &Path, settings: &WriteSettings) -> CutResult<()>;
}

/// Factory for open videos plus the concatenation primitive
pub trait MediaBackend {
    type Video: OpenVideo;

    fn open_video(&self, path: &Path) -> CutResult<Self::Video>;

    /// Combine clips, in the order supplied, into a single continuous clip.
    /// Consumes the input handles; they are released whether or not the
    /// merged clip is ever written.
    fn concatenate(
        &self,
        clips: Vec<<Self::Video as OpenVideo>::Clip>,
    ) -> CutResult<<Self::Video as OpenVideo>::Clip>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OutputQuality;

    fn frame(bytes: &[u8]) -> FrameBuffer {
        FrameBuffer {
            width: bytes.len() as u32,
            height: 1,
            channels: 1,
            data: bytes.to_vec(),
        }
    }

    #[test]
    fn mean_abs_diff_identical_frames() {
        let a = frame(&[10, 20, 30]);
        assert_eq!(a.mean_abs_diff(&a), 0.0);
    }

    #[test]
    fn mean_abs_diff_uniform_offset() {
        let a = frame(&[0, 0, 0, 0]);
        let b = frame(&[50, 50, 50, 50]);
        assert_eq!(a.mean_abs_diff(&b), 50.0);
    }

    #[test]
    fn mean_abs_diff_empty_frame() {
        let a = frame(&[]);
        let b = frame(&[1, 2, 3]);
        assert_eq!(a.mean_abs_diff(&b), 0.0);
    }

    #[test]
    fn write_settings_quality_presets() {
        let mut config = CutJobConfig {
            quality: OutputQuality::Medium,
            ..CutJobConfig::default()
        };
        let settings = WriteSettings::from_config(&config);
        assert_eq!(settings.codec, "libx264");
        assert_eq!(settings.audio_codec.as_deref(), Some("aac"));
        assert_eq!(settings.video_bitrate.as_deref(), Some("4000k"));
        assert_eq!(settings.audio_bitrate.as_deref(), Some("192k"));

        config.preserve_audio = false;
        let muted = WriteSettings::from_config(&config);
        assert_eq!(muted.audio_codec, None);
        assert_eq!(muted.audio_bitrate, None);
        assert_eq!(muted.video_bitrate.as_deref(), Some("4000k"));
    }
}
