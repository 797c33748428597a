//! FFmpeg process adapter
//!
//! Probes sources with `ffprobe -print_format json` and performs extraction,
//! concatenation, and frame sampling by invoking the `ffmpeg` binary. Both
//! tools are located on `PATH` when the backend is constructed.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::domain::VideoInfo;
use crate::error::{CutError, CutResult};
use crate::media::{ClipHandle, FrameBuffer, MediaBackend, OpenVideo, WriteSettings};

/// Downscaled sample dimensions used for frame comparison. Keeps the
/// difference metric independent of source resolution.
const SAMPLE_WIDTH: u32 = 64;
const SAMPLE_HEIGHT: u32 = 36;
const SAMPLE_CHANNELS: u32 = 3;

/// Media backend driven by the ffmpeg and ffprobe command-line tools
pub struct FfmpegBackend {
    ffmpeg: PathBuf,
    ffprobe: PathBuf,
}

impl FfmpegBackend {
    /// Locate ffmpeg and ffprobe on PATH
    pub fn new() -> CutResult<Self> {
        Ok(Self {
            ffmpeg: find_tool("ffmpeg")?,
            ffprobe: find_tool("ffprobe")?,
        })
    }

    /// Use explicit tool locations instead of searching PATH
    pub fn with_tools(ffmpeg: PathBuf, ffprobe: PathBuf) -> Self {
        Self { ffmpeg, ffprobe }
    }

    /// Probe a media file with ffprobe
    pub fn probe(&self, path: &Path) -> CutResult<VideoInfo> {
        let output = Command::new(&self.ffprobe)
            .args([
                "-v",
                "quiet",
                "-print_format",
                "json",
                "-show_format",
                "-show_streams",
            ])
            .arg(path)
            .output()?;

        if !output.status.success() {
            return Err(CutError::ProbeError {
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let json: serde_json::Value =
            serde_json::from_slice(&output.stdout).map_err(|e| CutError::ProbeError {
                message: format!("Invalid ffprobe output: {}", e),
            })?;

        parse_probe_output(&json, path)
    }
}

/// Search PATH for an executable, honoring the Windows `.exe` suffix
fn find_tool(name: &str) -> CutResult<PathBuf> {
    let path_var = env::var_os("PATH").unwrap_or_default();
    for dir in env::split_paths(&path_var) {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Ok(candidate);
        }
        if cfg!(windows) {
            let exe = dir.join(format!("{}.exe", name));
            if exe.is_file() {
                return Ok(exe);
            }
        }
    }
    Err(CutError::ProbeError {
        message: format!("'{}' not found on PATH", name),
    })
}

/// Parse a `num/den` rational such as ffprobe's `avg_frame_rate`
fn parse_rational(value: &str) -> Option<f64> {
    let mut parts = value.splitn(2, '/');
    let num: f64 = parts.next()?.trim().parse().ok()?;
    match parts.next() {
        Some(den) => {
            let den: f64 = den.trim().parse().ok()?;
            if den == 0.0 {
                None
            } else {
                Some(num / den)
            }
        }
        None => Some(num),
    }
}

fn parse_probe_output(json: &serde_json::Value, path: &Path) -> CutResult<VideoInfo> {
    let streams = json["streams"].as_array().cloned().unwrap_or_default();
    let video_stream = streams
        .iter()
        .find(|s| s["codec_type"].as_str() == Some("video"));

    let duration_seconds = json["format"]["duration"]
        .as_str()
        .and_then(|d| d.parse::<f64>().ok())
        .or_else(|| {
            video_stream
                .and_then(|s| s["duration"].as_str())
                .and_then(|d| d.parse::<f64>().ok())
        })
        .ok_or_else(|| CutError::ProbeError {
            message: format!("Could not determine duration of {}", path.display()),
        })?;

    let frame_rate = video_stream
        .and_then(|s| s["avg_frame_rate"].as_str())
        .and_then(parse_rational)
        .filter(|rate| *rate > 0.0);

    let width = video_stream
        .and_then(|s| s["width"].as_u64())
        .unwrap_or(0) as u32;
    let height = video_stream
        .and_then(|s| s["height"].as_u64())
        .unwrap_or(0) as u32;

    Ok(VideoInfo {
        duration_seconds,
        frame_rate,
        width,
        height,
    })
}

/// An opened source file plus its probed metadata
pub struct FfmpegVideo {
    path: PathBuf,
    info: VideoInfo,
    ffmpeg: PathBuf,
}

impl OpenVideo for FfmpegVideo {
    type Clip = FfmpegClip;

    fn info(&self) -> &VideoInfo {
        &self.info
    }

    fn subclip(&self, start_seconds: f64, end_seconds: f64) -> CutResult<FfmpegClip> {
        Ok(FfmpegClip {
            ffmpeg: self.ffmpeg.clone(),
            parts: vec![ClipRange {
                source: self.path.clone(),
                start_seconds,
                end_seconds,
            }],
        })
    }

    fn sample_frame(&self, t: f64) -> CutResult<FrameBuffer> {
        let output = Command::new(&self.ffmpeg)
            .args(["-hide_banner", "-loglevel", "error", "-ss"])
            .arg(format!("{:.3}", t))
            .arg("-i")
            .arg(&self.path)
            .args(["-frames:v", "1", "-f", "rawvideo", "-pix_fmt", "rgb24", "-s"])
            .arg(format!("{}x{}", SAMPLE_WIDTH, SAMPLE_HEIGHT))
            .arg("pipe:1")
            .output()?;

        let expected = (SAMPLE_WIDTH * SAMPLE_HEIGHT * SAMPLE_CHANNELS) as usize;
        if !output.status.success() || output.stdout.len() < expected {
            return Err(CutError::DecodeError {
                message: format!(
                    "Could not sample frame at {:.3}s from {}",
                    t,
                    self.path.display()
                ),
            });
        }

        let mut data = output.stdout;
        data.truncate(expected);
        Ok(FrameBuffer {
            width: SAMPLE_WIDTH,
            height: SAMPLE_HEIGHT,
            channels: SAMPLE_CHANNELS,
            data,
        })
    }
}

/// One time range of one source file
#[derive(Debug, Clone)]
pub struct ClipRange {
    source: PathBuf,
    start_seconds: f64,
    end_seconds: f64,
}

/// A lazily-evaluated clip: holds the ranges to cut and materializes them in
/// a single ffmpeg invocation when written
pub struct FfmpegClip {
    ffmpeg: PathBuf,
    parts: Vec<ClipRange>,
}

impl ClipHandle for FfmpegClip {
    fn duration_seconds(&self) -> f64 {
        self.parts
            .iter()
            .map(|p| p.end_seconds - p.start_seconds)
            .sum()
    }

    fn write(&self, output_path: &Path, settings: &WriteSettings) -> CutResult<()> {
        let mut cmd = Command::new(&self.ffmpeg);
        cmd.args(["-hide_banner", "-loglevel", "error", "-y"]);

        for part in &self.parts {
            cmd.arg("-ss").arg(format!("{:.6}", part.start_seconds));
            cmd.arg("-to").arg(format!("{:.6}", part.end_seconds));
            cmd.arg("-i").arg(&part.source);
        }

        let with_audio = settings.audio_codec.is_some();
        if self.parts.len() > 1 {
            // Multi-input concat goes through the concat filter so the
            // inputs are re-timestamped into one continuous stream.
            let mut filter = String::new();
            for index in 0..self.parts.len() {
                filter.push_str(&format!("[{}:v:0]", index));
                if with_audio {
                    filter.push_str(&format!("[{}:a:0]", index));
                }
            }
            filter.push_str(&format!(
                "concat=n={}:v=1:a={}[v]",
                self.parts.len(),
                if with_audio { 1 } else { 0 }
            ));
            if with_audio {
                filter.push_str("[a]");
            }
            cmd.args(["-filter_complex", &filter, "-map", "[v]"]);
            if with_audio {
                cmd.args(["-map", "[a]"]);
            }
        }

        cmd.args(["-c:v", &settings.codec]);
        if let Some(bitrate) = &settings.video_bitrate {
            cmd.args(["-b:v", bitrate]);
        }
        match &settings.audio_codec {
            Some(codec) => {
                cmd.args(["-c:a", codec]);
                if let Some(bitrate) = &settings.audio_bitrate {
                    cmd.args(["-b:a", bitrate]);
                }
            }
            None => {
                cmd.arg("-an");
            }
        }
        if let Some(fps) = settings.fps {
            cmd.arg("-r").arg(fps.to_string());
        }
        cmd.arg(output_path);

        debug!("Running encoder: {:?}", cmd);
        let output = cmd.output()?;
        if !output.status.success() {
            return Err(CutError::EncodeError {
                path: output_path.display().to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

impl MediaBackend for FfmpegBackend {
    type Video = FfmpegVideo;

    fn open_video(&self, path: &Path) -> CutResult<FfmpegVideo> {
        if !path.exists() {
            return Err(CutError::SourceNotFound {
                path: path.display().to_string(),
            });
        }
        let info = self.probe(path)?;
        debug!(
            "Opened {}: {:.3}s, {:?} fps, {}x{}",
            path.display(),
            info.duration_seconds,
            info.frame_rate,
            info.width,
            info.height
        );
        Ok(FfmpegVideo {
            path: path.to_path_buf(),
            info,
            ffmpeg: self.ffmpeg.clone(),
        })
    }

    fn concatenate(&self, clips: Vec<FfmpegClip>) -> CutResult<FfmpegClip> {
        if clips.is_empty() {
            return Err(CutError::NoClipsToMerge);
        }
        let parts = clips.into_iter().flat_map(|clip| clip.parts).collect();
        Ok(FfmpegClip {
            ffmpeg: self.ffmpeg.clone(),
            parts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rational_parsing() {
        assert_eq!(parse_rational("30000/1001"), Some(30000.0 / 1001.0));
        assert_eq!(parse_rational("25/1"), Some(25.0));
        assert_eq!(parse_rational("30"), Some(30.0));
        assert_eq!(parse_rational("0/0"), None);
        assert_eq!(parse_rational("abc"), None);
    }

    #[test]
    fn probe_output_parsing() {
        let json: serde_json::Value = serde_json::from_str(
            r#"{
                "format": { "duration": "60.5" },
                "streams": [
                    { "codec_type": "audio" },
                    { "codec_type": "video", "width": 1280, "height": 720,
                      "avg_frame_rate": "30/1" }
                ]
            }"#,
        )
        .unwrap();
        let info = parse_probe_output(&json, Path::new("clip.mp4")).unwrap();
        assert_eq!(info.duration_seconds, 60.5);
        assert_eq!(info.frame_rate, Some(30.0));
        assert_eq!((info.width, info.height), (1280, 720));
    }

    #[test]
    fn probe_output_without_duration_fails() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{ "format": {}, "streams": [] }"#).unwrap();
        assert!(matches!(
            parse_probe_output(&json, Path::new("clip.mp4")),
            Err(CutError::ProbeError { .. })
        ));
    }

    #[test]
    fn probe_output_zero_frame_rate_is_none() {
        let json: serde_json::Value = serde_json::from_str(
            r#"{
                "format": { "duration": "10.0" },
                "streams": [
                    { "codec_type": "video", "width": 640, "height": 480,
                      "avg_frame_rate": "0/0" }
                ]
            }"#,
        )
        .unwrap();
        let info = parse_probe_output(&json, Path::new("clip.mp4")).unwrap();
        assert_eq!(info.frame_rate, None);
    }
}
