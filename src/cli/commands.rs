//! Command implementations

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::args::{CutArgs, InspectArgs, ScenesArgs};
use crate::config::AppConfig;
use crate::detect::SceneDetector;
use crate::domain::{CutCoordinateSystem, CutJobConfig, CutOutcome, CutSegment, VideoInfo};
use crate::engine::VideoCutter;
use crate::error::CutError;
use crate::media::ffmpeg::FfmpegBackend;

/// Execute the cut command
pub fn cut(args: CutArgs, file_config: AppConfig) -> Result<()> {
    info!("Starting cut operation");
    info!("Input: {}", args.input);
    info!("Mode: {}", args.mode);

    let input = Path::new(&args.input);
    // Reject a missing source before touching the media tooling so the
    // error is the same on machines without ffmpeg installed
    if !input.exists() {
        return Err(CutError::SourceNotFound {
            path: args.input.clone(),
        }
        .into());
    }

    let system: CutCoordinateSystem = args.mode.parse()?;
    let segments = parse_cut_spec(&args.cuts, system)?;
    let job_config = build_job_config(&args, &file_config)?;

    let backend = FfmpegBackend::new()?;
    let cutter = VideoCutter::new(&backend, job_config);
    let outcome = cutter
        .cut(input, Path::new(&args.output), &segments, args.merge)
        .context("Failed to cut video")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        display_outcome(&outcome);
    }

    info!("Cut operation completed successfully");
    Ok(())
}

/// Execute the scenes command
pub fn scenes(args: ScenesArgs, file_config: AppConfig) -> Result<()> {
    info!("Starting scene-based cut operation");
    info!("Input: {}", args.input);
    info!(
        "Threshold: {}, min scene length: {}s",
        args.threshold, args.min_scene_length
    );

    let input = Path::new(&args.input);
    if !input.exists() {
        return Err(CutError::SourceNotFound {
            path: args.input.clone(),
        }
        .into());
    }

    let job_config = scene_job_config(&file_config)?;
    let detector = SceneDetector::new(args.threshold, args.min_scene_length, args.max_scenes);

    let backend = FfmpegBackend::new()?;
    let cutter = VideoCutter::new(&backend, job_config);
    let report = cutter
        .cut_by_scenes(input, Path::new(&args.output), &detector)
        .context("Failed to cut video by scenes")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Detected {} scene(s)", report.scenes_detected);
        for (i, (start, end)) in report.scene_boundaries.iter().enumerate() {
            println!("  Scene {}: {:.3}s - {:.3}s", i + 1, start, end);
        }
        display_outcome(&report.outcome);
    }

    info!("Scene-based cut completed successfully");
    Ok(())
}

/// Execute the inspect command
pub fn inspect(args: InspectArgs) -> Result<()> {
    info!("Starting inspect operation");
    info!("Input: {}", args.input);

    let input = Path::new(&args.input);
    if !input.exists() {
        return Err(CutError::SourceNotFound {
            path: args.input.clone(),
        }
        .into());
    }

    let backend = FfmpegBackend::new()?;
    let info = backend
        .probe(input)
        .context("Failed to inspect input file")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        display_video_info(&args.input, &info);
    }

    info!("Inspect operation completed successfully");
    Ok(())
}

/// Parse the cuts JSON (a list of [start, end] pairs) into unlabeled
/// segments in the given coordinate system
fn parse_cut_spec(cuts: &str, system: CutCoordinateSystem) -> Result<Vec<CutSegment>, CutError> {
    let pairs: Vec<[f64; 2]> =
        serde_json::from_str(cuts).map_err(|e| CutError::InvalidCutSpec {
            message: format!("Cuts must be a JSON list of [start, end] pairs: {}", e),
        })?;
    Ok(pairs
        .into_iter()
        .map(|[start, end]| CutSegment::new(start, end, system))
        .collect())
}

/// Fold CLI arguments over file-config values over built-in defaults
fn build_job_config(args: &CutArgs, file: &AppConfig) -> Result<CutJobConfig, CutError> {
    let defaults = CutJobConfig::default();
    let quality = match args.quality.as_deref().or(file.quality.as_deref()) {
        Some(value) => value.parse()?,
        None => defaults.quality,
    };
    Ok(CutJobConfig {
        codec: args
            .codec
            .clone()
            .or_else(|| file.codec.clone())
            .unwrap_or(defaults.codec),
        audio_codec: args
            .audio_codec
            .clone()
            .or_else(|| file.audio_codec.clone())
            .unwrap_or(defaults.audio_codec),
        preserve_audio: if args.no_audio {
            false
        } else {
            file.preserve_audio.unwrap_or(defaults.preserve_audio)
        },
        quality,
        target_fps: args.fps.or(file.target_fps),
    })
}

/// Job configuration for scene cuts: file-config values over defaults
fn scene_job_config(file: &AppConfig) -> Result<CutJobConfig, CutError> {
    let defaults = CutJobConfig::default();
    let quality = match file.quality.as_deref() {
        Some(value) => value.parse()?,
        None => defaults.quality,
    };
    Ok(CutJobConfig {
        codec: file.codec.clone().unwrap_or(defaults.codec),
        audio_codec: file.audio_codec.clone().unwrap_or(defaults.audio_codec),
        preserve_audio: file.preserve_audio.unwrap_or(defaults.preserve_audio),
        quality,
        target_fps: file.target_fps,
    })
}

/// Display a cut outcome in human-readable form
fn display_outcome(outcome: &CutOutcome) {
    match outcome {
        CutOutcome::Segments {
            output_paths,
            segments_count,
            original_duration,
        } => {
            println!(
                "Cut video into {} segment(s) (source duration {:.3}s):",
                segments_count, original_duration
            );
            for path in output_paths {
                println!("  {}", path.display());
            }
        }
        CutOutcome::Merged {
            output_path,
            duration_seconds,
            segments_count,
        } => {
            println!(
                "Merged {} segment(s) into {} ({:.3}s)",
                segments_count,
                output_path.display(),
                duration_seconds
            );
        }
    }
}

/// Display probed video information in human-readable form
fn display_video_info(path: &str, info: &VideoInfo) {
    println!("Media Information");
    println!("=================");
    println!("File: {}", path);
    println!("Duration: {:.3}s", info.duration_seconds);
    match info.frame_rate {
        Some(rate) => println!("Frame rate: {:.3} fps", rate),
        None => println!("Frame rate: unknown"),
    }
    println!("Frame size: {}x{}", info.width, info.height);
    if let Some(frames) = info.total_frames() {
        println!("Total frames: ~{}", frames);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cut_spec_parses_pairs_in_order() {
        let segments = parse_cut_spec("[[0,10],[20,30]]", CutCoordinateSystem::Time).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!((segments[0].start, segments[0].end), (0.0, 10.0));
        assert_eq!((segments[1].start, segments[1].end), (20.0, 30.0));
        assert_eq!(segments[0].label, None);
    }

    #[test]
    fn cut_spec_rejects_malformed_json() {
        assert!(parse_cut_spec("[[0,10,20]]", CutCoordinateSystem::Time).is_err());
        assert!(parse_cut_spec("not json", CutCoordinateSystem::Time).is_err());
        assert!(parse_cut_spec("{\"start\": 0}", CutCoordinateSystem::Time).is_err());
    }

    fn base_args() -> CutArgs {
        CutArgs {
            input: "in.mp4".to_string(),
            output: "out.mp4".to_string(),
            cuts: "[[0,10]]".to_string(),
            mode: "time".to_string(),
            merge: false,
            quality: None,
            codec: None,
            audio_codec: None,
            no_audio: false,
            fps: None,
            json: false,
        }
    }

    #[test]
    fn job_config_cli_overrides_file() {
        let args = CutArgs {
            codec: Some("libx265".to_string()),
            ..base_args()
        };
        let file = AppConfig {
            codec: Some("libvpx".to_string()),
            quality: Some("low".to_string()),
            ..AppConfig::default()
        };
        let config = build_job_config(&args, &file).unwrap();
        assert_eq!(config.codec, "libx265");
        assert_eq!(config.quality, crate::domain::OutputQuality::Low);
    }

    #[test]
    fn job_config_no_audio_beats_file_setting() {
        let args = CutArgs {
            no_audio: true,
            ..base_args()
        };
        let file = AppConfig {
            preserve_audio: Some(true),
            ..AppConfig::default()
        };
        let config = build_job_config(&args, &file).unwrap();
        assert!(!config.preserve_audio);
    }

    #[test]
    fn job_config_falls_back_to_defaults() {
        let config = build_job_config(&base_args(), &AppConfig::default()).unwrap();
        assert_eq!(config, CutJobConfig::default());
    }
}
