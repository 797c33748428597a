// Unit tests for domain models

use super::*;

#[test]
fn coordinate_system_parse() {
    assert_eq!("time".parse::<CutCoordinateSystem>().unwrap(), CutCoordinateSystem::Time);
    assert_eq!("FRAME".parse::<CutCoordinateSystem>().unwrap(), CutCoordinateSystem::Frame);
    assert_eq!(
        "percentage".parse::<CutCoordinateSystem>().unwrap(),
        CutCoordinateSystem::Percentage
    );
}

#[test]
fn coordinate_system_parse_unknown() {
    let err = "keyframe".parse::<CutCoordinateSystem>().unwrap_err();
    assert!(matches!(
        err,
        CutError::UnsupportedCoordinateSystem { system } if system == "keyframe"
    ));
}

#[test]
fn coordinate_system_display_round_trip() {
    for system in [
        CutCoordinateSystem::Time,
        CutCoordinateSystem::Frame,
        CutCoordinateSystem::Percentage,
    ] {
        let parsed: CutCoordinateSystem = system.to_string().parse().unwrap();
        assert_eq!(parsed, system);
    }
}

#[test]
fn cut_segment_constructors() {
    let plain = CutSegment::new(10.0, 20.0, CutCoordinateSystem::Time);
    assert_eq!(plain.label, None);

    let labeled = CutSegment::with_label(0.0, 50.0, CutCoordinateSystem::Percentage, "intro");
    assert_eq!(labeled.label.as_deref(), Some("intro"));
}

#[test]
fn video_info_total_frames() {
    let info = VideoInfo {
        duration_seconds: 60.0,
        frame_rate: Some(30.0),
        width: 1920,
        height: 1080,
    };
    assert_eq!(info.total_frames(), Some(1800));

    let no_rate = VideoInfo {
        duration_seconds: 60.0,
        frame_rate: None,
        width: 1920,
        height: 1080,
    };
    assert_eq!(no_rate.total_frames(), None);
}

#[test]
fn resolved_interval_duration() {
    let interval = ResolvedInterval {
        start_seconds: 10.0,
        end_seconds: 25.5,
        label: "segment_001".to_string(),
    };
    assert!((interval.duration_seconds() - 15.5).abs() < 1e-9);
}

#[test]
fn quality_bitrate_presets() {
    assert_eq!(OutputQuality::Original.bitrates(), None);
    assert_eq!(OutputQuality::High.bitrates(), Some(("8000k", "320k")));
    assert_eq!(OutputQuality::Medium.bitrates(), Some(("4000k", "192k")));
    assert_eq!(OutputQuality::Low.bitrates(), Some(("1000k", "128k")));
}

#[test]
fn quality_parse_invalid() {
    assert!("ultra".parse::<OutputQuality>().is_err());
    assert_eq!("Original".parse::<OutputQuality>().unwrap(), OutputQuality::Original);
}

#[test]
fn job_config_defaults() {
    let config = CutJobConfig::default();
    assert_eq!(config.codec, "libx264");
    assert_eq!(config.audio_codec, "aac");
    assert!(config.preserve_audio);
    assert_eq!(config.quality, OutputQuality::Original);
    assert_eq!(config.target_fps, None);
}

#[test]
fn outcome_segments_count() {
    let outcome = CutOutcome::Merged {
        output_path: PathBuf::from("out.mp4"),
        duration_seconds: 20.0,
        segments_count: 2,
    };
    assert_eq!(outcome.segments_count(), 2);
}
