//! Coordinate resolution
//!
//! Converts a cut boundary expressed in time, frame, or percentage
//! coordinates into absolute seconds. Pure function of its inputs; results
//! may fall outside `[0, duration]` and are clamped later by the planner, so
//! e.g. a percentage above 100 degrades to "end of video" instead of
//! erroring.

use crate::domain::{CutCoordinateSystem, CutSegment, VideoInfo};
use crate::error::{CutError, CutResult};

/// Resolve a segment's boundaries into absolute seconds
pub fn resolve(segment: &CutSegment, info: &VideoInfo) -> CutResult<(f64, f64)> {
    match segment.system {
        CutCoordinateSystem::Time => Ok((segment.start, segment.end)),
        CutCoordinateSystem::Frame => {
            let rate = info
                .frame_rate
                .filter(|rate| *rate > 0.0)
                .ok_or(CutError::MissingFrameRate)?;
            Ok((segment.start / rate, segment.end / rate))
        }
        CutCoordinateSystem::Percentage => Ok((
            segment.start / 100.0 * info.duration_seconds,
            segment.end / 100.0 * info.duration_seconds,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(duration: f64, frame_rate: Option<f64>) -> VideoInfo {
        VideoInfo {
            duration_seconds: duration,
            frame_rate,
            width: 1920,
            height: 1080,
        }
    }

    #[test]
    fn time_passes_through() {
        let segment = CutSegment::new(10.5, 20.25, CutCoordinateSystem::Time);
        let (start, end) = resolve(&segment, &info(60.0, Some(30.0))).unwrap();
        assert_eq!((start, end), (10.5, 20.25));
    }

    #[test]
    fn frame_divides_by_rate() {
        let segment = CutSegment::new(300.0, 600.0, CutCoordinateSystem::Frame);
        let (start, end) = resolve(&segment, &info(60.0, Some(30.0))).unwrap();
        assert_eq!((start, end), (10.0, 20.0));
    }

    #[test]
    fn frame_requires_frame_rate() {
        let segment = CutSegment::new(0.0, 100.0, CutCoordinateSystem::Frame);
        assert!(matches!(
            resolve(&segment, &info(60.0, None)),
            Err(CutError::MissingFrameRate)
        ));
        assert!(matches!(
            resolve(&segment, &info(60.0, Some(0.0))),
            Err(CutError::MissingFrameRate)
        ));
    }

    #[test]
    fn percentage_scales_duration() {
        let segment = CutSegment::new(25.0, 75.0, CutCoordinateSystem::Percentage);
        let (start, end) = resolve(&segment, &info(60.0, Some(30.0))).unwrap();
        assert!((start - 15.0).abs() < 1e-9);
        assert!((end - 45.0).abs() < 1e-9);
    }

    #[test]
    fn percentage_out_of_range_is_not_rejected() {
        // Clamping is the planner's job
        let segment = CutSegment::new(0.0, 150.0, CutCoordinateSystem::Percentage);
        let (_, end) = resolve(&segment, &info(60.0, None)).unwrap();
        assert!((end - 90.0).abs() < 1e-9);
    }
}
