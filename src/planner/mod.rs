//! Segment planning
//!
//! Normalizes a set of requested cut boundaries into validated, in-range
//! intervals in absolute seconds. Input order is preserved throughout;
//! segments are never sorted or deduplicated.

pub mod resolver;

use tracing::debug;

use crate::domain::{CutSegment, ResolvedInterval, VideoInfo};
use crate::error::{CutError, CutResult};

/// Validates and normalizes requested segments into concrete intervals
pub struct SegmentPlanner;

impl SegmentPlanner {
    pub fn new() -> Self {
        Self
    }

    /// Resolve, clamp, and label every segment, in input order.
    ///
    /// A segment that is empty after clamping fails the whole plan; silently
    /// dropping it would change the output cardinality the caller asked for.
    pub fn plan(
        &self,
        segments: &[CutSegment],
        info: &VideoInfo,
    ) -> CutResult<Vec<ResolvedInterval>> {
        if segments.is_empty() {
            return Err(CutError::NoSegmentsProvided);
        }

        let mut intervals = Vec::with_capacity(segments.len());
        for (index, segment) in segments.iter().enumerate() {
            let (raw_start, raw_end) = resolver::resolve(segment, info)?;
            let start_seconds = raw_start.max(0.0);
            let end_seconds = raw_end.min(info.duration_seconds);

            if start_seconds >= end_seconds {
                return Err(CutError::EmptyOrInvalidSegment {
                    index,
                    start: start_seconds,
                    end: end_seconds,
                });
            }

            let label = segment
                .label
                .clone()
                .unwrap_or_else(|| format!("segment_{:03}", index + 1));
            debug!(
                "Planned segment {} '{}': {:.3}s - {:.3}s",
                index, label, start_seconds, end_seconds
            );
            intervals.push(ResolvedInterval {
                start_seconds,
                end_seconds,
                label,
            });
        }

        Ok(intervals)
    }
}

impl Default for SegmentPlanner {
    fn default() -> Self {
        Self::new()
    }
}
