//! Core cutting engine
//!
//! One job runs synchronously and in order: plan, then extract segment by
//! segment, then (in merge mode) concatenate. Each job owns its open video
//! handle exclusively; independent jobs share no state.

pub mod cutter;
pub mod extractor;
pub mod merger;

pub use cutter::VideoCutter;
pub use extractor::ClipExtractor;
pub use merger::{MergedResult, SegmentMerger};
