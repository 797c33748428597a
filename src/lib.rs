//! SegCut video cutting library
//!
//! Turns a coordinate-agnostic description of "which parts of a video to
//! keep" into concrete time ranges, extracts those ranges as independent
//! clips or one merged clip, and can derive cut points automatically via
//! naive scene-change detection. Decoding and encoding are delegated to a
//! media backend; see [`media`].

pub mod cli;
pub mod config;
pub mod detect;
pub mod domain;
pub mod engine;
pub mod error;
pub mod media;
pub mod planner;
pub mod utils;

// Re-export commonly used types
pub use detect::SceneDetector;
pub use domain::{
    CutCoordinateSystem, CutJobConfig, CutOutcome, CutSegment, OutputQuality, ResolvedInterval,
    SceneCutReport, VideoInfo,
};
pub use engine::VideoCutter;
pub use error::{CutError, CutResult};
