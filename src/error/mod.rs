//! Error handling module for SegCut

use thiserror::Error;

/// Main error type for SegCut operations
#[derive(Error, Debug)]
pub enum CutError {
    /// Input file not found or inaccessible
    #[error("Source video not found: {path}")]
    SourceNotFound { path: String },

    /// Empty segment list handed to the planner
    #[error("No segments provided for cutting")]
    NoSegmentsProvided,

    /// Empty clip list handed to the merger
    #[error("No clips to merge")]
    NoClipsToMerge,

    /// Frame-coordinate segment on a source with unknown frame rate
    #[error("Cannot use frame coordinates: source frame rate is unknown")]
    MissingFrameRate,

    /// Segment resolves to zero or negative duration after clamping
    #[error("Segment {index} is empty after clamping: start ({start:.3}s) >= end ({end:.3}s)")]
    EmptyOrInvalidSegment { index: usize, start: f64, end: f64 },

    /// Coordinate system tag not recognized by the resolver
    #[error("Unsupported coordinate system: {system}. Use 'time', 'frame', or 'percentage'")]
    UnsupportedCoordinateSystem { system: String },

    /// Malformed cut specification (e.g. cuts JSON that is not a list of pairs)
    #[error("Invalid cut specification: {message}")]
    InvalidCutSpec { message: String },

    /// Media probe error
    #[error("Failed to probe media file: {message}")]
    ProbeError { message: String },

    /// Decode-side failure (frame sampling, subclip reads)
    #[error("Decode error: {message}")]
    DecodeError { message: String },

    /// Encode-side failure while writing an output file
    #[error("Failed to write output file '{path}': {message}")]
    EncodeError { path: String, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for SegCut operations
pub type CutResult<T> = std::result::Result<T, CutError>;
